//! Legacy batter-side log adapter
//!
//! Batter records carry the plate-appearance result, swing decision and
//! contact quality, but predate the unified per-pitch outcome. The
//! outcome is derived: concluded results imply it, and for mid-PA pitches
//! the recorded miss amount separates whiffs from fouls. A take mid-PA is
//! unrecoverable (ball or called strike) and maps to unknown.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::{Decision, LaunchAngle, PaResult, PitchEvent, PitchOutcome};
use crate::source::{Parsed, Source, find_jsonl_files, non_empty, parse_jsonl};

pub(crate) struct BatterLogSource;

impl BatterLogSource {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl Source for BatterLogSource {
    fn name(&self) -> &'static str {
        "batter_logs"
    }

    fn display_name(&self) -> &'static str {
        "legacy batter"
    }

    fn find_files(&self, data_root: &Path) -> Vec<PathBuf> {
        find_jsonl_files(data_root, self.name())
    }

    fn parse_file(&self, path: &Path) -> Parsed {
        parse_jsonl(path, convert)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BatterWire {
    date: Option<String>,
    batter_id: Option<String>,
    batter_name: Option<String>,
    pitcher_id: Option<String>,
    pitcher_name: Option<String>,
    location: Option<u8>,
    decision: Option<Decision>,
    miss_amount: Option<String>,
    is_hard_hit: Option<bool>,
    is_sweet_spot: Option<bool>,
    launch_angle: Option<LaunchAngle>,
    batted_angle: Option<f64>,
    pa_result: Option<PaResult>,
    rbi: Option<i64>,
}

fn derive_outcome(pa: PaResult, decision: Decision, miss_amount: &str) -> PitchOutcome {
    match pa {
        PaResult::StrikeoutSwinging => PitchOutcome::SwingingStrike,
        PaResult::StrikeoutLooking => PitchOutcome::CalledStrike,
        PaResult::Walk | PaResult::IntentionalWalk | PaResult::HitByPitch => PitchOutcome::Ball,
        PaResult::InProgress | PaResult::Other => {
            if miss_amount == "空振り" {
                PitchOutcome::SwingingStrike
            } else if decision == Decision::Swing {
                PitchOutcome::Foul
            } else {
                PitchOutcome::Other
            }
        }
        _ => PitchOutcome::InPlay,
    }
}

fn convert(wire: BatterWire) -> Option<PitchEvent> {
    let date = wire.date.filter(|d| !d.is_empty())?;
    let decision = wire.decision.unwrap_or_default();
    let pa_result = wire.pa_result.unwrap_or_default();
    let miss_amount = wire.miss_amount.unwrap_or_default();
    let launch_angle = wire
        .launch_angle
        .or_else(|| wire.batted_angle.map(LaunchAngle::from_degrees));

    Some(PitchEvent {
        date,
        pitcher_id: non_empty(wire.pitcher_id),
        batter_id: non_empty(wire.batter_id),
        pitcher_name: wire.pitcher_name.unwrap_or_default(),
        batter_name: wire.batter_name.unwrap_or_default(),
        location: wire.location.unwrap_or(0),
        decision,
        pitch_outcome: derive_outcome(pa_result, decision, &miss_amount),
        pa_result,
        is_hard_hit: wire.is_hard_hit.unwrap_or(false),
        is_sweet_spot: wire.is_sweet_spot.unwrap_or(false),
        launch_angle,
        batted_angle: wire.batted_angle,
        rbi: wire.rbi.unwrap_or(0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert_line(line: &str) -> Option<PitchEvent> {
        convert(serde_json::from_str(line).unwrap())
    }

    #[test]
    fn concluded_contact_maps_to_in_play() {
        let ev = convert_line(
            r#"{"date":"2024-05-01","batterId":"B1","pitcherId":"P1","decision":"Swing",
                "paResult":"二塁打","launchAngle":"ライナー","rbi":1}"#,
        )
        .unwrap();
        assert_eq!(ev.pitch_outcome, PitchOutcome::InPlay);
        assert_eq!(ev.pa_result, PaResult::Double);
        assert_eq!(ev.rbi, 1);
    }

    #[test]
    fn strikeouts_map_to_their_strike_kind() {
        assert_eq!(
            derive_outcome(PaResult::StrikeoutSwinging, Decision::Swing, "空振り"),
            PitchOutcome::SwingingStrike
        );
        assert_eq!(
            derive_outcome(PaResult::StrikeoutLooking, Decision::Take, "なし"),
            PitchOutcome::CalledStrike
        );
    }

    #[test]
    fn walks_map_to_ball() {
        for pa in [
            PaResult::Walk,
            PaResult::IntentionalWalk,
            PaResult::HitByPitch,
        ] {
            assert_eq!(
                derive_outcome(pa, Decision::Take, "なし"),
                PitchOutcome::Ball
            );
        }
    }

    #[test]
    fn mid_pa_whiff_is_a_swinging_strike() {
        assert_eq!(
            derive_outcome(PaResult::InProgress, Decision::Swing, "空振り"),
            PitchOutcome::SwingingStrike
        );
    }

    #[test]
    fn mid_pa_swing_without_a_whiff_is_a_foul() {
        for miss in ["なし", "かすり", "チップ"] {
            assert_eq!(
                derive_outcome(PaResult::InProgress, Decision::Swing, miss),
                PitchOutcome::Foul,
                "{miss}"
            );
        }
    }

    #[test]
    fn mid_pa_take_is_unknown() {
        assert_eq!(
            derive_outcome(PaResult::InProgress, Decision::Take, "なし"),
            PitchOutcome::Other
        );
    }

    #[test]
    fn quantizes_degrees_when_category_is_missing() {
        let ev = convert_line(
            r#"{"date":"2024-05-01","batterId":"B1","pitcherId":"P1","paResult":"単打",
                "battedAngle":15.0}"#,
        )
        .unwrap();
        assert_eq!(ev.launch_angle, Some(LaunchAngle::Liner));
    }
}
