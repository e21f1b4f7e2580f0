//! Legacy pitcher-side log adapter
//!
//! Pitch records use the oldest outcome enum and carry no
//! plate-appearance result at all. Outcomes map one-to-one onto the
//! unified pitch outcome; the result is recovered only where the outcome
//! implies it (home run, generic out, hit-as-single), otherwise the pitch
//! stays mid-PA.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::{Decision, PaResult, PitchEvent, PitchOutcome};
use crate::source::{Parsed, Source, find_jsonl_files, non_empty, parse_jsonl};

pub(crate) struct PitchLogSource;

impl PitchLogSource {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl Source for PitchLogSource {
    fn name(&self) -> &'static str {
        "pitch_logs"
    }

    fn display_name(&self) -> &'static str {
        "legacy pitch"
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
struct PitchWire {
    date: Option<String>,
    pitcher_id: Option<String>,
    pitcher_name: Option<String>,
    batter_id: Option<String>,
    batter_name: Option<String>,
    location: Option<u8>,
    outcome: Option<String>,
    is_swing: Option<bool>,
}

fn map_outcome(outcome: &str) -> PitchOutcome {
    match outcome {
        "ストライク" => PitchOutcome::CalledStrike,
        "空振り" => PitchOutcome::SwingingStrike,
        "ファウル" => PitchOutcome::Foul,
        "ボール" => PitchOutcome::Ball,
        "ヒット" | "アウト" | "ホームラン" => PitchOutcome::InPlay,
        _ => PitchOutcome::Other,
    }
}

/// Hit type is not recorded in this schema; a hit becomes a conservative
/// single.
fn map_pa_result(outcome: &str) -> PaResult {
    match outcome {
        "ホームラン" => PaResult::HomeRun,
        "ヒット" => PaResult::Single,
        "アウト" => PaResult::GenericOut,
        _ => PaResult::InProgress,
    }
}

fn convert(wire: PitchWire) -> Option<PitchEvent> {
    let date = wire.date.filter(|d| !d.is_empty())?;
    let outcome = wire.outcome.unwrap_or_default();

    Some(PitchEvent {
        date,
        pitcher_id: non_empty(wire.pitcher_id),
        batter_id: non_empty(wire.batter_id),
        pitcher_name: wire.pitcher_name.unwrap_or_default(),
        batter_name: wire.batter_name.unwrap_or_default(),
        location: wire.location.unwrap_or(0),
        decision: if wire.is_swing.unwrap_or(false) {
            Decision::Swing
        } else {
            Decision::Take
        },
        pitch_outcome: map_outcome(&outcome),
        pa_result: map_pa_result(&outcome),
        is_hard_hit: false,
        is_sweet_spot: false,
        launch_angle: None,
        batted_angle: None,
        rbi: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert_line(line: &str) -> Option<PitchEvent> {
        convert(serde_json::from_str(line).unwrap())
    }

    #[test]
    fn outcome_mapping() {
        assert_eq!(map_outcome("ストライク"), PitchOutcome::CalledStrike);
        assert_eq!(map_outcome("空振り"), PitchOutcome::SwingingStrike);
        assert_eq!(map_outcome("ファウル"), PitchOutcome::Foul);
        assert_eq!(map_outcome("ボール"), PitchOutcome::Ball);
        assert_eq!(map_outcome("ヒット"), PitchOutcome::InPlay);
        assert_eq!(map_outcome("アウト"), PitchOutcome::InPlay);
        assert_eq!(map_outcome("ホームラン"), PitchOutcome::InPlay);
        assert_eq!(map_outcome("牽制"), PitchOutcome::Other);
    }

    #[test]
    fn result_recovery() {
        assert_eq!(map_pa_result("ホームラン"), PaResult::HomeRun);
        assert_eq!(map_pa_result("ヒット"), PaResult::Single);
        assert_eq!(map_pa_result("アウト"), PaResult::GenericOut);
        assert_eq!(map_pa_result("ボール"), PaResult::InProgress);
        assert_eq!(map_pa_result("ストライク"), PaResult::InProgress);
    }

    #[test]
    fn swing_flag_becomes_the_decision() {
        let ev = convert_line(
            r#"{"date":"2024-04-01","pitcherId":"P1","batterId":"B1","outcome":"空振り",
                "isSwing":true,"location":8}"#,
        )
        .unwrap();
        assert_eq!(ev.decision, Decision::Swing);
        assert_eq!(ev.pitch_outcome, PitchOutcome::SwingingStrike);
        assert_eq!(ev.pa_result, PaResult::InProgress);
    }

    #[test]
    fn quality_tags_default_off() {
        let ev = convert_line(
            r#"{"date":"2024-04-01","pitcherId":"P1","batterId":"B1","outcome":"アウト"}"#,
        )
        .unwrap();
        assert!(!ev.is_hard_hit);
        assert!(!ev.is_sweet_spot);
        assert_eq!(ev.launch_angle, None);
        assert_eq!(ev.rbi, 0);
    }
}
