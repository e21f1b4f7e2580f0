//! Unified schema JSONL parser

use serde::Deserialize;

use crate::core::{Decision, LaunchAngle, PaResult, PitchEvent, PitchOutcome};
use crate::source::non_empty;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UnifiedWire {
    date: Option<String>,
    pitcher_id: Option<String>,
    pitcher_name: Option<String>,
    batter_id: Option<String>,
    batter_name: Option<String>,
    location: Option<u8>,
    decision: Option<Decision>,
    pitch_outcome: Option<PitchOutcome>,
    pa_result: Option<PaResult>,
    is_hard_hit: Option<bool>,
    is_sweet_spot: Option<bool>,
    launch_angle: Option<LaunchAngle>,
    batted_angle: Option<f64>,
    rbi: Option<i64>,
}

pub(super) fn convert(wire: UnifiedWire) -> Option<PitchEvent> {
    let date = wire.date.filter(|d| !d.is_empty())?;

    // records that carry degrees but no category fall back to quantization
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
        decision: wire.decision.unwrap_or_default(),
        pitch_outcome: wire.pitch_outcome.unwrap_or_default(),
        pa_result: wire.pa_result.unwrap_or_default(),
        is_hard_hit: wire.is_hard_hit.unwrap_or(false),
        is_sweet_spot: wire.is_sweet_spot.unwrap_or(false),
        launch_angle,
        batted_angle: wire.batted_angle,
        rbi: wire.rbi.unwrap_or(0),
    })
}
