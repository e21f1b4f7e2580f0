//! Event classification
//!
//! Every per-event boolean the accumulators consume lives here, so the
//! batting and pitching folds cannot drift apart on what counts as a hit,
//! a plate appearance, or a ball in play.

use crate::core::types::{Decision, PaResult, PitchEvent, PitchOutcome};

/// Cells forming the center 3x3 block of the 5x5 strike-zone grid.
/// Fixed partition, not configurable.
const ZONE_CELLS: [u8; 9] = [7, 8, 9, 12, 13, 14, 17, 18, 19];

/// Semantic flags for a single event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct EventFlags {
    pub(crate) is_hit: bool,
    pub(crate) is_walk: bool,
    /// Plate appearance concluded on this pitch
    pub(crate) is_concluded: bool,
    pub(crate) is_at_bat: bool,
    pub(crate) is_strikeout: bool,
    pub(crate) is_swing: bool,
    pub(crate) is_zone_pitch: bool,
    /// At-bat result that was fielded; home runs are excluded so BABIP
    /// denominators only count fieldable balls
    pub(crate) is_ball_in_play: bool,
}

/// Classify one event. Pure and deterministic; an unrecognized result
/// value sets none of the result-derived flags.
pub(crate) fn classify(event: &PitchEvent) -> EventFlags {
    let pa = event.pa_result;

    let is_hit = matches!(
        pa,
        PaResult::Single | PaResult::Double | PaResult::Triple | PaResult::HomeRun
    );
    let is_walk = matches!(
        pa,
        PaResult::Walk | PaResult::IntentionalWalk | PaResult::HitByPitch
    );
    let is_concluded = !matches!(pa, PaResult::InProgress | PaResult::Other);
    let is_at_bat = is_concluded
        && !is_walk
        && !matches!(
            pa,
            PaResult::SacBunt | PaResult::SacFly | PaResult::Interference
        );
    let is_strikeout = matches!(
        pa,
        PaResult::StrikeoutSwinging | PaResult::StrikeoutLooking
    );

    EventFlags {
        is_hit,
        is_walk,
        is_concluded,
        is_at_bat,
        is_strikeout,
        is_swing: event.decision == Decision::Swing,
        is_zone_pitch: ZONE_CELLS.contains(&event.location),
        is_ball_in_play: is_at_bat && !is_strikeout && pa != PaResult::HomeRun,
    }
}

/// Contact is any swing that did not miss.
pub(crate) fn is_contact(event: &PitchEvent) -> bool {
    event.decision == Decision::Swing && event.pitch_outcome != PitchOutcome::SwingingStrike
}
