//! Pitching accumulator
//!
//! Parallel fold over the same filtered pass as the batting accumulator,
//! keyed by pitcher identifier.

use std::collections::HashMap;

use crate::core::classify::classify;
use crate::core::types::{LaunchAngle, PaResult, PitchEvent, PitcherTotals};

/// Result types credited one out each. The record represents a single
/// plate appearance, so a double play still logs one out here.
fn is_out_result(pa: PaResult) -> bool {
    matches!(
        pa,
        PaResult::InfieldOut
            | PaResult::OutfieldFly
            | PaResult::LineOut
            | PaResult::PopFly
            | PaResult::SacFly
            | PaResult::DoublePlay
    )
}

/// Fold events into per-pitcher totals, keyed by pitcher identifier.
/// Events missing either player identifier are skipped entirely.
pub(crate) fn aggregate_pitching(events: &[PitchEvent]) -> HashMap<String, PitcherTotals> {
    let mut totals: HashMap<String, PitcherTotals> = HashMap::new();

    for event in events {
        let (Some(pitcher_id), Some(_batter_id)) = (&event.pitcher_id, &event.batter_id) else {
            continue;
        };
        let flags = classify(event);

        let p = totals
            .entry(pitcher_id.clone())
            .or_insert_with(|| PitcherTotals {
                name: event.pitcher_name.clone(),
                ..Default::default()
            });

        if !flags.is_concluded {
            continue;
        }

        p.bf += 1;
        p.runs += event.rbi;
        if flags.is_hit {
            p.h += 1;
        }
        if event.pa_result == PaResult::HomeRun {
            p.hr += 1;
        }
        if flags.is_walk {
            p.bb += 1;
        }
        if flags.is_strikeout {
            p.so += 1;
            p.outs += 1;
        }
        if is_out_result(event.pa_result) {
            p.outs += 1;
        }
        if flags.is_ball_in_play {
            p.bip += 1;
            if event.is_hard_hit {
                p.hard_hits += 1;
            }
            match event.launch_angle {
                Some(LaunchAngle::Fly) | Some(LaunchAngle::PopUp) => p.fb += 1,
                Some(LaunchAngle::Grounder) => p.gb += 1,
                // liners land in neither trajectory bucket
                _ => {}
            }
        }
    }

    totals
}
