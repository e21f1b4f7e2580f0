//! Batting accumulator
//!
//! Streaming fold from the filtered event sequence into per-batter counter
//! bundles. Accumulation is commutative (sums and counts only), so input
//! order never affects the totals.

use std::collections::HashMap;

use crate::core::classify::{classify, is_contact};
use crate::core::types::{BatterTotals, PaResult, PitchEvent};

/// Barrel band: launch angle in [8, 32] degrees on a ball in play.
/// Angle-only definition, no exit-velocity term.
fn is_barrel(event: &PitchEvent) -> bool {
    event.batted_angle.is_some_and(|deg| (8.0..=32.0).contains(&deg))
}

/// Fold events into per-batter totals, keyed by batter identifier.
/// Events missing either player identifier are skipped entirely.
pub(crate) fn aggregate_batting(events: &[PitchEvent]) -> HashMap<String, BatterTotals> {
    let mut totals: HashMap<String, BatterTotals> = HashMap::new();

    for event in events {
        let (Some(batter_id), Some(_pitcher_id)) = (&event.batter_id, &event.pitcher_id) else {
            continue;
        };
        let flags = classify(event);

        let b = totals.entry(batter_id.clone()).or_insert_with(|| BatterTotals {
            name: event.batter_name.clone(),
            ..Default::default()
        });

        b.pitches += 1;
        if flags.is_swing {
            b.swings += 1;
        }
        if is_contact(event) {
            b.contacts += 1;
        }
        if flags.is_zone_pitch {
            b.zone_pitches += 1;
            if flags.is_swing {
                b.zone_swings += 1;
            }
        } else {
            b.out_zone_pitches += 1;
            if flags.is_swing {
                b.out_zone_swings += 1;
            }
        }

        if flags.is_concluded {
            b.pa += 1;
            b.rbi += event.rbi;
            if flags.is_at_bat {
                b.ab += 1;
            }
            if flags.is_walk {
                b.bb += 1;
            }
            if flags.is_strikeout {
                b.so += 1;
            }
            if event.pa_result == PaResult::SacFly {
                b.sf += 1;
            }
            if flags.is_hit {
                b.h += 1;
                match event.pa_result {
                    PaResult::Single => b.h1b += 1,
                    PaResult::Double => b.h2b += 1,
                    PaResult::Triple => b.h3b += 1,
                    PaResult::HomeRun => b.hr += 1,
                    _ => {}
                }
            }
            if flags.is_ball_in_play {
                b.bip += 1;
                if event.is_hard_hit {
                    b.hard_hits += 1;
                }
                if event.is_sweet_spot {
                    b.sweet_spots += 1;
                }
                if is_barrel(event) {
                    b.barrels += 1;
                }
            }
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Decision, PitchOutcome};

    fn event(batter: &str, pitcher: &str, pa: PaResult) -> PitchEvent {
        PitchEvent {
            date: "2024-06-15".to_string(),
            batter_id: Some(batter.to_string()),
            pitcher_id: Some(pitcher.to_string()),
            batter_name: format!("{batter} name"),
            pa_result: pa,
            ..Default::default()
        }
    }

    #[test]
    fn home_run_credits_pa_ab_hit_and_rbi() {
        let mut ev = event("B1", "P1", PaResult::HomeRun);
        ev.rbi = 2;
        ev.location = 13;
        ev.decision = Decision::Swing;
        ev.pitch_outcome = PitchOutcome::InPlay;

        let totals = aggregate_batting(&[ev]);
        let b = &totals["B1"];
        assert_eq!(b.pa, 1);
        assert_eq!(b.ab, 1);
        assert_eq!(b.h, 1);
        assert_eq!(b.hr, 1);
        assert_eq!(b.rbi, 2);
        // home runs are not balls in play
        assert_eq!(b.bip, 0);
        assert_eq!(b.zone_pitches, 1);
        assert_eq!(b.zone_swings, 1);
        assert_eq!(b.contacts, 1);
    }

    #[test]
    fn three_pitch_at_bat_counts_one_pa_one_ab() {
        let mut ball = event("B1", "P1", PaResult::InProgress);
        ball.pitch_outcome = PitchOutcome::Ball;
        ball.location = 1;
        let mut called = event("B1", "P1", PaResult::InProgress);
        called.pitch_outcome = PitchOutcome::CalledStrike;
        called.location = 8;
        let mut ground_out = event("B1", "P1", PaResult::InfieldOut);
        ground_out.pitch_outcome = PitchOutcome::InPlay;
        ground_out.decision = Decision::Swing;
        ground_out.location = 13;

        let totals = aggregate_batting(&[ball, called, ground_out]);
        let b = &totals["B1"];
        assert_eq!(b.pitches, 3);
        assert_eq!(b.pa, 1);
        assert_eq!(b.ab, 1);
        assert_eq!(b.h, 0);
        assert_eq!(b.bip, 1);
        assert_eq!(b.swings, 1);
        assert_eq!(b.contacts, 1);
    }

    #[test]
    fn events_without_a_pitcher_id_are_skipped_entirely() {
        let mut ev = event("B1", "P1", PaResult::Single);
        ev.pitcher_id = None;
        let totals = aggregate_batting(&[ev]);
        assert!(totals.is_empty());
    }

    #[test]
    fn events_without_a_batter_id_are_skipped_entirely() {
        let mut ev = event("B1", "P1", PaResult::Single);
        ev.batter_id = None;
        let totals = aggregate_batting(&[ev]);
        assert!(totals.is_empty());
    }

    #[test]
    fn out_of_zone_swing_feeds_the_chase_counters() {
        let mut ev = event("B1", "P1", PaResult::InProgress);
        ev.location = 1;
        ev.decision = Decision::Swing;
        ev.pitch_outcome = PitchOutcome::SwingingStrike;

        let totals = aggregate_batting(&[ev]);
        let b = &totals["B1"];
        assert_eq!(b.out_zone_pitches, 1);
        assert_eq!(b.out_zone_swings, 1);
        assert_eq!(b.zone_pitches, 0);
        assert_eq!(b.swings, 1);
        // a whiff is not contact
        assert_eq!(b.contacts, 0);
    }

    #[test]
    fn barrel_band_is_inclusive_on_both_ends() {
        for (deg, expected) in [(7.9, 0), (8.0, 1), (20.0, 1), (32.0, 1), (32.1, 0)] {
            let mut ev = event("B1", "P1", PaResult::Double);
            ev.batted_angle = Some(deg);
            let totals = aggregate_batting(&[ev]);
            assert_eq!(totals["B1"].barrels, expected, "angle {deg}");
        }
    }

    #[test]
    fn quality_counters_require_a_ball_in_play() {
        // a strikeout with leftover quality tags must not count
        let mut ev = event("B1", "P1", PaResult::StrikeoutSwinging);
        ev.is_hard_hit = true;
        ev.is_sweet_spot = true;
        ev.batted_angle = Some(20.0);

        let totals = aggregate_batting(&[ev]);
        let b = &totals["B1"];
        assert_eq!(b.bip, 0);
        assert_eq!(b.hard_hits, 0);
        assert_eq!(b.sweet_spots, 0);
        assert_eq!(b.barrels, 0);
    }

    #[test]
    fn sacrifice_fly_counts_pa_and_sf_but_no_ab() {
        let ev = event("B1", "P1", PaResult::SacFly);
        let totals = aggregate_batting(&[ev]);
        let b = &totals["B1"];
        assert_eq!(b.pa, 1);
        assert_eq!(b.sf, 1);
        assert_eq!(b.ab, 0);
    }

    #[test]
    fn totals_are_insensitive_to_event_order() {
        let mut events = Vec::new();
        for (i, pa) in [
            PaResult::Single,
            PaResult::Walk,
            PaResult::StrikeoutSwinging,
            PaResult::InProgress,
            PaResult::HomeRun,
        ]
        .into_iter()
        .enumerate()
        {
            let mut ev = event("B1", "P1", pa);
            ev.location = (i as u8 * 5) % 25 + 1;
            ev.rbi = i as i64 % 2;
            events.push(ev);
        }

        let forward = aggregate_batting(&events);
        events.reverse();
        let backward = aggregate_batting(&events);

        let f = &forward["B1"];
        let b = &backward["B1"];
        assert_eq!(f.pa, b.pa);
        assert_eq!(f.ab, b.ab);
        assert_eq!(f.h, b.h);
        assert_eq!(f.rbi, b.rbi);
        assert_eq!(f.pitches, b.pitches);
        assert_eq!(f.zone_pitches, b.zone_pitches);
    }
}
