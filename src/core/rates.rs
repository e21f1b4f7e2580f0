//! Derived rate statistics
//!
//! Turns finished counter bundles into display rows. Every rate is defined
//! at zero denominator: the result is exactly 0, except K/BB which falls
//! back to the raw strikeout count.

use serde::Serialize;
use std::collections::HashMap;

use crate::core::types::{BatterTotals, PitcherTotals};
use crate::roster::Roster;

fn ratio(num: i64, den: i64) -> f64 {
    if den > 0 { num as f64 / den as f64 } else { 0.0 }
}

fn pct(num: i64, den: i64) -> f64 {
    ratio(num, den) * 100.0
}

/// One batter's display row: raw counters plus every derived rate.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct BatterRow {
    pub(crate) player_id: String,
    pub(crate) name: String,
    #[serde(flatten)]
    pub(crate) totals: BatterTotals,
    pub(crate) avg: f64,
    pub(crate) obp: f64,
    pub(crate) slg: f64,
    pub(crate) ops: f64,
    pub(crate) k_pct: f64,
    pub(crate) bb_pct: f64,
    pub(crate) babip: f64,
    pub(crate) hard_hit_pct: f64,
    pub(crate) barrel_pct: f64,
    pub(crate) sweet_spot_pct: f64,
    pub(crate) contact_pct: f64,
    pub(crate) o_swing_pct: f64,
}

impl BatterRow {
    pub(crate) fn derive(player_id: String, name: String, t: BatterTotals) -> Self {
        let avg = ratio(t.h, t.ab);
        let obp = ratio(t.h + t.bb, t.ab + t.bb + t.sf);
        let slg = ratio(t.h1b + 2 * t.h2b + 3 * t.h3b + 4 * t.hr, t.ab);
        BatterRow {
            player_id,
            name,
            avg,
            obp,
            slg,
            ops: obp + slg,
            k_pct: pct(t.so, t.pa),
            bb_pct: pct(t.bb, t.pa),
            babip: ratio(t.h - t.hr, t.ab - t.so - t.hr + t.sf),
            hard_hit_pct: pct(t.hard_hits, t.bip),
            barrel_pct: pct(t.barrels, t.bip),
            sweet_spot_pct: pct(t.sweet_spots, t.bip),
            contact_pct: pct(t.contacts, t.swings),
            o_swing_pct: pct(t.out_zone_swings, t.out_zone_pitches),
            totals: t,
        }
    }
}

/// One pitcher's display row.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct PitcherRow {
    pub(crate) player_id: String,
    pub(crate) name: String,
    #[serde(flatten)]
    pub(crate) totals: PitcherTotals,
    /// Literal decimal innings (outs / 3), not x.1/x.2 thirds notation
    pub(crate) ip: f64,
    pub(crate) era: f64,
    pub(crate) whip: f64,
    pub(crate) k9: f64,
    pub(crate) bb9: f64,
    pub(crate) k_bb: f64,
    pub(crate) hard_hit_pct: f64,
    pub(crate) gb_pct: f64,
    pub(crate) fb_pct: f64,
}

impl PitcherRow {
    pub(crate) fn derive(player_id: String, name: String, t: PitcherTotals) -> Self {
        let ip = t.outs as f64 / 3.0;
        let per_nine = |n: i64| if ip > 0.0 { n as f64 * 9.0 / ip } else { 0.0 };
        PitcherRow {
            player_id,
            name,
            ip,
            era: per_nine(t.runs),
            whip: if ip > 0.0 {
                (t.bb + t.h) as f64 / ip
            } else {
                0.0
            },
            k9: per_nine(t.so),
            bb9: per_nine(t.bb),
            k_bb: if t.bb > 0 {
                t.so as f64 / t.bb as f64
            } else {
                t.so as f64
            },
            hard_hit_pct: pct(t.hard_hits, t.bip),
            gb_pct: pct(t.gb, t.bip),
            fb_pct: pct(t.fb, t.bip),
            totals: t,
        }
    }
}

/// Derive batter rows from finished bundles, resolving display names
/// through the roster.
pub(crate) fn batter_rows(
    totals: HashMap<String, BatterTotals>,
    roster: &Roster,
) -> Vec<BatterRow> {
    totals
        .into_iter()
        .map(|(id, t)| {
            let name = roster.resolve(&id, &t.name);
            BatterRow::derive(id, name, t)
        })
        .collect()
}

/// Derive pitcher rows from finished bundles.
pub(crate) fn pitcher_rows(
    totals: HashMap<String, PitcherTotals>,
    roster: &Roster,
) -> Vec<PitcherRow> {
    totals
        .into_iter()
        .map(|(id, t)| {
            let name = roster.resolve(&id, &t.name);
            PitcherRow::derive(id, name, t)
        })
        .collect()
}
