//! Leaderboard assembly
//!
//! Applies the name search filter and the display ordering: batters by OPS
//! descending, pitchers by ERA ascending. Ties fall back to the player
//! identifier so repeated runs over the same snapshot produce identical
//! row sequences.

use crate::core::rates::{BatterRow, PitcherRow};

fn matches(name: &str, query: &str) -> bool {
    name.to_lowercase().contains(query)
}

pub(crate) fn rank_batters(mut rows: Vec<BatterRow>, search: Option<&str>) -> Vec<BatterRow> {
    if let Some(query) = search {
        let query = query.to_lowercase();
        rows.retain(|row| matches(&row.name, &query));
    }
    rows.sort_by(|a, b| {
        b.ops
            .total_cmp(&a.ops)
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
    rows
}

pub(crate) fn rank_pitchers(mut rows: Vec<PitcherRow>, search: Option<&str>) -> Vec<PitcherRow> {
    if let Some(query) = search {
        let query = query.to_lowercase();
        rows.retain(|row| matches(&row.name, &query));
    }
    rows.sort_by(|a, b| {
        a.era
            .total_cmp(&b.era)
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
    rows
}
