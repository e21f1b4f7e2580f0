//! Core module - the statistics aggregation engine
//!
//! A pure pipeline: classify events, filter by period, fold into counter
//! bundles, derive rates, assemble the leaderboard. No I/O lives here.

mod batting;
mod classify;
mod leaderboard;
mod period;
mod pitching;
mod rates;
pub(crate) mod types;

pub(crate) use batting::aggregate_batting;
pub(crate) use leaderboard::{rank_batters, rank_pitchers};
pub(crate) use period::{Period, filter_events};
pub(crate) use pitching::aggregate_pitching;
pub(crate) use rates::{BatterRow, PitcherRow, batter_rows, pitcher_rows};
pub(crate) use types::{Decision, LaunchAngle, LoadResult, PaResult, PitchEvent, PitchOutcome};
