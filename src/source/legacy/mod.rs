//! Legacy schema sources
//!
//! The system's history holds two earlier, split schema versions: a
//! batter-side log and a pitcher-side log. Each adapter normalizes its
//! records to the unified event shape; the accumulators never see a
//! legacy record.

mod batter;
mod pitch;

pub(crate) use batter::BatterLogSource;
pub(crate) use pitch::PitchLogSource;
