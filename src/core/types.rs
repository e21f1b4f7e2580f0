//! Core data types shared across all event sources
//!
//! These types represent the unified per-pitch record that all schema
//! versions convert to, plus the per-player counter bundles.

use serde::{Deserialize, Serialize};

/// Plate-appearance result, carried on the wire as the original Japanese
/// labels. Unknown values collapse to `Other` so a bad record can never
/// abort an aggregation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub(crate) enum PaResult {
    Single,
    Double,
    Triple,
    HomeRun,
    Walk,
    IntentionalWalk,
    HitByPitch,
    StrikeoutSwinging,
    StrikeoutLooking,
    SacBunt,
    SacFly,
    DoublePlay,
    Interference,
    InfieldOut,
    InfieldFly,
    OutfieldFly,
    LineOut,
    PopFly,
    ReachedOnError,
    FieldersChoice,
    GenericOut,
    #[default]
    InProgress,
    Other,
}

impl PaResult {
    pub(crate) fn from_wire(s: &str) -> Self {
        match s {
            "単打" => PaResult::Single,
            "二塁打" => PaResult::Double,
            "三塁打" => PaResult::Triple,
            "本塁打" => PaResult::HomeRun,
            "四球" => PaResult::Walk,
            "敬遠" => PaResult::IntentionalWalk,
            "死球" => PaResult::HitByPitch,
            "三振(空振り)" => PaResult::StrikeoutSwinging,
            "三振(見逃し)" => PaResult::StrikeoutLooking,
            "犠打" => PaResult::SacBunt,
            "犠飛" => PaResult::SacFly,
            "併殺打" => PaResult::DoublePlay,
            "打撃妨害" => PaResult::Interference,
            "内野凡打" => PaResult::InfieldOut,
            "内野フライ" => PaResult::InfieldFly,
            "外野フライ" => PaResult::OutfieldFly,
            "ライナー" => PaResult::LineOut,
            "ポップフライ" => PaResult::PopFly,
            "失策出塁" => PaResult::ReachedOnError,
            "野選" => PaResult::FieldersChoice,
            "凡打(アウト)" => PaResult::GenericOut,
            "進行中" => PaResult::InProgress,
            _ => PaResult::Other,
        }
    }
}

impl From<String> for PaResult {
    fn from(s: String) -> Self {
        PaResult::from_wire(&s)
    }
}

/// Per-pitch outcome of the unified schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub(crate) enum PitchOutcome {
    CalledStrike,
    SwingingStrike,
    Foul,
    Ball,
    InPlay,
    #[default]
    Other,
}

impl PitchOutcome {
    pub(crate) fn from_wire(s: &str) -> Self {
        match s {
            "見逃しS" => PitchOutcome::CalledStrike,
            "空振りS" => PitchOutcome::SwingingStrike,
            "ファウル" => PitchOutcome::Foul,
            "ボール" => PitchOutcome::Ball,
            "インプレー" => PitchOutcome::InPlay,
            _ => PitchOutcome::Other,
        }
    }
}

impl From<String> for PitchOutcome {
    fn from(s: String) -> Self {
        PitchOutcome::from_wire(&s)
    }
}

/// Batter's swing decision on the pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub(crate) enum Decision {
    Take,
    Swing,
    #[default]
    Other,
}

impl Decision {
    pub(crate) fn from_wire(s: &str) -> Self {
        match s {
            "Take" => Decision::Take,
            "Swing" => Decision::Swing,
            _ => Decision::Other,
        }
    }
}

impl From<String> for Decision {
    fn from(s: String) -> Self {
        Decision::from_wire(&s)
    }
}

/// Quantized batted-ball trajectory. The wire carries either the Japanese
/// labels or the English aliases from the oldest schema revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub(crate) enum LaunchAngle {
    Grounder,
    Liner,
    Fly,
    PopUp,
    Other,
}

impl LaunchAngle {
    pub(crate) fn from_wire(s: &str) -> Self {
        match s {
            "ゴロ" | "Grounder" => LaunchAngle::Grounder,
            "ライナー" | "Line Drive" => LaunchAngle::Liner,
            "フライ" | "Fly Ball" => LaunchAngle::Fly,
            "ポップフライ" | "Pop Up" => LaunchAngle::PopUp,
            _ => LaunchAngle::Other,
        }
    }

    /// Quantize a raw launch angle in degrees into a trajectory category.
    /// Bands are contiguous and non-overlapping: <10 grounder, 10-24 liner,
    /// 25-49 fly, >=50 pop up.
    pub(crate) fn from_degrees(deg: f64) -> Self {
        if deg < 10.0 {
            LaunchAngle::Grounder
        } else if deg < 25.0 {
            LaunchAngle::Liner
        } else if deg < 50.0 {
            LaunchAngle::Fly
        } else {
            LaunchAngle::PopUp
        }
    }
}

impl From<String> for LaunchAngle {
    fn from(s: String) -> Self {
        LaunchAngle::from_wire(&s)
    }
}

/// Unified per-pitch event record.
/// All schema versions convert their native format to this structure.
#[derive(Debug, Clone, Default)]
pub(crate) struct PitchEvent {
    /// Local calendar date string (YYYY-MM-DD), used for period filtering
    pub(crate) date: String,
    /// Player identifiers; `None` when the record carries none (such
    /// records are skipped by the accumulators, never partially credited)
    pub(crate) pitcher_id: Option<String>,
    pub(crate) batter_id: Option<String>,
    /// Display names embedded at entry time; the roster overrides them
    pub(crate) pitcher_name: String,
    pub(crate) batter_name: String,
    /// Cell 1-25 in the 5x5 strike-zone grid
    pub(crate) location: u8,
    pub(crate) decision: Decision,
    pub(crate) pitch_outcome: PitchOutcome,
    pub(crate) pa_result: PaResult,
    pub(crate) is_hard_hit: bool,
    pub(crate) is_sweet_spot: bool,
    pub(crate) launch_angle: Option<LaunchAngle>,
    /// Raw launch angle in degrees, when the entry form recorded one
    pub(crate) batted_angle: Option<f64>,
    pub(crate) rbi: i64,
}

/// Batting counter bundle, keyed by batter identifier for the duration of
/// one aggregation pass.
#[derive(Debug, Default, Clone, Serialize)]
pub(crate) struct BatterTotals {
    /// Last display name seen on a record; fallback when the roster has
    /// no entry for this identifier
    #[serde(skip)]
    pub(crate) name: String,
    pub(crate) pa: i64,
    pub(crate) ab: i64,
    pub(crate) h: i64,
    pub(crate) h1b: i64,
    pub(crate) h2b: i64,
    pub(crate) h3b: i64,
    pub(crate) hr: i64,
    pub(crate) bb: i64,
    pub(crate) so: i64,
    pub(crate) sf: i64,
    pub(crate) rbi: i64,
    pub(crate) pitches: i64,
    pub(crate) swings: i64,
    pub(crate) contacts: i64,
    pub(crate) zone_pitches: i64,
    pub(crate) zone_swings: i64,
    pub(crate) out_zone_pitches: i64,
    pub(crate) out_zone_swings: i64,
    pub(crate) hard_hits: i64,
    pub(crate) barrels: i64,
    pub(crate) sweet_spots: i64,
    pub(crate) bip: i64,
}

/// Pitching counter bundle, same lifecycle as [`BatterTotals`].
#[derive(Debug, Default, Clone, Serialize)]
pub(crate) struct PitcherTotals {
    #[serde(skip)]
    pub(crate) name: String,
    pub(crate) bf: i64,
    pub(crate) outs: i64,
    pub(crate) h: i64,
    pub(crate) hr: i64,
    pub(crate) bb: i64,
    pub(crate) so: i64,
    pub(crate) runs: i64,
    pub(crate) bip: i64,
    pub(crate) hard_hits: i64,
    pub(crate) fb: i64,
    pub(crate) gb: i64,
}

/// Loading result with per-pass bookkeeping.
#[derive(Debug, Default)]
pub(crate) struct LoadResult {
    pub(crate) events: Vec<PitchEvent>,
    /// Lines skipped as blank, malformed, or missing required fields
    pub(crate) skipped: i64,
    pub(crate) files: usize,
    /// Discovery + parse time in milliseconds
    pub(crate) elapsed_ms: f64,
}
