use crate::core::{BatterRow, PitcherRow};

pub(crate) fn output_batting_json(rows: &[BatterRow]) -> String {
    serde_json::to_string_pretty(rows).unwrap_or_else(|_| "[]".to_string())
}

pub(crate) fn output_pitching_json(rows: &[PitcherRow]) -> String {
    serde_json::to_string_pretty(rows).unwrap_or_else(|_| "[]".to_string())
}
