mod csv;
mod format;
mod json;
mod table;

pub(crate) use csv::{output_batting_csv, output_pitching_csv};
pub(crate) use json::{output_batting_json, output_pitching_json};
pub(crate) use table::{SummaryOptions, TableOptions, print_batting_table, print_pitching_table, print_summary_line};
