//! Command dispatch
//!
//! Wires the CLI surface to the aggregation pipeline: resolve the data
//! root and reference date, load and window the events, run the requested
//! accumulator, and hand the ranked rows to an output format.

use chrono::Local;
use std::path::PathBuf;

use crate::cli::{Cli, Mode};
use crate::core::{
    aggregate_batting, aggregate_pitching, batter_rows, filter_events, pitcher_rows, rank_batters,
    rank_pitchers,
};
use crate::error::AppError;
use crate::output::{
    SummaryOptions, TableOptions, output_batting_csv, output_batting_json, output_pitching_csv,
    output_pitching_json, print_batting_table, print_pitching_table, print_summary_line,
};
use crate::roster::Roster;
use crate::source::{all_sources, load_events};
use crate::utils::{parse_date, set_parse_debug};

fn resolve_data_root(cli: &Cli) -> PathBuf {
    if let Some(dir) = &cli.data_dir {
        return dir.clone();
    }
    if let Ok(dir) = std::env::var("BBSTATS_HOME")
        && !dir.is_empty()
    {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .map(|home| home.join(".bbstats"))
        .unwrap_or_else(|| PathBuf::from("."))
}

pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    set_parse_debug(cli.debug);

    let today = match &cli.date {
        Some(s) => parse_date(s)?,
        None => Local::now().date_naive(),
    };

    let data_root = resolve_data_root(cli);
    let roster = Roster::load(&data_root.join("roster.json"))?;

    // no progress chatter around machine-readable output
    let quiet = cli.json || cli.csv;
    let loaded = load_events(all_sources(), &data_root, quiet);
    let (skipped, files, elapsed_ms) = (loaded.skipped, loaded.files, loaded.elapsed_ms);

    let events = filter_events(loaded.events, cli.period, today);
    let summary = SummaryOptions {
        events: events.len(),
        skipped,
        files,
        elapsed_ms: Some(elapsed_ms),
    };
    let search = cli.search.as_deref();
    let use_color = cli.use_color();

    match Mode::from(&cli.command) {
        Mode::Batting => {
            let rows = rank_batters(batter_rows(aggregate_batting(&events), &roster), search);
            if cli.json {
                println!("{}", output_batting_json(&rows));
            } else if cli.csv {
                print!("{}", output_batting_csv(&rows));
            } else if rows.is_empty() {
                println!("No batting data found for this segment.");
            } else {
                print_batting_table(&rows, TableOptions { use_color });
                print_summary_line(summary, use_color);
            }
        }
        Mode::Pitching => {
            let rows = rank_pitchers(pitcher_rows(aggregate_pitching(&events), &roster), search);
            if cli.json {
                println!("{}", output_pitching_json(&rows));
            } else if cli.csv {
                print!("{}", output_pitching_csv(&rows));
            } else if rows.is_empty() {
                println!("No pitching data found for this segment.");
            } else {
                print_pitching_table(&rows, TableOptions { use_color });
                print_summary_line(summary, use_color);
            }
        }
    }

    Ok(())
}
