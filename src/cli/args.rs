//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::Config;
use crate::core::Period;

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "bbstats")]
#[command(about = "Fast batting and pitching statistics for pitch-by-pitch logs", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Aggregation window
    #[arg(short, long, global = true, value_enum, default_value = "all")]
    pub(crate) period: Period,

    /// Case-insensitive player name filter
    #[arg(short, long, global = true, value_name = "NAME")]
    pub(crate) search: Option<String>,

    /// Reference date for the window (YYYYMMDD or YYYY-MM-DD; default: today)
    #[arg(short, long, global = true)]
    pub(crate) date: Option<String>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Output as CSV
    #[arg(short = 'c', long, global = true)]
    pub(crate) csv: bool,

    /// Event log directory (default: $BBSTATS_HOME or ~/.bbstats)
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) data_dir: Option<PathBuf>,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Enable debug output (show per-line parse problems)
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        if let Some(ref color) = config.color
            && matches!(self.color, ColorMode::Auto)
        {
            match color.to_lowercase().as_str() {
                "always" => self.color = ColorMode::Always,
                "never" => self.color = ColorMode::Never,
                _ => {}
            }
        }

        if self.data_dir.is_none() {
            self.data_dir = config.data_dir.clone();
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli() -> Cli {
        Cli::parse_from(["bbstats"])
    }

    #[test]
    fn config_color_applies_when_cli_is_default() {
        let config = Config {
            color: Some("never".to_string()),
            ..Default::default()
        };
        let cli = bare_cli().with_config(&config);
        assert_eq!(cli.color, ColorMode::Never);
    }

    #[test]
    fn cli_color_wins_over_config() {
        let config = Config {
            color: Some("never".to_string()),
            ..Default::default()
        };
        let cli = Cli::parse_from(["bbstats", "--color", "always"]).with_config(&config);
        assert_eq!(cli.color, ColorMode::Always);
    }

    #[test]
    fn config_data_dir_fills_the_gap() {
        let config = Config {
            data_dir: Some(PathBuf::from("/var/lib/bbstats")),
            ..Default::default()
        };
        let cli = bare_cli().with_config(&config);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/var/lib/bbstats")));
    }

    #[test]
    fn period_defaults_to_all() {
        assert_eq!(bare_cli().period, Period::All);
        let cli = Cli::parse_from(["bbstats", "--period", "week"]);
        assert_eq!(cli.period, Period::Week);
    }
}
