//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Batter leaderboard (default)
    Batting,
    /// Pitcher leaderboard
    Pitching,
}

/// Which accumulator's rows are returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    Batting,
    Pitching,
}

impl From<&Option<Commands>> for Mode {
    fn from(cmd: &Option<Commands>) -> Self {
        match cmd {
            Some(Commands::Pitching) => Mode::Pitching,
            Some(Commands::Batting) | None => Mode::Batting,
        }
    }
}
