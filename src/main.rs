mod app;
mod cli;
mod config;
mod core;
mod error;
mod output;
mod roster;
mod source;
mod utils;

use clap::Parser;

use cli::Cli;
use config::Config;

fn main() {
    let cli = Cli::parse();
    let config = Config::load();
    let cli = cli.with_config(&config);

    if let Err(err) = app::run(&cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
