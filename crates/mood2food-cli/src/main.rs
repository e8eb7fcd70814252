//! Mood2Food CLI - Diary insight engine
//!
//! Usage:
//!   mood2food insights --moods moods.json --foods foods.json
//!   mood2food frequent --moods moods.json
//!   mood2food recent --moods moods.csv --limit 5
//!   mood2food recommend --mood Stressed

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let format = cli.format.as_deref();

    match cli.command {
        Commands::Insights { moods, foods } => {
            commands::cmd_insights(&moods, &foods, format, cli.json)
        }
        Commands::Frequent { moods } => commands::cmd_frequent(&moods, format, cli.json),
        Commands::Recent { moods, limit } => {
            commands::cmd_recent(&moods, limit, format, cli.json)
        }
        Commands::Recommend { mood } => commands::cmd_recommend(&mood, cli.json),
        Commands::Validate { moods, foods } => {
            commands::cmd_validate(moods.as_deref(), foods.as_deref(), format, cli.json)
        }
        Commands::Moods => commands::cmd_moods(cli.json),
        Commands::Categories => commands::cmd_categories(cli.json),
    }
}
