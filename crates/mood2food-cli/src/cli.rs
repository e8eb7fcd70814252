//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Mood2Food - Derive insights from mood and food diary logs
#[derive(Parser)]
#[command(name = "mood2food")]
#[command(about = "Mood and food diary insight engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit machine-readable JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    /// Log file format: json or csv (auto-detected from the extension if
    /// not specified)
    #[arg(long, global = true)]
    pub format: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Derive the full insight report from both diary logs
    Insights {
        /// Mood log file (JSON array or CSV)
        #[arg(short, long)]
        moods: PathBuf,

        /// Food log file (JSON array or CSV)
        #[arg(short, long)]
        foods: PathBuf,
    },

    /// Show the most frequent mood in a log
    Frequent {
        /// Mood log file
        #[arg(short, long)]
        moods: PathBuf,
    },

    /// Show the most recent mood entries
    Recent {
        /// Mood log file
        #[arg(short, long)]
        moods: PathBuf,

        /// Maximum entries to show
        #[arg(short, long, default_value = "5")]
        limit: usize,
    },

    /// Show food recommendations for a single mood label
    Recommend {
        /// Mood label (e.g. Stressed, Sad, Tired)
        #[arg(short, long)]
        mood: String,
    },

    /// Validate diary log files without deriving insights
    Validate {
        /// Mood log file
        #[arg(short, long)]
        moods: Option<PathBuf>,

        /// Food log file
        #[arg(short, long)]
        foods: Option<PathBuf>,
    },

    /// List the moods the tracker offers
    Moods,

    /// List the food diary categories
    Categories,
}
