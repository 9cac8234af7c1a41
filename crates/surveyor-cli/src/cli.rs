//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Surveyor: statistical profiling of survey exports
#[derive(Parser)]
#[command(name = "surveyor")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output and debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a survey export and print its statistical profile
    Analyze {
        /// Path to the survey file (CSV/TSV/JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// JSON file overriding analysis thresholds
        #[arg(short, long, value_name = "CONFIG")]
        config: Option<PathBuf>,

        /// Write the full result as JSON to this path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the result as JSON instead of a report
        #[arg(long)]
        json: bool,
    },

    /// Generate a synthetic survey for trying out the analyzer
    Sample {
        /// Number of responses to generate
        #[arg(short, long, default_value = "100")]
        rows: usize,

        /// Random seed; the same seed produces the same survey
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Output CSV path
        #[arg(short, long)]
        output: PathBuf,
    },
}
