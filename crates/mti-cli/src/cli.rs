// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Finds row ranges where every selected column moves in the same
/// direction, within a per-step tolerance.
#[derive(Debug, Parser)]
#[command(name = "mti", version, about, long_about = None)]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug); RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan a CSV file for jointly monotonic intervals.
    Analyze(AnalyzeArgs),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

#[derive(Clone, Debug, Args)]
pub struct AnalyzeArgs {
    /// Headed CSV input.
    #[arg(long)]
    pub input: PathBuf,

    /// Comma-separated column names; defaults to the leading columns.
    #[arg(long, value_delimiter = ',')]
    pub channels: Option<Vec<String>>,

    /// Largest counter-movement allowed per step.
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Versioned JSON analysis config; flags take precedence over it.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the report here instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Also write the per-interval summary table as CSV.
    #[arg(long)]
    pub summary_csv: Option<PathBuf>,

    /// Include a thinned display plan with at most this many points.
    #[arg(long)]
    pub display_points: Option<usize>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}
