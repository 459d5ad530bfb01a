//! Command-line argument definitions for the accident processor
//!
//! This module defines the CLI interface using the clap derive API: one
//! subcommand per query surface, each wrapping the shared input and logging
//! arguments.

use crate::constants::DEFAULT_TOP_WEATHER_LIMIT;
use crate::{Config, Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the accident processor
///
/// Loads UK road accident (STATS19) CSV extracts into memory and answers
/// analytical queries over them.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "accident-processor",
    version,
    about = "Query UK road accident (STATS19) CSV extracts",
    long_about = "Loads a UK road accident (STATS19) CSV extract into memory and answers \
                  analytical queries over it: lookup by accident index, geographic bounding-box \
                  filtering, and grouped reporting by surface condition, weather condition, and \
                  district authority.",
    arg_required_else_help = true
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for the accident processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Look up a single accident by its accident index
    Lookup(LookupArgs),
    /// List accidents within a geographic bounding box
    Filter(FilterArgs),
    /// Generate a dataset report with grouped counts and rankings
    Report(ReportArgs),
}

/// Arguments shared by every subcommand: the extract to load and how noisy
/// loading should be
#[derive(Debug, Clone, clap::Args)]
pub struct CommonArgs {
    /// Path to the STATS19 accident CSV extract
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Path to the STATS19 accident CSV extract"
    )]
    pub input_path: PathBuf,

    /// Abort loading on the first malformed row
    ///
    /// By default malformed rows are skipped with a warning and counted in
    /// the load statistics.
    #[arg(long = "strict", help = "Abort loading on the first malformed row")]
    pub strict: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress progress output and non-error logging",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl CommonArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show the loading progress spinner
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }

    /// Build the loader configuration from these arguments
    pub fn to_config(&self) -> Config {
        let mut config = Config::new(self.input_path.clone());
        config.strict = self.strict;
        config.show_progress = self.show_progress();
        config
    }
}

/// Arguments for the lookup command
#[derive(Debug, Clone, Parser)]
pub struct LookupArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Accident index to look up (exact, case-sensitive match)
    #[arg(
        long = "id",
        value_name = "INDEX",
        help = "Accident index to look up"
    )]
    pub accident_id: String,
}

impl LookupArgs {
    /// Validate the lookup arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.accident_id.trim().is_empty() {
            return Err(Error::configuration(
                "Accident index must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Arguments for the filter command
///
/// Bounds are inclusive on both axes. Inverted bounds (min > max) are not an
/// error; they simply match nothing.
#[derive(Debug, Clone, Parser)]
pub struct FilterArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Western boundary (minimum longitude, inclusive)
    #[arg(long = "min-lon", value_name = "DEG", allow_hyphen_values = true)]
    pub min_lon: f64,

    /// Eastern boundary (maximum longitude, inclusive)
    #[arg(long = "max-lon", value_name = "DEG", allow_hyphen_values = true)]
    pub max_lon: f64,

    /// Southern boundary (minimum latitude, inclusive)
    #[arg(long = "min-lat", value_name = "DEG", allow_hyphen_values = true)]
    pub min_lat: f64,

    /// Northern boundary (maximum latitude, inclusive)
    #[arg(long = "max-lat", value_name = "DEG", allow_hyphen_values = true)]
    pub max_lat: f64,

    /// Maximum number of matching records to print
    #[arg(long = "limit", value_name = "N", help = "Print at most N matches")]
    pub limit: Option<usize>,
}

/// Arguments for the report command
#[derive(Debug, Clone, Parser)]
pub struct ReportArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format for the report
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the report"
    )]
    pub output_format: OutputFormat,

    /// Number of weather conditions to include in the ranking
    #[arg(
        long = "top",
        value_name = "N",
        default_value_t = DEFAULT_TOP_WEATHER_LIMIT,
        help = "Number of weather conditions to rank"
    )]
    pub top: usize,
}

impl ReportArgs {
    /// Validate the report arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.top == 0 {
            return Err(Error::configuration(
                "--top must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Output format options for the report command
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}
