//! Command implementations for the accident processor CLI
//!
//! This module contains the command execution logic for the CLI interface.
//! Each command is implemented in its own module:
//! - `lookup`: single-accident lookup by accident index
//! - `filter`: bounding-box filtering
//! - `report`: grouped counts, rankings, and dataset statistics

pub mod filter;
pub mod lookup;
pub mod report;
pub mod shared;

use crate::cli::args::{Args, Commands};
use crate::Result;

/// Main command runner for the accident processor
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
pub fn run(args: Args) -> Result<()> {
    match args.command {
        Commands::Lookup(lookup_args) => lookup::run_lookup(lookup_args),
        Commands::Filter(filter_args) => filter::run_filter(filter_args),
        Commands::Report(report_args) => report::run_report(report_args),
    }
}
