//! Filter command implementation
//!
//! Lists the accidents whose coordinates fall within a geographic bounding
//! box, in extract order.

use super::shared::{format_record_line, load_engine, setup_logging};
use crate::cli::args::FilterArgs;
use crate::Result;
use colored::*;
use tracing::{debug, warn};

/// Filter command runner
pub fn run_filter(args: FilterArgs) -> Result<()> {
    setup_logging(&args.common)?;
    debug!("Filter arguments: {:?}", args);

    if args.min_lon > args.max_lon || args.min_lat > args.max_lat {
        warn!("Bounding box has min > max on one axis; no records can match");
    }

    let (engine, _stats) = load_engine(&args.common)?;

    let matches =
        engine.find_by_bounding_box(args.min_lon, args.max_lon, args.min_lat, args.max_lat);

    println!(
        "{} {} of {} accidents within lon [{}, {}], lat [{}, {}]",
        "Matched".green().bold(),
        matches.len(),
        engine.record_count(),
        args.min_lon,
        args.max_lon,
        args.min_lat,
        args.max_lat
    );

    let shown = args.limit.unwrap_or(matches.len());
    for record in matches.iter().take(shown) {
        println!("  {}", format_record_line(record));
    }

    if shown < matches.len() {
        println!("  ... and {} more (raise --limit to see them)", matches.len() - shown);
    }

    Ok(())
}
