//! Lookup command implementation
//!
//! Looks up a single accident by its accident index and prints it. Absence
//! is a normal outcome: the command reports "not found" and still exits
//! successfully.

use super::shared::{load_engine, setup_logging};
use crate::cli::args::LookupArgs;
use crate::Result;
use colored::*;
use tracing::debug;

/// Lookup command runner
pub fn run_lookup(args: LookupArgs) -> Result<()> {
    setup_logging(&args.common)?;
    args.validate()?;
    debug!("Lookup arguments: {:?}", args);

    let (engine, _stats) = load_engine(&args.common)?;

    match engine.find_by_id(&args.accident_id) {
        Some(record) => {
            println!("{}", "Accident found".green().bold());
            println!("  Index:       {}", record.accident_id);
            println!(
                "  Location:    {:.4}, {:.4} (lon, lat)",
                record.longitude, record.latitude
            );
            if let Some(date) = record.date {
                println!("  Date:        {}", date.format("%Y-%m-%d"));
            }
            if let Some(time) = record.time {
                println!("  Time:        {}", time.format("%H:%M"));
            }
            if let Some(severity) = record.severity {
                println!("  Severity:    {}", severity);
            }
            if let Some(vehicles) = record.number_of_vehicles {
                println!("  Vehicles:    {}", vehicles);
            }
            if let Some(casualties) = record.number_of_casualties {
                println!("  Casualties:  {}", casualties);
            }
            if let Some(surface) = &record.road_surface_condition {
                println!("  Surface:     {}", surface);
            }
            if let Some(weather) = &record.weather_condition {
                println!("  Weather:     {}", weather);
            }
            if let Some(light) = &record.light_condition {
                println!("  Light:       {}", light);
            }
            println!("  Authority:   {}", record.district_authority);
        }
        None => {
            println!(
                "{} no accident with index '{}'",
                "Not found:".yellow().bold(),
                args.accident_id
            );
        }
    }

    Ok(())
}
