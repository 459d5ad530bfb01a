//! Report command implementation
//!
//! Generates a dataset report: load statistics, dataset statistics, surface
//! condition counts, the weather condition ranking, and per-authority
//! accident counts, in human-readable or JSON form.

use super::shared::{load_engine, setup_logging};
use crate::app::services::accident_loader::LoadStats;
use crate::app::services::query_engine::AccidentQueryEngine;
use crate::cli::args::{OutputFormat, ReportArgs};
use crate::{Error, Result};
use colored::*;
use tracing::debug;

/// Report command runner
pub fn run_report(args: ReportArgs) -> Result<()> {
    setup_logging(&args.common)?;
    args.validate()?;
    debug!("Report arguments: {:?}", args);

    let (engine, load_stats) = load_engine(&args.common)?;

    match args.output_format {
        OutputFormat::Human => generate_human_report(&args, &engine, &load_stats),
        OutputFormat::Json => generate_json_report(&args, &engine, &load_stats),
    }
}

/// Surface condition counts sorted by count descending, absent group labelled
fn sorted_surface_counts(engine: &AccidentQueryEngine) -> Vec<(String, u64)> {
    let mut counts: Vec<(String, u64)> = engine
        .count_by_surface_condition()
        .into_iter()
        .map(|(condition, count)| {
            (
                condition.unwrap_or_else(|| "(not recorded)".to_string()),
                count,
            )
        })
        .collect();

    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

/// Per-authority accident counts sorted by count descending
fn sorted_authority_counts(engine: &AccidentQueryEngine) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = engine
        .group_accident_ids_by_authority()
        .into_iter()
        .map(|(authority, ids)| (authority, ids.len()))
        .collect();

    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

fn generate_human_report(
    args: &ReportArgs,
    engine: &AccidentQueryEngine,
    load_stats: &LoadStats,
) -> Result<()> {
    let stats = engine.statistics();

    println!("{}", "📊 Accident Dataset Report".bold());
    println!("==========================");
    println!("📁 Extract: {}", args.common.input_path.display());
    println!(
        "📄 Rows: {} ({} loaded, {} skipped, {:.1}% success)",
        load_stats.total_rows,
        load_stats.records_loaded,
        load_stats.rows_skipped,
        load_stats.success_rate()
    );
    println!("🚗 Accidents: {}", stats.total_records);
    println!("🏛️  District authorities: {}", stats.distinct_authorities);

    if let Some(bounds) = stats.geographic_bounds {
        println!(
            "🗺️  Extent: lon [{:.4}, {:.4}], lat [{:.4}, {:.4}]",
            bounds.min_lon, bounds.max_lon, bounds.min_lat, bounds.max_lat
        );
    }

    println!();
    println!("{}", "Road surface conditions".bold());
    for (condition, count) in sorted_surface_counts(engine) {
        println!("  {:>8}  {}", count, condition);
    }

    println!();
    println!(
        "{}",
        format!("Top {} weather conditions", args.top).bold()
    );
    let top_weather = engine.top_weather_conditions(args.top);
    if top_weather.is_empty() {
        println!("  (no weather conditions recorded)");
    }
    for (rank, condition) in top_weather.iter().enumerate() {
        println!("  {}. {}", rank + 1, condition);
    }

    println!();
    println!("{}", "Accidents by district authority".bold());
    for (authority, count) in sorted_authority_counts(engine) {
        println!("  {:>8}  {}", count, authority);
    }

    Ok(())
}

fn generate_json_report(
    args: &ReportArgs,
    engine: &AccidentQueryEngine,
    load_stats: &LoadStats,
) -> Result<()> {
    use serde_json::json;

    let stats = engine.statistics();

    let surface_conditions: Vec<_> = sorted_surface_counts(engine)
        .into_iter()
        .map(|(condition, count)| json!({ "condition": condition, "count": count }))
        .collect();

    let authorities: Vec<_> = sorted_authority_counts(engine)
        .into_iter()
        .map(|(authority, count)| json!({ "authority": authority, "accidents": count }))
        .collect();

    let report = json!({
        "extract": args.common.input_path.display().to_string(),
        "load": {
            "total_rows": load_stats.total_rows,
            "records_loaded": load_stats.records_loaded,
            "rows_skipped": load_stats.rows_skipped,
            "success_rate_percent": load_stats.success_rate(),
        },
        "dataset": stats,
        "surface_conditions": surface_conditions,
        "top_weather_conditions": engine.top_weather_conditions(args.top),
        "authorities": authorities,
    });

    let rendered = serde_json::to_string_pretty(&report)
        .map_err(|e| Error::report_serialization("Failed to render report JSON", e))?;
    println!("{}", rendered);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::AccidentRecord;

    fn record(id: &str, surface: Option<&str>, authority: &str) -> AccidentRecord {
        AccidentRecord::new(
            id.to_string(),
            -0.2,
            51.5,
            None,
            None,
            None,
            None,
            None,
            surface.map(str::to_string),
            None,
            None,
            authority.to_string(),
        )
        .unwrap()
    }

    #[test]
    fn test_sorted_surface_counts_labels_absent_group() {
        let engine = AccidentQueryEngine::new(vec![
            record("A1", Some("Dry"), "Leeds"),
            record("A2", None, "Leeds"),
            record("A3", Some("Dry"), "Leeds"),
        ]);

        let counts = sorted_surface_counts(&engine);
        assert_eq!(
            counts,
            vec![
                ("Dry".to_string(), 2),
                ("(not recorded)".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_sorted_authority_counts_descending_then_name() {
        let engine = AccidentQueryEngine::new(vec![
            record("A1", None, "Leeds"),
            record("A2", None, "Bradford"),
            record("A3", None, "Leeds"),
            record("A4", None, "York"),
        ]);

        let counts = sorted_authority_counts(&engine);
        assert_eq!(counts[0], ("Leeds".to_string(), 2));
        // Equal counts fall back to name order
        assert_eq!(counts[1], ("Bradford".to_string(), 1));
        assert_eq!(counts[2], ("York".to_string(), 1));
    }
}
