//! Shared functionality for CLI commands
//!
//! Logging setup and the common load path used by every subcommand: resolve
//! configuration, load the extract, and construct the query engine.

use crate::app::services::accident_loader::{AccidentLoader, LoadStats};
use crate::app::services::query_engine::AccidentQueryEngine;
use crate::cli::args::CommonArgs;
use crate::Result;
use tracing::{debug, info};

/// Set up logging for a CLI command
pub fn setup_logging(common: &CommonArgs) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let log_level = common.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("accident_processor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load the configured extract and build a query engine over it
pub fn load_engine(common: &CommonArgs) -> Result<(AccidentQueryEngine, LoadStats)> {
    let config = common.to_config();
    config.validate()?;

    let loader = AccidentLoader::new(config);
    let result = loader.load()?;

    info!(
        "Query engine ready over {} accident records",
        result.records.len()
    );

    Ok((AccidentQueryEngine::new(result.records), result.stats))
}

/// One-line human-readable summary of an accident record
pub fn format_record_line(record: &crate::app::models::AccidentRecord) -> String {
    let severity = record
        .severity
        .map(|s| s.to_string())
        .unwrap_or_else(|| "unknown severity".to_string());
    let date = record
        .date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "undated".to_string());

    format!(
        "{}  ({:.4}, {:.4})  {}  {}  {}",
        record.accident_id, record.longitude, record.latitude, date, severity,
        record.district_authority
    )
}
