//! Loader for STATS19 accident CSV extracts
//!
//! This module reads a DfT accident extract into memory as a sequence of
//! [`AccidentRecord`]s, in file order, ready for the query engine.
//!
//! The loader is organized into logical components:
//! - [`column_mapping`] - Header-name based column resolution
//! - [`field_parsers`] - Typed field extraction with missing-value handling
//! - [`record_parser`] - Row to `AccidentRecord` conversion
//! - [`stats`] - Loading statistics and result structures
//!
//! Malformed rows are skipped and counted by default; strict mode aborts the
//! load on the first bad row instead.

pub mod column_mapping;
pub mod field_parsers;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::ColumnMapping;
pub use stats::{LoadResult, LoadStats};

use crate::app::models::AccidentRecord;
use crate::config::Config;
use crate::constants::PROGRESS_UPDATE_INTERVAL;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use record_parser::parse_accident_record;
use std::io::Read;
use tracing::{info, warn};

/// Loader for STATS19 accident CSV extracts
#[derive(Debug, Clone)]
pub struct AccidentLoader {
    config: Config,
}

impl AccidentLoader {
    /// Create a new loader with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Load the configured extract file
    ///
    /// # Errors
    /// * `Error::FileNotFound` / `Error::Configuration` for an invalid input path
    /// * `Error::CsvParsing` for an unreadable header or, in strict mode, the
    ///   first malformed row
    pub fn load(&self) -> Result<LoadResult> {
        self.config.validate()?;

        let source = self.config.input_path.display().to_string();
        info!("Loading accident extract: {}", source);

        let file = std::fs::File::open(&self.config.input_path)
            .map_err(|e| Error::io(format!("Failed to open {}", source), e))?;

        self.load_reader(file, &source)
    }

    /// Load an extract from any reader
    ///
    /// `source` labels the data in log messages and errors.
    pub fn load_reader<R: Read>(&self, reader: R, source: &str) -> Result<LoadResult> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| Error::csv_parsing(source, "Failed to read CSV header", Some(e)))?
            .clone();

        let mapping = ColumnMapping::analyze(&headers)
            .map_err(|e| Error::csv_parsing(source, e.to_string(), None))?;

        let mut stats = LoadStats::new();
        let mut records = Vec::new();

        let progress = if self.config.show_progress {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .unwrap(),
            );
            pb.set_message("Loading accident records...");
            Some(pb)
        } else {
            None
        };

        for (row_index, row) in csv_reader.records().enumerate() {
            stats.total_rows += 1;
            // Header occupies line 1, so data row i is file line i + 2
            let line = row_index + 2;

            let parsed = row
                .map_err(|e| Error::csv_parsing(source, format!("line {}", line), Some(e)))
                .and_then(|row| parse_accident_record(&row, &mapping));

            match parsed {
                Ok(record) => {
                    records.push(record);
                    stats.records_loaded += 1;
                }
                Err(e) => {
                    if self.config.strict {
                        return Err(Error::csv_parsing(
                            source,
                            format!("line {}: {}", line, e),
                            None,
                        ));
                    }

                    warn!("Skipping line {} of {}: {}", line, source, e);
                    stats.rows_skipped += 1;
                    stats.errors.push(format!("line {}: {}", line, e));
                }
            }

            if let Some(pb) = &progress {
                if stats.total_rows as u64 % PROGRESS_UPDATE_INTERVAL == 0 {
                    pb.set_message(format!("Loaded {} accident records...", stats.records_loaded));
                    pb.tick();
                }
            }
        }

        if let Some(pb) = &progress {
            pb.finish_and_clear();
        }

        info!(
            "Loaded {} records from {} rows ({} skipped, {:.1}% success)",
            stats.records_loaded,
            stats.total_rows,
            stats.rows_skipped,
            stats.success_rate()
        );

        Ok(LoadResult { records, stats })
    }
}

/// Load an extract and hand the records straight to a query engine
///
/// Convenience wrapper for callers that do not care about load statistics.
pub fn load_records(config: &Config) -> Result<Vec<AccidentRecord>> {
    let loader = AccidentLoader::new(config.clone());
    Ok(loader.load()?.records)
}
