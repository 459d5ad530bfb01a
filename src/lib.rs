//! Accident Processor Library
//!
//! A Rust library for loading UK road accident (STATS19) CSV extracts into
//! memory and answering analytical queries over them.
//!
//! This library provides tools for:
//! - Parsing STATS19 accident CSV files with header-based column mapping
//! - Normalizing the dataset's missing-value markers into absent fields
//! - Looking up accidents by accident index
//! - Filtering accidents by geographic bounding box
//! - Grouping and ranking accidents by surface condition, weather condition,
//!   and district authority

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod accident_loader;
        pub mod query_engine;

        #[cfg(test)]
        mod integration_test;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{AccidentRecord, AccidentSeverity};
pub use app::services::accident_loader::{AccidentLoader, LoadResult, LoadStats};
pub use app::services::query_engine::AccidentQueryEngine;
pub use config::Config;

/// Result type alias for accident processing operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for accident processing operations
///
/// Query operations never produce errors: "no matching record" is an
/// `Option`/empty result, not a failure. Errors arise only while resolving
/// configuration and loading records from disk.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Record-level validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Report serialization error
    #[error("Report serialization error: {message}")]
    ReportSerialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a report serialization error
    pub fn report_serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::ReportSerialization {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
