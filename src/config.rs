//! Configuration management and validation.
//!
//! Provides the runtime configuration resolved from CLI arguments: where to
//! read the accident extract from, how the CSV is delimited, and how strictly
//! malformed rows are treated.

use crate::constants::DEFAULT_DELIMITER;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Runtime configuration for loading an accident extract
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the STATS19 accident CSV extract
    pub input_path: PathBuf,

    /// CSV field delimiter
    pub delimiter: u8,

    /// Abort the load on the first malformed row instead of skipping it
    pub strict: bool,

    /// Display a progress spinner while loading
    pub show_progress: bool,
}

impl Config {
    /// Create a configuration for the given input file with default parsing
    /// behavior (comma-delimited, lenient, progress enabled)
    pub fn new(input_path: PathBuf) -> Self {
        Self {
            input_path,
            delimiter: DEFAULT_DELIMITER,
            strict: false,
            show_progress: true,
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    /// * `Error::FileNotFound` if the input path does not exist
    /// * `Error::Configuration` if the input path is not a file
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration: {:?}", self);

        if !self.input_path.exists() {
            return Err(Error::file_not_found(self.input_path.display().to_string()));
        }

        if !self.input_path.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                self.input_path.display()
            )));
        }

        Ok(())
    }
}
