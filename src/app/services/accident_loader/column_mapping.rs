//! Column mapping for STATS19 extract headers
//!
//! Extracts vary in column order and carry many columns this tool never
//! reads, so lookup is by header name rather than position.

use crate::constants::REQUIRED_COLUMNS;
use crate::{Error, Result};
use csv::StringRecord;
use std::collections::HashMap;

/// Header-name to column-index mapping for one extract file
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Column name to index mapping
    pub name_to_index: HashMap<String, usize>,
}

impl ColumnMapping {
    /// Analyze the header row and build the column mapping
    ///
    /// # Errors
    /// Returns `Error::DataValidation` if any of the required columns
    /// (accident index, coordinates, district authority) is missing from
    /// the header.
    pub fn analyze(headers: &StringRecord) -> Result<Self> {
        let mut name_to_index = HashMap::new();

        for (index, header) in headers.iter().enumerate() {
            name_to_index.insert(header.trim().to_string(), index);
        }

        for required in REQUIRED_COLUMNS {
            if !name_to_index.contains_key(*required) {
                return Err(Error::data_validation(format!(
                    "Required column '{}' not found in header",
                    required
                )));
            }
        }

        Ok(Self { name_to_index })
    }

    /// Index of a column by header name, if present
    pub fn index(&self, name: &str) -> Option<usize> {
        self.name_to_index.get(name).copied()
    }
}
