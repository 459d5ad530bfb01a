//! In-memory query engine for accident records
//!
//! This module provides the query surface over a loaded accident dataset:
//! lookup by accident index, geographic bounding-box filtering, grouping and
//! counting by categorical fields, and ranking of weather conditions.

use crate::app::models::AccidentRecord;

pub mod query;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use query::{DatasetStatistics, GeographicBounds};

/// Query engine over a fixed, ordered accident dataset
///
/// The engine is constructed once from the full dataset and never mutated
/// afterwards. Every query is a pure borrow-only function over the record
/// sequence, so a shared engine is safe to query from multiple threads.
///
/// The record sequence keeps its construction order: queries that return
/// multiple records preserve it, and lookup by a duplicated accident index
/// deterministically returns the first occurrence.
#[derive(Debug, Clone)]
pub struct AccidentQueryEngine {
    /// Accident records in their original extract order
    pub(crate) records: Vec<AccidentRecord>,
}

impl AccidentQueryEngine {
    /// Create a query engine over the given records
    ///
    /// The records are taken in the order given; the engine does not sort,
    /// deduplicate, or otherwise rearrange them.
    pub fn new(records: Vec<AccidentRecord>) -> Self {
        Self { records }
    }

    /// Total number of records in the dataset
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in their original order
    pub fn records(&self) -> &[AccidentRecord] {
        &self.records
    }
}
