//! Loading statistics and result structures
//!
//! Types for tracking how much of an extract loaded cleanly and organizing
//! the loaded records for the query engine.

use crate::app::models::AccidentRecord;
use serde::{Deserialize, Serialize};

/// Load result with records and basic statistics
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// Successfully loaded accident records, in file order
    pub records: Vec<AccidentRecord>,

    /// Basic loading statistics
    pub stats: LoadStats,
}

/// Simple loading statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadStats {
    /// Total number of data rows encountered
    pub total_rows: usize,

    /// Number of records successfully loaded
    pub records_loaded: usize,

    /// Number of rows skipped due to errors
    pub rows_skipped: usize,

    /// Row-level errors, for debugging
    pub errors: Vec<String>,
}

impl LoadStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_rows: 0,
            records_loaded: 0,
            rows_skipped: 0,
            errors: Vec::new(),
        }
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.records_loaded as f64 / self.total_rows as f64) * 100.0
        }
    }

    /// Check if loading was mostly successful (>90% success rate)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > 90.0
    }
}

impl Default for LoadStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_rate() {
        let mut stats = LoadStats::new();
        assert_eq!(stats.success_rate(), 0.0);

        stats.total_rows = 10;
        stats.records_loaded = 9;
        stats.rows_skipped = 1;
        assert!((stats.success_rate() - 90.0).abs() < f64::EPSILON);
        assert!(!stats.is_successful());

        stats.records_loaded = 10;
        stats.rows_skipped = 0;
        assert!(stats.is_successful());
    }
}
