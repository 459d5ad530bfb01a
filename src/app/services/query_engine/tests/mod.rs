//! Tests for the accident query engine

mod query_tests;

use crate::app::models::AccidentRecord;
use crate::app::services::query_engine::AccidentQueryEngine;

/// Build a test record with the fields the queries care about
pub fn test_record(
    id: &str,
    longitude: f64,
    latitude: f64,
    surface: Option<&str>,
    weather: Option<&str>,
    authority: &str,
) -> AccidentRecord {
    AccidentRecord::new(
        id.to_string(),
        longitude,
        latitude,
        None,
        None,
        None,
        None,
        None,
        surface.map(str::to_string),
        weather.map(str::to_string),
        None,
        authority.to_string(),
    )
    .unwrap()
}

/// Engine over a small mixed dataset used by most query tests
pub fn test_engine() -> AccidentQueryEngine {
    AccidentQueryEngine::new(vec![
        test_record("A1", 1.0, 1.0, Some("Wet or damp"), Some("Raining"), "Leeds"),
        test_record("A2", 2.0, 2.0, Some("Dry"), Some("Raining"), "Bradford"),
        test_record("A3", 1.0, 1.0, Some("Dry"), Some("Snowing"), "Leeds"),
        test_record("A4", -0.5, 51.5, None, Some("Fine"), "Westminster"),
        test_record("A5", 0.5, 1.5, Some("Dry"), None, "Leeds"),
    ])
}

/// Engine with no records
pub fn empty_engine() -> AccidentQueryEngine {
    AccidentQueryEngine::new(Vec::new())
}
