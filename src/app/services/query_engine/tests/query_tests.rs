//! Tests for the five query operations

use super::{empty_engine, test_engine, test_record};
use crate::app::services::query_engine::AccidentQueryEngine;

// =============================================================================
// find_by_id
// =============================================================================

#[test]
fn test_find_by_id_present() {
    let engine = test_engine();

    let record = engine.find_by_id("A3").unwrap();
    assert_eq!(record.accident_id, "A3");
    assert_eq!(record.weather_condition.as_deref(), Some("Snowing"));
}

#[test]
fn test_find_by_id_absent() {
    let engine = test_engine();
    assert!(engine.find_by_id("A99").is_none());
}

#[test]
fn test_find_by_id_case_sensitive() {
    let engine = test_engine();
    assert!(engine.find_by_id("a1").is_none());
}

#[test]
fn test_find_by_id_duplicate_returns_first() {
    let engine = AccidentQueryEngine::new(vec![
        test_record("DUP", 1.0, 1.0, None, None, "Leeds"),
        test_record("DUP", 2.0, 2.0, None, None, "Bradford"),
    ]);

    let record = engine.find_by_id("DUP").unwrap();
    assert_eq!(record.district_authority, "Leeds");
}

#[test]
fn test_find_by_id_empty_dataset() {
    assert!(empty_engine().find_by_id("A1").is_none());
}

// =============================================================================
// find_by_bounding_box
// =============================================================================

#[test]
fn test_bounding_box_inclusive_bounds_and_order() {
    let engine = test_engine();

    // A1 and A3 sit exactly on the (1, 1) corner; A5 is inside
    let results = engine.find_by_bounding_box(0.0, 1.0, 0.0, 1.0);
    let ids: Vec<&str> = results.iter().map(|r| r.accident_id.as_str()).collect();
    assert_eq!(ids, vec!["A1", "A3"]);

    let results = engine.find_by_bounding_box(0.0, 1.0, 0.0, 2.0);
    let ids: Vec<&str> = results.iter().map(|r| r.accident_id.as_str()).collect();
    assert_eq!(ids, vec!["A1", "A3", "A5"]);
}

#[test]
fn test_bounding_box_no_matches() {
    let engine = test_engine();
    assert!(engine.find_by_bounding_box(10.0, 20.0, 10.0, 20.0).is_empty());
}

#[test]
fn test_bounding_box_inverted_bounds_empty() {
    let engine = test_engine();

    // min > max matches nothing rather than erroring
    assert!(engine.find_by_bounding_box(1.0, 0.0, 0.0, 2.0).is_empty());
    assert!(engine.find_by_bounding_box(0.0, 2.0, 2.0, 0.0).is_empty());
}

#[test]
fn test_bounding_box_whole_world_returns_everything_once() {
    let engine = test_engine();

    let results = engine.find_by_bounding_box(-180.0, 180.0, -90.0, 90.0);
    assert_eq!(results.len(), engine.record_count());

    let ids: Vec<&str> = results.iter().map(|r| r.accident_id.as_str()).collect();
    assert_eq!(ids, vec!["A1", "A2", "A3", "A4", "A5"]);
}

#[test]
fn test_bounding_box_empty_dataset() {
    assert!(empty_engine()
        .find_by_bounding_box(-180.0, 180.0, -90.0, 90.0)
        .is_empty());
}

// =============================================================================
// count_by_surface_condition
// =============================================================================

#[test]
fn test_surface_counts() {
    let engine = test_engine();
    let counts = engine.count_by_surface_condition();

    assert_eq!(counts.len(), 3);
    assert_eq!(counts[&Some("Dry".to_string())], 3);
    assert_eq!(counts[&Some("Wet or damp".to_string())], 1);
    assert_eq!(counts[&None], 1);
}

#[test]
fn test_surface_counts_sum_to_record_count() {
    let engine = test_engine();
    let total: u64 = engine.count_by_surface_condition().values().sum();
    assert_eq!(total, engine.record_count() as u64);
}

#[test]
fn test_surface_counts_empty_dataset() {
    assert!(empty_engine().count_by_surface_condition().is_empty());
}

// =============================================================================
// top weather conditions
// =============================================================================

#[test]
fn test_top_three_weather_conditions_ranking() {
    // Raining x3, Fine x2, Snowing x1, Fog x1
    let engine = AccidentQueryEngine::new(vec![
        test_record("A1", 0.0, 0.0, None, Some("Raining"), "Leeds"),
        test_record("A2", 0.0, 0.0, None, Some("Snowing"), "Leeds"),
        test_record("A3", 0.0, 0.0, None, Some("Fine"), "Leeds"),
        test_record("A4", 0.0, 0.0, None, Some("Raining"), "Leeds"),
        test_record("A5", 0.0, 0.0, None, Some("Fog"), "Leeds"),
        test_record("A6", 0.0, 0.0, None, Some("Fine"), "Leeds"),
        test_record("A7", 0.0, 0.0, None, Some("Raining"), "Leeds"),
    ]);

    assert_eq!(
        engine.top_three_weather_conditions(),
        vec!["Raining", "Fine", "Snowing"]
    );
}

#[test]
fn test_top_weather_tie_break_is_first_seen_order() {
    // Snowing and Fog both have one accident; Snowing appears first
    let engine = AccidentQueryEngine::new(vec![
        test_record("A1", 0.0, 0.0, None, Some("Snowing"), "Leeds"),
        test_record("A2", 0.0, 0.0, None, Some("Fog"), "Leeds"),
        test_record("A3", 0.0, 0.0, None, Some("Raining"), "Leeds"),
        test_record("A4", 0.0, 0.0, None, Some("Raining"), "Leeds"),
    ]);

    assert_eq!(
        engine.top_three_weather_conditions(),
        vec!["Raining", "Snowing", "Fog"]
    );
}

#[test]
fn test_top_weather_fewer_distinct_than_limit() {
    let engine = AccidentQueryEngine::new(vec![
        test_record("A1", 1.0, 1.0, None, Some("Rain"), "Leeds"),
        test_record("A2", 2.0, 2.0, None, Some("Rain"), "Leeds"),
        test_record("A3", 1.0, 1.0, None, Some("Snow"), "Leeds"),
    ]);

    assert_eq!(engine.top_three_weather_conditions(), vec!["Rain", "Snow"]);
}

#[test]
fn test_top_weather_ignores_unrecorded_conditions() {
    let engine = test_engine();

    // A5 has no weather condition and must not contribute a group
    let top = engine.top_weather_conditions(10);
    assert_eq!(top, vec!["Raining", "Snowing", "Fine"]);
}

#[test]
fn test_top_weather_custom_limit() {
    let engine = test_engine();
    assert_eq!(engine.top_weather_conditions(1), vec!["Raining"]);
    assert!(engine.top_weather_conditions(0).is_empty());
}

#[test]
fn test_top_weather_empty_dataset() {
    assert!(empty_engine().top_three_weather_conditions().is_empty());
}

// =============================================================================
// group_accident_ids_by_authority
// =============================================================================

#[test]
fn test_authority_groups() {
    let engine = test_engine();
    let groups = engine.group_accident_ids_by_authority();

    assert_eq!(groups.len(), 3);
    assert_eq!(groups["Leeds"], vec!["A1", "A3", "A5"]);
    assert_eq!(groups["Bradford"], vec!["A2"]);
    assert_eq!(groups["Westminster"], vec!["A4"]);
}

#[test]
fn test_authority_groups_partition_the_dataset() {
    let engine = test_engine();
    let groups = engine.group_accident_ids_by_authority();

    let total: usize = groups.values().map(Vec::len).sum();
    assert_eq!(total, engine.record_count());

    let mut all_ids: Vec<&String> = groups.values().flatten().collect();
    all_ids.sort();
    all_ids.dedup();
    assert_eq!(all_ids.len(), engine.record_count());
}

#[test]
fn test_authority_groups_empty_dataset() {
    assert!(empty_engine().group_accident_ids_by_authority().is_empty());
}
