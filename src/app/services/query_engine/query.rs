//! Query operations over the accident dataset
//!
//! This module implements the analytical queries: lookup by accident index,
//! bounding-box filtering, grouping/counting by categorical fields, weather
//! condition ranking, and whole-dataset statistics.

use super::AccidentQueryEngine;
use crate::app::models::AccidentRecord;
use crate::constants::DEFAULT_TOP_WEATHER_LIMIT;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

impl AccidentQueryEngine {
    /// Find an accident by its accident index
    ///
    /// Performs a linear scan in sequence order and returns the first record
    /// whose index matches exactly (case-sensitive). Absence is a normal
    /// outcome, not an error.
    pub fn find_by_id(&self, id: &str) -> Option<&AccidentRecord> {
        self.records
            .iter()
            .find(|record| record.accident_id == id)
    }

    /// Find all accidents within a geographic bounding box
    ///
    /// Returns every record whose longitude lies in `[min_lon, max_lon]` and
    /// whose latitude lies in `[min_lat, max_lat]`, both bounds inclusive, in
    /// their original extract order.
    ///
    /// Inverted bounds (`min > max`) match nothing and yield an empty result
    /// rather than an error. Records with NaN coordinates never match.
    ///
    /// # Arguments
    /// * `min_lon` - Western boundary (minimum longitude)
    /// * `max_lon` - Eastern boundary (maximum longitude)
    /// * `min_lat` - Southern boundary (minimum latitude)
    /// * `max_lat` - Northern boundary (maximum latitude)
    pub fn find_by_bounding_box(
        &self,
        min_lon: f64,
        max_lon: f64,
        min_lat: f64,
        max_lat: f64,
    ) -> Vec<&AccidentRecord> {
        self.records
            .iter()
            .filter(|record| record.within_bounds(min_lon, max_lon, min_lat, max_lat))
            .collect()
    }

    /// Count accidents by road surface condition
    ///
    /// Groups all records by their exact surface condition value, with absent
    /// (`None`) as its own group key, and returns the count per distinct
    /// value. Every record is counted exactly once, so the counts sum to the
    /// total record count. Iteration order of the returned map is
    /// unspecified.
    pub fn count_by_surface_condition(&self) -> HashMap<Option<String>, u64> {
        let mut counts = HashMap::new();

        for record in &self.records {
            *counts
                .entry(record.road_surface_condition.clone())
                .or_insert(0) += 1;
        }

        counts
    }

    /// The three weather conditions with the most accidents
    ///
    /// See [`top_weather_conditions`](Self::top_weather_conditions).
    pub fn top_three_weather_conditions(&self) -> Vec<String> {
        self.top_weather_conditions(DEFAULT_TOP_WEATHER_LIMIT)
    }

    /// The weather conditions with the most accidents, largest group first
    ///
    /// Groups records by weather condition, ranks the groups by size
    /// descending, and returns up to `limit` condition values. When two
    /// groups are the same size, the condition seen earlier in the dataset
    /// ranks first, so the result is deterministic for a given record order.
    ///
    /// Records without a recorded weather condition are excluded from the
    /// ranking. If fewer than `limit` distinct conditions exist, all of them
    /// are returned; an empty dataset yields an empty result.
    pub fn top_weather_conditions(&self, limit: usize) -> Vec<String> {
        let mut group_index: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<(&str, u64)> = Vec::new();

        // Accumulate groups in first-seen order so the stable sort below
        // keeps that order for equal-sized groups.
        for record in &self.records {
            if let Some(condition) = record.weather_condition.as_deref() {
                match group_index.get(condition) {
                    Some(&index) => groups[index].1 += 1,
                    None => {
                        group_index.insert(condition, groups.len());
                        groups.push((condition, 1));
                    }
                }
            }
        }

        groups.sort_by(|a, b| b.1.cmp(&a.1));

        groups
            .into_iter()
            .take(limit)
            .map(|(condition, _)| condition.to_string())
            .collect()
    }

    /// Group accident indices by district authority
    ///
    /// Returns a map from each distinct district authority to the accident
    /// indices recorded under it, in their original extract order. Every
    /// accident index appears in exactly one group, so the group sizes sum
    /// to the total record count.
    pub fn group_accident_ids_by_authority(&self) -> HashMap<String, Vec<String>> {
        let mut groups: HashMap<String, Vec<String>> = HashMap::new();

        for record in &self.records {
            groups
                .entry(record.district_authority.clone())
                .or_default()
                .push(record.accident_id.clone());
        }

        groups
    }

    /// Basic statistics about the loaded dataset
    pub fn statistics(&self) -> DatasetStatistics {
        let mut authorities = HashSet::new();
        let mut weather_conditions = HashSet::new();
        let mut surface_conditions = HashSet::new();
        let mut bounds: Option<GeographicBounds> = None;

        for record in &self.records {
            authorities.insert(record.district_authority.as_str());
            if let Some(condition) = record.weather_condition.as_deref() {
                weather_conditions.insert(condition);
            }
            if let Some(condition) = record.road_surface_condition.as_deref() {
                surface_conditions.insert(condition);
            }

            // Bounds only cover records with finite coordinates
            if record.longitude.is_finite() && record.latitude.is_finite() {
                bounds = Some(match bounds {
                    None => GeographicBounds {
                        min_lon: record.longitude,
                        max_lon: record.longitude,
                        min_lat: record.latitude,
                        max_lat: record.latitude,
                    },
                    Some(current) => GeographicBounds {
                        min_lon: current.min_lon.min(record.longitude),
                        max_lon: current.max_lon.max(record.longitude),
                        min_lat: current.min_lat.min(record.latitude),
                        max_lat: current.max_lat.max(record.latitude),
                    },
                });
            }
        }

        DatasetStatistics {
            total_records: self.records.len(),
            distinct_authorities: authorities.len(),
            distinct_weather_conditions: weather_conditions.len(),
            distinct_surface_conditions: surface_conditions.len(),
            geographic_bounds: bounds,
        }
    }
}

/// Geographic extent of the records in a dataset
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeographicBounds {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

/// Basic statistics about a loaded dataset
#[derive(Debug, Clone, Serialize)]
pub struct DatasetStatistics {
    /// Total number of accident records
    pub total_records: usize,

    /// Number of distinct district authorities
    pub distinct_authorities: usize,

    /// Number of distinct recorded weather conditions
    pub distinct_weather_conditions: usize,

    /// Number of distinct recorded surface conditions
    pub distinct_surface_conditions: usize,

    /// Bounding box of all records with finite coordinates, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geographic_bounds: Option<GeographicBounds>,
}
