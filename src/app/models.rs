//! Data models for accident processing
//!
//! This module contains the core data structures for representing UK road
//! accident observations, following the DfT STATS19 accident extract layout.

use crate::{Error, Result};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Accident Severity
// =============================================================================

/// STATS19 accident severity classification
///
/// Encoded numerically in the extracts: 1 = fatal, 2 = serious, 3 = slight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum AccidentSeverity {
    Fatal,
    Serious,
    Slight,
}

impl AccidentSeverity {
    /// The numeric code used in STATS19 extracts
    pub fn code(&self) -> u8 {
        match self {
            Self::Fatal => 1,
            Self::Serious => 2,
            Self::Slight => 3,
        }
    }
}

impl FromStr for AccidentSeverity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1" => Ok(Self::Fatal),
            "2" => Ok(Self::Serious),
            "3" => Ok(Self::Slight),
            other => Err(Error::data_validation(format!(
                "Invalid accident severity code: '{}' (expected 1, 2 or 3)",
                other
            ))),
        }
    }
}

impl fmt::Display for AccidentSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Fatal => "Fatal",
            Self::Serious => "Serious",
            Self::Slight => "Slight",
        };
        write!(f, "{}", label)
    }
}

// =============================================================================
// Accident Record
// =============================================================================

/// A single road accident observation
///
/// Represents one row of a STATS19 accident extract: the accident identity,
/// its location, and the recorded conditions at the time. Categorical fields
/// are `None` when the source row carried one of the dataset's missing-value
/// markers.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AccidentRecord {
    /// Unique accident index within the extract (e.g. "200901BS70001")
    pub accident_id: String,

    /// WGS84 longitude in decimal degrees
    pub longitude: f64,

    /// WGS84 latitude in decimal degrees
    pub latitude: f64,

    /// Date the accident occurred
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    /// Time of day the accident occurred
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,

    /// Severity classification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<AccidentSeverity>,

    /// Number of vehicles involved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_vehicles: Option<u32>,

    /// Number of casualties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_casualties: Option<u32>,

    /// Road surface condition (e.g. "Dry", "Wet or damp")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub road_surface_condition: Option<String>,

    /// Weather condition (e.g. "Fine no high winds")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather_condition: Option<String>,

    /// Light condition (e.g. "Daylight")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light_condition: Option<String>,

    /// District authority responsible for the accident location
    pub district_authority: String,
}

impl AccidentRecord {
    /// Create a new AccidentRecord with validation
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        accident_id: String,
        longitude: f64,
        latitude: f64,
        date: Option<NaiveDate>,
        time: Option<NaiveTime>,
        severity: Option<AccidentSeverity>,
        number_of_vehicles: Option<u32>,
        number_of_casualties: Option<u32>,
        road_surface_condition: Option<String>,
        weather_condition: Option<String>,
        light_condition: Option<String>,
        district_authority: String,
    ) -> Result<Self> {
        let record = Self {
            accident_id,
            longitude,
            latitude,
            date,
            time,
            severity,
            number_of_vehicles,
            number_of_casualties,
            road_surface_condition,
            weather_condition,
            light_condition,
            district_authority,
        };

        record.validate()?;
        Ok(record)
    }

    /// Validate record data for consistency and valid ranges
    ///
    /// Validation happens at load time only; the query engine treats every
    /// record it is handed as already well formed.
    pub fn validate(&self) -> Result<()> {
        if self.accident_id.trim().is_empty() {
            return Err(Error::data_validation(
                "Accident index must not be empty".to_string(),
            ));
        }

        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(Error::data_validation(format!(
                "Invalid latitude {} for accident '{}': must be between -90 and 90 degrees",
                self.latitude, self.accident_id
            )));
        }

        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(Error::data_validation(format!(
                "Invalid longitude {} for accident '{}': must be between -180 and 180 degrees",
                self.longitude, self.accident_id
            )));
        }

        if self.district_authority.trim().is_empty() {
            return Err(Error::data_validation(format!(
                "District authority must not be empty for accident '{}'",
                self.accident_id
            )));
        }

        Ok(())
    }

    /// Whether the record's coordinates fall within the given bounding box,
    /// bounds inclusive on both axes
    ///
    /// NaN coordinates never satisfy the predicate.
    pub fn within_bounds(&self, min_lon: f64, max_lon: f64, min_lat: f64, max_lat: f64) -> bool {
        self.longitude >= min_lon
            && self.longitude <= max_lon
            && self.latitude >= min_lat
            && self.latitude <= max_lat
    }
}
