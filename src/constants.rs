//! Application constants for the accident processor
//!
//! This module contains the STATS19 column names, missing-value markers,
//! and default values used throughout the application.

// =============================================================================
// STATS19 Column Names
// =============================================================================

/// Column names as they appear in DfT STATS19 accident CSV extracts.
///
/// Column lookup is by header name rather than position, so extracts with
/// reordered or additional columns parse without changes here.
pub mod columns {
    /// Unique accident index (e.g. "200901BS70001")
    pub const ACCIDENT_INDEX: &str = "Accident_Index";

    /// WGS84 longitude in decimal degrees
    pub const LONGITUDE: &str = "Longitude";

    /// WGS84 latitude in decimal degrees
    pub const LATITUDE: &str = "Latitude";

    /// Accident date in dd/mm/yyyy format
    pub const DATE: &str = "Date";

    /// Accident time in HH:MM format
    pub const TIME: &str = "Time";

    /// Severity code: 1 = fatal, 2 = serious, 3 = slight
    pub const ACCIDENT_SEVERITY: &str = "Accident_Severity";

    /// Number of vehicles involved
    pub const NUMBER_OF_VEHICLES: &str = "Number_of_Vehicles";

    /// Number of casualties
    pub const NUMBER_OF_CASUALTIES: &str = "Number_of_Casualties";

    /// District authority responsible for the accident location
    pub const DISTRICT_AUTHORITY: &str = "Local_Authority_(District)";

    /// Road surface condition (e.g. "Dry", "Wet or damp")
    pub const ROAD_SURFACE_CONDITIONS: &str = "Road_Surface_Conditions";

    /// Weather condition (e.g. "Fine no high winds", "Raining no high winds")
    pub const WEATHER_CONDITIONS: &str = "Weather_Conditions";

    /// Light condition (e.g. "Daylight", "Darkness - lights lit")
    pub const LIGHT_CONDITIONS: &str = "Light_Conditions";
}

/// Columns that must be present in the header for a file to load at all.
///
/// The remaining columns are optional: a record without them still carries
/// enough information for lookup and location queries.
pub const REQUIRED_COLUMNS: &[&str] = &[
    columns::ACCIDENT_INDEX,
    columns::LONGITUDE,
    columns::LATITUDE,
    columns::DISTRICT_AUTHORITY,
];

// =============================================================================
// Missing-Value Markers
// =============================================================================

/// Field values the STATS19 extracts use to mean "not recorded".
///
/// Fields matching one of these markers (after trimming) are normalized to
/// absent rather than kept as a categorical value of their own.
pub const MISSING_VALUE_MARKERS: &[&str] = &["", "-1", "Unknown", "Data missing or out of range"];

/// STATS19 date format (e.g. "21/01/2009")
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// STATS19 time format (e.g. "17:42")
pub const TIME_FORMAT: &str = "%H:%M";

// =============================================================================
// Defaults
// =============================================================================

/// Default number of weather conditions reported by the ranking queries
pub const DEFAULT_TOP_WEATHER_LIMIT: usize = 3;

/// Default CSV field delimiter
pub const DEFAULT_DELIMITER: u8 = b',';

/// Rows between progress spinner updates while loading
pub const PROGRESS_UPDATE_INTERVAL: u64 = 5_000;
