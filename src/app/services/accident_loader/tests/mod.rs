//! Tests for the accident extract loader


use crate::config::Config;
use std::path::PathBuf;

/// Loader configuration for in-memory reader tests (no progress output)
pub fn test_config() -> Config {
    let mut config = Config::new(PathBuf::from("unused.csv"));
    config.show_progress = false;
    config
}

/// A small well-formed extract covering every parsed column
pub const SAMPLE_EXTRACT: &str = "\
Accident_Index,Longitude,Latitude,Date,Time,Accident_Severity,Number_of_Vehicles,Number_of_Casualties,Local_Authority_(District),Road_Surface_Conditions,Weather_Conditions,Light_Conditions
200901BS70001,-0.2011,51.5124,21/01/2009,17:42,3,2,1,Kensington and Chelsea,Dry,Fine no high winds,Daylight
200901BS70002,-0.1995,51.5135,22/01/2009,09:10,2,1,1,Kensington and Chelsea,Wet or damp,Raining no high winds,Daylight
200901LE00123,-1.5491,53.7997,23/01/2009,23:05,1,3,2,Leeds,Wet or damp,Unknown,Darkness - lights lit
";
