//! Field parsing utilities for STATS19 records
//!
//! Helper functions for pulling typed values out of a CSV row via the column
//! mapping, normalizing the dataset's missing-value markers to absent.

use super::column_mapping::ColumnMapping;
use crate::app::models::AccidentSeverity;
use crate::constants::{DATE_FORMAT, MISSING_VALUE_MARKERS, TIME_FORMAT};
use crate::{Error, Result};
use chrono::{NaiveDate, NaiveTime};
use csv::StringRecord;

/// Whether a raw field value is one of the dataset's missing-value markers
pub fn is_missing(value: &str) -> bool {
    MISSING_VALUE_MARKERS.contains(&value.trim())
}

/// Get a required field value from a CSV record
pub fn get_required_field<'a>(
    record: &'a StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
) -> Result<&'a str> {
    let index = mapping.index(field_name).ok_or_else(|| {
        Error::data_validation(format!("Required column '{}' not found", field_name))
    })?;

    let value = record.get(index).ok_or_else(|| {
        Error::data_validation(format!("No value for required column '{}'", field_name))
    })?;

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::data_validation(format!(
            "Empty value for required column '{}'",
            field_name
        )));
    }

    Ok(trimmed)
}

/// Get an optional field value from a CSV record
///
/// Returns `None` when the column is absent from the file or the value is a
/// missing-value marker.
pub fn get_optional_field<'a>(
    record: &'a StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
) -> Option<&'a str> {
    mapping
        .index(field_name)
        .and_then(|index| record.get(index))
        .map(str::trim)
        .filter(|value| !is_missing(value))
}

/// Parse a required string field from a CSV record
pub fn parse_required_string(
    record: &StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
) -> Result<String> {
    let value = get_required_field(record, mapping, field_name)?;
    Ok(value.to_string())
}

/// Parse a required f64 field from a CSV record
pub fn parse_required_f64(
    record: &StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
) -> Result<f64> {
    let value = get_required_field(record, mapping, field_name)?;

    value.parse::<f64>().map_err(|e| {
        Error::data_validation(format!(
            "Invalid numeric format for {}: '{}' ({})",
            field_name, value, e
        ))
    })
}

/// Parse an optional string field from a CSV record
pub fn parse_optional_string(
    record: &StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
) -> Option<String> {
    get_optional_field(record, mapping, field_name).map(str::to_string)
}

/// Parse an optional u32 field from a CSV record
pub fn parse_optional_u32(
    record: &StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
) -> Option<u32> {
    get_optional_field(record, mapping, field_name).and_then(|s| s.parse::<u32>().ok())
}

/// Parse an optional STATS19 date field (dd/mm/yyyy) from a CSV record
pub fn parse_optional_date(
    record: &StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
) -> Option<NaiveDate> {
    get_optional_field(record, mapping, field_name)
        .and_then(|s| NaiveDate::parse_from_str(s, DATE_FORMAT).ok())
}

/// Parse an optional STATS19 time field (HH:MM) from a CSV record
pub fn parse_optional_time(
    record: &StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
) -> Option<NaiveTime> {
    get_optional_field(record, mapping, field_name)
        .and_then(|s| NaiveTime::parse_from_str(s, TIME_FORMAT).ok())
}

/// Parse an optional accident severity code from a CSV record
pub fn parse_optional_severity(
    record: &StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
) -> Option<AccidentSeverity> {
    get_optional_field(record, mapping, field_name).and_then(|s| s.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping_and_record(headers: Vec<&str>, values: Vec<&str>) -> (ColumnMapping, StringRecord) {
        let mut all_headers = vec![
            "Accident_Index",
            "Longitude",
            "Latitude",
            "Local_Authority_(District)",
        ];
        all_headers.extend(headers);

        let mut all_values = vec!["A1", "-0.2", "51.5", "Leeds"];
        all_values.extend(values);

        let mapping = ColumnMapping::analyze(&StringRecord::from(all_headers)).unwrap();
        (mapping, StringRecord::from(all_values))
    }

    #[test]
    fn test_is_missing_markers() {
        assert!(is_missing(""));
        assert!(is_missing("  "));
        assert!(is_missing("-1"));
        assert!(is_missing("Unknown"));
        assert!(is_missing("Data missing or out of range"));
        assert!(!is_missing("Dry"));
    }

    #[test]
    fn test_required_field_present_and_trimmed() {
        let (mapping, record) = mapping_and_record(vec![], vec![]);
        assert_eq!(
            get_required_field(&record, &mapping, "Accident_Index").unwrap(),
            "A1"
        );
        assert!((parse_required_f64(&record, &mapping, "Latitude").unwrap() - 51.5).abs() < 1e-9);
    }

    #[test]
    fn test_required_field_invalid_number() {
        let (mapping, record) = mapping_and_record(vec![], vec![]);
        let mut bad = record.clone();
        bad = {
            let mut fields: Vec<&str> = bad.iter().collect();
            fields[1] = "east";
            StringRecord::from(fields)
        };

        assert!(parse_required_f64(&bad, &mapping, "Longitude").is_err());
    }

    #[test]
    fn test_optional_field_missing_markers_normalized() {
        let (mapping, record) = mapping_and_record(
            vec!["Weather_Conditions", "Road_Surface_Conditions"],
            vec!["Unknown", "Wet or damp"],
        );

        assert_eq!(
            parse_optional_string(&record, &mapping, "Weather_Conditions"),
            None
        );
        assert_eq!(
            parse_optional_string(&record, &mapping, "Road_Surface_Conditions"),
            Some("Wet or damp".to_string())
        );
    }

    #[test]
    fn test_optional_field_absent_column() {
        let (mapping, record) = mapping_and_record(vec![], vec![]);
        assert_eq!(
            parse_optional_string(&record, &mapping, "Weather_Conditions"),
            None
        );
    }

    #[test]
    fn test_optional_date_and_time() {
        let (mapping, record) =
            mapping_and_record(vec!["Date", "Time"], vec!["21/01/2009", "17:42"]);

        assert_eq!(
            parse_optional_date(&record, &mapping, "Date"),
            NaiveDate::from_ymd_opt(2009, 1, 21)
        );
        assert_eq!(
            parse_optional_time(&record, &mapping, "Time"),
            NaiveTime::from_hms_opt(17, 42, 0)
        );
    }

    #[test]
    fn test_optional_date_invalid_format() {
        let (mapping, record) = mapping_and_record(vec!["Date"], vec!["2009-01-21"]);
        assert_eq!(parse_optional_date(&record, &mapping, "Date"), None);
    }

    #[test]
    fn test_optional_u32_and_severity() {
        let (mapping, record) = mapping_and_record(
            vec!["Number_of_Vehicles", "Accident_Severity"],
            vec!["2", "1"],
        );

        assert_eq!(
            parse_optional_u32(&record, &mapping, "Number_of_Vehicles"),
            Some(2)
        );
        assert_eq!(
            parse_optional_severity(&record, &mapping, "Accident_Severity"),
            Some(AccidentSeverity::Fatal)
        );
    }
}
