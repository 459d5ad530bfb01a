//! Individual accident record parsing
//!
//! Converts one CSV row into an [`AccidentRecord`] via the column mapping.

use super::column_mapping::ColumnMapping;
use super::field_parsers::{
    parse_optional_date, parse_optional_severity, parse_optional_string, parse_optional_time,
    parse_optional_u32, parse_required_f64, parse_required_string,
};
use crate::app::models::AccidentRecord;
use crate::constants::columns;
use crate::Result;
use csv::StringRecord;

/// Parse a single accident record from a CSV row
///
/// Required fields (accident index, coordinates, district authority) fail the
/// row when missing or malformed; the remaining fields degrade to absent.
pub fn parse_accident_record(
    record: &StringRecord,
    mapping: &ColumnMapping,
) -> Result<AccidentRecord> {
    let accident_id = parse_required_string(record, mapping, columns::ACCIDENT_INDEX)?;
    let longitude = parse_required_f64(record, mapping, columns::LONGITUDE)?;
    let latitude = parse_required_f64(record, mapping, columns::LATITUDE)?;
    let district_authority = parse_required_string(record, mapping, columns::DISTRICT_AUTHORITY)?;

    AccidentRecord::new(
        accident_id,
        longitude,
        latitude,
        parse_optional_date(record, mapping, columns::DATE),
        parse_optional_time(record, mapping, columns::TIME),
        parse_optional_severity(record, mapping, columns::ACCIDENT_SEVERITY),
        parse_optional_u32(record, mapping, columns::NUMBER_OF_VEHICLES),
        parse_optional_u32(record, mapping, columns::NUMBER_OF_CASUALTIES),
        parse_optional_string(record, mapping, columns::ROAD_SURFACE_CONDITIONS),
        parse_optional_string(record, mapping, columns::WEATHER_CONDITIONS),
        parse_optional_string(record, mapping, columns::LIGHT_CONDITIONS),
        district_authority,
    )
}
