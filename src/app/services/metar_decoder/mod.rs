//! METAR report decoding
//!
//! Runs remarks splitting, sanitization, and the variant-specific field
//! pipeline over a single report. The region dispatch lives in [`region`];
//! both variant entry points are public for callers that already know their
//! station's dialect.

use tracing::debug;

use crate::app::models::{ParsedMetar, ReportUnits};
use crate::app::services::field_extractor::{
    extract_altimeter_international, extract_altimeter_us, extract_clouds,
    extract_station_and_time, extract_temperature_dewpoint, extract_visibility, extract_wind,
};
use crate::app::services::report_sanitizer::{sanitize, split_remarks};
use crate::constants::MIN_REPORT_LEN;
use crate::{Error, Result};

pub mod region;

#[cfg(test)]
pub mod tests;

pub use region::ReportRegion;

/// Decode a METAR report, dispatching on the station's region
pub fn decode(report: &str) -> Result<ParsedMetar> {
    if report.len() < MIN_REPORT_LEN {
        return Err(Error::report_too_short(report.len()));
    }
    match ReportRegion::for_station(report) {
        Some(ReportRegion::NorthAmerican) => decode_north_american(report),
        Some(ReportRegion::International) => decode_international(report),
        None => Err(Error::unsupported_region(
            report.split(' ').next().unwrap_or(report),
        )),
    }
}

/// Decode a METAR report with the US extraction-step variants
pub fn decode_north_american(report: &str) -> Result<ParsedMetar> {
    let mut units = ReportUnits::north_american();
    let (mut cursor, remarks) = split_remarks(report);
    let extras = sanitize(&mut cursor, true);

    let altimeter = extract_altimeter_us(&mut cursor, &mut units);
    let (temperature, dewpoint) = extract_temperature_dewpoint(&mut cursor);
    let (station, time) = extract_station_and_time(&mut cursor);
    let wind = extract_wind(&mut cursor, &mut units);
    let visibility = extract_visibility(&mut cursor, &mut units);
    let clouds = extract_clouds(&mut cursor);

    debug!("decoded US METAR for station {}", station);
    Ok(ParsedMetar {
        station,
        time,
        wind_direction: wind.direction,
        wind_speed: wind.speed,
        wind_gust: wind.gust,
        wind_variable_direction: wind.variable,
        visibility,
        runway_visibility: extras.runway_visibility,
        wind_shear: extras.wind_shear,
        altimeter,
        temperature,
        dewpoint,
        clouds,
        other: cursor.into_tokens(),
        remarks,
        raw: report.to_string(),
        units,
    })
}

/// Decode a METAR report with the International extraction-step variants
///
/// A CAVOK group short-circuits visibility and clouds: visibility is fixed
/// to 9999 meters and the cloud list is empty.
pub fn decode_international(report: &str) -> Result<ParsedMetar> {
    let mut units = ReportUnits::international();
    let (mut cursor, remarks) = split_remarks(report);
    let extras = sanitize(&mut cursor, true);

    let altimeter = extract_altimeter_international(&mut cursor, &mut units);
    let (temperature, dewpoint) = extract_temperature_dewpoint(&mut cursor);
    let (station, time) = extract_station_and_time(&mut cursor);
    let wind = extract_wind(&mut cursor, &mut units);

    let (visibility, clouds) = if let Some(at) = cursor.position("CAVOK") {
        cursor.remove_at(at);
        (Some("9999".to_string()), Vec::new())
    } else {
        let visibility = extract_visibility(&mut cursor, &mut units);
        let clouds = extract_clouds(&mut cursor);
        (visibility, clouds)
    };

    debug!("decoded International METAR for station {}", station);
    Ok(ParsedMetar {
        station,
        time,
        wind_direction: wind.direction,
        wind_speed: wind.speed,
        wind_gust: wind.gust,
        wind_variable_direction: wind.variable,
        visibility,
        runway_visibility: extras.runway_visibility,
        wind_shear: extras.wind_shear,
        altimeter,
        temperature,
        dewpoint,
        clouds,
        other: cursor.into_tokens(),
        remarks,
        raw: report.to_string(),
        units,
    })
}
