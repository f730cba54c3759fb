//! Single forecast-line decoding

use crate::app::models::{ForecastPeriod, ReportUnits};
use crate::app::services::field_extractor::{
    extract_clouds, extract_period_header, extract_residue_groups, extract_visibility,
    extract_wind,
};
use crate::app::services::metar_decoder::ReportRegion;
use crate::app::services::report_sanitizer::{TokenCursor, sanitize};

/// Decode one forecast line with the TAF-line pipeline variant
///
/// Sky-clear sentinels survive sanitization here: a later period needs them
/// for ceiling inheritance. International lines get the CAVOK
/// short-circuit; the altimeter comes from the QNH residue scan for both
/// dialects.
pub fn decode_period(
    line: &str,
    region: ReportRegion,
    units: &mut ReportUnits,
) -> ForecastPeriod {
    let mut cursor = TokenCursor::from_text(line);
    let extras = sanitize(&mut cursor, false);

    let header = extract_period_header(&mut cursor);
    let wind = extract_wind(&mut cursor, units);

    let cavok = region == ReportRegion::International && cursor.contains("CAVOK");
    let (visibility, clouds) = if cavok {
        let at = cursor.position("CAVOK").unwrap_or_default();
        cursor.remove_at(at);
        (Some("9999".to_string()), Vec::new())
    } else {
        let visibility = extract_visibility(&mut cursor, units);
        let clouds = extract_clouds(&mut cursor);
        (visibility, clouds)
    };

    let (altimeter, icing, turbulence) = extract_residue_groups(&mut cursor);

    ForecastPeriod {
        kind: header.kind,
        probability: None,
        start_time: header.start_time,
        end_time: header.end_time,
        wind_direction: wind.direction,
        wind_speed: wind.speed,
        wind_gust: wind.gust,
        wind_shear: extras.wind_shear,
        visibility,
        altimeter,
        clouds,
        icing,
        turbulence,
        other: cursor.into_tokens(),
        flight_rules: None,
        raw: String::new(),
    }
}
