//! TAF forecast decoding
//!
//! Assembles a multi-line forecast bulletin: strips the header qualifiers,
//! recovers the station and issue time, splits the text into per-period
//! lines on the caller-supplied delimiter, decodes each line with the field
//! pipeline, then runs the cross-line inference passes (missing end times,
//! inherited visibility/ceiling, flight rules).

use std::collections::VecDeque;

use tracing::debug;

use crate::app::models::{ForecastPeriod, ParsedTaf, ReportUnits};
use crate::app::services::field_extractor::extract_station_and_time;
use crate::app::services::metar_decoder::ReportRegion;
use crate::app::services::report_sanitizer::{TokenCursor, find_first_of};
use crate::constants::{
    MIN_REPORT_LEN, TAF_HEADER_PREFIXES, TAF_NEW_PERIOD_STARTS, TAF_REMARK_STARTS,
};
use crate::{Error, Result};

pub mod inference;
pub mod line_repair;
pub mod period;

#[cfg(test)]
pub mod tests;

pub use inference::{apply_flight_rules, fill_missing_end_times};
pub use line_repair::repair_line;
pub use period::decode_period;

/// Decode a TAF bulletin
///
/// `line_delimiter` is whatever divider the report source places between
/// forecast lines (a newline, an HTML break, ...).
pub fn decode(report: &str, line_delimiter: &str) -> Result<ParsedTaf> {
    if report.len() < MIN_REPORT_LEN {
        return Err(Error::report_too_short(report.len()));
    }

    let mut text = report;
    while text.len() > 3 && TAF_HEADER_PREFIXES.iter().any(|p| text.starts_with(p)) {
        text = &text[4..];
    }

    let head_text: String = text.chars().take(20).collect();
    let mut head = TokenCursor::from_text(&head_text);
    let (station, time) = extract_station_and_time(&mut head);
    let region = ReportRegion::for_station(&station)
        .ok_or_else(|| Error::unsupported_region(station.clone()))?;
    let mut units = match region {
        ReportRegion::NorthAmerican => ReportUnits::north_american(),
        ReportRegion::International => ReportUnits::international(),
    };

    let mut text = text.replacen(&station, "", 1);
    if let Some(time) = &time {
        text = text.replacen(time.as_str(), "", 1);
    }

    let mut remarks = String::new();
    let mut periods: Vec<ForecastPeriod> = Vec::new();
    let mut probability: Option<String> = None;
    let mut queue: VecDeque<String> = text
        .trim_matches(' ')
        .split(line_delimiter)
        .map(str::to_string)
        .collect();

    while let Some(line) = queue.pop_front() {
        let mut line = repair_line(line.trim_matches(' '));

        // Trailing remarks never belong to the period itself
        if let Some(at) = find_first_of(&line, TAF_REMARK_STARTS) {
            remarks = line[at..].to_string();
            line.truncate(at);
            line = line.trim_matches(' ').to_string();
        }
        // A second period signifier mid-line means the source dropped a
        // line break; the remainder goes back on the queue front
        if let Some(at) = find_first_of(&line, TAF_NEW_PERIOD_STARTS) {
            debug!("splitting embedded forecast period out of line");
            queue.push_front(line[at + 1..].to_string());
            line.truncate(at);
        }
        // A bare PROB line qualifies the next real period
        if line.len() == 6 && line.starts_with("PROB") {
            probability = Some(line);
            continue;
        }
        if line.is_empty() {
            continue;
        }

        let raw_line = line.clone();
        let mut period = decode_period(&line, region, &mut units);
        period.probability = probability.take();
        period.raw = raw_line;
        periods.push(period);
    }

    let mut max_temp = None;
    let mut min_temp = None;
    let mut temperature_groups = Vec::new();
    let mut altimeter_groups = Vec::new();
    if !periods.is_empty() {
        let last = periods.len() - 1;
        (max_temp, min_temp) = inference::recover_temp_extremes(&mut periods[last].other);
        if max_temp.is_none() && min_temp.is_none() {
            (max_temp, min_temp) = inference::recover_temp_extremes(&mut periods[0].other);
        }
        fill_missing_end_times(&mut periods);
        apply_flight_rules(&mut periods);
        if station.starts_with('A') {
            (temperature_groups, altimeter_groups) =
                inference::recover_oceania_groups(&mut periods[last].other);
        }
    }

    Ok(ParsedTaf {
        station,
        time,
        remarks,
        max_temp,
        min_temp,
        forecast: periods,
        temperature_groups,
        altimeter_groups,
        raw: report.to_string(),
        units,
    })
}
