//! Station identifier and observation-time extraction

use crate::app::services::report_sanitizer::cursor::{TokenCursor, is_all_digits};

/// Pop the station identifier and, when present, the time group from the
/// front of the token sequence
///
/// The time group is either the 7-character `DDHHMMZ` form or a bare
/// 6-digit token; anything else stays for later steps.
pub fn extract_station_and_time(cursor: &mut TokenCursor) -> (String, Option<String>) {
    let station = cursor.take_front().unwrap_or_default();

    let is_time = cursor.peek_front().is_some_and(|t| {
        (t.len() == 7 && t.ends_with('Z') && is_all_digits(&t[..6]))
            || (t.len() == 6 && is_all_digits(t))
    });
    let time = if is_time { cursor.take_front() } else { None };

    (station, time)
}
