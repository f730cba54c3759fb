//! Altimeter extraction from the back of the token sequence

use crate::app::models::ReportUnits;
use crate::app::services::report_sanitizer::cursor::{TokenCursor, is_all_digits};

/// Extract the altimeter group from a US-dialect report
///
/// Accepts an `A`- or `Q`-prefixed last token, or a bare 4-digit value. A
/// `Q` group wins over a preceding `A` group and switches the altimeter
/// unit to hPa. Some stations report both conventions; the duplicate left
/// behind after extraction is discarded.
pub fn extract_altimeter_us(cursor: &mut TokenCursor, units: &mut ReportUnits) -> Option<String> {
    let mut altimeter = None;

    if cursor.peek_back().is_some_and(|t| t.starts_with('A')) {
        altimeter = cursor.take_back();
    }
    if cursor.peek_back().is_some_and(|t| t.starts_with('Q')) {
        units.altimeter = "hPa".to_string();
        altimeter = cursor.take_back();
    } else if cursor
        .peek_back()
        .is_some_and(|t| t.len() == 4 && is_all_digits(t))
    {
        altimeter = cursor.take_back();
    }
    discard_duplicate(cursor);

    altimeter
}

/// Extract the altimeter group from an International-dialect report
///
/// Only `A`- or `Q`-prefixed tokens qualify; bare 4-digit values are never
/// an altimeter here. An `A` group wins over a preceding `Q` group and
/// switches the altimeter unit to inHg.
pub fn extract_altimeter_international(
    cursor: &mut TokenCursor,
    units: &mut ReportUnits,
) -> Option<String> {
    let mut altimeter = None;

    if cursor.peek_back().is_some_and(|t| t.starts_with('Q')) {
        altimeter = cursor.take_back();
    }
    if cursor.peek_back().is_some_and(|t| t.starts_with('A')) {
        units.altimeter = "inHg".to_string();
        altimeter = cursor.take_back();
    }
    discard_duplicate(cursor);

    altimeter
}

fn discard_duplicate(cursor: &mut TokenCursor) {
    if cursor
        .peek_back()
        .is_some_and(|t| t.starts_with('A') || t.starts_with('Q'))
    {
        cursor.take_back();
    }
}
