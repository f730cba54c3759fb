//! Test utilities for the field-extraction steps

use crate::app::models::ReportUnits;
use crate::app::services::report_sanitizer::TokenCursor;

mod period_tests;
mod wind_tests;

/// Helper to build a cursor from a space-separated body
pub fn cursor_of(body: &str) -> TokenCursor {
    TokenCursor::from_text(body)
}

/// Helper for steps that need a units value to update
pub fn us_units() -> ReportUnits {
    ReportUnits::north_american()
}

/// Helper to read the surviving tokens as plain strings
pub fn tokens_of(cursor: &TokenCursor) -> Vec<&str> {
    cursor.tokens().iter().map(String::as_str).collect()
}
