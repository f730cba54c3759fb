//! Temperature/dewpoint extraction from the back of the token sequence

use crate::app::services::report_sanitizer::cursor::TokenCursor;

/// Split the trailing `T/Td` group into temperature and dewpoint
///
/// Values keep the report's `M`-prefix-as-minus convention ("M05"). A
/// missing half of the group ("24/") is absent, not empty.
pub fn extract_temperature_dewpoint(
    cursor: &mut TokenCursor,
) -> (Option<String>, Option<String>) {
    if !cursor.peek_back().is_some_and(|t| t.contains('/')) {
        return (None, None);
    }

    let group = cursor.take_back().unwrap_or_default();
    let mut parts = group.split('/');
    let temperature = parts.next().filter(|p| !p.is_empty()).map(str::to_string);
    let dewpoint = parts.next().filter(|p| !p.is_empty()).map(str::to_string);

    (temperature, dewpoint)
}
