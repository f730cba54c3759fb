//! Prevailing visibility extraction from the front of the token sequence

use tracing::debug;

use crate::app::models::ReportUnits;
use crate::app::services::report_sanitizer::cursor::{TokenCursor, is_all_digits};

/// Extract the prevailing visibility
///
/// Recognized forms, in order: a statute-mile token (`10SM`, `P6SM`,
/// `M1/4SM`, `1/2SM`), a bare 4-digit meters value, a 5-character meters
/// value with a trailing `M`, and the split two-token fraction
/// (`2 1/2SM`), which is combined into a single improper fraction. The
/// visibility unit is set to meters for 4-digit results and statute miles
/// otherwise.
pub fn extract_visibility(cursor: &mut TokenCursor, units: &mut ReportUnits) -> Option<String> {
    let front = cursor.peek_front().map(str::to_string).unwrap_or_default();
    let mut visibility = None;

    if let Some(sm_at) = front.find("SM") {
        // Reported in statute miles
        visibility = Some(match front.as_str() {
            "P6SM" => "P6".to_string(),
            "M1/4SM" => "M1/4".to_string(),
            _ if !front.contains('/') => match front[..sm_at].parse::<i64>() {
                // Integer parse fixes zero-padded values: 01SM
                Ok(value) => value.to_string(),
                Err(_) => {
                    debug!("keeping unparseable visibility '{}' as-is", front);
                    front[..sm_at].to_string()
                }
            },
            _ => front[..sm_at].to_string(),
        });
        cursor.take_front();
    } else if front.len() == 4 && is_all_digits(&front) {
        // Reported in meters
        visibility = cursor.take_front();
    } else if front.len() == 5 && is_all_digits(&front[..4]) && front.ends_with('M') {
        visibility = cursor.take_front().map(|t| t[..4].to_string());
    } else if let Some(combined) = split_fraction(cursor, &front) {
        // Statute miles split across two tokens
        visibility = Some(combined);
    }

    units.visibility = match &visibility {
        Some(v) if v.len() == 4 && is_all_digits(v) => "m".to_string(),
        _ => "sm".to_string(),
    };
    visibility
}

/// Combine a `N N/DSM` two-token visibility into one improper fraction
fn split_fraction(cursor: &mut TokenCursor, front: &str) -> Option<String> {
    if cursor.len() < 2 || !is_all_digits(front) {
        return None;
    }
    let second = cursor.get(1)?;
    let sm_at = second.find("SM")?;
    let fraction = second[..sm_at].as_bytes();
    // Only the single-digit N/D shape is combinable
    if fraction.len() != 3
        || !fraction[0].is_ascii_digit()
        || fraction[1] != b'/'
        || !fraction[2].is_ascii_digit()
    {
        return None;
    }

    let whole: i64 = front.parse().ok()?;
    let numerator = i64::from(fraction[0] - b'0');
    let denominator = i64::from(fraction[2] - b'0');
    cursor.take_front();
    cursor.take_front();
    Some(format!("{}/{}", whole * denominator + numerator, denominator))
}
