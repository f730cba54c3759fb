//! Surface wind extraction from the front of the token sequence

use crate::app::models::ReportUnits;
use crate::app::services::report_sanitizer::cursor::{TokenCursor, is_all_digits};

/// Wind fields extracted from up to three consecutive tokens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindGroup {
    /// Direction in degrees, or "VRB"
    pub direction: Option<String>,

    /// Sustained speed
    pub speed: Option<String>,

    /// Gust speed
    pub gust: Option<String>,

    /// Variable direction bounds (from, to)
    pub variable: Option<(String, String)>,
}

/// Extract the surface wind group
///
/// The main token is matched against, in order: a KT/KTS-suffixed group, a
/// bare 5-digit group (KT occasionally goes missing), a long gust-bearing
/// group, an MPS group (switching the wind-speed unit), or the
/// slash-separated decimal form. A standalone `Gnn` token and a `dddVddd`
/// variable-direction token are then consumed when present.
pub fn extract_wind(cursor: &mut TokenCursor, units: &mut ReportUnits) -> WindGroup {
    let mut group = WindGroup::default();

    let front = cursor.peek_front().map(str::to_string).unwrap_or_default();
    if front.ends_with("KT")
        || front.ends_with("KTS")
        || (front.len() == 5 && is_all_digits(&front))
        || (front.len() >= 8
            && front.contains('G')
            && !front.contains('/')
            && !front.contains("MPS"))
    {
        let token = cursor.take_front().unwrap_or_default();
        split_wind_token(&token, "KT", &mut group);
    } else if front.ends_with("MPS") {
        units.wind_speed = "m/s".to_string();
        let token = cursor.take_front().unwrap_or_default();
        split_wind_token(&token, "MPS", &mut group);
    } else if front.len() > 5
        && front.as_bytes()[3] == b'/'
        && is_all_digits(&front[..3])
        && is_all_digits(&front[4..6])
    {
        let token = cursor.take_front().unwrap_or_default();
        group.direction = non_empty(&token[..3]);
        if let Some(g) = token.find('G') {
            group.speed = non_empty(if g >= 4 { &token[4..g] } else { "" });
            group.gust = non_empty(&token[g + 1..(g + 3).min(token.len())]);
        } else {
            group.speed = non_empty(&token[4..]);
        }
    }

    // Separated gust: 36010 G20
    if cursor
        .peek_front()
        .is_some_and(|t| t.len() > 1 && t.len() < 4 && t.starts_with('G') && is_all_digits(&t[1..]))
    {
        let token = cursor.take_front().unwrap_or_default();
        group.gust = Some(token[1..].to_string());
    }

    // Variable wind direction: 350V040
    if cursor.peek_front().is_some_and(|t| {
        t.len() == 7 && is_all_digits(&t[..3]) && t.as_bytes()[3] == b'V' && is_all_digits(&t[4..])
    }) {
        let token = cursor.take_front().unwrap_or_default();
        group.variable = Some((token[..3].to_string(), token[4..].to_string()));
    }

    group
}

/// Split a suffixed wind token into direction, speed, and gust
///
/// Direction is the first three characters (covering "VRB"); speed runs
/// from offset 3 to the gust marker or suffix; gust runs from after the
/// marker to the suffix. The suffix may be absent from bare groups.
fn split_wind_token(token: &str, suffix: &str, group: &mut WindGroup) {
    let suffix_at = token.find(suffix).unwrap_or(token.len());
    group.direction = non_empty(&token[..token.len().min(3)]);

    match token.find('G') {
        Some(g) => {
            group.speed = non_empty(if g >= 3 { &token[3..g] } else { "" });
            group.gust = non_empty(if suffix_at > g { &token[g + 1..suffix_at] } else { "" });
        }
        None => {
            group.speed = non_empty(if suffix_at >= 3 && token.len() >= 3 {
                &token[3..suffix_at]
            } else {
                ""
            });
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() { None } else { Some(s.to_string()) }
}
