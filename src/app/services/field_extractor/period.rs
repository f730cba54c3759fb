//! TAF-line period header and residue-group extraction

use crate::app::models::PeriodKind;
use crate::app::services::report_sanitizer::cursor::{TokenCursor, is_all_digits};

/// Period qualifier and validity times taken from the front of a TAF line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodHeader {
    pub kind: PeriodKind,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

/// Extract the period type and start/end time groups
///
/// The type keyword (TEMPO/BECMG/INTER or a 6-character PROB tag) is
/// consumed first when present, defaulting to BASE. The time group is one
/// of `HHHH/HHHH`, `FMHHHH/HHHH`, or `FMHHHHHH[Z]` (start only, first four
/// digits); an `FM` form makes this a FROM period. A following `TLHHHHHH`
/// token supplies the end time for the start-only form.
pub fn extract_period_header(cursor: &mut TokenCursor) -> PeriodHeader {
    let mut header = PeriodHeader {
        kind: PeriodKind::Base,
        start_time: None,
        end_time: None,
    };

    let keyword = cursor.peek_front().map(str::to_string).unwrap_or_default();
    match keyword.as_str() {
        "TEMPO" => {
            header.kind = PeriodKind::Tempo;
            cursor.take_front();
        }
        "BECMG" => {
            header.kind = PeriodKind::Becmg;
            cursor.take_front();
        }
        "INTER" => {
            header.kind = PeriodKind::Inter;
            cursor.take_front();
        }
        t if t.len() == 6 && t.starts_with("PROB") => {
            header.kind = PeriodKind::Prob(cursor.take_front().unwrap_or_default());
        }
        _ => {}
    }

    let front = cursor.peek_front().map(str::to_string).unwrap_or_default();
    if front.len() == 9
        && front.as_bytes()[4] == b'/'
        && is_all_digits(&front[..4])
        && is_all_digits(&front[5..])
    {
        // 1200/1306
        let token = cursor.take_front().unwrap_or_default();
        header.start_time = Some(token[..4].to_string());
        header.end_time = Some(token[5..].to_string());
    } else if front.len() > 7 && front.starts_with("FM") {
        header.kind = PeriodKind::From;
        let body = &front[2..];
        if let Some((start, end)) = body.split_once('/')
            && is_all_digits(start)
            && is_all_digits(end)
        {
            // FM1200/1306
            header.start_time = Some(start.to_string());
            header.end_time = Some(end.to_string());
            cursor.take_front();
        } else if is_all_digits(&front[2..8]) {
            // FM120000
            let token = cursor.take_front().unwrap_or_default();
            header.start_time = Some(token[2..6].to_string());
        }
        // TL120600
        if cursor
            .peek_front()
            .is_some_and(|t| t.len() > 7 && t.starts_with("TL") && is_all_digits(&t[2..8]))
        {
            let token = cursor.take_front().unwrap_or_default();
            header.end_time = Some(token[2..6].to_string());
        }
    }

    header
}

/// Scan a decoded TAF line's leftovers for the QNH altimeter and the
/// icing/turbulence layer groups
///
/// Purely numeric tokens beginning with 6 are icing groups, with 5
/// turbulence groups; both lists come back in report order.
pub fn extract_residue_groups(
    cursor: &mut TokenCursor,
) -> (Option<String>, Vec<String>, Vec<String>) {
    let mut altimeter = None;
    let mut icing = Vec::new();
    let mut turbulence = Vec::new();

    let mut i = cursor.len();
    while i > 0 {
        i -= 1;
        let token = cursor.get(i).unwrap_or_default();
        if token.len() > 6 && token.starts_with("QNH") && is_all_digits(&token[3..7]) {
            altimeter = Some(cursor.remove_at(i)[3..7].to_string());
        } else if is_all_digits(token) {
            if token.starts_with('6') {
                icing.push(cursor.remove_at(i));
            } else if token.starts_with('5') {
                turbulence.push(cursor.remove_at(i));
            }
        }
    }

    icing.reverse();
    turbulence.reverse();
    (altimeter, icing, turbulence)
}
