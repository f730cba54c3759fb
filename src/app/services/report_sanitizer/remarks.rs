//! Body/remarks splitting on the raw report text
//!
//! Remarks must be separated before tokenization: everything from RMK (or a
//! trend group, color-state code, or the first altimeter-like group) to the
//! end of the report is supplemental text, not body tokens.

use super::cursor::{TokenCursor, is_all_digits};
use crate::constants::{ALTIMETER_SIGNATURES, METAR_REMARK_STARTS};

/// Index of the earliest occurrence of any marker in `text`
pub fn find_first_of(text: &str, markers: &[&str]) -> Option<usize> {
    markers.iter().filter_map(|m| text.find(m)).min()
}

/// Split a raw METAR body into its tokenized body and remarks text
///
/// Two cut points are evaluated: the earliest altimeter-like group
/// (" A2xxx", " Q1xxx", ...) and the earliest remark-start marker. The
/// earlier one wins; the altimeter cut keeps the altimeter group itself in
/// the body. When neither is found the whole string is body.
pub fn split_remarks(raw: &str) -> (TokenCursor, String) {
    let text = raw.replace('?', "");
    let text = text.trim_matches(' ');

    let alt_index = ALTIMETER_SIGNATURES
        .iter()
        .filter_map(|sig| {
            let index = text.find(sig)?;
            // Marker char + altimeter digit sit at offsets 1..2; the group
            // needs three more digits and at least one following character.
            if index + 6 < text.len()
                && text.get(index + 2..index + 6).is_some_and(is_all_digits)
            {
                Some(index)
            } else {
                None
            }
        })
        .min();
    let sig_index = find_first_of(text, METAR_REMARK_STARTS);

    let (body, remarks) = match (alt_index, sig_index) {
        (Some(alt), sig) if sig.is_none_or(|s| alt < s) => {
            let rest = &text[alt + 6..];
            (&text[..alt + 6], rest.strip_prefix(' ').unwrap_or(rest).to_string())
        }
        (_, Some(sig)) => (&text[..sig], text[sig + 1..].to_string()),
        _ => (text, String::new()),
    };

    (TokenCursor::from_text(body.trim_matches(' ')), remarks)
}
