//! Single-pass token cleaning for report bodies
//!
//! Source systems routinely split one token into two, join two into one, or
//! inject spurious tokens. The sanitize pass repairs the recognizable cases
//! and extracts the two elements (runway visibility, wind shear) whose
//! position in a report is non-standard.

use tracing::debug;

use super::cursor::{TokenCursor, is_all_digits};
use crate::constants::{CLOUD_TYPES, SKY_CLEAR_TOKENS, SPURIOUS_TOKENS};

/// Elements recognized and removed during sanitization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SanitizedExtras {
    /// Runway visibility token (e.g. "R06/1200FT"), if present
    pub runway_visibility: Option<String>,

    /// Wind shear token with any KT suffix stripped (e.g. "WS020/07040")
    pub wind_shear: Option<String>,
}

/// Run the sanitize pass over a tokenized report body
///
/// Tokens are visited rightmost-first so removals and insertions never
/// disturb tokens that have not been processed yet. At most one rule fires
/// per token. `strip_sky_clear` is set for METAR bodies and cleared for TAF
/// lines, where CLR/SKC must survive for cross-line inference.
pub fn sanitize(cursor: &mut TokenCursor, strip_sky_clear: bool) -> SanitizedExtras {
    let mut extras = SanitizedExtras::default();

    let mut i = cursor.len();
    while i > 0 {
        i -= 1;
        let token = cursor.get(i).map(str::to_string).unwrap_or_default();
        let bytes = token.as_bytes();

        // Tokens consisting only of '/' characters carry nothing
        if token.trim_matches('/').is_empty() {
            cursor.remove_at(i);
        }
        // Runway visibility: R<dd>[LCR]/<value>
        else if token.len() > 4
            && bytes[0] == b'R'
            && (bytes[3] == b'/' || bytes[4] == b'/')
            && bytes[1].is_ascii_digit()
            && bytes[2].is_ascii_digit()
        {
            extras.runway_visibility = Some(cursor.remove_at(i));
        }
        // Recent-weather qualifier tokens: REVCTS, RERA
        else if (token.len() == 4 || token.len() == 6) && token.starts_with("RE") {
            cursor.remove_at(i);
        }
        // Erroneous space between two halves of one token
        else if i != 0 && tokens_should_join(cursor.get(i - 1).unwrap_or(""), &token) {
            let merged = format!("{}{}", cursor.get(i - 1).unwrap_or(""), token);
            debug!("merging split tokens into '{}'", merged);
            cursor.replace(i - 1, merged);
            cursor.remove_at(i);
        }
        // Known spurious standalone tokens
        else if SPURIOUS_TOKENS.contains(&token.as_str()) {
            cursor.remove_at(i);
        }
        // Sky-clear sentinels, METAR only
        else if strip_sky_clear && SKY_CLEAR_TOKENS.contains(&token.as_str()) {
            cursor.remove_at(i);
        }
        // Amendment signifiers: CCA, CCB, ...
        else if token.len() == 3 && token.starts_with("CC") && bytes[2].is_ascii_alphabetic() {
            cursor.remove_at(i);
        }
        // Wind shear: WS<height>/<wind>
        else if token.len() > 6 && token.starts_with("WS") && token.contains('/') {
            extras.wind_shear = Some(cursor.remove_at(i).replace("KT", ""));
        }
        // Scrambled P6SM: TP6SM, 6PSM, P6MS -> P6SM
        else if token.len() > 3 && is_p6sm_permutation(&token[token.len() - 4..]) {
            debug!("rewriting scrambled visibility '{}' to P6SM", token);
            cursor.replace(i, "P6SM".to_string());
        }
        // Joined max/min temperature group: TX28/1718ZTN17/1806Z
        else if token.len() > 16 && token.split('/').count() == 3 {
            if let Some(at) = joined_extreme_split_point(&token) {
                let (first, second) = token.split_at(at);
                cursor.replace(i, second.to_string());
                cursor.insert(i + 1, first.to_string());
            }
        }
    }

    extras
}

/// Return true if a space should not exist between two adjacent tokens
///
/// This list of fixes grew large enough in practice to need its own
/// function.
fn tokens_should_join(s1: &str, s2: &str) -> bool {
    if is_all_digits(s1) {
        // 10 SM
        if s2 == "SM" {
            return true;
        }
        // 12 /10
        if s2.len() > 2 && s2.starts_with('/') && s1.len() > 1 {
            return true;
        }
    }
    if is_all_digits(s2) {
        // OVC 040
        if CLOUD_TYPES.contains(&s1) {
            return true;
        }
        // 12/ 10
        if s1.len() > 2 && s1.ends_with('/') && is_all_digits(&s1[..s1.len() - 1]) {
            return true;
        }
    }
    // 36010G20 KT
    if s2 == "KT" && (leading_digits(s1, 5) || vrb_wind_prefix(s1)) {
        return true;
    }
    // 36010K T
    if s2 == "T"
        && s1.len() == 6
        && s1.ends_with('K')
        && (is_all_digits(&s1[..5]) || vrb_wind_prefix(s1))
    {
        return true;
    }
    // FM 122400
    if (s1 == "FM" || s1 == "TL")
        && (is_all_digits(s2) || (s2.ends_with('Z') && is_all_digits(&s2[..s2.len() - 1])))
    {
        return true;
    }
    // TX 20/10
    if (s1 == "TX" || s1 == "TN") && s2.contains('/') {
        return true;
    }
    false
}

/// True if the first `n` characters (or the whole token, when shorter) are
/// all digits
fn leading_digits(s: &str, n: usize) -> bool {
    let bytes = s.as_bytes();
    !bytes.is_empty() && bytes.iter().take(n).all(u8::is_ascii_digit)
}

/// True for VRB-prefixed wind bodies: VRB03...
fn vrb_wind_prefix(s: &str) -> bool {
    s.len() > 3
        && s.starts_with("VRB")
        && s.as_bytes()[3..s.len().min(5)]
            .iter()
            .all(u8::is_ascii_digit)
}

/// True if the four characters are a permutation of "P6SM"
fn is_p6sm_permutation(tail: &str) -> bool {
    let mut chars: Vec<u8> = tail.bytes().collect();
    chars.sort_unstable();
    chars == b"6MPS"
}

/// Offset of the second extreme inside a joined TX/TN group, if this token
/// is one
fn joined_extreme_split_point(token: &str) -> Option<usize> {
    if token.starts_with("TX") {
        token.find("TN")
    } else if token.starts_with("TN") {
        token.find("TX")
    } else {
        None
    }
}
