//! Cloud layer extraction by scanning the remaining tokens

use crate::app::models::CloudLayer;
use crate::app::services::report_sanitizer::cursor::TokenCursor;
use crate::constants::CLOUD_TYPES;

/// Scan for cloud-layer tokens and split each into its segments
///
/// Tokens with a FEW/SCT/BKN/OVC prefix or a VV prefix are removed from the
/// cursor wherever they sit; the returned layers keep the report's
/// left-to-right order.
pub fn extract_clouds(cursor: &mut TokenCursor) -> Vec<CloudLayer> {
    let mut clouds = Vec::new();

    let mut i = cursor.len();
    while i > 0 {
        i -= 1;
        let token = cursor.get(i).unwrap_or_default();
        if CLOUD_TYPES.contains(&&token[..token.len().min(3)]) {
            let token = cursor.remove_at(i);
            clouds.push(split_cloud(&token, false));
        } else if token.starts_with("VV") {
            let token = cursor.remove_at(i);
            clouds.push(split_cloud(&token, true));
        }
    }

    clouds.reverse();
    clouds
}

/// Split a cloud token into `[type, height(, modifier)]` segments
pub fn split_cloud(token: &str, begins_with_vv: bool) -> CloudLayer {
    let repaired = repair_cloud(token);
    let mut segments = Vec::new();
    let mut rest = repaired.as_str();

    if begins_with_vv {
        let at = rest.len().min(2);
        segments.push(rest[..at].to_string());
        rest = &rest[at..];
    }
    while rest.len() >= 3 {
        segments.push(rest[..3].to_string());
        rest = &rest[3..];
    }
    if !rest.is_empty() {
        segments.push(rest.to_string());
    }

    CloudLayer::new(segments)
}

/// Fix rare cloud token issues before splitting
///
/// A letter `O` in the height's first position is a mistyped zero
/// (`FEWO03` -> `FEW003`); any other non-digit there is a modifier typed
/// before the height and is moved to the end (`BKNC015` -> `BKN015C`).
fn repair_cloud(token: &str) -> String {
    let bytes = token.as_bytes();
    if token.len() < 4 || bytes[3].is_ascii_digit() || bytes[3] == b'/' {
        return token.to_string();
    }
    if bytes[3] == b'O' {
        let mut fixed = token.to_string();
        fixed.replace_range(3..4, "0");
        fixed
    } else {
        format!("{}{}{}", &token[..3], &token[4..], &token[3..4])
    }
}
