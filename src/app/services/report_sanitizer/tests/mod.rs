//! Test utilities for the report sanitizer
//!
//! Helpers shared across the sanitizer test modules.

use super::cursor::TokenCursor;


/// Helper to build a cursor from a space-separated report body
pub fn cursor_of(body: &str) -> TokenCursor {
    TokenCursor::from_text(body)
}

/// Helper to read the surviving tokens as plain strings
pub fn tokens_of(cursor: &TokenCursor) -> Vec<&str> {
    cursor.tokens().iter().map(String::as_str).collect()
}
