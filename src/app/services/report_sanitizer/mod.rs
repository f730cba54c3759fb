//! Tokenizer and sanitizer for raw report bodies
//!
//! This module turns a raw report body into a corrected token sequence before
//! field extraction runs. It is organized into logical components:
//! - [`cursor`] - Explicit cursor over the unconsumed token sequence
//! - [`cleaners`] - The single backward-scan sanitize pass and its rule set
//! - [`remarks`] - Body/remarks cut-point search on the raw report text
//!
//! Sanitization is idempotent: running the pass twice on its own output
//! yields no further changes.

pub mod cleaners;
pub mod cursor;
pub mod remarks;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use cleaners::{SanitizedExtras, sanitize};
pub use cursor::TokenCursor;
pub use remarks::{find_first_of, split_remarks};
