//! METAR/TAF Decoder Library
//!
//! A Rust library for decoding raw aviation weather bulletins (METAR
//! current-conditions reports and TAF forecast reports) into structured data.
//!
//! This library provides tools for:
//! - Splitting a raw report into body tokens and trailing remarks
//! - Repairing tokens that source systems split, joined, or misspelled
//! - Running the ordered field-extraction pipeline over the token sequence
//! - Dispatching between the US and International report dialects
//! - Assembling multi-line TAF forecasts with cross-line inference
//! - Classifying visibility/ceiling pairs into flight-rules categories
//! - Matching structured fragments out of the remarks section
//!
//! Report retrieval, station metadata, and human-readable translation are
//! external collaborators; this crate only consumes report text that has
//! already been fetched.

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod field_extractor;
        pub mod flight_rules;
        pub mod metar_decoder;
        pub mod remarks_library;
        pub mod report_sanitizer;
        pub mod taf_decoder;
    }
}

// Re-export commonly used types
pub use app::models::{
    CloudLayer, FlightRules, ForecastPeriod, ParsedMetar, ParsedTaf, PeriodKind, ReportUnits,
};
pub use app::services::metar_decoder::ReportRegion;
pub use app::services::remarks_library::{RemarksLibrary, RemarksMatch};

/// Result type alias for the METAR/TAF decoder
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for report decoding operations
///
/// The decoding engine itself has no fatal errors: malformed tokens pass
/// through to the unclassified list. The only error values are the two
/// "could not decode at all" outcomes below.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Station prefix matches neither the US nor the International tables
    #[error("unsupported station region: '{station}'")]
    UnsupportedRegion { station: String },

    /// Report text is below the minimum viable length
    #[error("report too short to decode: {length} characters")]
    ReportTooShort { length: usize },
}

impl Error {
    /// Create an unsupported-region error
    pub fn unsupported_region(station: impl Into<String>) -> Self {
        Self::UnsupportedRegion {
            station: station.into(),
        }
    }

    /// Create a report-too-short error
    pub fn report_too_short(length: usize) -> Self {
        Self::ReportTooShort { length }
    }
}
