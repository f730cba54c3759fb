//! Data models for decoded METAR and TAF reports
//!
//! This module contains the structures produced by the decoding pipeline.
//! All structures are created fresh per decode call, fully populated
//! synchronously, and never mutated after they are returned.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::CEILING_TYPES;

// =============================================================================
// Shared Report Elements
// =============================================================================

/// A single cloud layer split into its report segments
///
/// Segments are `[type, height]` or `[type, height, modifier]`, where type is
/// one of FEW/SCT/BKN/OVC/VV. Layers keep the left-to-right order they had in
/// the original report; they are never sorted by height.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudLayer {
    /// Ordered segments as they appeared in the report token
    pub segments: Vec<String>,
}

impl CloudLayer {
    /// Create a layer from its split segments
    pub fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// Coverage type segment (FEW/SCT/BKN/OVC/VV), if present
    pub fn kind(&self) -> Option<&str> {
        self.segments.first().map(String::as_str)
    }

    /// Height segment in hundreds of feet, if present
    pub fn height(&self) -> Option<&str> {
        self.segments.get(1).map(String::as_str)
    }

    /// Trailing modifier segment (e.g. CB, TCU), if present
    pub fn modifier(&self) -> Option<&str> {
        self.segments.get(2).map(String::as_str)
    }

    /// True if this layer counts as a ceiling with a usable numeric height
    pub fn is_ceiling(&self) -> bool {
        match (self.kind(), self.height()) {
            (Some(kind), Some(height)) => {
                CEILING_TYPES.contains(&kind)
                    && !height.is_empty()
                    && height.bytes().all(|b| b.is_ascii_digit())
            }
            _ => false,
        }
    }
}

/// Units of measurement identified for each field of a report
///
/// Reports start from their regional defaults; individual extraction steps
/// switch a unit when the report carries the other convention (a `Q`
/// altimeter in a US report, an `MPS` wind group, a metric visibility).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportUnits {
    /// Wind speed unit ("kt" or "m/s")
    pub wind_speed: String,

    /// Visibility unit ("sm" or "m")
    pub visibility: String,

    /// Altitude unit for cloud and shear heights
    pub altitude: String,

    /// Temperature unit
    pub temperature: String,

    /// Altimeter unit ("inHg" or "hPa")
    pub altimeter: String,
}

impl ReportUnits {
    /// Defaults for reports decoded with the US pipeline
    pub fn north_american() -> Self {
        Self {
            wind_speed: "kt".to_string(),
            visibility: "sm".to_string(),
            altitude: "ft".to_string(),
            temperature: "C".to_string(),
            altimeter: "inHg".to_string(),
        }
    }

    /// Defaults for reports decoded with the International pipeline
    pub fn international() -> Self {
        Self {
            wind_speed: "kt".to_string(),
            visibility: "m".to_string(),
            altitude: "ft".to_string(),
            temperature: "C".to_string(),
            altimeter: "hPa".to_string(),
        }
    }
}

// =============================================================================
// Flight Rules
// =============================================================================

/// Coarse visibility/ceiling-derived safety classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FlightRules {
    /// Visual flight rules
    Vfr,
    /// Marginal visual flight rules
    Mvfr,
    /// Instrument flight rules
    Ifr,
    /// Low instrument flight rules
    Lifr,
}

impl FlightRules {
    /// Standard report code for this category
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vfr => "VFR",
            Self::Mvfr => "MVFR",
            Self::Ifr => "IFR",
            Self::Lifr => "LIFR",
        }
    }
}

impl fmt::Display for FlightRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// METAR Report
// =============================================================================

/// A decoded METAR report
///
/// Absent scalar fields are `None`; tokens that matched no extraction rule
/// are carried through in `other` for the caller to inspect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedMetar {
    /// Station identifier (e.g. "KJFK")
    pub station: String,

    /// Observation time group (e.g. "221951Z")
    pub time: Option<String>,

    /// Wind direction in degrees, or "VRB"
    pub wind_direction: Option<String>,

    /// Wind speed
    pub wind_speed: Option<String>,

    /// Wind gust speed
    pub wind_gust: Option<String>,

    /// Variable wind direction bounds (from, to)
    pub wind_variable_direction: Option<(String, String)>,

    /// Prevailing visibility
    pub visibility: Option<String>,

    /// Runway visibility token extracted during sanitization
    pub runway_visibility: Option<String>,

    /// Wind shear token extracted during sanitization
    pub wind_shear: Option<String>,

    /// Altimeter group
    pub altimeter: Option<String>,

    /// Temperature
    pub temperature: Option<String>,

    /// Dewpoint
    pub dewpoint: Option<String>,

    /// Cloud layers in report order
    pub clouds: Vec<CloudLayer>,

    /// Tokens that matched no extraction rule (weather codes and the rest)
    pub other: Vec<String>,

    /// Remarks section text
    pub remarks: String,

    /// The raw report text as supplied
    pub raw: String,

    /// Units of measurement identified for this report
    pub units: ReportUnits,
}

// =============================================================================
// TAF Report
// =============================================================================

/// Forecast period qualifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeriodKind {
    /// The unqualified base forecast line
    Base,
    /// Temporary fluctuation period
    Tempo,
    /// Gradual change period
    Becmg,
    /// Intermittent period
    Inter,
    /// From-time period
    From,
    /// Probability period; carries the full tag (e.g. "PROB30")
    Prob(String),
}

impl PeriodKind {
    /// True for period kinds whose conditions persist, i.e. anything other
    /// than TEMPO and PROB. Only persistent periods take part in cross-line
    /// inference.
    pub fn persists(&self) -> bool {
        !matches!(self, Self::Tempo | Self::Prob(_))
    }

    /// Report code for this kind
    pub fn as_str(&self) -> &str {
        match self {
            Self::Base => "BASE",
            Self::Tempo => "TEMPO",
            Self::Becmg => "BECMG",
            Self::Inter => "INTER",
            Self::From => "FROM",
            Self::Prob(tag) => tag,
        }
    }
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A minimum or maximum temperature entry from a TAF
///
/// `value` may carry the report's `M`-prefix-as-minus convention ("M03");
/// `time` is the raw `HHmm[Z]` group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TempExtreme {
    /// Temperature value, possibly `M`-prefixed
    pub value: String,

    /// Time group the extreme applies to
    pub time: String,
}

/// One decoded TAF forecast period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPeriod {
    /// Period qualifier
    pub kind: PeriodKind,

    /// Probability tag attached from a preceding bare PROB line
    pub probability: Option<String>,

    /// Period start time group
    pub start_time: Option<String>,

    /// Period end time group; may be filled in by cross-line inference
    pub end_time: Option<String>,

    /// Wind direction in degrees, or "VRB"
    pub wind_direction: Option<String>,

    /// Wind speed
    pub wind_speed: Option<String>,

    /// Wind gust speed
    pub wind_gust: Option<String>,

    /// Wind shear token extracted during sanitization
    pub wind_shear: Option<String>,

    /// Prevailing visibility
    pub visibility: Option<String>,

    /// Altimeter from an embedded QNH group
    pub altimeter: Option<String>,

    /// Cloud layers in report order
    pub clouds: Vec<CloudLayer>,

    /// Icing groups (numeric tokens beginning with 6) in report order
    pub icing: Vec<String>,

    /// Turbulence groups (numeric tokens beginning with 5) in report order
    pub turbulence: Vec<String>,

    /// Tokens that matched no extraction rule
    pub other: Vec<String>,

    /// Flight-rules category, populated after cross-line inference
    pub flight_rules: Option<FlightRules>,

    /// The source line this period was decoded from
    pub raw: String,
}

/// A decoded TAF report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedTaf {
    /// Station identifier
    pub station: String,

    /// Issue time group
    pub time: Option<String>,

    /// Remarks captured from the forecast lines
    pub remarks: String,

    /// Maximum temperature entry, if reported
    pub max_temp: Option<TempExtreme>,

    /// Minimum temperature entry, if reported
    pub min_temp: Option<TempExtreme>,

    /// Forecast periods in report order
    pub forecast: Vec<ForecastPeriod>,

    /// Oceania temperature subgroup values (stations with leading 'A')
    pub temperature_groups: Vec<String>,

    /// Oceania altimeter subgroup values (stations with leading 'A')
    pub altimeter_groups: Vec<String>,

    /// The raw report text as supplied
    pub raw: String,

    /// Units of measurement identified for this report
    pub units: ReportUnits,
}
