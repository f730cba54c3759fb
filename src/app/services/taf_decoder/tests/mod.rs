//! Test utilities for the TAF assembler

use crate::app::models::{CloudLayer, ForecastPeriod, PeriodKind};

mod inference_tests;

/// Helper to build a bare forecast period for inference tests
pub fn period(kind: PeriodKind, start: Option<&str>, end: Option<&str>) -> ForecastPeriod {
    ForecastPeriod {
        kind,
        probability: None,
        start_time: start.map(str::to_string),
        end_time: end.map(str::to_string),
        wind_direction: None,
        wind_speed: None,
        wind_gust: None,
        wind_shear: None,
        visibility: None,
        altimeter: None,
        clouds: Vec::new(),
        icing: Vec::new(),
        turbulence: Vec::new(),
        other: Vec::new(),
        flight_rules: None,
        raw: String::new(),
    }
}

/// Helper to build a cloud layer from segments
pub fn layer(segments: &[&str]) -> CloudLayer {
    CloudLayer::new(segments.iter().map(|s| s.to_string()).collect())
}
