//! Flight-rules classification from visibility and ceiling
//!
//! Pure functions shared by the METAR and TAF decode paths. Thresholds are
//! in statute miles and hundreds of feet; metric visibility values are
//! converted only for classification, never in the decoded report itself.

use crate::app::models::{CloudLayer, FlightRules};
use crate::constants::{MILES_PER_METER, NO_CEILING};

#[cfg(test)]
pub mod tests;

/// Return the ceiling layer from a cloud list, if any
///
/// Only broken, overcast, and vertical-visibility layers with a numeric
/// height count; this guards against height-less layers like `FEW///`.
pub fn ceiling(clouds: &[CloudLayer]) -> Option<&CloudLayer> {
    clouds.iter().find(|layer| layer.is_ceiling())
}

/// Classify a visibility/ceiling pair into a flight-rules category
///
/// Missing visibility classifies as IFR: common practice treats a report
/// without visibility as not flyable under visual rules. Values that fit
/// none of the recognized visibility shapes get the same conservative
/// treatment.
pub fn classify(visibility: Option<&str>, ceiling: Option<&CloudLayer>) -> FlightRules {
    let Some(vis_miles) = visibility_in_miles(visibility) else {
        return FlightRules::Ifr;
    };

    let ceiling_height = ceiling
        .and_then(CloudLayer::height)
        .and_then(|h| h.parse::<i64>().ok())
        .unwrap_or(NO_CEILING);

    if vis_miles < 5.0 || ceiling_height < 30 {
        if vis_miles < 3.0 || ceiling_height < 10 {
            if vis_miles < 1.0 || ceiling_height < 5 {
                return FlightRules::Lifr;
            }
            return FlightRules::Ifr;
        }
        return FlightRules::Mvfr;
    }
    FlightRules::Vfr
}

/// Normalize a visibility string to statute miles
fn visibility_in_miles(visibility: Option<&str>) -> Option<f64> {
    let vis = visibility.filter(|v| !v.is_empty())?;

    if vis == "P6" {
        return Some(10.0);
    }
    if let Some((num, den)) = vis.split_once('/') {
        // A leading M is "less than", floored to zero
        if vis.starts_with('M') {
            return Some(0.0);
        }
        let num: f64 = num.parse().ok()?;
        let den: f64 = den.parse().ok()?;
        return Some(num / den);
    }
    if vis.len() == 4 && vis.bytes().all(|b| b.is_ascii_digit()) {
        return Some(vis.parse::<f64>().ok()? * MILES_PER_METER);
    }
    vis.parse::<i64>().ok().map(|v| v as f64)
}
