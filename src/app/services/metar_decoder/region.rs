//! Station-identifier region classification
//!
//! Reports follow the North-American or the International token
//! conventions depending on where the station sits. The leading letter
//! decides for most of the world; the Central-American `M` block is split
//! between both conventions and needs the second letter.

use serde::{Deserialize, Serialize};

use crate::constants::{
    INTERNATIONAL_REGION_PREFIXES, M_PREFIXES_INTERNATIONAL, M_PREFIXES_US, US_REGION_PREFIXES,
};

/// Which extraction-step variants decode this station's reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportRegion {
    /// US token conventions (A-prefixed altimeter, statute miles)
    NorthAmerican,
    /// ICAO token conventions (Q-prefixed altimeter, meters, CAVOK)
    International,
}

impl ReportRegion {
    /// Classify a station identifier (or a report starting with one)
    ///
    /// Returns `None` for unrecognized prefixes; decoding then reports an
    /// unsupported region instead of guessing a dialect.
    pub fn for_station(station: &str) -> Option<Self> {
        let first = station.chars().next()?;
        if first == 'M' {
            let pair = station.get(..2)?;
            if M_PREFIXES_US.contains(&pair) {
                return Some(Self::NorthAmerican);
            }
            if M_PREFIXES_INTERNATIONAL.contains(&pair) {
                return Some(Self::International);
            }
            return None;
        }
        if US_REGION_PREFIXES.contains(&first) {
            Some(Self::NorthAmerican)
        } else if INTERNATIONAL_REGION_PREFIXES.contains(&first) {
            Some(Self::International)
        } else {
            None
        }
    }
}
