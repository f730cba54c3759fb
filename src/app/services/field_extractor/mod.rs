//! Ordered field-extraction steps for report bodies
//!
//! Each step takes the current token cursor and returns the extracted
//! field(s), consuming tokens from a specific end or position of the
//! sequence. Steps are total: absence of a matching token yields an absent
//! field, never a failure, and tokens matching no rule stay in the cursor
//! as opaque pass-through data.
//!
//! The fixed order for a METAR decode is altimeter (back), temperature and
//! dewpoint (back), station and time (front), wind (front), visibility
//! (front), then clouds (scan). TAF lines replace the station/time step with
//! the period header and finish with the residue scan.

pub mod altimeter;
pub mod clouds;
pub mod period;
pub mod station_time;
pub mod temperature;
pub mod visibility;
pub mod wind;

#[cfg(test)]
pub mod tests;

pub use altimeter::{extract_altimeter_international, extract_altimeter_us};
pub use clouds::extract_clouds;
pub use period::{PeriodHeader, extract_period_header, extract_residue_groups};
pub use station_time::extract_station_and_time;
pub use temperature::extract_temperature_dewpoint;
pub use visibility::extract_visibility;
pub use wind::{WindGroup, extract_wind};
