//! Cross-line inference over decoded forecast periods
//!
//! Forecast lines lean on each other: an FM line has no end time until the
//! next period starts, and a line that repeats the previous conditions
//! omits visibility and clouds entirely. These passes run after every line
//! has been decoded individually.

use crate::app::models::{CloudLayer, ForecastPeriod, TempExtreme};
use crate::app::services::flight_rules::{ceiling, classify};
use crate::app::services::report_sanitizer::cursor::is_all_digits;

/// Fill in missing period end times from the following periods
///
/// TEMPO and PROB periods neither need an end time nor supply one. Each
/// period left without one takes the start time of the first persistent
/// period after it.
pub fn fill_missing_end_times(periods: &mut [ForecastPeriod]) {
    let mut last_inferred = 0;
    for i in 0..periods.len() {
        if periods[i].end_time.is_none() && periods[i].kind.persists() {
            last_inferred = i;
            if i + 1 < periods.len() {
                periods[i].end_time = periods[i + 1..]
                    .iter()
                    .find(|p| p.kind.persists())
                    .and_then(|p| p.start_time.clone());
            }
        }
    }
    close_final_period_window(periods, last_inferred);
}

/// Close the last inferred period against the overall validity span
///
/// The final forecast period has nothing after it to borrow a start time
/// from; its window closes when the whole forecast does, so it takes the
/// base period's end time. Note the deliberate no-op when the base period
/// itself was the last one fixed.
fn close_final_period_window(periods: &mut [ForecastPeriod], last_inferred: usize) {
    if last_inferred > 0 {
        periods[last_inferred].end_time = periods[0].end_time.clone();
    }
}

/// Classify every period, inheriting missing visibility and clouds
///
/// A period missing either field walks backward through the prior
/// persistent periods and takes the nearest available value. An explicit
/// SKC/CLR marker in a prior period resolves the ceiling as "clear" --
/// distinct from "unknown", which keeps walking. Resolved values are never
/// overwritten by farther periods.
pub fn apply_flight_rules(periods: &mut [ForecastPeriod]) {
    for i in 0..periods.len() {
        let mut visibility = periods[i].visibility.clone();
        let mut clouds: Option<Vec<CloudLayer>> = if periods[i].clouds.is_empty() {
            None
        } else {
            Some(periods[i].clouds.clone())
        };

        if visibility.is_none() || clouds.is_none() {
            for j in (0..i).rev() {
                if !periods[j].kind.persists() {
                    continue;
                }
                if visibility.is_none() && periods[j].visibility.is_some() {
                    visibility = periods[j].visibility.clone();
                }
                if clouds.is_none() {
                    if periods[j].other.iter().any(|t| t == "SKC" || t == "CLR") {
                        clouds = Some(Vec::new());
                    } else if !periods[j].clouds.is_empty() {
                        clouds = Some(periods[j].clouds.clone());
                    }
                }
                if visibility.is_some() && clouds.is_some() {
                    break;
                }
            }
        }

        let layers = clouds.unwrap_or_default();
        periods[i].flight_rules = Some(classify(visibility.as_deref(), ceiling(&layers)));
    }
}

/// Pull the max/min temperature entries out of an unclassified-token list
///
/// Handles the explicit `TXnn/time` and `TNnn/time` groups and the generic
/// `Tnn/time` pair convention, where the colder of the two values is the
/// minimum. If both extremes are found inverted, they are swapped.
pub fn recover_temp_extremes(
    other: &mut Vec<String>,
) -> (Option<TempExtreme>, Option<TempExtreme>) {
    let mut max_temp: Option<TempExtreme> = None;
    let mut min_temp: Option<TempExtreme> = None;

    let mut i = other.len();
    while i > 0 {
        i -= 1;
        let item = &other[i];
        if item.len() <= 6 || !item.starts_with('T') || !item.contains('/') {
            continue;
        }
        match item.as_bytes()[1] {
            b'X' => {
                let item = other.remove(i);
                max_temp = parse_extreme(&item[2..]);
            }
            b'N' => {
                let item = other.remove(i);
                min_temp = parse_extreme(&item[2..]);
            }
            second if second == b'M' || second.is_ascii_digit() => {
                let item = other.remove(i);
                let Some(entry) = parse_extreme(&item[1..]) else {
                    continue;
                };
                match min_temp.take() {
                    None => min_temp = Some(entry),
                    Some(existing) => {
                        if numeric_value(&existing.value) > numeric_value(&entry.value) {
                            max_temp = Some(existing);
                            min_temp = Some(entry);
                        } else {
                            max_temp = Some(entry);
                            min_temp = Some(existing);
                        }
                    }
                }
            }
            _ => {}
        }
    }

    if let (Some(max), Some(min)) = (&max_temp, &min_temp)
        && numeric_value(&max.value) < numeric_value(&min.value)
    {
        std::mem::swap(&mut max_temp, &mut min_temp);
    }
    (max_temp, min_temp)
}

/// Pull the Oceania temperature and altimeter subgroup runs out of an
/// unclassified-token list
///
/// A `T` marker token is followed by a run of purely numeric temperature
/// values, a `Q` marker by a run of altimeter values; each run ends at the
/// first non-numeric token.
pub fn recover_oceania_groups(other: &mut Vec<String>) -> (Vec<String>, Vec<String>) {
    let temperatures = drain_marker_run(other, "T");
    let altimeters = drain_marker_run(other, "Q");
    (temperatures, altimeters)
}

fn drain_marker_run(other: &mut Vec<String>, marker: &str) -> Vec<String> {
    let Some(at) = other.iter().position(|t| t == marker) else {
        return Vec::new();
    };
    other.remove(at);
    let mut values = Vec::new();
    while at < other.len() && is_all_digits(&other[at]) {
        values.push(other.remove(at));
    }
    values
}

fn parse_extreme(body: &str) -> Option<TempExtreme> {
    let (value, time) = body.split_once('/')?;
    Some(TempExtreme {
        value: value.to_string(),
        time: time.to_string(),
    })
}

/// Numeric reading of a temperature value using the report's
/// `M`-prefix-as-minus convention
fn numeric_value(value: &str) -> i64 {
    value.replace('M', "-").parse().unwrap_or(0)
}
