//! Tests for the cross-line inference passes

use super::super::inference::{
    apply_flight_rules, fill_missing_end_times, recover_oceania_groups, recover_temp_extremes,
};
use super::{layer, period};
use crate::app::models::{FlightRules, PeriodKind};

#[test]
fn test_missing_end_times_inferred_from_next_period() {
    let mut periods = vec![
        period(PeriodKind::Base, Some("1806"), Some("1912")),
        period(PeriodKind::From, Some("1815"), None),
        period(PeriodKind::From, Some("1901"), None),
    ];
    fill_missing_end_times(&mut periods);

    // Middle period closes when the next persistent period starts; the
    // final inferred period closes against the overall validity span
    assert_eq!(periods[1].end_time.as_deref(), Some("1901"));
    assert_eq!(periods[2].end_time.as_deref(), Some("1912"));
}

#[test]
fn test_tempo_and_prob_skipped_in_end_time_scan() {
    let mut periods = vec![
        period(PeriodKind::Base, Some("1806"), Some("1912")),
        period(PeriodKind::From, Some("1815"), None),
        period(PeriodKind::Tempo, Some("1818"), Some("1820")),
        period(PeriodKind::Prob("PROB30".to_string()), Some("1820"), None),
        period(PeriodKind::From, Some("1900"), None),
    ];
    fill_missing_end_times(&mut periods);

    // The TEMPO and PROB starts are not period boundaries
    assert_eq!(periods[1].end_time.as_deref(), Some("1900"));
    // TEMPO/PROB periods themselves are never inferred
    assert_eq!(periods[3].end_time, None);
    // The final period closes against the overall validity span
    assert_eq!(periods[4].end_time.as_deref(), Some("1912"));
}

#[test]
fn test_explicit_end_times_untouched() {
    let mut periods = vec![
        period(PeriodKind::Base, Some("1806"), Some("1912")),
        period(PeriodKind::From, Some("1815"), Some("1830")),
    ];
    fill_missing_end_times(&mut periods);

    assert_eq!(periods[1].end_time.as_deref(), Some("1830"));
}

#[test]
fn test_flight_rules_use_own_fields_when_present() {
    let mut periods = vec![period(PeriodKind::Base, Some("1806"), Some("1912"))];
    periods[0].visibility = Some("2".to_string());
    periods[0].clouds = vec![layer(&["OVC", "025"])];
    apply_flight_rules(&mut periods);

    assert_eq!(periods[0].flight_rules, Some(FlightRules::Ifr));
}

#[test]
fn test_missing_fields_inherited_from_nearest_prior() {
    let mut periods = vec![
        period(PeriodKind::Base, Some("1806"), Some("1912")),
        period(PeriodKind::From, Some("1815"), Some("1901")),
    ];
    periods[0].visibility = Some("6".to_string());
    periods[0].clouds = vec![layer(&["BKN", "020"])];
    apply_flight_rules(&mut periods);

    // The FROM period carried nothing of its own
    assert_eq!(periods[1].flight_rules, Some(FlightRules::Mvfr));
}

#[test]
fn test_prior_sky_clear_resolves_ceiling_as_clear() {
    let mut periods = vec![
        period(PeriodKind::Base, Some("1806"), Some("1912")),
        period(PeriodKind::From, Some("1815"), Some("1830")),
        period(PeriodKind::From, Some("1830"), Some("1912")),
    ];
    periods[0].visibility = Some("6".to_string());
    periods[0].clouds = vec![layer(&["OVC", "008"])];
    periods[1].other = vec!["SKC".to_string()];
    apply_flight_rules(&mut periods);

    // Period 2 stops at the nearer SKC instead of walking back to the
    // overcast layer in the base period
    assert_eq!(periods[2].flight_rules, Some(FlightRules::Vfr));
}

#[test]
fn test_tempo_periods_never_supply_inherited_fields() {
    let mut periods = vec![
        period(PeriodKind::Base, Some("1806"), Some("1912")),
        period(PeriodKind::Tempo, Some("1810"), Some("1812")),
        period(PeriodKind::From, Some("1815"), Some("1912")),
    ];
    periods[0].visibility = Some("6".to_string());
    periods[1].visibility = Some("1/2".to_string());
    apply_flight_rules(&mut periods);

    // The FROM period inherits from the base period, not the TEMPO
    assert_eq!(periods[2].flight_rules, Some(FlightRules::Vfr));
}

#[test]
fn test_explicit_temperature_extremes_recovered() {
    let mut other = vec![
        "HZ".to_string(),
        "TX42/1810Z".to_string(),
        "TN29/1900Z".to_string(),
    ];
    let (max_temp, min_temp) = recover_temp_extremes(&mut other);

    assert_eq!(max_temp.as_ref().unwrap().value, "42");
    assert_eq!(max_temp.as_ref().unwrap().time, "1810Z");
    assert_eq!(min_temp.as_ref().unwrap().value, "29");
    assert_eq!(min_temp.as_ref().unwrap().time, "1900Z");
    assert_eq!(other, vec!["HZ"]);
}

#[test]
fn test_generic_pair_sorted_by_value() {
    let mut other = vec!["TM03/1404Z".to_string(), "T12/1316Z".to_string()];
    let (max_temp, min_temp) = recover_temp_extremes(&mut other);

    assert_eq!(max_temp.as_ref().unwrap().value, "12");
    assert_eq!(min_temp.as_ref().unwrap().value, "M03");
    assert!(other.is_empty());
}

#[test]
fn test_inverted_extremes_swapped() {
    let mut other = vec!["TX05/1810Z".to_string(), "TN20/1900Z".to_string()];
    let (max_temp, min_temp) = recover_temp_extremes(&mut other);

    assert_eq!(max_temp.as_ref().unwrap().value, "20");
    assert_eq!(min_temp.as_ref().unwrap().value, "05");
}

#[test]
fn test_oceania_marker_runs() {
    let mut other = vec![
        "T".to_string(),
        "24".to_string(),
        "26".to_string(),
        "Q".to_string(),
        "1015".to_string(),
        "1013".to_string(),
        "RA".to_string(),
    ];
    let (temperatures, altimeters) = recover_oceania_groups(&mut other);

    assert_eq!(temperatures, vec!["24", "26"]);
    assert_eq!(altimeters, vec!["1015", "1013"]);
    assert_eq!(other, vec!["RA"]);
}
