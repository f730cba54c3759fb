//! Tests for surface wind extraction

use super::super::wind::extract_wind;
use super::{cursor_of, tokens_of, us_units};

#[test]
fn test_plain_kt_group() {
    let mut cursor = cursor_of("18010KT 10SM");
    let mut units = us_units();

    let wind = extract_wind(&mut cursor, &mut units);
    assert_eq!(wind.direction.as_deref(), Some("180"));
    assert_eq!(wind.speed.as_deref(), Some("10"));
    assert_eq!(wind.gust, None);
    assert_eq!(wind.variable, None);
    assert_eq!(tokens_of(&cursor), vec!["10SM"]);
}

#[test]
fn test_gusting_kt_group() {
    let mut cursor = cursor_of("36010G25KT");
    let mut units = us_units();

    let wind = extract_wind(&mut cursor, &mut units);
    assert_eq!(wind.direction.as_deref(), Some("360"));
    assert_eq!(wind.speed.as_deref(), Some("10"));
    assert_eq!(wind.gust.as_deref(), Some("25"));
}

#[test]
fn test_kts_suffix_variant() {
    let mut cursor = cursor_of("36010KTS");
    let mut units = us_units();

    let wind = extract_wind(&mut cursor, &mut units);
    assert_eq!(wind.direction.as_deref(), Some("360"));
    assert_eq!(wind.speed.as_deref(), Some("10"));
}

#[test]
fn test_variable_direction_wind() {
    let mut cursor = cursor_of("VRB03KT 10SM");
    let mut units = us_units();

    let wind = extract_wind(&mut cursor, &mut units);
    assert_eq!(wind.direction.as_deref(), Some("VRB"));
    assert_eq!(wind.speed.as_deref(), Some("03"));
}

#[test]
fn test_bare_five_digit_group() {
    // KT occasionally goes missing; a 5-digit front token is still wind
    let mut cursor = cursor_of("36010 10SM");
    let mut units = us_units();

    let wind = extract_wind(&mut cursor, &mut units);
    assert_eq!(wind.direction.as_deref(), Some("360"));
    assert_eq!(wind.speed.as_deref(), Some("10"));
}

#[test]
fn test_long_gust_group_without_suffix() {
    let mut cursor = cursor_of("36010G20");
    let mut units = us_units();

    let wind = extract_wind(&mut cursor, &mut units);
    assert_eq!(wind.direction.as_deref(), Some("360"));
    assert_eq!(wind.speed.as_deref(), Some("10"));
    assert_eq!(wind.gust.as_deref(), Some("20"));
}

#[test]
fn test_mps_group_switches_unit() {
    let mut cursor = cursor_of("09014MPS 9999");
    let mut units = us_units();

    let wind = extract_wind(&mut cursor, &mut units);
    assert_eq!(wind.direction.as_deref(), Some("090"));
    assert_eq!(wind.speed.as_deref(), Some("14"));
    assert_eq!(units.wind_speed, "m/s");
}

#[test]
fn test_slash_separated_decimal_form() {
    let mut cursor = cursor_of("210/08.5");
    let mut units = us_units();

    let wind = extract_wind(&mut cursor, &mut units);
    assert_eq!(wind.direction.as_deref(), Some("210"));
    assert_eq!(wind.speed.as_deref(), Some("08.5"));
}

#[test]
fn test_separated_gust_token() {
    let mut cursor = cursor_of("36010KT G25 10SM");
    let mut units = us_units();

    let wind = extract_wind(&mut cursor, &mut units);
    assert_eq!(wind.gust.as_deref(), Some("25"));
    assert_eq!(tokens_of(&cursor), vec!["10SM"]);
}

#[test]
fn test_variable_direction_bounds() {
    let mut cursor = cursor_of("28012G22KT 250V320 10SM");
    let mut units = us_units();

    let wind = extract_wind(&mut cursor, &mut units);
    assert_eq!(
        wind.variable,
        Some(("250".to_string(), "320".to_string()))
    );
    assert_eq!(tokens_of(&cursor), vec!["10SM"]);
}

#[test]
fn test_no_wind_group_leaves_tokens() {
    let mut cursor = cursor_of("10SM FEW250");
    let mut units = us_units();

    let wind = extract_wind(&mut cursor, &mut units);
    assert_eq!(wind.direction, None);
    assert_eq!(wind.speed, None);
    assert_eq!(cursor.len(), 2);
}
