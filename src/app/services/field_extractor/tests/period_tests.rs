//! Tests for TAF period header and residue extraction

use super::super::period::{extract_period_header, extract_residue_groups};
use super::{cursor_of, tokens_of};
use crate::app::models::PeriodKind;

#[test]
fn test_base_line_with_validity_range() {
    let mut cursor = cursor_of("1806/1912 33008KT");
    let header = extract_period_header(&mut cursor);

    assert_eq!(header.kind, PeriodKind::Base);
    assert_eq!(header.start_time.as_deref(), Some("1806"));
    assert_eq!(header.end_time.as_deref(), Some("1912"));
    assert_eq!(tokens_of(&cursor), vec!["33008KT"]);
}

#[test]
fn test_tempo_keyword() {
    let mut cursor = cursor_of("TEMPO 1810/1812 32015G25KT");
    let header = extract_period_header(&mut cursor);

    assert_eq!(header.kind, PeriodKind::Tempo);
    assert_eq!(header.start_time.as_deref(), Some("1810"));
    assert_eq!(header.end_time.as_deref(), Some("1812"));
}

#[test]
fn test_prob_tag_kept_whole() {
    let mut cursor = cursor_of("PROB30 1810/1812");
    let header = extract_period_header(&mut cursor);

    assert_eq!(header.kind, PeriodKind::Prob("PROB30".to_string()));
    assert!(!header.kind.persists());
}

#[test]
fn test_from_time_start_only() {
    let mut cursor = cursor_of("FM181500 25003KT");
    let header = extract_period_header(&mut cursor);

    assert_eq!(header.kind, PeriodKind::From);
    assert_eq!(header.start_time.as_deref(), Some("1815"));
    assert_eq!(header.end_time, None);
}

#[test]
fn test_from_with_zulu_suffix() {
    let mut cursor = cursor_of("FM120000Z 25003KT");
    let header = extract_period_header(&mut cursor);

    assert_eq!(header.kind, PeriodKind::From);
    assert_eq!(header.start_time.as_deref(), Some("1200"));
}

#[test]
fn test_from_with_embedded_range() {
    let mut cursor = cursor_of("FM1200/1306 25003KT");
    let header = extract_period_header(&mut cursor);

    assert_eq!(header.kind, PeriodKind::From);
    assert_eq!(header.start_time.as_deref(), Some("1200"));
    assert_eq!(header.end_time.as_deref(), Some("1306"));
}

#[test]
fn test_until_token_supplies_end_time() {
    let mut cursor = cursor_of("FM181500 TL190100 25003KT");
    let header = extract_period_header(&mut cursor);

    assert_eq!(header.start_time.as_deref(), Some("1815"));
    assert_eq!(header.end_time.as_deref(), Some("1901"));
    assert_eq!(tokens_of(&cursor), vec!["25003KT"]);
}

#[test]
fn test_line_without_header_defaults_to_base() {
    let mut cursor = cursor_of("25003KT 4000 HZ");
    let header = extract_period_header(&mut cursor);

    assert_eq!(header.kind, PeriodKind::Base);
    assert_eq!(header.start_time, None);
    assert_eq!(header.end_time, None);
    assert_eq!(cursor.len(), 3);
}

#[test]
fn test_residue_altimeter_icing_turbulence() {
    let mut cursor = cursor_of("QNH2992INS 620304 510004 540104 RA");
    let (altimeter, icing, turbulence) = extract_residue_groups(&mut cursor);

    assert_eq!(altimeter.as_deref(), Some("2992"));
    assert_eq!(icing, vec!["620304"]);
    assert_eq!(turbulence, vec!["510004", "540104"]);
    assert_eq!(tokens_of(&cursor), vec!["RA"]);
}

#[test]
fn test_residue_ignores_other_numerics() {
    let mut cursor = cursor_of("410204 RA");
    let (altimeter, icing, turbulence) = extract_residue_groups(&mut cursor);

    assert_eq!(altimeter, None);
    assert!(icing.is_empty());
    assert!(turbulence.is_empty());
    assert_eq!(cursor.len(), 2);
}
