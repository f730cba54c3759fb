//! Shared constants for METAR/TAF decoding
//!
//! This module contains the static token tables, marker lists, and region
//! mappings used throughout the decoding pipeline. All tables are
//! process-wide and immutable.

// =============================================================================
// Report Length and Conversion Constants
// =============================================================================

/// Minimum viable report length in characters
pub const MIN_REPORT_LEN: usize = 2;

/// Statute miles per meter, used when classifying metric visibility
pub const MILES_PER_METER: f64 = 0.000_621_371;

/// Ceiling sentinel in hundreds of feet when no ceiling layer is present
pub const NO_CEILING: i64 = 99;

// =============================================================================
// Cloud Layer Tables
// =============================================================================

/// Cloud coverage codes recognized as layer types
pub const CLOUD_TYPES: &[&str] = &["FEW", "SCT", "BKN", "OVC"];

/// Layer types that count as a ceiling
pub const CEILING_TYPES: &[&str] = &["OVC", "BKN", "VV"];

/// Sky-clear sentinels stripped from METAR bodies but kept in TAF lines
pub const SKY_CLEAR_TOKENS: &[&str] = &["CLR", "SKC"];

// =============================================================================
// Remarks and Line Markers
// =============================================================================

/// Substrings whose earliest occurrence starts the remarks section of a METAR
/// body (color-state codes, trend groups, and explicit remark signifiers)
pub const METAR_REMARK_STARTS: &[&str] = &[
    " BLU", " BLU+", " WHT", " GRN", " YLO", " AMB", " RED", " BECMG", " TEMPO", " INTER",
    " NOSIG", " RMK", " WIND", " QFE", " INFO", " RWY", " CHECK",
];

/// Substrings whose earliest occurrence starts the remarks of a TAF line
pub const TAF_REMARK_STARTS: &[&str] = &[
    "RMK ", "AUTOMATED ", "COR ", "AMD ", "LAST ", "FCST ", "CANCEL ", "CHECK ", "WND ", "MOD ",
    " BY", " QFE",
];

/// Substrings that signal a new forecast period embedded mid-line
pub const TAF_NEW_PERIOD_STARTS: &[&str] = &[" INTER ", " FM", " BECMG ", " TEMPO "];

/// Altimeter signatures used to locate the body/remarks cut point
pub const ALTIMETER_SIGNATURES: &[&str] = &[" A2", " A3", " Q1", " Q0"];

/// Report-type qualifiers stripped from the front of a TAF bulletin
pub const TAF_HEADER_PREFIXES: &[&str] = &["TAF ", "AMD ", "COR "];

/// Standalone tokens carrying no field data, dropped during sanitization
pub const SPURIOUS_TOKENS: &[&str] = &["AUTO", "COR", "NSC", "NCD", "$", "KT", "M", "."];

// =============================================================================
// TAF Keyword Repair
// =============================================================================

/// Common corruptions of the TEMPO/BECMG line signifiers and their repairs.
/// Each replacement is applied at most once per line, in table order.
pub const PERIOD_KEYWORD_FIXES: &[(&str, &str)] = &[
    ("TEMP0", "TEMPO"),
    ("TEMP O", "TEMPO"),
    ("TMPO", "TEMPO"),
    ("TE MPO", "TEMPO"),
    ("TEMP ", "TEMPO "),
    (" EMPO", " TEMPO"),
    ("TEMO", "TEMPO"),
    ("T EMPO", "TEMPO"),
    ("BECM G", "BECMG"),
    ("BEMCG", "BECMG"),
    ("BE CMG", "BECMG"),
    ("BEMG", "BECMG"),
    (" BEC ", " BECMG "),
    ("BCEMG", "BECMG"),
    ("B ECMG", "BECMG"),
];

// =============================================================================
// Station Region Tables
// =============================================================================

/// Leading station letters decoded with the US pipeline. `M` is absent here:
/// the Central-American region is split and resolved by the two-letter tables.
pub const US_REGION_PREFIXES: &[char] = &['C', 'K', 'P', 'T'];

/// Leading station letters decoded with the International pipeline
pub const INTERNATIONAL_REGION_PREFIXES: &[char] = &[
    'A', 'B', 'D', 'E', 'F', 'G', 'H', 'L', 'N', 'O', 'R', 'S', 'U', 'V', 'W', 'Y', 'Z',
];

/// Two-letter `M` prefixes decoded with the US pipeline
pub const M_PREFIXES_US: &[&str] = &["MB", "MD", "MK", "MM", "MT", "MU", "MW", "MY"];

/// Two-letter `M` prefixes decoded with the International pipeline
pub const M_PREFIXES_INTERNATIONAL: &[&str] = &["MG", "MH", "MN", "MP", "MR", "MS", "MZ"];
