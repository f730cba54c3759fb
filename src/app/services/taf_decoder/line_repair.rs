//! Repair of corrupted forecast-line signifiers
//!
//! TEMPO and BECMG arrive misspelled often enough that the assembler fixes
//! the known corruptions before any marker matching runs; an unrecognized
//! signifier would otherwise swallow the whole period into the previous
//! line's unclassified tokens.

use tracing::debug;

use crate::constants::PERIOD_KEYWORD_FIXES;

/// Apply the known keyword fixes to one forecast line
///
/// Each table entry replaces its first occurrence only. A repaired keyword
/// jammed against its time group also gets its separating space back
/// (`TEMPO2015/2020` -> `TEMPO 2015/2020`).
pub fn repair_line(line: &str) -> String {
    let mut text = line.to_string();

    for (bad, good) in PERIOD_KEYWORD_FIXES {
        if let Some(at) = text.find(bad) {
            debug!("repairing period keyword '{}' in forecast line", bad);
            text.replace_range(at..at + bad.len(), good);
        }
    }

    for keyword in ["BECMG", "TEMPO"] {
        let spaced = format!("{keyword} ");
        if text.contains(keyword) && !text.contains(&spaced) {
            if let Some(at) = text.find(keyword) {
                text.insert(at + keyword.len(), ' ');
            }
        }
    }

    text
}
