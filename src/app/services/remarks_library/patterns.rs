//! Pattern sources for the remarks matchers
//!
//! Each pattern extracts one kind of coded observation from the remarks
//! text via named capture groups. Matchers are independent: several may
//! match disjoint substrings of the same remarks section.

// Reusable snippets
const VISIBILITY: &str = r"[\d/\s]{1,5}";
const RUNWAY: &str = r"RWY\d{2}[LCR]?";
const DIRECTION: &str = r"[NSEW]{1,3}";

/// Matcher names and pattern sources, in registry order
pub(super) fn pattern_sources() -> Vec<(&'static str, String)> {
    vec![
        ("aircraft_mishap", r"\bACFT MSHP\b".to_string()),
        ("automated_station", r"\bAO[12]\b".to_string()),
        (
            "lightning",
            format!(r"\b(?P<frequent>FRQ)?\s?\bLTG(?:\s(?P<direction>{DIRECTION}))?"),
        ),
        (
            "peak_wind",
            r"\bPK[_\s]WND[_\s](?P<direction>\d{3})(?P<speed>\d{2,3})/(?P<hours>\d{2})?(?P<minutes>\d{2})\b"
                .to_string(),
        ),
        // Beginning/ending of precipitation or thunderstorm:
        // w'w'B(hh)mmE(hh)mm, e.g. RAB0123E1234
        (
            "precip_begin_end",
            r"\b(?P<precip>RA|TS)(?P<first>(?P<first_type>[BE])(?P<first_time>\d{4}|\d{2}))(?P<second>(?P<second_type>[BE])(?P<second_time>\d{4}|\d{2})\b)?"
                .to_string(),
        ),
        ("pressure_tendency", r"\bPRES(?P<direction>[FR])R\b".to_string()),
        ("sea_level_pressure", r"\bSLP(?P<pressure>\d{1,3})\b".to_string()),
        (
            "secondary_ceiling",
            format!(r"\bCIG\s(?P<height>\d{{3}})\s(?P<location>{RUNWAY})\b"),
        ),
        // VIS vvvvv LOC: visibility at a second location, e.g. VIS 3/4 RWY11
        (
            "secondary_visibility",
            format!(r"\bVIS\s(?P<visibility>{VISIBILITY})\s(?P<location>(?:TWR|{RUNWAY}))\b"),
        ),
        (
            "tornado_activity",
            format!(
                r"\b(?P<activity>TORNADO|FUNNEL\sCLOUD|WATERSPOUT)\b\s?(?P<began_ended>[BE])?(?P<minutes>\d\d)?\s?(?P<location>{DIRECTION})?(?:\sMOV\s)?(?P<movement>{DIRECTION})?"
            ),
        ),
        (
            "tower_surface_visibility",
            format!(r"\b(?P<location>TWR|SFC)\sVIS\s(?P<visibility>{VISIBILITY})\b"),
        ),
        (
            "variable_ceiling",
            r"\bCIG\s(?P<lower>\d{1,3})V(?P<upper>\d{1,3})\b".to_string(),
        ),
        (
            "variable_visibility",
            format!(r"\bVIS\s(?P<lower>{VISIBILITY})V(?P<upper>{VISIBILITY})\b"),
        ),
        ("virga", r"\bVIRGA\b".to_string()),
        (
            "wind_shift",
            r"\bWSHFT\s(?P<hours>\d{2})?(?P<minutes>\d{2})".to_string(),
        ),
    ]
}
