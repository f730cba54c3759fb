//! Registry of remarks-annotation matchers
//!
//! The remarks section of a report carries supplemental coded observations
//! (peak wind, wind shift, sea-level pressure, ...). Each matcher here is a
//! standalone pattern producing zero or one named-group result; matchers
//! are order-independent and queried on demand by name, not run as a
//! pipeline. The registry is built once and read-only afterwards, so it is
//! safe to share across concurrent decodes.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

mod patterns;

#[cfg(test)]
pub mod tests;

static SHARED: LazyLock<RemarksLibrary> = LazyLock::new(RemarksLibrary::new);

/// A named-group result from one matcher
///
/// Groups that did not participate in the match are absent (`None`), which
/// is distinct from a group that matched empty text -- an optional hour
/// field that is missing is not the same as one that is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemarksMatch {
    /// The full substring the matcher recognized
    pub text: String,
    groups: HashMap<String, Option<String>>,
}

impl RemarksMatch {
    /// Value of a named group, `None` when the group did not participate
    pub fn group(&self, name: &str) -> Option<&str> {
        self.groups.get(name).and_then(|value| value.as_deref())
    }
}

/// The matcher registry
#[derive(Debug)]
pub struct RemarksLibrary {
    matchers: Vec<(&'static str, Regex)>,
}

impl RemarksLibrary {
    /// Build the registry from the pattern table
    pub fn new() -> Self {
        let matchers = patterns::pattern_sources()
            .into_iter()
            .map(|(name, source)| {
                let regex = Regex::new(&source)
                    .unwrap_or_else(|e| panic!("invalid remarks pattern '{name}': {e}"));
                (name, regex)
            })
            .collect();
        Self { matchers }
    }

    /// The process-wide shared registry
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// Registered matcher names, in registry order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.matchers.iter().map(|(name, _)| *name)
    }

    /// The compiled pattern registered under `name`
    pub fn matcher(&self, name: &str) -> Option<&Regex> {
        self.matchers
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, regex)| regex)
    }

    /// Run one matcher by name over the remarks text
    pub fn find(&self, name: &str, remarks: &str) -> Option<RemarksMatch> {
        let regex = self.matcher(name)?;
        let captures = regex.captures(remarks)?;

        let mut groups = HashMap::new();
        for group_name in regex.capture_names().flatten() {
            let value = captures
                .name(group_name)
                .map(|m| m.as_str().to_string());
            groups.insert(group_name.to_string(), value);
        }
        Some(RemarksMatch {
            text: captures.get(0).map(|m| m.as_str().to_string()).unwrap_or_default(),
            groups,
        })
    }

    /// Run every matcher over the remarks text, returning those that matched
    pub fn scan(&self, remarks: &str) -> Vec<(&'static str, RemarksMatch)> {
        self.matchers
            .iter()
            .filter_map(|(name, _)| self.find(name, remarks).map(|m| (*name, m)))
            .collect()
    }
}

impl Default for RemarksLibrary {
    fn default() -> Self {
        Self::new()
    }
}
