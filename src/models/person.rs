//! Person identity
//!
//! Counterparties are not stored separately; they are derived from the
//! `person` text of transactions. Names compare case-insensitively but keep
//! the casing they were entered with for display.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A counterparty name: a lowercase grouping key plus a display string
///
/// Equality, ordering and hashing use the key only, so `"Alice"` and
/// `"alice"` are the same person.
#[derive(Debug, Clone)]
pub struct PersonName {
    key: String,
    display: String,
}

impl PersonName {
    /// Create a person name from entered text (surrounding whitespace is trimmed)
    pub fn new(name: impl AsRef<str>) -> Self {
        let display = name.as_ref().trim().to_string();
        Self {
            key: normalize(&display),
            display,
        }
    }

    /// The case-insensitive grouping key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The casing shown to the user
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Whether `other` names this person
    pub fn matches(&self, other: &str) -> bool {
        self.key == normalize(other)
    }

    /// Case-insensitive substring match, used for search boxes
    pub fn contains(&self, fragment: &str) -> bool {
        self.key.contains(&normalize(fragment))
    }

    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}

/// Grouping key for a raw person string
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

impl PartialEq for PersonName {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for PersonName {}

impl Hash for PersonName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialOrd for PersonName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PersonName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

impl From<&str> for PersonName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
