//! Identity key for ledger entries
//!
//! Transactions have no separate numeric ID. The second-precision timestamp
//! of insertion identifies each entry and is stored on disk as
//! `YYYY-MM-DD HH:MM:SS`.

use chrono::{Duration, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Format used for the identity timestamp on disk and on the command line
pub const RECORDED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Insertion timestamp of a transaction, truncated to whole seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordedAt(NaiveDateTime);

impl RecordedAt {
    /// Create from a date-time, dropping sub-second precision
    pub fn new(at: NaiveDateTime) -> Self {
        Self(at.with_nanosecond(0).unwrap_or(at))
    }

    /// The next whole second
    pub fn next_second(&self) -> Self {
        Self(self.0 + Duration::seconds(1))
    }

    /// Parse from `YYYY-MM-DD HH:MM:SS`
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        NaiveDateTime::parse_from_str(s.trim(), RECORDED_AT_FORMAT).map(Self)
    }
}

impl fmt::Display for RecordedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(RECORDED_AT_FORMAT))
    }
}

impl FromStr for RecordedAt {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDateTime> for RecordedAt {
    fn from(at: NaiveDateTime) -> Self {
        Self::new(at)
    }
}

impl Serialize for RecordedAt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RecordedAt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
