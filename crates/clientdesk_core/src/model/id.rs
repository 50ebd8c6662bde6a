//! Record identifiers and boundary parsing.
//!
//! # Responsibility
//! - Define the positive integer identity shared by every entity type.
//! - Turn caller-supplied strings/integers into ids, failing fast.
//!
//! # Invariants
//! - A `RecordId` is always `>= 1`.
//! - Parsing never yields a sentinel id for malformed input.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Positive integer identifier, unique within one entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct RecordId(u64);

impl RecordId {
    /// Smallest id a store ever assigns.
    pub const FIRST: RecordId = RecordId(1);

    /// Builds an id from a raw value, rejecting zero.
    pub fn new(value: u64) -> Result<Self, InvalidRecordId> {
        if value == 0 {
            return Err(InvalidRecordId::NotPositive(value.to_string()));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// Returns the id following this one, or `None` past `u64::MAX`.
    pub(crate) fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<RecordId> for u64 {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

impl TryFrom<u64> for RecordId {
    type Error = InvalidRecordId;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for RecordId {
    type Error = InvalidRecordId;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map_err(|_| InvalidRecordId::NotPositive(value.to_string()))
            .and_then(Self::new)
    }
}

impl FromStr for RecordId {
    type Err = InvalidRecordId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidRecordId::Empty);
        }
        if let Some(rest) = trimmed.strip_prefix('-') {
            if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) {
                return Err(InvalidRecordId::NotPositive(trimmed.to_string()));
            }
        }
        let value = trimmed
            .parse::<u64>()
            .map_err(|_| InvalidRecordId::NotNumeric(trimmed.to_string()))?;
        Self::new(value)
    }
}

/// Rejection reasons for caller-supplied ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidRecordId {
    Empty,
    NotNumeric(String),
    NotPositive(String),
}

impl Display for InvalidRecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "record id cannot be empty"),
            Self::NotNumeric(value) => write!(f, "record id `{value}` is not numeric"),
            Self::NotPositive(value) => write!(f, "record id `{value}` must be positive"),
        }
    }
}

impl Error for InvalidRecordId {}
