//! Strongly-typed record identifier
//!
//! Record ids are positive integers assigned sequentially by the record
//! service. Wrapping them keeps them from being confused with counts or
//! list positions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::error::{FinlogError, FinlogResult};

/// Identifier of a single ledger record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    /// Wrap a raw id value
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// The raw id value
    pub fn value(&self) -> u64 {
        self.0
    }

    /// The id that follows this one
    ///
    /// Fails instead of wrapping when the ledger already holds `u64::MAX`.
    pub fn next(&self) -> FinlogResult<Self> {
        self.0.checked_add(1).map(Self).ok_or_else(|| {
            FinlogError::Validation(format!("No record id left after {}", self.0))
        })
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}
