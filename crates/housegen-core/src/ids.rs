//! Listing identifiers.
//!
//! A listing id is the prefix `HF_` followed by a 1-based sequence number that
//! is unique across the whole store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Prefix shared by every listing id.
pub const HOUSE_ID_PREFIX: &str = "HF_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HouseId(u64);

impl HouseId {
    /// Build an id from its sequence number.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for sequence number 0.
    pub fn new(seq: u64) -> Result<Self, CoreError> {
        if seq == 0 {
            return Err(CoreError::Validation(
                "house id sequence numbers start at 1".into(),
            ));
        }
        Ok(Self(seq))
    }

    /// The id following an existing store of `existing` records.
    #[must_use]
    pub const fn after(existing: u64) -> Self {
        Self(existing + 1)
    }

    #[must_use]
    pub const fn seq(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for HouseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{HOUSE_ID_PREFIX}{}", self.0)
    }
}

impl FromStr for HouseId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidValue {
            kind: "HouseId",
            value: s.to_string(),
        };
        let seq = s
            .strip_prefix(HOUSE_ID_PREFIX)
            .and_then(|n| n.parse::<u64>().ok())
            .ok_or_else(invalid)?;
        Self::new(seq).map_err(|_| invalid())
    }
}

impl TryFrom<String> for HouseId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HouseId> for String {
    fn from(value: HouseId) -> Self {
        value.to_string()
    }
}
