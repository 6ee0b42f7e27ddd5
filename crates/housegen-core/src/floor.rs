//! Floor label: either a named tier or a literal storey count.
//!
//! Low-rise buildings on a rotating subset of coverage indices are labeled with
//! their literal height (`共5层`) instead of a tier. The label round-trips
//! through the same string field either way.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::enums::FloorTier;
use crate::errors::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FloorLabel {
    Tier(FloorTier),
    /// Literal total storey count, rendered `共N层`.
    Storeys(u32),
}

impl FloorLabel {
    /// The named tier, if this label carries one.
    #[must_use]
    pub const fn tier(self) -> Option<FloorTier> {
        match self {
            Self::Tier(tier) => Some(tier),
            Self::Storeys(_) => None,
        }
    }
}

impl fmt::Display for FloorLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tier(tier) => f.write_str(tier.as_str()),
            Self::Storeys(n) => write!(f, "共{n}层"),
        }
    }
}

impl FromStr for FloorLabel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(tier) = s.parse::<FloorTier>() {
            return Ok(Self::Tier(tier));
        }

        s.strip_prefix('共')
            .and_then(|rest| rest.strip_suffix('层'))
            .and_then(|n| n.parse::<u32>().ok())
            .filter(|n| *n > 0)
            .map(Self::Storeys)
            .ok_or_else(|| CoreError::InvalidValue {
                kind: "FloorLabel",
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for FloorLabel {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FloorLabel> for String {
    fn from(value: FloorLabel) -> Self {
        value.to_string()
    }
}
