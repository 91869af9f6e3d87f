// crates/ng-states-core/src/model/region.rs

use crate::error::StatesError;
use crate::text::normalize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of Nigeria's six geopolitical zones.
///
/// Serialized as the hyphenated zone name used in the dataset, e.g.
/// `"South-West"`. The derived `Ord` follows alphabetical order of those
/// names, so sorting zones sorts them by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "North-Central")]
    NorthCentral,
    #[serde(rename = "North-East")]
    NorthEast,
    #[serde(rename = "North-West")]
    NorthWest,
    #[serde(rename = "South-East")]
    SouthEast,
    #[serde(rename = "South-South")]
    SouthSouth,
    #[serde(rename = "South-West")]
    SouthWest,
}

impl Region {
    /// All zones, alphabetically.
    pub const ALL: [Region; 6] = [
        Region::NorthCentral,
        Region::NorthEast,
        Region::NorthWest,
        Region::SouthEast,
        Region::SouthSouth,
        Region::SouthWest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::NorthCentral => "North-Central",
            Region::NorthEast => "North-East",
            Region::NorthWest => "North-West",
            Region::SouthEast => "South-East",
            Region::SouthSouth => "South-South",
            Region::SouthWest => "South-West",
        }
    }

    /// Case-insensitive exact match against the zone name.
    #[inline]
    pub fn matches(&self, query: &str) -> bool {
        normalize(self.as_str()) == normalize(query)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = StatesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .iter()
            .copied()
            .find(|r| r.matches(s))
            .ok_or_else(|| StatesError::region_not_found(s))
    }
}
