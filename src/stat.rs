//! Base stat names.
//!
//! Provides the `StatName` type, the fixed set of six base stats every
//! catalog creature carries. Names order alphabetically by their catalog
//! identifier.

use crate::error::TeamError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::str::FromStr;

/// One of the six base stats.
///
/// # Examples
///
/// ```rust
/// use teamcov::StatName;
///
/// let sp_atk: StatName = "special-attack".parse().unwrap();
/// assert_eq!(sp_atk, StatName::SpecialAttack);
/// assert!(StatName::Attack < StatName::Hp);
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum StatName {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl StatName {
    /// All six stats, in catalog order.
    pub const ALL: [StatName; 6] = [
        StatName::Hp,
        StatName::Attack,
        StatName::Defense,
        StatName::SpecialAttack,
        StatName::SpecialDefense,
        StatName::Speed,
    ];

    /// Get the catalog identifier of this stat.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatName::Hp => "hp",
            StatName::Attack => "attack",
            StatName::Defense => "defense",
            StatName::SpecialAttack => "special-attack",
            StatName::SpecialDefense => "special-defense",
            StatName::Speed => "speed",
        }
    }
}

impl PartialOrd for StatName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for StatName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl FromStr for StatName {
    type Err = TeamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatName::ALL
            .iter()
            .copied()
            .find(|stat| stat.as_str() == s)
            .ok_or_else(|| TeamError::UnknownStat(s.to_string()))
    }
}

impl Serialize for StatName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for StatName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for StatName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}
