//! Combat type module.
//!
//! Provides the `PokemonType` enumeration: the closed set of 18 combat
//! types. Each type is identified on the wire by its lowercase catalog
//! name ("fire", "water", ...), and types order by that name so that
//! every report keyed by type comes out alphabetically.

use crate::error::TeamError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::str::FromStr;

/// One of the 18 combat types.
///
/// # Examples
///
/// ```rust
/// use teamcov::PokemonType;
///
/// let fire: PokemonType = "fire".parse().unwrap();
/// assert_eq!(fire, PokemonType::Fire);
/// assert_eq!(fire.as_str(), "fire");
///
/// // Ordering follows the identifier, not declaration order
/// assert!(PokemonType::Bug < PokemonType::Normal);
/// assert!("shadow".parse::<PokemonType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl PokemonType {
    /// All 18 types, in catalog order.
    pub const ALL: [PokemonType; 18] = [
        PokemonType::Normal,
        PokemonType::Fire,
        PokemonType::Water,
        PokemonType::Electric,
        PokemonType::Grass,
        PokemonType::Ice,
        PokemonType::Fighting,
        PokemonType::Poison,
        PokemonType::Ground,
        PokemonType::Flying,
        PokemonType::Psychic,
        PokemonType::Bug,
        PokemonType::Rock,
        PokemonType::Ghost,
        PokemonType::Dragon,
        PokemonType::Dark,
        PokemonType::Steel,
        PokemonType::Fairy,
    ];

    /// Get the lowercase catalog identifier for this type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use teamcov::PokemonType;
    ///
    /// assert_eq!(PokemonType::Psychic.as_str(), "psychic");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            PokemonType::Normal => "normal",
            PokemonType::Fire => "fire",
            PokemonType::Water => "water",
            PokemonType::Electric => "electric",
            PokemonType::Grass => "grass",
            PokemonType::Ice => "ice",
            PokemonType::Fighting => "fighting",
            PokemonType::Poison => "poison",
            PokemonType::Ground => "ground",
            PokemonType::Flying => "flying",
            PokemonType::Psychic => "psychic",
            PokemonType::Bug => "bug",
            PokemonType::Rock => "rock",
            PokemonType::Ghost => "ghost",
            PokemonType::Dragon => "dragon",
            PokemonType::Dark => "dark",
            PokemonType::Steel => "steel",
            PokemonType::Fairy => "fairy",
        }
    }
}

impl PartialOrd for PokemonType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PokemonType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl FromStr for PokemonType {
    type Err = TeamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PokemonType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| TeamError::UnknownType(s.to_string()))
    }
}

impl Serialize for PokemonType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PokemonType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for PokemonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}
