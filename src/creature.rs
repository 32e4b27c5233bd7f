//! Catalog creatures.
//!
//! A `Creature` is an immutable catalog entry: a stable positive id, a
//! name, one or two types and its base stats. Type order is kept for
//! display; analysis treats it as a set.

use crate::error::TeamError;
use crate::ptype::PokemonType;
use crate::stat::StatName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An immutable catalog entry.
///
/// # Examples
///
/// ```rust
/// use teamcov::{Creature, PokemonType, StatName};
///
/// let gyarados = Creature::new(130, "gyarados", vec![PokemonType::Water, PokemonType::Flying])
///     .unwrap()
///     .with_stat(StatName::Hp, 95)
///     .with_stat(StatName::Attack, 125);
///
/// assert_eq!(gyarados.id(), 130);
/// assert!(gyarados.has_type(PokemonType::Flying));
/// assert_eq!(gyarados.stat(StatName::Attack), 125);
/// assert_eq!(gyarados.stat(StatName::Speed), 0);
///
/// // Zero or three types are rejected
/// assert!(Creature::new(1, "missingno", vec![]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CreatureData")]
pub struct Creature {
    id: u32,
    name: String,
    types: Vec<PokemonType>,
    stats: BTreeMap<StatName, u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sprite_url: Option<String>,
}

/// Unvalidated wire form of a `Creature`.
#[derive(Deserialize)]
struct CreatureData {
    id: u32,
    name: String,
    types: Vec<PokemonType>,
    #[serde(default)]
    stats: BTreeMap<StatName, u32>,
    #[serde(default)]
    sprite_url: Option<String>,
}

impl TryFrom<CreatureData> for Creature {
    type Error = TeamError;

    fn try_from(data: CreatureData) -> Result<Self, Self::Error> {
        let mut creature = Creature::new(data.id, data.name, data.types)?;
        creature.stats = data.stats;
        creature.sprite_url = data.sprite_url;
        Ok(creature)
    }
}

impl Creature {
    /// Create a creature with no stats recorded yet.
    ///
    /// Fails with `InvalidCreature` if the id is zero, if there are not
    /// one or two types, or if the same type is listed twice.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        types: Vec<PokemonType>,
    ) -> Result<Self, TeamError> {
        let invalid = |reason: &str| TeamError::InvalidCreature {
            id,
            reason: reason.to_string(),
        };
        if id == 0 {
            return Err(invalid("id must be positive"));
        }
        match types.as_slice() {
            [] => return Err(invalid("a creature needs at least one type")),
            [a, b] if a == b => return Err(invalid("the same type is listed twice")),
            [_] | [_, _] => {}
            _ => return Err(invalid("a creature has at most two types")),
        }
        Ok(Self {
            id,
            name: name.into(),
            types,
            stats: BTreeMap::new(),
            sprite_url: None,
        })
    }

    /// Set a base stat value.
    pub fn with_stat(mut self, stat: StatName, value: u32) -> Self {
        self.stats.insert(stat, value);
        self
    }

    /// Set all six base stats in catalog order
    /// (hp, attack, defense, special-attack, special-defense, speed).
    pub fn with_base_stats(mut self, values: [u32; 6]) -> Self {
        for (stat, value) in StatName::ALL.into_iter().zip(values) {
            self.stats.insert(stat, value);
        }
        self
    }

    /// Attach a sprite image URL.
    pub fn with_sprite_url(mut self, url: impl Into<String>) -> Self {
        self.sprite_url = Some(url.into());
        self
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Types in display order.
    pub fn types(&self) -> &[PokemonType] {
        &self.types
    }

    pub fn has_type(&self, ptype: PokemonType) -> bool {
        self.types.contains(&ptype)
    }

    /// Base value of a stat, 0 when the catalog did not report it.
    pub fn stat(&self, stat: StatName) -> u32 {
        self.stats.get(&stat).copied().unwrap_or(0)
    }

    pub fn stats(&self) -> &BTreeMap<StatName, u32> {
        &self.stats
    }

    pub fn sprite_url(&self) -> Option<&str> {
        self.sprite_url.as_deref()
    }
}
