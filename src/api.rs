//! Catalog response shapes.
//!
//! Serde mirrors of the public REST catalog's JSON, plus conversions
//! into the engine's own types. Only the fields the engine reads are
//! modelled; everything else in a response is ignored.

use crate::creature::Creature;
use crate::error::TeamError;
use crate::evolution::{extract_id, EvolutionNode};
use crate::ptype::PokemonType;
use crate::stat::StatName;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A `{name, url}` pair, the catalog's universal link shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

impl NamedResource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// One page of the catalog listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ListPage {
    pub results: Vec<ListItem>,
}

/// A listing entry. Only the detail URL identifies it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListItem {
    pub name: String,
    pub url: String,
}

impl ListItem {
    /// Catalog id parsed from the detail URL.
    pub fn id(&self) -> Option<u32> {
        extract_id(&self.url)
    }
}

/// The creature detail response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiPokemon {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub types: Vec<ApiTypeSlot>,
    #[serde(default)]
    pub stats: Vec<ApiStat>,
    #[serde(default)]
    pub sprites: ApiSprites,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiTypeSlot {
    #[serde(rename = "type")]
    pub ptype: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiSprites {
    pub front_default: Option<String>,
}

impl ApiPokemon {
    /// Convert into a `Creature`.
    ///
    /// Unknown type names fail the conversion; unknown stat names are
    /// skipped with a warning.
    pub fn into_creature(self) -> Result<Creature, TeamError> {
        let types = self
            .types
            .iter()
            .map(|slot| slot.ptype.name.parse::<PokemonType>())
            .collect::<Result<Vec<_>, _>>()?;

        let mut creature = Creature::new(self.id, self.name, types)?;
        for entry in &self.stats {
            match entry.stat.name.parse::<StatName>() {
                Ok(stat) => creature = creature.with_stat(stat, entry.base_stat),
                Err(_) => warn!(id = self.id, stat = %entry.stat.name, "skipping unknown stat"),
            }
        }
        if let Some(url) = self.sprites.front_default {
            creature = creature.with_sprite_url(url);
        }
        Ok(creature)
    }
}

/// The species response; only the link to its evolution chain is used.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSpecies {
    pub evolution_chain: ApiUrl,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiUrl {
    pub url: String,
}

/// The evolution chain response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEvolutionChain {
    pub chain: EvolutionNode,
}

/// Decode a creature detail response body.
///
/// # Examples
///
/// ```rust
/// use teamcov::api::decode_pokemon;
/// use teamcov::{PokemonType, StatName};
///
/// let body = r#"{
///     "id": 25,
///     "name": "pikachu",
///     "types": [{"slot": 1, "type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}}],
///     "stats": [{"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/"}}],
///     "sprites": {"front_default": null}
/// }"#;
///
/// let pikachu = decode_pokemon(body).unwrap();
/// assert_eq!(pikachu.types(), &[PokemonType::Electric]);
/// assert_eq!(pikachu.stat(StatName::Hp), 35);
/// ```
pub fn decode_pokemon(body: &str) -> Result<Creature, TeamError> {
    serde_json::from_str::<ApiPokemon>(body)?.into_creature()
}

/// Decode an evolution chain response body into its root stage.
pub fn decode_evolution_chain(body: &str) -> Result<EvolutionNode, TeamError> {
    Ok(serde_json::from_str::<ApiEvolutionChain>(body)?.chain)
}
