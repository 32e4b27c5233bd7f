//! Evolution line flattening.
//!
//! The catalog delivers a species' evolution chain as a tree: a root
//! stage with zero or more branches. Display wants a flat line, so the
//! tree is walked pre-order (each stage before its descendants, siblings
//! in source order). Each stage's species reference is repaired into a
//! numeric catalog id and a detail URL on the way.
//!
//! Chains are at most a handful of levels deep, so the walk is plainly
//! recursive.

use crate::api::NamedResource;
use crate::config::CatalogConfig;
use crate::error::TeamError;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One stage of an evolution tree as delivered by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionNode {
    /// Species reference; its URL ends in the species id.
    pub species: NamedResource,

    /// Direct evolutions, in source order.
    #[serde(default)]
    pub evolves_to: Vec<EvolutionNode>,
}

impl EvolutionNode {
    /// Create a leaf stage.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            species: NamedResource::new(name, url),
            evolves_to: Vec::new(),
        }
    }

    /// Append a direct evolution.
    pub fn with_child(mut self, child: EvolutionNode) -> Self {
        self.evolves_to.push(child);
        self
    }
}

/// A repaired, display-ready evolution stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionReference {
    pub name: String,

    /// Numeric catalog id taken from the species reference.
    pub id: u32,

    /// Creature detail endpoint for `id`.
    pub url: String,

    /// Sprite image for `id`.
    pub sprite_url: String,
}

/// Extract the numeric id from the last non-empty path segment of a URL.
///
/// Returns `None` when there is no such segment or it is not a positive
/// integer.
///
/// # Examples
///
/// ```rust
/// use teamcov::evolution::extract_id;
///
/// assert_eq!(extract_id("https://pokeapi.co/api/v2/pokemon-species/133/"), Some(133));
/// assert_eq!(extract_id("https://pokeapi.co/api/v2/pokemon-species/133"), Some(133));
/// assert_eq!(extract_id("https://pokeapi.co/api/v2/pokemon-species/"), None);
/// assert_eq!(extract_id(""), None);
/// ```
pub fn extract_id(url: &str) -> Option<u32> {
    url.rsplit('/')
        .find(|segment| !segment.is_empty())
        .and_then(|segment| segment.parse::<u32>().ok())
        .filter(|&id| id > 0)
}

/// Flatten an evolution tree using the default catalog endpoints.
///
/// # Examples
///
/// ```rust
/// use teamcov::evolution::{flatten, EvolutionNode};
///
/// let base = "https://pokeapi.co/api/v2/pokemon-species";
/// let tree = EvolutionNode::new("eevee", format!("{}/133/", base))
///     .with_child(EvolutionNode::new("vaporeon", format!("{}/134/", base)))
///     .with_child(EvolutionNode::new("jolteon", format!("{}/135/", base)));
///
/// let line = flatten(&tree);
/// let ids: Vec<u32> = line.iter().map(|r| r.id).collect();
/// assert_eq!(ids, vec![133, 134, 135]);
/// assert_eq!(line[1].url, "https://pokeapi.co/api/v2/pokemon/134/");
/// ```
pub fn flatten(root: &EvolutionNode) -> Vec<EvolutionReference> {
    flatten_with(root, &CatalogConfig::default())
}

/// Flatten an evolution tree, building URLs from `config`.
///
/// Stages whose reference carries no usable id are dropped (their
/// descendants are still visited).
pub fn flatten_with(root: &EvolutionNode, config: &CatalogConfig) -> Vec<EvolutionReference> {
    let mut line = Vec::new();
    visit(root, config, &mut line);
    line
}

fn visit(node: &EvolutionNode, config: &CatalogConfig, line: &mut Vec<EvolutionReference>) {
    match extract_id(&node.species.url) {
        Some(id) => line.push(EvolutionReference {
            name: node.species.name.clone(),
            id,
            url: config.detail_url(id),
            sprite_url: config.sprite_url(id),
        }),
        None => warn!(
            species = %node.species.name,
            error = %TeamError::MalformedTreeNode(node.species.url.clone()),
            "dropping evolution stage with malformed reference"
        ),
    }

    for child in &node.evolves_to {
        visit(child, config, line);
    }
}
