//! External collaborators.
//!
//! The engine never talks to the network itself. Hosts plug in a
//! `Catalog` (creature and evolution lookups) and a `RosterStore`
//! (shared roster records). Lookups report failure as `None`; the
//! engine decides what a missing answer means.
//!
//! In-memory implementations are provided for tests, demos and hosts
//! that preload the catalog.

use crate::api::NamedResource;
use crate::config::CatalogConfig;
use crate::creature::Creature;
use crate::error::TeamError;
use crate::evolution::{flatten_with, EvolutionNode, EvolutionReference};
use crate::sync::SharedRosterRecord;
use async_trait::async_trait;
use futures::future::join_all;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, warn};

/// Read-only creature catalog.
///
/// Implementations must be safe to call concurrently; lookups by id are
/// idempotent and may be memoized by the host.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Fetch one creature. `None` on network or decode failure.
    async fn fetch_creature(&self, id: u32) -> Option<Creature>;

    /// Fetch the evolution tree containing a species. `None` on failure.
    async fn fetch_evolution_tree(&self, species: &NamedResource) -> Option<EvolutionNode>;
}

/// Remote store of shared roster records.
#[async_trait]
pub trait RosterStore: Send + Sync {
    /// Persist a new record.
    async fn insert_record(&self, record: SharedRosterRecord) -> Result<(), TeamError>;

    /// All records, newest first.
    async fn list_records(&self) -> Result<Vec<SharedRosterRecord>, TeamError>;
}

/// A catalog held entirely in memory.
///
/// # Examples
///
/// ```rust
/// use teamcov::catalog::MemoryCatalog;
/// use teamcov::{Creature, PokemonType};
///
/// let mut catalog = MemoryCatalog::new();
/// catalog.insert_creature(Creature::new(25, "pikachu", vec![PokemonType::Electric]).unwrap());
/// assert_eq!(catalog.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    creatures: HashMap<u32, Creature>,
    trees: HashMap<String, EvolutionNode>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a set of creatures.
    pub fn from_creatures(creatures: impl IntoIterator<Item = Creature>) -> Self {
        let mut catalog = Self::new();
        for creature in creatures {
            catalog.insert_creature(creature);
        }
        catalog
    }

    pub fn insert_creature(&mut self, creature: Creature) {
        self.creatures.insert(creature.id(), creature);
    }

    /// Register a tree under the name of every species it contains.
    pub fn insert_tree(&mut self, root: EvolutionNode) {
        let mut names = Vec::new();
        collect_names(&root, &mut names);
        for name in names {
            self.trees.insert(name, root.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }
}

fn collect_names(node: &EvolutionNode, names: &mut Vec<String>) {
    names.push(node.species.name.clone());
    for child in &node.evolves_to {
        collect_names(child, names);
    }
}

#[async_trait]
impl Catalog for MemoryCatalog {
    async fn fetch_creature(&self, id: u32) -> Option<Creature> {
        self.creatures.get(&id).cloned()
    }

    async fn fetch_evolution_tree(&self, species: &NamedResource) -> Option<EvolutionNode> {
        self.trees.get(&species.name).cloned()
    }
}

/// A record store held in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<SharedRosterRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RosterStore for MemoryStore {
    async fn insert_record(&self, record: SharedRosterRecord) -> Result<(), TeamError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| TeamError::Store("record store lock poisoned".to_string()))?;
        if records.iter().any(|r| r.id == record.id) {
            return Err(TeamError::Store(format!("duplicate record id {}", record.id)));
        }
        records.push(record);
        Ok(())
    }

    async fn list_records(&self) -> Result<Vec<SharedRosterRecord>, TeamError> {
        let records = self
            .records
            .lock()
            .map_err(|_| TeamError::Store("record store lock poisoned".to_string()))?;
        let mut listed = records.clone();
        listed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listed)
    }
}

/// Fetch catalog ids `1..=limit` concurrently.
///
/// Failed lookups are dropped. The result is ordered by id regardless of
/// which fetch finished first.
pub async fn load_catalog<C: Catalog + ?Sized>(catalog: &C, limit: u32) -> Vec<Creature> {
    let fetches = (1..=limit).map(|id| async move { (id, catalog.fetch_creature(id).await) });
    let results = join_all(fetches).await;

    let mut creatures: Vec<Creature> = results
        .into_iter()
        .filter_map(|(id, fetched)| {
            if fetched.is_none() {
                warn!(id, "catalog entry unavailable");
            }
            fetched
        })
        .collect();
    creatures.sort_by_key(Creature::id);
    debug!(loaded = creatures.len(), requested = limit, "catalog loaded");
    creatures
}

/// Fetch and flatten the evolution line of a species.
///
/// Returns `TreeUnavailable` if the catalog has no tree for it.
pub async fn evolution_line<C: Catalog + ?Sized>(
    catalog: &C,
    species: &NamedResource,
    config: &CatalogConfig,
) -> Result<Vec<EvolutionReference>, TeamError> {
    let root = catalog
        .fetch_evolution_tree(species)
        .await
        .ok_or_else(|| TeamError::TreeUnavailable(species.name.clone()))?;
    Ok(flatten_with(&root, config))
}
