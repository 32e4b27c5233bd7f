//! Shared roster records.
//!
//! A roster is shared by uploading a named record that lists its member
//! ids in display order. Loading a shared record rebuilds a roster from
//! those ids: ids already known locally are reused, the rest are fetched
//! concurrently, and the result is laid out in the record's order no
//! matter which fetch finished first. Ids that cannot be resolved are
//! dropped; the rest of the roster still loads.

use crate::catalog::{Catalog, RosterStore};
use crate::config::ROSTER_CAPACITY;
use crate::creature::Creature;
use crate::error::TeamError;
use crate::roster::Roster;
use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::future::Future;
use tracing::{info, warn};
use uuid::Uuid;

/// A named roster as persisted by the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedRosterRecord {
    pub id: Uuid,

    /// Display name of the roster.
    pub team_name: String,

    /// Display name of whoever shared it.
    pub trainer_name: String,

    /// Member ids in display order.
    pub pokemon_ids: Vec<u32>,

    pub created_at: DateTime<Utc>,
}

impl SharedRosterRecord {
    /// Create a record stamped with a fresh id and the current time.
    pub fn new(
        team_name: impl Into<String>,
        trainer_name: impl Into<String>,
        pokemon_ids: Vec<u32>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            team_name: team_name.into(),
            trainer_name: trainer_name.into(),
            pokemon_ids,
            created_at: Utc::now(),
        }
    }
}

/// Build the record for sharing a roster.
///
/// Takes a `Roster` rather than a bare slice so the record always carries
/// at most `ROSTER_CAPACITY` distinct ids.
///
/// # Returns
///
/// * `Err(TeamError::InvalidInput)` - `name` or `submitter` is blank
/// * `Err(TeamError::EmptyRoster)` - the roster has no members
/// * `Ok(record)` - ids in roster order
///
/// # Examples
///
/// ```rust
/// use teamcov::sync::build_upload_record;
/// use teamcov::{Creature, PokemonType, Roster, TeamError};
///
/// let mut team = Roster::new();
/// assert_eq!(build_upload_record(&team, "Empty", "Oak"), Err(TeamError::EmptyRoster));
///
/// team.add(Creature::new(9, "blastoise", vec![PokemonType::Water]).unwrap());
/// team.add(Creature::new(3, "venusaur", vec![PokemonType::Grass, PokemonType::Poison]).unwrap());
///
/// let record = build_upload_record(&team, "Kanto Starters", "Oak").unwrap();
/// assert_eq!(record.pokemon_ids, vec![9, 3]);
/// ```
pub fn build_upload_record(
    roster: &Roster,
    name: &str,
    submitter: &str,
) -> Result<SharedRosterRecord, TeamError> {
    if name.trim().is_empty() {
        return Err(TeamError::InvalidInput("roster name is empty".to_string()));
    }
    if submitter.trim().is_empty() {
        return Err(TeamError::InvalidInput("submitter name is empty".to_string()));
    }
    if roster.is_empty() {
        return Err(TeamError::EmptyRoster);
    }
    Ok(SharedRosterRecord::new(name, submitter, roster.ids()))
}

/// Rebuild a roster's members from a shared record.
///
/// Ids found in `known` are reused. Every other id is passed to
/// `fetch_by_id`; those lookups run concurrently and are all awaited
/// before the result is assembled. A lookup that yields `None` drops
/// that id. The output follows `record.pokemon_ids` order, skips
/// repeated ids and stops at `ROSTER_CAPACITY` members.
///
/// Every distinct missing id is fetched, including ids past the first
/// `ROSTER_CAPACITY`. A record with many ids costs one lookup per id, and
/// in exchange a failed early lookup is backfilled by the next resolvable
/// id in the record.
pub async fn reconstruct_roster<F, Fut>(
    record: &SharedRosterRecord,
    known: &[Creature],
    fetch_by_id: F,
) -> Vec<Creature>
where
    F: Fn(u32) -> Fut,
    Fut: Future<Output = Option<Creature>>,
{
    let mut resolved: HashMap<u32, Creature> = HashMap::new();
    let mut missing = Vec::new();
    let mut seen = HashSet::new();

    for &id in &record.pokemon_ids {
        if !seen.insert(id) {
            continue;
        }
        match known.iter().find(|c| c.id() == id) {
            Some(creature) => {
                resolved.insert(id, creature.clone());
            }
            None => missing.push(id),
        }
    }

    let fetches = missing.iter().map(|&id| {
        let fetch = fetch_by_id(id);
        async move { (id, fetch.await) }
    });

    for (id, fetched) in join_all(fetches).await {
        match fetched {
            Some(creature) if creature.id() == id => {
                resolved.insert(id, creature);
            }
            Some(creature) => warn!(
                requested = id,
                received = creature.id(),
                "catalog returned a different creature, dropping"
            ),
            None => warn!(error = %TeamError::UnresolvedReference(id), "dropping unresolved member"),
        }
    }

    let mut members = Vec::with_capacity(ROSTER_CAPACITY);
    let mut placed = HashSet::new();
    for id in &record.pokemon_ids {
        if members.len() == ROSTER_CAPACITY {
            break;
        }
        if !placed.insert(*id) {
            continue;
        }
        if let Some(creature) = resolved.remove(id) {
            members.push(creature);
        }
    }
    members
}

/// Build a record from the roster and insert it into the store.
pub async fn upload_roster<S: RosterStore + ?Sized>(
    store: &S,
    roster: &Roster,
    name: &str,
    submitter: &str,
) -> Result<SharedRosterRecord, TeamError> {
    let record = build_upload_record(roster, name, submitter)?;
    store.insert_record(record.clone()).await?;
    info!(
        record = %record.id,
        team = %record.team_name,
        members = record.pokemon_ids.len(),
        "shared roster uploaded"
    );
    Ok(record)
}

/// All shared rosters, newest first.
pub async fn list_shared_rosters<S: RosterStore + ?Sized>(
    store: &S,
) -> Result<Vec<SharedRosterRecord>, TeamError> {
    store.list_records().await
}

/// Replace `roster` with the members of a shared record.
///
/// Missing members are fetched from `catalog`. The roster is only touched
/// once, after every fetch has settled. Returns how many members loaded.
pub async fn load_shared_roster<C: Catalog + ?Sized>(
    roster: &mut Roster,
    record: &SharedRosterRecord,
    known: &[Creature],
    catalog: &C,
) -> usize {
    let members = reconstruct_roster(record, known, |id| catalog.fetch_creature(id)).await;
    let loaded = members.len();
    roster.replace_with(members);
    info!(
        record = %record.id,
        requested = record.pokemon_ids.len(),
        loaded,
        "shared roster loaded"
    );
    loaded
}
