//! Roster management.
//!
//! Provides the `Roster` type, the single owner of the player's team.
//! A roster holds at most `ROSTER_CAPACITY` creatures, never two with
//! the same id, and keeps insertion order as display order. Analysis
//! code only ever sees it through `members()`.

use crate::config::ROSTER_CAPACITY;
use crate::creature::Creature;
use crate::error::TeamError;
use tracing::debug;

/// An ordered, id-unique team of at most six creatures.
///
/// # Examples
///
/// ```rust
/// use teamcov::{Creature, PokemonType, Roster};
///
/// let mut roster = Roster::new();
/// let pikachu = Creature::new(25, "pikachu", vec![PokemonType::Electric]).unwrap();
///
/// assert!(roster.add(pikachu.clone()));
/// assert!(!roster.add(pikachu.clone())); // duplicate id
/// assert_eq!(roster.len(), 1);
///
/// roster.remove(&pikachu);
/// assert!(roster.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    members: Vec<Creature>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a creature to the end of the roster.
    ///
    /// Returns `false` and leaves the roster untouched if the id is already
    /// present or the roster is full.
    pub fn add(&mut self, creature: Creature) -> bool {
        self.try_add(creature).is_ok()
    }

    /// Add a creature, reporting why it was rejected.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The creature was appended
    /// * `Err(TeamError::DuplicateMember)` - The id is already on the roster
    /// * `Err(TeamError::CapacityExceeded)` - The roster already holds six
    ///
    /// # Examples
    ///
    /// ```rust
    /// use teamcov::{Creature, PokemonType, Roster, TeamError};
    ///
    /// let mut roster = Roster::new();
    /// let eevee = Creature::new(133, "eevee", vec![PokemonType::Normal]).unwrap();
    ///
    /// roster.try_add(eevee.clone()).unwrap();
    /// assert_eq!(roster.try_add(eevee), Err(TeamError::DuplicateMember(133)));
    /// ```
    pub fn try_add(&mut self, creature: Creature) -> Result<(), TeamError> {
        if self.contains(creature.id()) {
            debug!(id = creature.id(), "rejected duplicate roster member");
            return Err(TeamError::DuplicateMember(creature.id()));
        }
        if self.is_full() {
            debug!(id = creature.id(), "rejected add to full roster");
            return Err(TeamError::CapacityExceeded {
                capacity: ROSTER_CAPACITY,
            });
        }
        debug!(id = creature.id(), name = creature.name(), "added roster member");
        self.members.push(creature);
        Ok(())
    }

    /// Remove every member sharing the creature's id. No-op if absent.
    pub fn remove(&mut self, creature: &Creature) {
        self.remove_id(creature.id());
    }

    /// Remove a member by id. No-op if absent.
    pub fn remove_id(&mut self, id: u32) {
        let before = self.members.len();
        self.members.retain(|member| member.id() != id);
        if self.members.len() != before {
            debug!(id, size = self.members.len(), "removed roster member");
        }
    }

    /// Empty the roster.
    pub fn clear(&mut self) {
        self.members.clear();
        debug!("cleared roster");
    }

    /// Replace the whole roster in one step.
    ///
    /// Creatures are added in order under the usual rules, so duplicates
    /// and anything past the sixth member are dropped.
    pub fn replace_with(&mut self, creatures: impl IntoIterator<Item = Creature>) {
        let mut next = Roster::new();
        for creature in creatures {
            // duplicates and overflow are skipped; try_add logs the reason
            if next.try_add(creature).is_err() {
                continue;
            }
        }
        debug!(size = next.len(), "replaced roster");
        *self = next;
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= ROSTER_CAPACITY
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.members.iter().any(|member| member.id() == id)
    }

    /// Read-only view of the members in display order.
    pub fn members(&self) -> &[Creature] {
        &self.members
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Creature> {
        self.members.iter()
    }

    /// Member ids in display order.
    pub fn ids(&self) -> Vec<u32> {
        self.members.iter().map(Creature::id).collect()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Creature;
    type IntoIter = std::slice::Iter<'a, Creature>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ptype::PokemonType;

    fn creature(id: u32) -> Creature {
        Creature::new(id, format!("creature-{}", id), vec![PokemonType::Normal]).unwrap()
    }

    #[test]
    fn test_add_preserves_order() {
        let mut roster = Roster::new();
        for id in [9, 3, 7] {
            assert!(roster.add(creature(id)));
        }
        assert_eq!(roster.ids(), vec![9, 3, 7]);
    }

    #[test]
    fn test_add_rejects_when_full() {
        let mut roster = Roster::new();
        for id in 1..=6 {
            assert!(roster.add(creature(id)));
        }
        assert!(roster.is_full());
        let before = roster.clone();

        assert!(!roster.add(creature(7)));
        assert_eq!(roster, before);
        assert_eq!(
            roster.try_add(creature(7)),
            Err(TeamError::CapacityExceeded { capacity: 6 })
        );
    }

    #[test]
    fn test_duplicate_checked_before_capacity() {
        let mut roster = Roster::new();
        for id in 1..=6 {
            roster.add(creature(id));
        }
        assert_eq!(roster.try_add(creature(3)), Err(TeamError::DuplicateMember(3)));
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut roster = Roster::new();
        for id in [1, 2, 3, 4] {
            roster.add(creature(id));
        }
        roster.remove(&creature(2));
        assert_eq!(roster.ids(), vec![1, 3, 4]);

        // absent id is a no-op
        roster.remove(&creature(99));
        assert_eq!(roster.ids(), vec![1, 3, 4]);
    }

    #[test]
    fn test_clear() {
        let mut roster = Roster::new();
        roster.add(creature(1));
        roster.add(creature(2));
        roster.clear();
        assert!(roster.is_empty());
        assert!(!roster.is_full());
    }

    #[test]
    fn test_replace_with_enforces_invariants() {
        let mut roster = Roster::new();
        roster.add(creature(100));
        roster.replace_with([1, 2, 2, 3, 4, 5, 6, 7].into_iter().map(creature));
        assert_eq!(roster.ids(), vec![1, 2, 3, 4, 5, 6]);
    }
}
