//! Roster-wide summaries: average base stats and type distribution.

use crate::creature::Creature;
use crate::ptype::PokemonType;
use crate::stat::StatName;
use std::collections::BTreeMap;

/// Average each base stat across the roster, truncating toward zero.
///
/// An empty roster yields an empty map. A stat a creature does not
/// report counts as 0 for that creature.
///
/// # Examples
///
/// ```rust
/// use teamcov::{average_stats, Creature, PokemonType, StatName};
///
/// let a = Creature::new(1, "a", vec![PokemonType::Grass]).unwrap().with_stat(StatName::Hp, 45);
/// let b = Creature::new(2, "b", vec![PokemonType::Grass]).unwrap().with_stat(StatName::Hp, 60);
///
/// let averages = average_stats(&[a, b]);
/// assert_eq!(averages[&StatName::Hp], 52); // 52.5 truncated
/// ```
pub fn average_stats(roster: &[Creature]) -> BTreeMap<StatName, u32> {
    if roster.is_empty() {
        return BTreeMap::new();
    }
    let size = roster.len() as u64;

    StatName::ALL
        .iter()
        .map(|&stat| {
            let total: u64 = roster.iter().map(|c| u64::from(c.stat(stat))).sum();
            // integer division truncates; base stats fit easily in u32
            (stat, (total / size) as u32)
        })
        .collect()
}

/// Count how many roster members carry each type.
///
/// Types nobody carries are left out.
///
/// # Examples
///
/// ```rust
/// use teamcov::{type_distribution, Creature, PokemonType};
///
/// let team = [
///     Creature::new(6, "charizard", vec![PokemonType::Fire, PokemonType::Flying]).unwrap(),
///     Creature::new(59, "arcanine", vec![PokemonType::Fire]).unwrap(),
/// ];
/// let counts = type_distribution(&team);
/// assert_eq!(counts[&PokemonType::Fire], 2);
/// assert_eq!(counts[&PokemonType::Flying], 1);
/// assert!(!counts.contains_key(&PokemonType::Water));
/// ```
pub fn type_distribution(roster: &[Creature]) -> BTreeMap<PokemonType, usize> {
    let mut counts = BTreeMap::new();
    for creature in roster {
        for &ptype in creature.types() {
            *counts.entry(ptype).or_insert(0) += 1;
        }
    }
    counts
}
