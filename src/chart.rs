//! Type interaction chart.
//!
//! The `TypeChart` records, for every attacking type, the damage
//! multiplier it applies to each defending type that is not neutral.
//! Absent entries are neutral (1.0). The standard chart is built once
//! and shared by every reader for the lifetime of the process.

use crate::error::TeamError;
use crate::ptype::PokemonType;
use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

/// A damage multiplier from the fixed set {0, 0.25, 0.5, 1, 2, 4}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Multiplier {
    Immune,
    QuarterDamage,
    HalfDamage,
    Neutral,
    Double,
    Quadruple,
}

impl Multiplier {
    /// Convert a raw multiplier, rejecting anything outside the fixed set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use teamcov::chart::Multiplier;
    ///
    /// assert_eq!(Multiplier::from_f64(0.5), Some(Multiplier::HalfDamage));
    /// assert_eq!(Multiplier::from_f64(3.0), None);
    /// ```
    pub fn from_f64(value: f64) -> Option<Self> {
        match value {
            v if v == 0.0 => Some(Multiplier::Immune),
            v if v == 0.25 => Some(Multiplier::QuarterDamage),
            v if v == 0.5 => Some(Multiplier::HalfDamage),
            v if v == 1.0 => Some(Multiplier::Neutral),
            v if v == 2.0 => Some(Multiplier::Double),
            v if v == 4.0 => Some(Multiplier::Quadruple),
            _ => None,
        }
    }

    /// The raw damage factor.
    pub fn value(self) -> f64 {
        match self {
            Multiplier::Immune => 0.0,
            Multiplier::QuarterDamage => 0.25,
            Multiplier::HalfDamage => 0.5,
            Multiplier::Neutral => 1.0,
            Multiplier::Double => 2.0,
            Multiplier::Quadruple => 4.0,
        }
    }

    /// Signed coverage weight: resistances score positive, weaknesses negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use teamcov::chart::Multiplier;
    ///
    /// assert_eq!(Multiplier::Immune.weight(), 2.0);
    /// assert_eq!(Multiplier::Neutral.weight(), 0.0);
    /// assert_eq!(Multiplier::Quadruple.weight(), -2.0);
    /// ```
    pub fn weight(self) -> f64 {
        match self {
            Multiplier::Immune => 2.0,
            Multiplier::QuarterDamage => 1.5,
            Multiplier::HalfDamage => 1.0,
            Multiplier::Neutral => 0.0,
            Multiplier::Double => -1.0,
            Multiplier::Quadruple => -2.0,
        }
    }
}

impl Serialize for Multiplier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value().serialize(serializer)
    }
}

/// Attacking type → defending type → non-neutral multiplier.
///
/// # Examples
///
/// ```rust
/// use teamcov::{PokemonType, TypeChart};
/// use teamcov::chart::Multiplier;
///
/// let chart = TypeChart::standard();
/// assert_eq!(
///     chart.multiplier(PokemonType::Electric, PokemonType::Ground),
///     Multiplier::Immune
/// );
/// assert_eq!(
///     chart.multiplier(PokemonType::Normal, PokemonType::Fire),
///     Multiplier::Neutral
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TypeChart {
    interactions: BTreeMap<PokemonType, BTreeMap<PokemonType, Multiplier>>,
}

use PokemonType::*;

const STANDARD_INTERACTIONS: &[(PokemonType, &[(PokemonType, f64)])] = &[
    (Normal, &[(Rock, 0.5), (Ghost, 0.0), (Steel, 0.5)]),
    (
        Fire,
        &[
            (Fire, 0.5),
            (Water, 0.5),
            (Grass, 2.0),
            (Ice, 2.0),
            (Bug, 2.0),
            (Rock, 0.5),
            (Dragon, 0.5),
            (Steel, 2.0),
        ],
    ),
    (
        Water,
        &[
            (Fire, 2.0),
            (Water, 0.5),
            (Grass, 0.5),
            (Ground, 2.0),
            (Rock, 2.0),
            (Dragon, 0.5),
        ],
    ),
    (
        Electric,
        &[
            (Water, 2.0),
            (Electric, 0.5),
            (Grass, 0.5),
            (Ground, 0.0),
            (Flying, 2.0),
            (Dragon, 0.5),
        ],
    ),
    (
        Grass,
        &[
            (Fire, 0.5),
            (Water, 2.0),
            (Grass, 0.5),
            (Poison, 0.5),
            (Ground, 2.0),
            (Flying, 0.5),
            (Bug, 0.5),
            (Rock, 2.0),
            (Dragon, 0.5),
            (Steel, 0.5),
        ],
    ),
    (
        Ice,
        &[
            (Fire, 0.5),
            (Water, 0.5),
            (Grass, 2.0),
            (Ice, 0.5),
            (Ground, 2.0),
            (Flying, 2.0),
            (Dragon, 2.0),
            (Steel, 0.5),
        ],
    ),
    (
        Fighting,
        &[
            (Normal, 2.0),
            (Ice, 2.0),
            (Poison, 0.5),
            (Flying, 0.5),
            (Psychic, 0.5),
            (Bug, 0.5),
            (Rock, 2.0),
            (Ghost, 0.0),
            (Dark, 2.0),
            (Steel, 2.0),
            (Fairy, 0.5),
        ],
    ),
    (
        Poison,
        &[
            (Grass, 2.0),
            (Poison, 0.5),
            (Ground, 0.5),
            (Rock, 0.5),
            (Ghost, 0.5),
            (Steel, 0.0),
            (Fairy, 2.0),
        ],
    ),
    (
        Ground,
        &[
            (Fire, 2.0),
            (Electric, 2.0),
            (Grass, 0.5),
            (Poison, 2.0),
            (Flying, 0.0),
            (Bug, 0.5),
            (Rock, 2.0),
            (Steel, 2.0),
        ],
    ),
    (
        Flying,
        &[
            (Electric, 0.5),
            (Grass, 2.0),
            (Fighting, 2.0),
            (Bug, 2.0),
            (Rock, 0.5),
            (Steel, 0.5),
        ],
    ),
    (
        Psychic,
        &[
            (Fighting, 2.0),
            (Poison, 2.0),
            (Psychic, 0.5),
            (Dark, 0.0),
            (Steel, 0.5),
        ],
    ),
    (
        Bug,
        &[
            (Fire, 0.5),
            (Grass, 2.0),
            (Fighting, 0.5),
            (Poison, 0.5),
            (Flying, 0.5),
            (Psychic, 2.0),
            (Ghost, 0.5),
            (Dark, 2.0),
            (Steel, 0.5),
            (Fairy, 0.5),
        ],
    ),
    (
        Rock,
        &[
            (Fire, 2.0),
            (Ice, 2.0),
            (Fighting, 0.5),
            (Ground, 0.5),
            (Flying, 2.0),
            (Bug, 2.0),
            (Steel, 0.5),
        ],
    ),
    (
        Ghost,
        &[(Normal, 0.0), (Psychic, 2.0), (Ghost, 2.0), (Dark, 0.5)],
    ),
    (Dragon, &[(Dragon, 2.0), (Steel, 0.5), (Fairy, 0.0)]),
    (
        Dark,
        &[
            (Fighting, 0.5),
            (Psychic, 2.0),
            (Ghost, 2.0),
            (Dark, 0.5),
            (Fairy, 0.5),
        ],
    ),
    (
        Steel,
        &[
            (Fire, 0.5),
            (Water, 0.5),
            (Electric, 0.5),
            (Ice, 2.0),
            (Rock, 2.0),
            (Steel, 0.5),
            (Fairy, 2.0),
        ],
    ),
    (
        Fairy,
        &[
            (Fire, 0.5),
            (Fighting, 2.0),
            (Poison, 0.5),
            (Dragon, 2.0),
            (Dark, 2.0),
            (Steel, 0.5),
        ],
    ),
];

static STANDARD_CHART: OnceLock<TypeChart> = OnceLock::new();

impl TypeChart {
    /// Create an empty chart (every interaction neutral).
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in standard chart, shared process-wide.
    pub fn standard() -> &'static TypeChart {
        STANDARD_CHART.get_or_init(|| {
            let mut chart = TypeChart::new();
            for (attacking, row) in STANDARD_INTERACTIONS {
                for (defending, value) in row.iter() {
                    // the table above only holds valid multipliers
                    if let Some(multiplier) = Multiplier::from_f64(*value) {
                        chart.insert(*attacking, *defending, multiplier);
                    }
                }
            }
            chart
        })
    }

    /// Build a chart from raw identifiers and factors.
    ///
    /// Every identifier must be one of the 18 types and every factor one of
    /// {0, 0.25, 0.5, 1, 2, 4}. Neutral entries are accepted and dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use teamcov::{PokemonType, TypeChart};
    /// use teamcov::chart::Multiplier;
    /// use std::collections::HashMap;
    ///
    /// let mut row = HashMap::new();
    /// row.insert("water".to_string(), 0.25);
    /// let mut raw = HashMap::new();
    /// raw.insert("fire".to_string(), row);
    ///
    /// let chart = TypeChart::from_raw(&raw).unwrap();
    /// assert_eq!(
    ///     chart.multiplier(PokemonType::Fire, PokemonType::Water),
    ///     Multiplier::QuarterDamage
    /// );
    /// ```
    pub fn from_raw(raw: &HashMap<String, HashMap<String, f64>>) -> Result<Self, TeamError> {
        let mut chart = TypeChart::new();
        for (attacking, row) in raw {
            let attacking: PokemonType = attacking.parse()?;
            for (defending, value) in row {
                let defending: PokemonType = defending.parse()?;
                let multiplier =
                    Multiplier::from_f64(*value).ok_or(TeamError::InvalidMultiplier {
                        attacking,
                        defending,
                        value: *value,
                    })?;
                chart.insert(attacking, defending, multiplier);
            }
        }
        Ok(chart)
    }

    /// Load a chart from JSON of the form `{"fire": {"water": 0.5, ...}, ...}`.
    pub fn from_json(json: &str) -> Result<Self, TeamError> {
        let raw: HashMap<String, HashMap<String, f64>> = serde_json::from_str(json)?;
        Self::from_raw(&raw)
    }

    /// Set one interaction. Neutral removes any existing entry.
    pub fn insert(&mut self, attacking: PokemonType, defending: PokemonType, multiplier: Multiplier) {
        if multiplier == Multiplier::Neutral {
            if let Some(row) = self.interactions.get_mut(&attacking) {
                row.remove(&defending);
                if row.is_empty() {
                    self.interactions.remove(&attacking);
                }
            }
            return;
        }
        self.interactions
            .entry(attacking)
            .or_default()
            .insert(defending, multiplier);
    }

    /// Look up a multiplier; absent entries are neutral.
    pub fn multiplier(&self, attacking: PokemonType, defending: PokemonType) -> Multiplier {
        self.interactions
            .get(&attacking)
            .and_then(|row| row.get(&defending))
            .copied()
            .unwrap_or(Multiplier::Neutral)
    }

    /// The non-neutral entries for one attacking type.
    pub fn row(&self, attacking: PokemonType) -> impl Iterator<Item = (PokemonType, Multiplier)> + '_ {
        self.interactions
            .get(&attacking)
            .into_iter()
            .flat_map(|row| row.iter().map(|(d, m)| (*d, *m)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_chart_samples() {
        let chart = TypeChart::standard();
        assert_eq!(chart.multiplier(Fire, Fire), Multiplier::HalfDamage);
        assert_eq!(chart.multiplier(Fire, Water), Multiplier::HalfDamage);
        assert_eq!(chart.multiplier(Electric, Water), Multiplier::Double);
        assert_eq!(chart.multiplier(Ghost, Normal), Multiplier::Immune);
        assert_eq!(chart.multiplier(Dragon, Fairy), Multiplier::Immune);
        assert_eq!(chart.multiplier(Water, Electric), Multiplier::Neutral);
    }

    #[test]
    fn test_standard_chart_has_no_neutral_entries() {
        let chart = TypeChart::standard();
        for attacking in PokemonType::ALL {
            assert!(chart.row(attacking).all(|(_, m)| m != Multiplier::Neutral));
        }
    }

    #[test]
    fn test_standard_chart_is_shared() {
        let a = TypeChart::standard() as *const TypeChart;
        let b = TypeChart::standard() as *const TypeChart;
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_json() {
        let chart = TypeChart::from_json(r#"{"fire": {"water": 0.25, "grass": 4, "ice": 1.0}}"#)
            .unwrap();
        assert_eq!(chart.multiplier(Fire, Water), Multiplier::QuarterDamage);
        assert_eq!(chart.multiplier(Fire, Grass), Multiplier::Quadruple);
        assert_eq!(chart.multiplier(Fire, Ice), Multiplier::Neutral);
        assert_eq!(chart.row(Fire).count(), 2);
    }

    #[test]
    fn test_from_json_rejects_bad_multiplier() {
        let err = TypeChart::from_json(r#"{"fire": {"water": 3.0}}"#).unwrap_err();
        assert_eq!(
            err,
            TeamError::InvalidMultiplier {
                attacking: Fire,
                defending: Water,
                value: 3.0
            }
        );
    }

    #[test]
    fn test_from_json_rejects_unknown_type() {
        let err = TypeChart::from_json(r#"{"sound": {"water": 2.0}}"#).unwrap_err();
        assert_eq!(err, TeamError::UnknownType("sound".to_string()));
    }

    #[test]
    fn test_insert_neutral_removes_entry() {
        let mut chart = TypeChart::new();
        chart.insert(Fire, Water, Multiplier::HalfDamage);
        chart.insert(Fire, Water, Multiplier::Neutral);
        assert_eq!(chart.multiplier(Fire, Water), Multiplier::Neutral);
        assert_eq!(chart, TypeChart::new());
    }
}
