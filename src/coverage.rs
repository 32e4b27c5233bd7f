//! Type coverage analysis.
//!
//! For every attacking type, each roster member contributes a signed
//! weight per type it carries: resistances and immunities score
//! positive, weaknesses negative. Both types of a dual-typed creature
//! contribute independently, so a resistance on one type can cancel a
//! weakness on the other. The summed score is then classified into one
//! of five coverage levels.
//!
//! ```text
//! [Creature types] → [TypeChart lookup] → [weight] → Σ per attacking type → [Coverage]
//! ```

use crate::chart::{Multiplier, TypeChart};
use crate::creature::Creature;
use crate::ptype::PokemonType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How well a roster holds up against one attacking type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Coverage {
    SevereWeakness,
    Weakness,
    Neutral,
    Resistance,
    StrongResistance,
}

impl Coverage {
    /// Classify a summed score.
    ///
    /// | score            | coverage           |
    /// |------------------|--------------------|
    /// | ≥ 3              | `StrongResistance` |
    /// | 0 < score < 3    | `Resistance`       |
    /// | 0                | `Neutral`          |
    /// | −3 < score < 0   | `Weakness`         |
    /// | ≤ −3             | `SevereWeakness`   |
    ///
    /// # Examples
    ///
    /// ```rust
    /// use teamcov::Coverage;
    ///
    /// assert_eq!(Coverage::classify(3.0), Coverage::StrongResistance);
    /// assert_eq!(Coverage::classify(2.5), Coverage::Resistance);
    /// assert_eq!(Coverage::classify(0.0), Coverage::Neutral);
    /// assert_eq!(Coverage::classify(-3.0), Coverage::SevereWeakness);
    /// ```
    pub fn classify(score: f64) -> Self {
        if score >= 3.0 {
            Coverage::StrongResistance
        } else if score > 0.0 {
            Coverage::Resistance
        } else if score <= -3.0 {
            Coverage::SevereWeakness
        } else if score < 0.0 {
            Coverage::Weakness
        } else {
            Coverage::Neutral
        }
    }

    /// Integer level in −2..=2.
    pub fn value(self) -> i8 {
        match self {
            Coverage::SevereWeakness => -2,
            Coverage::Weakness => -1,
            Coverage::Neutral => 0,
            Coverage::Resistance => 1,
            Coverage::StrongResistance => 2,
        }
    }
}

impl From<Coverage> for i8 {
    fn from(coverage: Coverage) -> Self {
        coverage.value()
    }
}

impl TryFrom<i8> for Coverage {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -2 => Ok(Coverage::SevereWeakness),
            -1 => Ok(Coverage::Weakness),
            0 => Ok(Coverage::Neutral),
            1 => Ok(Coverage::Resistance),
            2 => Ok(Coverage::StrongResistance),
            other => Err(format!("coverage level out of range: {}", other)),
        }
    }
}

/// The outcome for one attacking type, with its breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeScore {
    /// The attacking type.
    pub attacking: PokemonType,

    /// Sum of all contribution weights.
    pub score: f64,

    /// The classified level.
    pub coverage: Coverage,

    /// Non-neutral contributions in roster order.
    ///
    /// Each entry is `(creature name, defending type, weight)`.
    pub contributions: Vec<(String, PokemonType, f64)>,
}

/// Coverage for every attacking type, ordered by type name.
///
/// Empty when the analyzed roster was empty; otherwise holds all 18 types.
/// Only `analyze` builds one. It serializes for reporting and is never
/// decoded, so a level always agrees with its score.
///
/// # Examples
///
/// ```rust
/// use teamcov::{analyze, Coverage, Creature, PokemonType, TypeChart};
///
/// let vaporeon = Creature::new(134, "vaporeon", vec![PokemonType::Water]).unwrap();
/// let analysis = analyze(&[vaporeon], TypeChart::standard());
///
/// assert_eq!(analysis.len(), 18);
/// assert_eq!(analysis.coverage(PokemonType::Fire), Some(Coverage::Resistance));
/// assert_eq!(analysis.coverage(PokemonType::Electric), Some(Coverage::Weakness));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TypeAnalysis {
    scores: BTreeMap<PokemonType, TypeScore>,
}

impl TypeAnalysis {
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Full breakdown for an attacking type.
    pub fn get(&self, attacking: PokemonType) -> Option<&TypeScore> {
        self.scores.get(&attacking)
    }

    /// Classified level for an attacking type.
    pub fn coverage(&self, attacking: PokemonType) -> Option<Coverage> {
        self.scores.get(&attacking).map(|s| s.coverage)
    }

    /// All entries, ordered by type name.
    pub fn iter(&self) -> impl Iterator<Item = &TypeScore> {
        self.scores.values()
    }

    /// Type name → integer level, ordered by type name.
    pub fn levels(&self) -> BTreeMap<PokemonType, i8> {
        self.scores
            .iter()
            .map(|(t, s)| (*t, s.coverage.value()))
            .collect()
    }

    /// Attacking types the roster resists, ordered by name.
    pub fn resistances(&self) -> Vec<PokemonType> {
        self.filter_types(|c| c > Coverage::Neutral)
    }

    /// Attacking types the roster is weak to, ordered by name.
    pub fn weaknesses(&self) -> Vec<PokemonType> {
        self.filter_types(|c| c < Coverage::Neutral)
    }

    fn filter_types(&self, keep: impl Fn(Coverage) -> bool) -> Vec<PokemonType> {
        self.scores
            .values()
            .filter(|s| keep(s.coverage))
            .map(|s| s.attacking)
            .collect()
    }
}

/// Analyze a roster's defensive coverage against all 18 attacking types.
///
/// Pure and deterministic: the same roster and chart always produce the
/// same analysis. An empty roster yields an empty analysis.
pub fn analyze(roster: &[Creature], chart: &TypeChart) -> TypeAnalysis {
    if roster.is_empty() {
        return TypeAnalysis::default();
    }

    let scores = PokemonType::ALL
        .iter()
        .map(|&attacking| (attacking, score_attacking_type(attacking, roster, chart)))
        .collect();

    TypeAnalysis { scores }
}

fn score_attacking_type(attacking: PokemonType, roster: &[Creature], chart: &TypeChart) -> TypeScore {
    let mut score = 0.0;
    let mut contributions = Vec::new();

    for creature in roster {
        for &defending in creature.types() {
            let multiplier = chart.multiplier(attacking, defending);
            if multiplier == Multiplier::Neutral {
                continue;
            }
            let weight = multiplier.weight();
            score += weight;
            contributions.push((creature.name().to_string(), defending, weight));
        }
    }

    TypeScore {
        attacking,
        score,
        coverage: Coverage::classify(score),
        contributions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PokemonType::*;

    fn mon(id: u32, types: Vec<PokemonType>) -> Creature {
        Creature::new(id, format!("mon-{}", id), types).unwrap()
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(Coverage::classify(12.0), Coverage::StrongResistance);
        assert_eq!(Coverage::classify(3.0), Coverage::StrongResistance);
        assert_eq!(Coverage::classify(2.999), Coverage::Resistance);
        assert_eq!(Coverage::classify(0.5), Coverage::Resistance);
        assert_eq!(Coverage::classify(0.0), Coverage::Neutral);
        assert_eq!(Coverage::classify(-0.5), Coverage::Weakness);
        assert_eq!(Coverage::classify(-2.999), Coverage::Weakness);
        assert_eq!(Coverage::classify(-3.0), Coverage::SevereWeakness);
        assert_eq!(Coverage::classify(-12.0), Coverage::SevereWeakness);
    }

    #[test]
    fn test_empty_roster() {
        let analysis = analyze(&[], TypeChart::standard());
        assert!(analysis.is_empty());
        assert!(analysis.resistances().is_empty());
    }

    #[test]
    fn test_single_water() {
        let analysis = analyze(&[mon(7, vec![Water])], TypeChart::standard());
        assert_eq!(analysis.len(), 18);

        let fire = analysis.get(Fire).unwrap();
        assert_eq!(fire.score, 1.0);
        assert_eq!(fire.coverage, Coverage::Resistance);

        let electric = analysis.get(Electric).unwrap();
        assert_eq!(electric.score, -1.0);
        assert_eq!(electric.coverage, Coverage::Weakness);

        assert_eq!(analysis.coverage(Normal), Some(Coverage::Neutral));
    }

    #[test]
    fn test_dual_type_stacking_cancels_weakness() {
        let analysis = analyze(&[mon(260, vec![Water, Ground])], TypeChart::standard());
        let electric = analysis.get(Electric).unwrap();
        assert_eq!(electric.score, 1.0);
        assert_eq!(electric.coverage, Coverage::Resistance);
        assert_eq!(electric.contributions.len(), 2);
    }

    #[test]
    fn test_double_resist_reaches_strong_threshold() {
        let chart = TypeChart::from_json(r#"{"fire": {"water": 0.25, "dragon": 0.25}}"#).unwrap();
        let analysis = analyze(&[mon(1, vec![Water, Dragon])], &chart);
        let fire = analysis.get(Fire).unwrap();
        assert_eq!(fire.score, 3.0);
        assert_eq!(fire.coverage, Coverage::StrongResistance);
    }

    #[test]
    fn test_scores_saturate_without_cap() {
        // six ground/rock members all take double damage from water
        let roster: Vec<_> = (1..=6).map(|id| mon(id, vec![Ground, Rock])).collect();
        let analysis = analyze(&roster, TypeChart::standard());
        let water = analysis.get(Water).unwrap();
        assert_eq!(water.score, -12.0);
        assert_eq!(water.coverage, Coverage::SevereWeakness);
    }

    #[test]
    fn test_resistances_and_weaknesses_sorted() {
        let analysis = analyze(&[mon(7, vec![Water])], TypeChart::standard());
        assert_eq!(analysis.resistances(), vec![Fire, Ice, Steel, Water]);
        assert_eq!(analysis.weaknesses(), vec![Electric, Grass]);
    }

    #[test]
    fn test_levels_ordered_by_name() {
        let analysis = analyze(&[mon(7, vec![Water])], TypeChart::standard());
        let levels = analysis.levels();
        let keys: Vec<_> = levels.keys().map(|t| t.as_str()).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
        assert_eq!(levels[&Fire], 1);
    }

    #[test]
    fn test_coverage_serde_as_integer() {
        assert_eq!(serde_json::to_string(&Coverage::SevereWeakness).unwrap(), "-2");
        let back: Coverage = serde_json::from_str("2").unwrap();
        assert_eq!(back, Coverage::StrongResistance);
        assert!(serde_json::from_str::<Coverage>("3").is_err());
    }

    #[test]
    fn test_analysis_serializes_for_reporting() {
        let analysis = analyze(&[mon(7, vec![Water])], TypeChart::standard());
        let json = serde_json::to_value(&analysis).unwrap();
        let fire = &json["scores"]["fire"];
        assert_eq!(fire["score"], 1.0);
        assert_eq!(fire["coverage"], 1);
        assert_eq!(json["scores"]["electric"]["coverage"], -1);
        assert_eq!(json["scores"].as_object().unwrap().len(), 18);
    }
}
