use teamcov::evolution::flatten_with;
use teamcov::*;

fn mon(id: u32, name: &str, types: &[PokemonType]) -> Creature {
    Creature::new(id, name, types.to_vec()).unwrap()
}

fn starter_team() -> Vec<Creature> {
    vec![
        mon(3, "venusaur", &[PokemonType::Grass, PokemonType::Poison]),
        mon(6, "charizard", &[PokemonType::Fire, PokemonType::Flying]),
        mon(9, "blastoise", &[PokemonType::Water]),
        mon(25, "pikachu", &[PokemonType::Electric]),
    ]
}

/// Adding then removing a creature restores the previous roster, at every size below capacity.
#[test]
fn test_add_remove_round_trip() {
    let extra = mon(150, "mewtwo", &[PokemonType::Psychic]);
    for size in 0..6 {
        let mut roster = Roster::new();
        roster.replace_with((1..=size).map(|id| mon(id, "filler", &[PokemonType::Normal])));
        let before = roster.clone();

        assert!(roster.add(extra.clone()));
        roster.remove(&extra);
        assert_eq!(roster, before);
    }
}

/// A full roster refuses every new creature and is left unchanged.
#[test]
fn test_full_roster_rejects_new_member() {
    let mut roster = Roster::new();
    for id in 1..=6 {
        assert!(roster.add(mon(id, "filler", &[PokemonType::Normal])));
    }
    let before = roster.clone();

    for id in 7..20 {
        assert!(!roster.add(mon(id, "late", &[PokemonType::Fire])));
        assert_eq!(roster, before);
    }
    assert_eq!(roster.len(), ROSTER_CAPACITY);
}

/// Re-adding a member is a no-op.
#[test]
fn test_duplicate_add_is_noop() {
    let mut roster = Roster::new();
    for creature in starter_team() {
        roster.add(creature);
    }
    let before = roster.clone();

    let again = mon(6, "charizard", &[PokemonType::Fire, PokemonType::Flying]);
    assert!(!roster.add(again.clone()));
    assert_eq!(roster, before);
    assert_eq!(roster.try_add(again), Err(TeamError::DuplicateMember(6)));
}

/// Invariants hold across a mixed sequence of mutations.
#[test]
fn test_invariants_over_mutation_sequence() {
    let mut roster = Roster::new();
    let ops: Vec<(bool, u32)> = vec![
        (true, 1),
        (true, 2),
        (true, 2),
        (true, 3),
        (false, 1),
        (true, 4),
        (true, 5),
        (true, 6),
        (true, 7),
        (true, 8),
        (false, 99),
        (true, 1),
    ];
    for (is_add, id) in ops {
        let creature = mon(id, "m", &[PokemonType::Normal]);
        if is_add {
            roster.add(creature);
        } else {
            roster.remove(&creature);
        }

        let ids = roster.ids();
        assert!(ids.len() <= ROSTER_CAPACITY);
        let mut unique = ids.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), ids.len());
    }
    assert_eq!(roster.ids(), vec![2, 3, 4, 5, 6, 7]);
}

/// Empty roster analyses to nothing; any non-empty roster covers all 18 types.
#[test]
fn test_analysis_key_count() {
    let chart = TypeChart::standard();
    assert!(analyze(&[], chart).is_empty());

    let team = starter_team();
    for n in 1..=team.len() {
        assert_eq!(analyze(&team[..n], chart).len(), 18);
    }
}

/// A pure water creature resists fire and is weak to electric.
#[test]
fn test_single_member_scenario() {
    let analysis = analyze(
        &[mon(9, "blastoise", &[PokemonType::Water])],
        TypeChart::standard(),
    );
    assert_eq!(analysis.levels()[&PokemonType::Fire], 1);
    assert_eq!(analysis.levels()[&PokemonType::Electric], -1);
}

/// A ground immunity stacks with a water weakness for a net resistance.
#[test]
fn test_stacking_scenario() {
    let swampert = mon(260, "swampert", &[PokemonType::Water, PokemonType::Ground]);
    let analysis = analyze(&[swampert], TypeChart::standard());
    let electric = analysis.get(PokemonType::Electric).unwrap();

    assert_eq!(electric.score, 1.0);
    assert_eq!(electric.coverage.value(), 1);
    let weights: Vec<f64> = electric.contributions.iter().map(|c| c.2).collect();
    assert_eq!(weights, vec![-1.0, 2.0]);
}

/// Two double resistances land exactly on the strong threshold.
#[test]
fn test_threshold_boundary() {
    let chart = TypeChart::from_json(r#"{"ice": {"fire": 0.25}}"#).unwrap();
    let team = [
        mon(4, "charmander", &[PokemonType::Fire]),
        mon(58, "growlithe", &[PokemonType::Fire]),
    ];
    let analysis = analyze(&team, &chart);
    assert_eq!(analysis.get(PokemonType::Ice).unwrap().score, 3.0);
    assert_eq!(analysis.coverage(PokemonType::Ice), Some(Coverage::StrongResistance));

    // one double resistance only
    let analysis = analyze(&team[..1], &chart);
    assert_eq!(analysis.coverage(PokemonType::Ice), Some(Coverage::Resistance));
}

/// Analysis output is ordered by type name.
#[test]
fn test_analysis_ordering() {
    let analysis = analyze(&starter_team(), TypeChart::standard());
    let names: Vec<&str> = analysis.iter().map(|s| s.attacking.as_str()).collect();
    assert_eq!(names.first(), Some(&"bug"));
    assert_eq!(names.last(), Some(&"water"));
    assert!(names.windows(2).all(|w| w[0] < w[1]));
}

/// Analysis is a pure function of its input.
#[test]
fn test_analysis_deterministic() {
    let team = starter_team();
    let chart = TypeChart::standard();
    assert_eq!(analyze(&team, chart), analyze(&team, chart));
}

/// Averages truncate rather than round.
#[test]
fn test_average_hp_truncation() {
    let team = [
        mon(1, "bulbasaur", &[PokemonType::Grass]).with_stat(StatName::Hp, 45),
        mon(2, "ivysaur", &[PokemonType::Grass]).with_stat(StatName::Hp, 60),
    ];
    assert_eq!(average_stats(&team)[&StatName::Hp], 52);
}

/// Type distribution counts each member's types once.
#[test]
fn test_type_distribution() {
    let counts = type_distribution(&starter_team());
    assert_eq!(counts.len(), 6);
    assert!(counts.values().all(|&n| n == 1));
}

/// Branching trees flatten root first, siblings in order, and malformed stages disappear.
#[test]
fn test_evolution_flattening() {
    let species = "https://pokeapi.co/api/v2/pokemon-species";
    let root = EvolutionNode::new("poliwag", format!("{}/60/", species))
        .with_child(EvolutionNode::new("poliwhirl", format!("{}/61/", species)))
        .with_child(EvolutionNode::new("broken", format!("{}//", species)))
        .with_child(EvolutionNode::new("politoed", format!("{}/186/", species)));

    let line = flatten(&root);
    let names: Vec<&str> = line.iter().map(|r| r.name.as_str()).collect();
    let ids: Vec<u32> = line.iter().map(|r| r.id).collect();
    assert_eq!(names, vec!["poliwag", "poliwhirl", "politoed"]);
    assert_eq!(ids, vec![60, 61, 186]);
    assert_eq!(line[2].url, "https://pokeapi.co/api/v2/pokemon/186/");
}

/// Reference URLs depend only on the id.
#[test]
fn test_evolution_urls_pure() {
    let config = CatalogConfig::default();
    let a = flatten_with(
        &EvolutionNode::new("x", "https://pokeapi.co/api/v2/pokemon-species/1/"),
        &config,
    );
    let b = flatten_with(&EvolutionNode::new("y", "/other/path/1"), &config);
    assert_eq!(a[0].url, b[0].url);
    assert_eq!(a[0].sprite_url, b[0].sprite_url);
}
