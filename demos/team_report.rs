//! Team report: build a roster and print its coverage and averages
//!
//! This example demonstrates:
//! - Enforcing roster capacity and uniqueness
//! - Analyzing type coverage against the standard chart
//! - Averaging base stats and counting types

use teamcov::*;

fn main() -> Result<(), TeamError> {
    tracing_subscriber::fmt::init();

    let candidates = vec![
        Creature::new(3, "venusaur", vec![PokemonType::Grass, PokemonType::Poison])?
            .with_base_stats([80, 82, 83, 100, 100, 80]),
        Creature::new(6, "charizard", vec![PokemonType::Fire, PokemonType::Flying])?
            .with_base_stats([78, 84, 78, 109, 85, 100]),
        Creature::new(9, "blastoise", vec![PokemonType::Water])?
            .with_base_stats([79, 83, 100, 85, 105, 78]),
        Creature::new(25, "pikachu", vec![PokemonType::Electric])?
            .with_base_stats([35, 55, 40, 50, 50, 90]),
        Creature::new(6, "charizard", vec![PokemonType::Fire, PokemonType::Flying])?,
        Creature::new(76, "golem", vec![PokemonType::Rock, PokemonType::Ground])?
            .with_base_stats([80, 120, 130, 55, 65, 45]),
        Creature::new(94, "gengar", vec![PokemonType::Ghost, PokemonType::Poison])?
            .with_base_stats([60, 65, 60, 130, 75, 110]),
        Creature::new(143, "snorlax", vec![PokemonType::Normal])?
            .with_base_stats([160, 110, 65, 65, 110, 30]),
    ];

    let mut roster = Roster::new();
    println!("Building roster:");
    for creature in candidates {
        let name = creature.name().to_string();
        match roster.try_add(creature) {
            Ok(()) => println!("  + {}", name),
            Err(err) => println!("  x {} ({})", name, err),
        }
    }

    let analysis = analyze(roster.members(), TypeChart::standard());

    println!("\n=== Type Coverage ===");
    for score in analysis.iter() {
        println!(
            "  {:<9} {:>5.1}  {:+}",
            score.attacking,
            score.score,
            score.coverage.value()
        );
    }

    let names = |types: Vec<PokemonType>| {
        types
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    println!("\nStrong defense against: {}", names(analysis.resistances()));
    println!("Vulnerable to: {}", names(analysis.weaknesses()));

    println!("\n=== Average Stats ===");
    for (stat, value) in average_stats(roster.members()) {
        println!("  {:<16} {}", stat, value);
    }

    println!("\n=== Type Distribution ===");
    for (ptype, count) in type_distribution(roster.members()) {
        println!("  {:<9} {}", ptype, count);
    }

    Ok(())
}
