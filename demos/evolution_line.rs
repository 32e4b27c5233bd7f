//! Evolution line: flatten a branching evolution chain
//!
//! This example demonstrates:
//! - Decoding a catalog evolution chain response
//! - Pre-order flattening with id repair
//! - Dropping a stage whose reference is malformed

use teamcov::api::decode_evolution_chain;
use teamcov::evolution::flatten_with;
use teamcov::{CatalogConfig, TeamError};

const EEVEE_CHAIN: &str = r#"{
    "id": 67,
    "chain": {
        "species": {"name": "eevee", "url": "https://pokeapi.co/api/v2/pokemon-species/133/"},
        "evolves_to": [
            {"species": {"name": "vaporeon", "url": "https://pokeapi.co/api/v2/pokemon-species/134/"}, "evolves_to": []},
            {"species": {"name": "jolteon", "url": "https://pokeapi.co/api/v2/pokemon-species/135/"}, "evolves_to": []},
            {"species": {"name": "flareon", "url": "https://pokeapi.co/api/v2/pokemon-species/136/"}, "evolves_to": []},
            {"species": {"name": "unknown", "url": ""}, "evolves_to": []}
        ]
    }
}"#;

fn main() -> Result<(), TeamError> {
    tracing_subscriber::fmt::init();

    let config = CatalogConfig::default();
    let root = decode_evolution_chain(EEVEE_CHAIN)?;
    let line = flatten_with(&root, &config);

    println!("Evolution line of {}:", root.species.name);
    for stage in &line {
        println!("  #{:<4} {:<10} {}", stage.id, stage.name, stage.url);
    }
    println!("\n{} of 5 stages usable", line.len());

    Ok(())
}
