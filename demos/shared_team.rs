//! Shared team: upload a roster and load it back elsewhere
//!
//! This example demonstrates:
//! - Building and storing a shared roster record
//! - Listing shared rosters newest first
//! - Reconstructing a roster with concurrent catalog lookups

use teamcov::catalog::{MemoryCatalog, MemoryStore};
use teamcov::sync::{list_shared_rosters, load_shared_roster, upload_roster};
use teamcov::*;

#[tokio::main]
async fn main() -> Result<(), TeamError> {
    tracing_subscriber::fmt::init();

    let catalog = MemoryCatalog::from_creatures(vec![
        Creature::new(1, "bulbasaur", vec![PokemonType::Grass, PokemonType::Poison])?,
        Creature::new(4, "charmander", vec![PokemonType::Fire])?,
        Creature::new(7, "squirtle", vec![PokemonType::Water])?,
        Creature::new(25, "pikachu", vec![PokemonType::Electric])?,
    ]);
    let store = MemoryStore::new();

    // One device builds and shares a team
    let mut roster = Roster::new();
    for creature in [
        Creature::new(25, "pikachu", vec![PokemonType::Electric])?,
        Creature::new(7, "squirtle", vec![PokemonType::Water])?,
        Creature::new(4, "charmander", vec![PokemonType::Fire])?,
    ] {
        roster.add(creature);
    }
    let record = upload_roster(&store, &roster, "Pallet Town", "Ash").await?;
    println!("Uploaded '{}' ({})", record.team_name, record.id);

    // Another device browses and loads it, knowing only squirtle locally
    for shared in list_shared_rosters(&store).await? {
        println!(
            "  {} by {}: {} members, shared {}",
            shared.team_name,
            shared.trainer_name,
            shared.pokemon_ids.len(),
            shared.created_at.format("%Y-%m-%d %H:%M")
        );
    }

    let known = [Creature::new(7, "squirtle", vec![PokemonType::Water])?];
    let mut other = Roster::new();
    let loaded = load_shared_roster(&mut other, &record, &known, &catalog).await;

    println!("\nLoaded {} members:", loaded);
    for member in other.members() {
        println!("  #{:<4} {}", member.id(), member.name());
    }

    Ok(())
}
