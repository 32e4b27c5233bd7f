//! # teamcov - Team Composition & Type-Coverage Analysis
//!
//! A roster engine for creature-collection games that provides:
//! - **Roster invariants**: at most six members, no duplicate ids, stable display order
//! - **Type coverage**: a classified strengths/weaknesses report against all 18 types
//! - **Stat summaries**: truncated per-stat averages and a type distribution
//! - **Evolution lines**: catalog evolution trees flattened into display order
//! - **Shared rosters**: upload records and order-preserving reconstruction
//!
//! ## Core Concepts
//!
//! ### Analysis Pipeline
//!
//! ```text
//! [Roster] → members() → [analyze / average_stats] → [TypeAnalysis / averages]
//! ```
//!
//! 1. **Roster** owns the team and is the only thing that mutates it
//! 2. **Analyzers** are pure functions over a read-only slice of members
//! 3. **TypeChart** is static data shared by every analysis
//!
//! ### External Collaborators
//!
//! Network access lives behind the [`catalog::Catalog`] and
//! [`catalog::RosterStore`] traits. Lookups that fail degrade the result
//! (a shorter roster, a gap in an evolution line) rather than failing it.
//!
//! ## Example
//!
//! ```rust
//! use teamcov::*;
//!
//! let mut roster = Roster::new();
//! roster.add(Creature::new(7, "squirtle", vec![PokemonType::Water]).unwrap());
//! roster.add(
//!     Creature::new(50, "diglett", vec![PokemonType::Ground])
//!         .unwrap()
//!         .with_stat(StatName::Speed, 95),
//! );
//!
//! let analysis = analyze(roster.members(), TypeChart::standard());
//! // water is weak to electric, ground is immune: -1 + 2
//! assert_eq!(analysis.coverage(PokemonType::Electric), Some(Coverage::Resistance));
//!
//! let averages = average_stats(roster.members());
//! assert_eq!(averages[&StatName::Speed], 47); // 95 / 2, truncated
//! ```
//!
//! ## Modules
//!
//! - [`ptype`] - The 18 combat types
//! - [`stat`] - The six base stat names
//! - [`chart`] - Type interaction chart
//! - [`creature`] - Catalog creatures
//! - [`roster`] - Roster ownership and invariants
//! - [`coverage`] - Type coverage analysis
//! - [`summary`] - Average stats and type distribution
//! - [`evolution`] - Evolution tree flattening
//! - [`catalog`] - Catalog and record store contracts
//! - [`sync`] - Shared roster records
//! - [`api`] - Catalog JSON shapes
//! - [`config`] - Catalog endpoints
//! - [`error`] - Error types

pub mod api;
pub mod catalog;
pub mod chart;
pub mod config;
pub mod coverage;
pub mod creature;
pub mod error;
pub mod evolution;
pub mod ptype;
pub mod roster;
pub mod stat;
pub mod summary;
pub mod sync;

// Re-export main types for convenience
pub use chart::TypeChart;
pub use config::{CatalogConfig, ROSTER_CAPACITY};
pub use coverage::{analyze, Coverage, TypeAnalysis, TypeScore};
pub use creature::Creature;
pub use error::TeamError;
pub use ptype::PokemonType;
pub use roster::Roster;
pub use stat::StatName;
pub use summary::{average_stats, type_distribution};

// Re-export evolution and sharing entry points
pub use evolution::{flatten, EvolutionNode, EvolutionReference};
pub use sync::{build_upload_record, reconstruct_roster, SharedRosterRecord};
