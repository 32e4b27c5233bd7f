//! Error types for roster management and analysis.
//!
//! All errors that can be surfaced by the engine are represented
//! by the `TeamError` enum. Per-item failures inside batch operations
//! (unresolved ids, malformed evolution nodes) are logged and dropped
//! rather than returned; the variants exist so they can be reported.

use crate::ptype::PokemonType;
use thiserror::Error;

/// Errors that can occur while building, analyzing or syncing a roster.
///
/// # Examples
///
/// ```rust
/// use teamcov::TeamError;
///
/// let err = TeamError::DuplicateMember(25);
/// println!("{}", err); // "Creature #25 is already on the roster"
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TeamError {
    /// A required text field (roster name, submitter) was empty.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An upload was attempted with no roster members.
    #[error("Cannot share an empty roster")]
    EmptyRoster,

    /// An add was attempted on a full roster.
    #[error("Roster is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    /// An add was attempted with an id already on the roster.
    #[error("Creature #{0} is already on the roster")]
    DuplicateMember(u32),

    /// A catalog lookup for this id produced nothing.
    #[error("Unresolved creature reference: #{0}")]
    UnresolvedReference(u32),

    /// An evolution node whose source reference carries no usable id.
    ///
    /// Contains the offending reference URL.
    #[error("Malformed evolution node reference: {0:?}")]
    MalformedTreeNode(String),

    /// The evolution tree for a species could not be fetched.
    #[error("Evolution tree unavailable for species {0}")]
    TreeUnavailable(String),

    /// A type identifier outside the 18 known types.
    #[error("Unknown type: {0}")]
    UnknownType(String),

    /// A stat name outside the 6 known base stats.
    #[error("Unknown stat: {0}")]
    UnknownStat(String),

    /// A type chart entry with a multiplier outside {0, 0.25, 0.5, 1, 2, 4}.
    #[error("Invalid multiplier {value} for {attacking} against {defending}")]
    InvalidMultiplier {
        attacking: PokemonType,
        defending: PokemonType,
        value: f64,
    },

    /// A creature that violates the catalog model (e.g. zero or three types).
    #[error("Invalid creature #{id}: {reason}")]
    InvalidCreature { id: u32, reason: String },

    /// The remote roster store rejected or failed an operation.
    #[error("Roster store error: {0}")]
    Store(String),

    /// A JSON payload (config, chart, catalog response) failed to decode.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for TeamError {
    fn from(err: serde_json::Error) -> Self {
        TeamError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TeamError::DuplicateMember(25);
        assert!(err.to_string().contains("#25"));
    }

    #[test]
    fn test_capacity_error_display() {
        let err = TeamError::CapacityExceeded { capacity: 6 };
        let display = err.to_string();
        assert!(display.contains("full"));
        assert!(display.contains('6'));
    }

    #[test]
    fn test_invalid_multiplier_display() {
        let err = TeamError::InvalidMultiplier {
            attacking: PokemonType::Fire,
            defending: PokemonType::Water,
            value: 3.0,
        };
        let display = err.to_string();
        assert!(display.contains("fire"));
        assert!(display.contains("water"));
        assert!(display.contains('3'));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: TeamError = json_err.into();
        assert!(matches!(err, TeamError::Decode(_)));
    }
}
