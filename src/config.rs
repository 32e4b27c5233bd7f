//! Catalog configuration.
//!
//! `CatalogConfig` carries the endpoints the engine builds references
//! against. URL construction is a pure function of the creature id, so
//! the same id always yields the same reference.

use crate::error::TeamError;
use serde::{Deserialize, Serialize};

/// Maximum number of creatures on a roster.
pub const ROSTER_CAPACITY: usize = 6;

/// Endpoints and limits for the public catalog.
///
/// Missing fields fall back to the public catalog defaults.
///
/// # Examples
///
/// ```rust
/// use teamcov::CatalogConfig;
///
/// let config = CatalogConfig::default();
/// assert_eq!(config.detail_url(25), "https://pokeapi.co/api/v2/pokemon/25/");
///
/// let custom = CatalogConfig::from_json(r#"{"catalog_limit": 9}"#).unwrap();
/// assert_eq!(custom.catalog_limit, 9);
/// assert_eq!(custom.api_base_url, config.api_base_url);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Base of the REST catalog, without trailing slash.
    pub api_base_url: String,

    /// Base of the sprite repository, without trailing slash.
    pub sprite_base_url: String,

    /// Number of creatures in the browsable catalog.
    pub catalog_limit: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://pokeapi.co/api/v2".to_string(),
            sprite_base_url: "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon"
                .to_string(),
            catalog_limit: 151,
        }
    }
}

impl CatalogConfig {
    /// Load a config from JSON. Absent fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, TeamError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Detail endpoint for a creature id.
    pub fn detail_url(&self, id: u32) -> String {
        format!("{}/pokemon/{}/", self.api_base_url.trim_end_matches('/'), id)
    }

    /// Sprite image for a creature id.
    pub fn sprite_url(&self, id: u32) -> String {
        format!("{}/{}.png", self.sprite_base_url.trim_end_matches('/'), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let config = CatalogConfig::default();
        assert_eq!(config.detail_url(1), "https://pokeapi.co/api/v2/pokemon/1/");
        assert_eq!(
            config.sprite_url(151),
            "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/151.png"
        );
    }

    #[test]
    fn test_trailing_slash_tolerated() {
        let config = CatalogConfig {
            api_base_url: "http://localhost:8080/".to_string(),
            ..CatalogConfig::default()
        };
        assert_eq!(config.detail_url(7), "http://localhost:8080/pokemon/7/");
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(
            CatalogConfig::from_json("{\"catalog_limit\": \"many\"}"),
            Err(TeamError::Decode(_))
        ));
    }
}
