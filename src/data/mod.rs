//! Resource models for the PokeAPI
//!
//! These are the decoded shapes the fetch layer produces. Each one mirrors
//! the subset of a PokeAPI v2 JSON document the shell actually displays;
//! unknown fields are ignored and missing ones fall back to their defaults.

pub mod location_area;
pub mod pokemon;

pub use location_area::{LocationArea, LocationAreaPage, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};

use serde::{Deserialize, Serialize};

/// A reference to another API resource by name and URL
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamedResource {
    /// Resource name, e.g. "canalave-city-area"
    pub name: String,
    /// Absolute URL of the resource
    pub url: String,
}
