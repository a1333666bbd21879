//! Pokemon detail model

use serde::{Deserialize, Serialize};

use super::NamedResource;

/// Detail record for a single pokemon
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Experience gained for defeating this pokemon, also drives catch odds.
    /// Null for a handful of special forms.
    pub base_experience: Option<u32>,
    /// Height in decimetres
    pub height: u32,
    /// Weight in hectograms
    pub weight: u32,
    pub stats: Vec<PokemonStat>,
    pub types: Vec<PokemonType>,
}

/// A base stat such as hp or speed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub effort: u32,
    pub stat: NamedResource,
}

/// One of a pokemon's elemental types
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PokemonType {
    pub slot: u32,
    #[serde(rename = "type")]
    pub type_: NamedResource,
}
