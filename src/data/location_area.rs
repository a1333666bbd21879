//! Location area models
//!
//! `LocationAreaPage` is one page of the paginated location-area listing;
//! `LocationArea` is the detail document for a single area.

use serde::{Deserialize, Serialize};

use super::NamedResource;

/// One page of the location-area listing
///
/// `next` and `previous` are absolute URLs of the neighbouring pages, or
/// `None` at either end of the listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationAreaPage {
    /// Total number of location areas
    pub count: u32,
    /// URL of the next page
    pub next: Option<String>,
    /// URL of the previous page
    pub previous: Option<String>,
    /// Areas on this page
    pub results: Vec<NamedResource>,
}

/// Detail record for a single location area
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationArea {
    pub id: u32,
    pub name: String,
    pub game_index: u32,
    /// The location this area belongs to
    pub location: NamedResource,
    /// Pokemon that can be encountered in this area
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// A pokemon that can be met in a location area
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_parses_null_previous() {
        let json = r#"{
            "count": 781,
            "next": "https://pokeapi.co/api/v2/location-area?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "canalave-city-area", "url": "https://pokeapi.co/api/v2/location-area/1/"}
            ]
        }"#;

        let page: LocationAreaPage = serde_json::from_str(json).expect("Should parse page");

        assert_eq!(page.count, 781);
        assert!(page.previous.is_none());
        assert_eq!(
            page.next.as_deref(),
            Some("https://pokeapi.co/api/v2/location-area?offset=20&limit=20")
        );
        assert_eq!(page.results[0].name, "canalave-city-area");
    }

    #[test]
    fn test_area_ignores_unknown_fields() {
        let json = r#"{
            "encounter_method_rates": [],
            "game_index": 1,
            "id": 1,
            "location": {"name": "canalave-city", "url": "https://pokeapi.co/api/v2/location/1/"},
            "name": "canalave-city-area",
            "names": [],
            "pokemon_encounters": [
                {"pokemon": {"name": "tentacool", "url": "https://pokeapi.co/api/v2/pokemon/72/"}, "version_details": []}
            ]
        }"#;

        let area: LocationArea = serde_json::from_str(json).expect("Should parse area");

        assert_eq!(area.id, 1);
        assert_eq!(area.location.name, "canalave-city");
        assert_eq!(area.pokemon_encounters.len(), 1);
        assert_eq!(area.pokemon_encounters[0].pokemon.name, "tentacool");
    }

    #[test]
    fn test_wrong_shape_is_rejected() {
        let result: Result<LocationAreaPage, _> = serde_json::from_str(r#"{"results": "nope"}"#);
        assert!(result.is_err());
    }
}
