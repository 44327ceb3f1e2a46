//! Normalized Pokémon records
//!
//! A [`Pokemon`] is built from a primary PokeAPI record and later, at most
//! once, receives an [`Enrichment`] from the species endpoint. Enrichment
//! only adds data; nothing set by [`Pokemon::from_response`] changes after
//! construction.

use crate::error::{IngestError, Result};
use crate::normalize::normalize_species_name;
use crate::pokeapi::types::{PokemonResponse, SpeciesResponse};
use serde::{Deserialize, Serialize};

/// Language tag used to pick flavor text and genus entries.
pub const ENGLISH: &str = "en";

/// A type label, serialized as a Notion select option (`{"name": "fire"}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeTag {
    pub name: String,
}

/// The six base stats, in PokeAPI's positional order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl StatBlock {
    /// Read stats by position; `stat.name` metadata is ignored.
    pub fn from_positional(values: &[u32]) -> Option<Self> {
        match values {
            [hp, attack, defense, special_attack, special_defense, speed, ..] => Some(Self {
                hp: *hp,
                attack: *attack,
                defense: *defense,
                special_attack: *special_attack,
                special_defense: *special_defense,
                speed: *speed,
            }),
            _ => None,
        }
    }
}

/// Fields taken from `/pokemon-species/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrichment {
    pub flavor_text: String,
    pub category: String,
    pub generation: String,
}

impl Enrichment {
    /// Extract the English flavor text and genus and the generation numeral.
    ///
    /// `id` is only used in error messages.
    pub fn from_species(id: u32, species: &SpeciesResponse) -> Result<Self> {
        let flavor_text = species
            .flavor_text_entries
            .iter()
            .find(|entry| entry.language.name == ENGLISH)
            .map(|entry| flatten_flavor_text(&entry.flavor_text))
            .ok_or(IngestError::MissingEnglishEntry {
                id,
                field: "flavor text",
            })?;

        let category = species
            .genera
            .iter()
            .find(|genus| genus.language.name == ENGLISH)
            .map(|genus| genus.genus.clone())
            .ok_or(IngestError::MissingEnglishEntry { id, field: "genus" })?;

        Ok(Self {
            flavor_text,
            category,
            generation: generation_label(&species.generation.name),
        })
    }
}

/// Replace every line feed, form feed and carriage return with a space.
pub fn flatten_flavor_text(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\n' | '\u{000C}' | '\r' => ' ',
            other => other,
        })
        .collect()
}

/// `generation-iv` -> `IV`
pub fn generation_label(slug: &str) -> String {
    slug.rsplit('-').next().unwrap_or(slug).to_uppercase()
}

/// Bulbapedia article URL for a display name.
///
/// Only the first space becomes an underscore; every other character is
/// passed through as-is.
pub fn bulbapedia_url(base_url: &str, name: &str) -> String {
    format!(
        "{}/wiki/{}_(Pokémon)",
        base_url.trim_end_matches('/'),
        name.replacen(' ', "_", 1)
    )
}

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    /// National-dex number
    pub number: u32,
    pub name: String,
    pub types: Vec<TypeTag>,
    pub height: u32,
    pub weight: u32,
    pub stats: StatBlock,
    /// Front sprite, or the official artwork when there is none
    pub sprite: Option<String>,
    /// Official artwork
    pub artwork: Option<String>,
    pub bulbapedia_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrichment: Option<Enrichment>,
}

impl Pokemon {
    /// Normalize a primary record.
    pub fn from_response(response: PokemonResponse, bulbapedia_base_url: &str) -> Result<Self> {
        let base_stats: Vec<u32> = response.stats.iter().map(|s| s.base_stat).collect();
        let stats = StatBlock::from_positional(&base_stats).ok_or(IngestError::MissingStats {
            id: response.id,
            found: base_stats.len(),
        })?;

        let types = response
            .types
            .into_iter()
            .map(|slot| TypeTag {
                name: slot.kind.name,
            })
            .collect();

        let name = normalize_species_name(&response.species.name);
        let artwork = response.sprites.other.official_artwork.front_default;
        let sprite = response
            .sprites
            .front_default
            .filter(|url| !url.is_empty())
            .or_else(|| artwork.clone());

        Ok(Self {
            number: response.id,
            bulbapedia_url: bulbapedia_url(bulbapedia_base_url, &name),
            name,
            types,
            height: response.height,
            weight: response.weight,
            stats,
            sprite,
            artwork,
            enrichment: None,
        })
    }

    /// Attach species data. Returns `false`, leaving the record untouched,
    /// when the record was already enriched.
    pub fn enrich(&mut self, enrichment: Enrichment) -> bool {
        if self.enrichment.is_some() {
            return false;
        }
        self.enrichment = Some(enrichment);
        true
    }

    pub fn flavor_text(&self) -> Option<&str> {
        self.enrichment.as_ref().map(|e| e.flavor_text.as_str())
    }

    pub fn category(&self) -> Option<&str> {
        self.enrichment.as_ref().map(|e| e.category.as_str())
    }

    pub fn generation(&self) -> Option<&str> {
        self.enrichment.as_ref().map(|e| e.generation.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    const BULBAPEDIA: &str = "https://bulbapedia.bulbagarden.net";

    fn primary(front_default: Option<&str>) -> PokemonResponse {
        serde_json::from_value(json!({
            "id": 122,
            "species": { "name": "mr-mime", "url": "https://pokeapi.co/api/v2/pokemon-species/122/" },
            "types": [
                { "slot": 1, "type": { "name": "psychic" } },
                { "slot": 2, "type": { "name": "fairy" } }
            ],
            "sprites": {
                "front_default": front_default,
                "other": { "official-artwork": { "front_default": "https://img.example/art/122.png" } }
            },
            "height": 13,
            "weight": 545,
            "stats": [
                { "base_stat": 40, "stat": { "name": "speed" } },
                { "base_stat": 45, "stat": { "name": "hp" } },
                { "base_stat": 65, "stat": { "name": "attack" } },
                { "base_stat": 100, "stat": { "name": "defense" } },
                { "base_stat": 120, "stat": { "name": "special-attack" } },
                { "base_stat": 90, "stat": { "name": "special-defense" } }
            ]
        }))
        .unwrap()
    }

    fn species() -> SpeciesResponse {
        serde_json::from_value(json!({
            "id": 122,
            "flavor_text_entries": [
                { "flavor_text": "Il se sert de pantomimes.", "language": { "name": "fr" } },
                { "flavor_text": "If interrupted while it is\nmiming, it will slap\u{000c}around the offender.", "language": { "name": "en" } },
                { "flavor_text": "A second English entry.", "language": { "name": "en" } }
            ],
            "genera": [
                { "genus": "Pokémon Barrière", "language": { "name": "fr" } },
                { "genus": "Barrier Pokémon", "language": { "name": "en" } }
            ],
            "generation": { "name": "generation-i" }
        }))
        .unwrap()
    }

    #[test]
    fn test_from_response() {
        let pokemon = Pokemon::from_response(primary(Some("https://img.example/122.png")), BULBAPEDIA).unwrap();

        assert_eq!(pokemon.number, 122);
        assert_eq!(pokemon.name, "Mr. Mime");
        assert_eq!(
            pokemon.types,
            vec![
                TypeTag { name: "psychic".to_string() },
                TypeTag { name: "fairy".to_string() }
            ]
        );
        assert_eq!(pokemon.height, 13);
        assert_eq!(pokemon.weight, 545);
        assert_eq!(pokemon.sprite.as_deref(), Some("https://img.example/122.png"));
        assert_eq!(pokemon.artwork.as_deref(), Some("https://img.example/art/122.png"));
        assert_eq!(
            pokemon.bulbapedia_url,
            "https://bulbapedia.bulbagarden.net/wiki/Mr._Mime_(Pokémon)"
        );
        assert!(pokemon.enrichment.is_none());
    }

    #[test]
    fn test_stats_are_positional() {
        let pokemon = Pokemon::from_response(primary(None), BULBAPEDIA).unwrap();

        // stat names in the fixture are deliberately shuffled
        assert_eq!(
            pokemon.stats,
            StatBlock {
                hp: 40,
                attack: 45,
                defense: 65,
                special_attack: 100,
                special_defense: 120,
                speed: 90,
            }
        );
    }

    #[test]
    fn test_sprite_falls_back_to_artwork() {
        let pokemon = Pokemon::from_response(primary(None), BULBAPEDIA).unwrap();
        assert_eq!(pokemon.sprite.as_deref(), Some("https://img.example/art/122.png"));
        assert_eq!(pokemon.artwork, pokemon.sprite);
    }

    #[test]
    fn test_short_stat_list_is_rejected() {
        let mut response = primary(None);
        response.stats.truncate(5);
        let err = Pokemon::from_response(response, BULBAPEDIA).unwrap_err();
        assert!(matches!(err, IngestError::MissingStats { id: 122, found: 5 }));
    }

    #[test]
    fn test_bulbapedia_url_replaces_only_first_space() {
        assert_eq!(
            bulbapedia_url(BULBAPEDIA, "Tapu Koko"),
            "https://bulbapedia.bulbagarden.net/wiki/Tapu_Koko_(Pokémon)"
        );
        assert_eq!(
            bulbapedia_url(BULBAPEDIA, "Type: Null"),
            "https://bulbapedia.bulbagarden.net/wiki/Type:_Null_(Pokémon)"
        );
        assert_eq!(
            bulbapedia_url("http://wiki.local/", "A B C"),
            "http://wiki.local/wiki/A_B C_(Pokémon)"
        );
        assert_eq!(
            bulbapedia_url(BULBAPEDIA, "Nidoran♀"),
            "https://bulbapedia.bulbagarden.net/wiki/Nidoran♀_(Pokémon)"
        );
    }

    #[test]
    fn test_enrichment_from_species() {
        let enrichment = Enrichment::from_species(122, &species()).unwrap();

        assert_eq!(
            enrichment.flavor_text,
            "If interrupted while it is miming, it will slap around the offender."
        );
        assert_eq!(enrichment.category, "Barrier Pokémon");
        assert_eq!(enrichment.generation, "I");
    }

    #[test]
    fn test_missing_english_flavor_text() {
        let mut species = species();
        species.flavor_text_entries.retain(|e| e.language.name != ENGLISH);

        let err = Enrichment::from_species(122, &species).unwrap_err();
        assert!(matches!(
            err,
            IngestError::MissingEnglishEntry { id: 122, field: "flavor text" }
        ));
    }

    #[test]
    fn test_missing_english_genus() {
        let mut species = species();
        species.genera.clear();

        let err = Enrichment::from_species(122, &species).unwrap_err();
        assert!(matches!(err, IngestError::MissingEnglishEntry { field: "genus", .. }));
    }

    #[test]
    fn test_flatten_flavor_text_replaces_each_break() {
        assert_eq!(flatten_flavor_text("a\nb\u{000c}c\rd"), "a b c d");
        assert_eq!(flatten_flavor_text("a\r\nb"), "a  b");
    }

    #[test]
    fn test_generation_label() {
        assert_eq!(generation_label("generation-iv"), "IV");
        assert_eq!(generation_label("generation-ix"), "IX");
        assert_eq!(generation_label("kanto"), "KANTO");
    }

    #[test]
    fn test_enrich_is_additive_only() {
        let mut pokemon = Pokemon::from_response(primary(None), BULBAPEDIA).unwrap();
        let before = pokemon.clone();

        let first = Enrichment::from_species(122, &species()).unwrap();
        assert!(pokemon.enrich(first.clone()));

        let mut stripped = pokemon.clone();
        stripped.enrichment = None;
        assert_eq!(stripped, before);

        let second = Enrichment {
            flavor_text: "other".to_string(),
            category: "other".to_string(),
            generation: "II".to_string(),
        };
        assert!(!pokemon.enrich(second));
        assert_eq!(pokemon.enrichment, Some(first));
        assert_eq!(pokemon.category(), Some("Barrier Pokémon"));
        assert_eq!(pokemon.generation(), Some("I"));
    }
}
