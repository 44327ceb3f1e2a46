//! PokeAPI response shapes
//!
//! Only the fields the sync reads are modelled; serde ignores the rest.

use serde::{Deserialize, Serialize};

/// `GET /pokemon/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonResponse {
    pub id: u32,
    pub species: NamedResource,
    pub types: Vec<PokemonTypeSlot>,
    pub sprites: Sprites,
    pub height: u32,
    pub weight: u32,
    /// Base stats in PokeAPI's fixed order: hp, attack, defense,
    /// special-attack, special-defense, speed.
    pub stats: Vec<PokemonStat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonTypeSlot {
    #[serde(default)]
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: ArtworkSprites,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtworkSprites {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stat: Option<NamedResource>,
}

/// `GET /pokemon-species/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesResponse {
    #[serde(default)]
    pub id: u32,
    pub flavor_text_entries: Vec<FlavorTextEntry>,
    pub genera: Vec<Genus>,
    pub generation: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genus {
    pub genus: String,
    pub language: NamedResource,
}
