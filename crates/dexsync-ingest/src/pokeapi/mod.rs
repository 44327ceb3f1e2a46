//! PokeAPI access
//!
//! [`PokedexSource`] is the read side of the sync. [`PokeApiClient`] is the
//! HTTP implementation; tests substitute in-memory fixtures.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::PokeApiClient;
pub use types::{PokemonResponse, SpeciesResponse};

use crate::error::Result;
use std::future::Future;

/// Source of primary and species records keyed by national-dex number.
pub trait PokedexSource {
    /// Fetch the primary record (`/pokemon/{id}`).
    fn fetch_pokemon(&self, id: u32) -> impl Future<Output = Result<PokemonResponse>> + Send;

    /// Fetch the species record (`/pokemon-species/{id}`).
    fn fetch_species(&self, id: u32) -> impl Future<Output = Result<SpeciesResponse>> + Send;
}
