//! PokeAPI endpoint URL builders

/// Build the primary record URL for a national-dex number
pub fn pokemon_url(base_url: &str, id: u32) -> String {
    format!("{}/pokemon/{}", base_url.trim_end_matches('/'), id)
}

/// Build the species (enrichment) URL for a national-dex number
pub fn species_url(base_url: &str, id: u32) -> String {
    format!("{}/pokemon-species/{}", base_url.trim_end_matches('/'), id)
}
