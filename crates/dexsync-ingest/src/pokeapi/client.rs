//! HTTP client for PokeAPI

use super::endpoints;
use super::types::{PokemonResponse, SpeciesResponse};
use super::PokedexSource;
use crate::config::SyncConfig;
use crate::error::{IngestError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("dexsync/", env!("CARGO_PKG_VERSION"));

/// Read-only PokeAPI client
pub struct PokeApiClient {
    client: Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &SyncConfig) -> Result<Self> {
        Self::new(config.pokeapi_base_url.clone(), config.timeout())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(url, "GET");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(IngestError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl PokedexSource for PokeApiClient {
    async fn fetch_pokemon(&self, id: u32) -> Result<PokemonResponse> {
        self.get_json(&endpoints::pokemon_url(&self.base_url, id))
            .await
    }

    async fn fetch_species(&self, id: u32) -> Result<SpeciesResponse> {
        self.get_json(&endpoints::species_url(&self.base_url, id))
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        assert!(PokeApiClient::new("http://localhost:8080", Duration::from_secs(5)).is_ok());
    }

    #[test]
    fn test_client_from_config() {
        let config = SyncConfig::default();
        assert!(PokeApiClient::from_config(&config).is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_an_http_error() {
        let client = PokeApiClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let err = client.fetch_pokemon(1).await.unwrap_err();
        assert!(matches!(err, IngestError::Http(_)));
    }
}
