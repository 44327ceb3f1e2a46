//! Run configuration
//!
//! Everything is read from the process environment (after `.env` has been
//! loaded by the binary). Command-line flags override the range and delay.

use crate::error::{IngestError, Result};
use dexsync_common::{env, CommonError};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::time::Duration;

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_NOTION_BASE_URL: &str = "https://api.notion.com";
pub const DEFAULT_BULBAPEDIA_BASE_URL: &str = "https://bulbapedia.bulbagarden.net";

/// First national-dex number fetched by default.
pub const DEFAULT_START_ID: u32 = 1;

/// Last national-dex number fetched by default.
pub const DEFAULT_END_ID: u32 = 1010;

/// Pause before every page creation. Notion allows roughly three requests
/// per second per integration.
pub const DEFAULT_PUBLISH_DELAY_MS: u64 = 300;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for one sync run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    pub pokeapi_base_url: String,
    pub notion_base_url: String,
    pub bulbapedia_base_url: String,

    /// Notion integration token (`NOTION_KEY`)
    #[serde(skip_serializing)]
    pub notion_token: Option<String>,

    /// Target database (`NOTION_DATABASE_ID`)
    pub database_id: Option<String>,

    pub start_id: u32,
    pub end_id: u32,
    pub publish_delay_ms: u64,
    pub timeout_secs: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            pokeapi_base_url: DEFAULT_POKEAPI_BASE_URL.to_string(),
            notion_base_url: DEFAULT_NOTION_BASE_URL.to_string(),
            bulbapedia_base_url: DEFAULT_BULBAPEDIA_BASE_URL.to_string(),
            notion_token: None,
            database_id: None,
            start_id: DEFAULT_START_ID,
            end_id: DEFAULT_END_ID,
            publish_delay_ms: DEFAULT_PUBLISH_DELAY_MS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl SyncConfig {
    pub fn builder() -> SyncConfigBuilder {
        SyncConfigBuilder::default()
    }

    /// Load configuration from environment variables
    ///
    /// - `POKEAPI_BASE_URL`, `NOTION_BASE_URL`, `BULBAPEDIA_BASE_URL`
    /// - `NOTION_KEY`, `NOTION_DATABASE_ID`
    /// - `DEXSYNC_START_ID`, `DEXSYNC_END_ID`
    /// - `DEXSYNC_PUBLISH_DELAY_MS`, `DEXSYNC_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            pokeapi_base_url: env::var("POKEAPI_BASE_URL").unwrap_or(defaults.pokeapi_base_url),
            notion_base_url: env::var("NOTION_BASE_URL").unwrap_or(defaults.notion_base_url),
            bulbapedia_base_url: env::var("BULBAPEDIA_BASE_URL")
                .unwrap_or(defaults.bulbapedia_base_url),
            notion_token: env::var("NOTION_KEY"),
            database_id: env::var("NOTION_DATABASE_ID"),
            start_id: env::parse_or("DEXSYNC_START_ID", defaults.start_id)?,
            end_id: env::parse_or("DEXSYNC_END_ID", defaults.end_id)?,
            publish_delay_ms: env::parse_or("DEXSYNC_PUBLISH_DELAY_MS", defaults.publish_delay_ms)?,
            timeout_secs: env::parse_or("DEXSYNC_TIMEOUT_SECS", defaults.timeout_secs)?,
        })
    }

    /// National-dex numbers to fetch, in the order they are fetched.
    pub fn ids(&self) -> RangeInclusive<u32> {
        self.start_id..=self.end_id
    }

    pub fn publish_delay(&self) -> Duration {
        Duration::from_millis(self.publish_delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Token and database id, both required to publish to Notion.
    pub fn notion_credentials(&self) -> Result<(&str, &str)> {
        let token = self
            .notion_token
            .as_deref()
            .ok_or_else(|| CommonError::MissingEnv("NOTION_KEY".to_string()))?;
        let database_id = self
            .database_id
            .as_deref()
            .ok_or_else(|| CommonError::MissingEnv("NOTION_DATABASE_ID".to_string()))?;
        Ok((token, database_id))
    }

    pub fn validate(&self) -> Result<()> {
        if self.start_id == 0 {
            return Err(IngestError::config("Start id must be at least 1"));
        }

        if self.start_id > self.end_id {
            return Err(IngestError::config(format!(
                "Start id {} is greater than end id {}",
                self.start_id, self.end_id
            )));
        }

        for (name, url) in [
            ("PokeAPI", &self.pokeapi_base_url),
            ("Notion", &self.notion_base_url),
            ("Bulbapedia", &self.bulbapedia_base_url),
        ] {
            if url.trim().is_empty() {
                return Err(IngestError::config(format!("{} base URL cannot be empty", name)));
            }
        }

        if self.timeout_secs == 0 {
            return Err(IngestError::config("Timeout must be greater than 0"));
        }

        Ok(())
    }
}

/// Builder for SyncConfig, starting from the defaults
#[derive(Default)]
pub struct SyncConfigBuilder {
    config: SyncConfig,
}

impl SyncConfigBuilder {
    pub fn pokeapi_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.pokeapi_base_url = url.into();
        self
    }

    pub fn notion_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.notion_base_url = url.into();
        self
    }

    pub fn bulbapedia_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.bulbapedia_base_url = url.into();
        self
    }

    pub fn notion_token(mut self, token: impl Into<String>) -> Self {
        self.config.notion_token = Some(token.into());
        self
    }

    pub fn database_id(mut self, id: impl Into<String>) -> Self {
        self.config.database_id = Some(id.into());
        self
    }

    pub fn range(mut self, start_id: u32, end_id: u32) -> Self {
        self.config.start_id = start_id;
        self.config.end_id = end_id;
        self
    }

    pub fn publish_delay_ms(mut self, delay_ms: u64) -> Self {
        self.config.publish_delay_ms = delay_ms;
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    pub fn build(self) -> SyncConfig {
        self.config
    }
}
