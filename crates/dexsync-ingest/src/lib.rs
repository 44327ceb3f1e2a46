//! dexsync ingest library
//!
//! Copies the Pokédex from PokeAPI into a Notion database.
//!
//! # Pipeline
//!
//! 1. **Primary fetch**: `/pokemon/{id}` for every id in the configured range
//! 2. **Enrichment**: `/pokemon-species/{id}` for every fetched record
//! 3. **Publish**: one Notion page per record, throttled by a fixed delay
//!
//! # Example
//!
//! ```no_run
//! use dexsync_ingest::config::SyncConfig;
//! use dexsync_ingest::notion::NotionClient;
//! use dexsync_ingest::pipeline::{SyncPipeline, TokioThrottle};
//! use dexsync_ingest::pokeapi::PokeApiClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = SyncConfig::from_env()?;
//!     let source = PokeApiClient::from_config(&config)?;
//!     let destination = NotionClient::from_config(&config)?;
//!     let database_id = config.notion_credentials()?.1.to_string();
//!
//!     let pipeline = SyncPipeline::new(source, destination, TokioThrottle, config, database_id);
//!     let summary = pipeline.run().await?;
//!     println!("created {} pages", summary.publish.created);
//!     Ok(())
//! }
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod config;
pub mod error;
pub mod model;
pub mod normalize;
pub mod notion;
pub mod pipeline;
pub mod pokeapi;

pub use error::{IngestError, Result};
