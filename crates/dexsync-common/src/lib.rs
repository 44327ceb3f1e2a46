//! dexsync common library
//!
//! Shared pieces used by every dexsync workspace member:
//!
//! - **Error Handling**: [`CommonError`] and the [`Result`] alias
//! - **Environment**: typed lookups of process environment variables
//! - **Logging**: `tracing` subscriber setup driven by `LOG_*` variables
//!
//! # Example
//!
//! ```no_run
//! use dexsync_common::env;
//! use dexsync_common::logging::{init_logging, LogConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let _guard = init_logging(&LogConfig::from_env()?)?;
//!     let start: u32 = env::parse_or("DEXSYNC_START_ID", 1)?;
//!     tracing::info!(start, "starting");
//!     Ok(())
//! }
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod env;
pub mod error;
pub mod logging;

pub use error::{CommonError, Result};
