//! Notion publishing
//!
//! [`Destination`] is the write side of the sync. [`NotionClient`] creates
//! real pages; [`DryRunDestination`] only logs the documents it would send.

pub mod client;
pub mod document;
pub mod dry_run;

pub use client::NotionClient;
pub use document::PageRequest;
pub use dry_run::DryRunDestination;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Page returned by a successful create call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedPage {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Something that can receive one page at a time.
///
/// Calls are made strictly one after another; implementations do not need
/// to handle concurrent use.
pub trait Destination {
    /// Short name used in log lines.
    fn name() -> &'static str;

    /// Create one page and return its identity.
    fn create_page(&self, page: &PageRequest) -> impl Future<Output = Result<CreatedPage>> + Send;
}
