//! Destination that logs documents instead of sending them

use super::{CreatedPage, Destination, PageRequest};
use crate::error::Result;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::info;

#[derive(Debug, Default)]
pub struct DryRunDestination {
    pages: AtomicUsize,
}

impl DryRunDestination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents seen so far
    pub fn page_count(&self) -> usize {
        self.pages.load(Ordering::Relaxed)
    }
}

impl Destination for DryRunDestination {
    fn name() -> &'static str {
        "dry-run"
    }

    async fn create_page(&self, page: &PageRequest) -> Result<CreatedPage> {
        let body = serde_json::to_string(page)?;
        let n = self.pages.fetch_add(1, Ordering::Relaxed) + 1;

        info!(title = ?page.title(), document = %body, "Dry run: page not sent");

        Ok(CreatedPage {
            id: format!("dry-run-{}", n),
            url: None,
        })
    }
}
