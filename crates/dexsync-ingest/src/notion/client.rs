//! HTTP client for the Notion pages API

use super::{CreatedPage, Destination, PageRequest};
use crate::config::SyncConfig;
use crate::error::{IngestError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// API version sent with every request
pub const NOTION_VERSION: &str = "2022-06-28";

/// Error body returned by Notion on 4xx/5xx
#[derive(Debug, Deserialize)]
struct NotionErrorBody {
    #[serde(default)]
    code: Option<String>,
    message: String,
}

/// Notion client bound to one integration token
pub struct NotionClient {
    client: Client,
    base_url: String,
}

impl NotionClient {
    pub fn new(base_url: impl Into<String>, token: &str, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
            IngestError::config("NOTION_KEY contains characters not allowed in a header")
        })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            HeaderName::from_static("notion-version"),
            HeaderValue::from_static(NOTION_VERSION),
        );

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Build a client from the run configuration; fails without `NOTION_KEY`.
    pub fn from_config(config: &SyncConfig) -> Result<Self> {
        let (token, _) = config.notion_credentials()?;
        Self::new(config.notion_base_url.clone(), token, config.timeout())
    }

    pub fn pages_url(&self) -> String {
        format!("{}/v1/pages", self.base_url.trim_end_matches('/'))
    }
}

impl Destination for NotionClient {
    fn name() -> &'static str {
        "notion"
    }

    async fn create_page(&self, page: &PageRequest) -> Result<CreatedPage> {
        let url = self.pages_url();
        debug!(url = %url, title = ?page.title(), "Creating Notion page");

        let response = self.client.post(&url).json(page).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = match serde_json::from_slice::<NotionErrorBody>(&body) {
                Ok(err) => match err.code {
                    Some(code) => format!("{} ({})", err.message, code),
                    None => err.message,
                },
                Err(_) => String::from_utf8_lossy(&body).into_owned(),
            };
            return Err(IngestError::Notion {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }
}
