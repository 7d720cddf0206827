//! JetBrains web-types retrieval
//!
//! The web-types document lives in the htmx repository and is fetched through
//! the GitHub contents API, which wraps the file in a JSON envelope with a
//! base64 `content` field. Every failure in this step maps to
//! [`FetchError::WebTypes`], which exits without aborting.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use camino::{Utf8Path, Utf8PathBuf};
use couscous_core::types::HtmxConfig;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info};

use crate::client::HttpClient;
use crate::download::write_text;
use crate::error::{FetchError, Result};
use crate::WEB_TYPES_FILE;

/// Contents API envelope
#[derive(Debug, Deserialize)]
struct ContentsEnvelope {
    /// Base64 payload, possibly wrapped across lines
    content: String,
}

/// Web-types fetcher
pub struct WebTypesFetcher {
    /// HTTP client
    client: Arc<dyn HttpClient>,

    /// Endpoint configuration
    config: HtmxConfig,
}

impl WebTypesFetcher {
    /// Create a new fetcher
    pub fn new(client: Arc<dyn HttpClient>, config: HtmxConfig) -> Self {
        Self { client, config }
    }

    /// Contents API URL for the web-types file pinned to `v{version}`
    pub fn contents_url(&self, version: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}?ref=v{}",
            self.config.github_api_url,
            self.config.repo_owner,
            self.config.repo_name,
            self.config.web_types_path,
            version
        )
    }

    /// Fetch and decode the web-types document for a version
    pub async fn fetch(&self, version: &str) -> Result<String> {
        let url = self.contents_url(version);
        debug!("Fetching web-types from: {}", url);

        let response = self.client.get(&url).await.map_err(|e| {
            debug!("{}", e);
            FetchError::web_types(e.to_string())
        })?;

        if !response.is_ok() {
            debug!("{} returned HTTP {}", url, response.status);
        }

        decode_envelope(&response.body)
    }

    /// Fetch the document and write it next to the downloaded asset
    pub async fn download(&self, version: &str, output_dir: &Utf8Path) -> Result<Utf8PathBuf> {
        let content = self.fetch(version).await?;

        let path = output_dir.join(WEB_TYPES_FILE);
        write_text(&path, &content)?;
        info!("Wrote web-types to {}", path);

        Ok(path)
    }
}

/// Decode a contents API envelope into the file's text
fn decode_envelope(body: &[u8]) -> Result<String> {
    let envelope: ContentsEnvelope = serde_json::from_slice(body).map_err(|e| {
        debug!("Invalid contents envelope: {}", e);
        FetchError::web_types(format!("invalid contents envelope: {}", e))
    })?;

    let encoded: String = envelope
        .content
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    let bytes = STANDARD
        .decode(encoded)
        .map_err(|e| FetchError::web_types(format!("invalid base64 content: {}", e)))?;

    String::from_utf8(bytes)
        .map_err(|e| FetchError::web_types(format!("content is not UTF-8: {}", e)))
}
