//! GitHub releases lookup

use couscous_core::types::HtmxConfig;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info};

use crate::client::HttpClient;
use crate::error::{FetchError, Result};
use crate::version::{ResolvedVersion, VersionSpec};

/// Release information
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    /// Release tag (e.g., "v2.0.4")
    pub tag_name: String,
}

impl Release {
    /// Tag with its leading prefix character removed ("v2.0.4" -> "2.0.4")
    pub fn version(&self) -> Option<&str> {
        let mut chars = self.tag_name.chars();
        chars.next()?;
        Some(chars.as_str()).filter(|v| !v.is_empty())
    }
}

/// Release manager for resolving htmx versions
pub struct ReleaseManager {
    /// HTTP client
    client: Arc<dyn HttpClient>,

    /// Endpoint configuration
    config: HtmxConfig,
}

impl ReleaseManager {
    /// Create a new release manager
    pub fn new(client: Arc<dyn HttpClient>, config: HtmxConfig) -> Self {
        Self { client, config }
    }

    /// URL of the latest-release endpoint
    pub fn latest_release_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/releases/latest",
            self.config.github_api_url, self.config.repo_owner, self.config.repo_name
        )
    }

    /// Get latest release
    pub async fn get_latest(&self) -> Result<Release> {
        let url = self.latest_release_url();

        debug!("Fetching latest release from: {}", url);

        let response = self
            .client
            .get(&url)
            .await
            .map_err(|e| FetchError::release_lookup(e.to_string()))?;

        if !response.is_ok() {
            return Err(FetchError::release_lookup(format!(
                "{} returned HTTP {}",
                url, response.status
            )));
        }

        let release: Release = serde_json::from_slice(&response.body)
            .map_err(|e| FetchError::release_lookup(format!("invalid release JSON: {}", e)))?;

        Ok(release)
    }

    /// Latest released version, without its tag prefix
    pub async fn latest_version(&self) -> Result<String> {
        let release = self.get_latest().await?;
        let version = release.version().ok_or_else(|| {
            FetchError::release_lookup(format!("unusable release tag '{}'", release.tag_name))
        })?;

        info!("Latest htmx release: {}", version);
        Ok(version.to_string())
    }

    /// Turn a requested version into a concrete one.
    ///
    /// The latest release is always looked up, even for an exact request,
    /// so callers can tell the user when a newer version exists.
    pub async fn resolve(&self, spec: &VersionSpec) -> Result<ResolvedVersion> {
        let latest = self.latest_version().await?;
        Ok(ResolvedVersion::resolve(spec, latest))
    }
}
