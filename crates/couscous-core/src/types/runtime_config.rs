//! Runtime configuration types for operational parameters
//!
//! These types define configuration that controls runtime behavior like
//! network timeouts, the endpoints htmx assets are fetched from, and how
//! new applications are scaffolded.

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Complete runtime configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RuntimeConfig {
    /// Network and HTTP configuration
    #[serde(default)]
    pub network: NetworkConfig,

    /// Endpoints for htmx releases, assets and web-types
    #[serde(default)]
    pub htmx: HtmxConfig,

    /// Application scaffolding settings
    #[serde(default)]
    pub scaffold: ScaffoldConfig,
}

/// Network and HTTP configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NetworkConfig {
    /// HTTP timeout in seconds
    #[serde(default = "default_http_timeout")]
    pub http_timeout_secs: u64,

    /// User agent string for HTTP requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            http_timeout_secs: default_http_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_http_timeout() -> u64 {
    300 // 5 minutes
}
fn default_user_agent() -> String {
    format!(
        "couscous/{} ({}; {})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

/// Where htmx is published
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct HtmxConfig {
    /// Base URL for the GitHub API
    #[serde(default = "default_github_api_url")]
    pub github_api_url: String,

    /// Repository owner
    #[serde(default = "default_repo_owner")]
    pub repo_owner: String,

    /// Repository name
    #[serde(default = "default_repo_name")]
    pub repo_name: String,

    /// CDN package URL; the version is appended as `@{version}`
    #[serde(default = "default_cdn_url")]
    pub cdn_url: String,

    /// Path of the JetBrains web-types file inside the repository
    #[serde(default = "default_web_types_path")]
    pub web_types_path: String,
}

impl Default for HtmxConfig {
    fn default() -> Self {
        Self {
            github_api_url: default_github_api_url(),
            repo_owner: default_repo_owner(),
            repo_name: default_repo_name(),
            cdn_url: default_cdn_url(),
            web_types_path: default_web_types_path(),
        }
    }
}

impl HtmxConfig {
    /// Point both the GitHub API and the CDN at a single base URL.
    ///
    /// Used by tests that serve every endpoint from one mock server.
    pub fn with_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            github_api_url: base.to_string(),
            cdn_url: format!("{}/htmx.org", base),
            ..Self::default()
        }
    }
}

fn default_github_api_url() -> String {
    "https://api.github.com".to_string()
}
fn default_repo_owner() -> String {
    "bigskysoftware".to_string()
}
fn default_repo_name() -> String {
    "htmx".to_string()
}
fn default_cdn_url() -> String {
    "https://unpkg.com/htmx.org".to_string()
}
fn default_web_types_path() -> String {
    "editors/jetbrains/htmx.web-types.json".to_string()
}

/// Application scaffolding configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ScaffoldConfig {
    /// Root directory new applications are created under
    #[serde(default = "default_apps_dir")]
    pub apps_dir: Utf8PathBuf,

    /// Command that generates an app; `name` and `path` are appended
    #[serde(default = "default_startapp_command")]
    pub startapp_command: Vec<String>,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            apps_dir: default_apps_dir(),
            startapp_command: default_startapp_command(),
        }
    }
}

fn default_apps_dir() -> Utf8PathBuf {
    Utf8PathBuf::from("apps")
}
fn default_startapp_command() -> Vec<String> {
    vec![
        "python".to_string(),
        "manage.py".to_string(),
        "startapp".to_string(),
    ]
}
