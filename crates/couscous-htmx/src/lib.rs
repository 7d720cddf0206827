//! htmx asset downloads for the couscous CLI
//!
//! Provides:
//! - Latest-release lookup against the GitHub releases API
//! - Download URL construction for htmx and its extensions
//! - Asset download into a local directory
//! - JetBrains web-types retrieval from the repository contents API
//!
//! All network access goes through the [`HttpClient`] trait so the
//! status branching and file layout can be exercised without a network.

pub mod client;
pub mod download;
pub mod error;
pub mod releases;
pub mod version;
pub mod web_types;

pub use client::{HttpClient, HttpResponse, ReqwestClient, TransportError};
pub use download::{AssetDownloader, AssetRequest, DownloadTarget, DownloadedAsset};
pub use error::{FetchError, Result, Termination};
pub use releases::ReleaseManager;
pub use version::{ResolvedVersion, VersionSpec};
pub use web_types::WebTypesFetcher;

/// Default filename for the core library download
pub const DEFAULT_OUTPUT_FILE: &str = "htmx.min.js";

/// Filename the web-types document is written to
pub const WEB_TYPES_FILE: &str = "htmx.web-types.json";
