//! htmx asset download
//!
//! Builds the CDN URL for the core library or an extension, fetches it and
//! writes the body into the output directory. Nothing is written unless the
//! CDN answers 200 with UTF-8 text.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::sync::Arc;
use tracing::{debug, info};

use crate::client::HttpClient;
use crate::error::{FetchError, Result};
use crate::version::ResolvedVersion;
use crate::DEFAULT_OUTPUT_FILE;

/// A single downloadable file on the CDN
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTarget {
    /// CDN package URL (e.g., "https://unpkg.com/htmx.org")
    pub base_url: String,

    /// Concrete version
    pub version: String,

    /// Extension name, when downloading an extension
    pub extension: Option<String>,
}

impl DownloadTarget {
    /// Create a target
    pub fn new(base_url: &str, version: &str, extension: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            version: version.to_string(),
            extension: extension.map(String::from),
        }
    }

    /// Resolvable URL for this target
    pub fn url(&self) -> String {
        match &self.extension {
            Some(ext) => format!("{}@{}/dist/ext/{}.js", self.base_url, self.version, ext),
            None => format!("{}@{}/dist/htmx.min.js", self.base_url, self.version),
        }
    }

    /// Spinner text describing what is being fetched
    pub fn describe(&self) -> String {
        let msg = format!("htmx version {}", self.version);
        match &self.extension {
            Some(ext) => format!("{} extension for {}", ext, msg),
            None => msg,
        }
    }
}

/// What to download and where to put it
#[derive(Debug, Clone)]
pub struct AssetRequest {
    /// Directory the file is written to
    pub output_dir: Utf8PathBuf,

    /// Filename for the core library; ignored for extensions
    pub output_file: String,

    /// Extension name
    pub extension: Option<String>,
}

impl AssetRequest {
    /// Request the core library into `output_dir` under the default filename
    pub fn new(output_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            extension: None,
        }
    }

    /// Set the core library filename
    pub fn with_output_file(mut self, output_file: impl Into<String>) -> Self {
        self.output_file = output_file.into();
        self
    }

    /// Download an extension instead of the core library
    pub fn with_extension(mut self, extension: Option<String>) -> Self {
        self.extension = extension;
        self
    }

    /// Name of the file that will be written
    pub fn filename(&self) -> String {
        match &self.extension {
            Some(ext) => format!("{}.js", ext),
            None => self.output_file.clone(),
        }
    }

    /// Full path of the file that will be written
    pub fn destination(&self) -> Utf8PathBuf {
        self.output_dir.join(self.filename())
    }
}

/// Result of a successful download
#[derive(Debug, Clone)]
pub struct DownloadedAsset {
    /// Path the asset was written to
    pub path: Utf8PathBuf,

    /// URL it was fetched from
    pub url: String,

    /// Version that was downloaded
    pub version: String,

    /// Number of bytes written
    pub bytes_written: usize,
}

impl DownloadedAsset {
    /// Final path component of the written file
    pub fn filename(&self) -> &str {
        self.path.file_name().unwrap_or(self.path.as_str())
    }
}

/// Asset downloader
pub struct AssetDownloader {
    /// HTTP client
    client: Arc<dyn HttpClient>,

    /// CDN package URL
    cdn_url: String,
}

impl AssetDownloader {
    /// Create a new downloader
    pub fn new(client: Arc<dyn HttpClient>, cdn_url: impl Into<String>) -> Self {
        Self {
            client,
            cdn_url: cdn_url.into(),
        }
    }

    /// Target for a resolved version and request
    pub fn target(&self, version: &ResolvedVersion, request: &AssetRequest) -> DownloadTarget {
        DownloadTarget::new(&self.cdn_url, &version.version, request.extension.as_deref())
    }

    /// Download the requested asset and write it to disk
    pub async fn download(
        &self,
        version: &ResolvedVersion,
        request: &AssetRequest,
    ) -> Result<DownloadedAsset> {
        let target = self.target(version, request);
        let url = target.url();

        let response = self.client.get(&url).await.map_err(|e| {
            debug!("{}", e);
            FetchError::Connect { url: url.clone() }
        })?;

        match response.status {
            200 => {}
            404 => {
                return Err(FetchError::NotFound {
                    version: target.version,
                    extension: target.extension,
                })
            }
            status => {
                debug!("{} returned HTTP {}", url, status);
                return Err(FetchError::UnexpectedStatus { url, status });
            }
        }

        let text = String::from_utf8(response.body)
            .map_err(|_| FetchError::InvalidBody { url: url.clone() })?;

        let path = request.destination();
        write_text(&path, &text)?;
        info!("Wrote {} bytes to {}", text.len(), path);

        Ok(DownloadedAsset {
            path,
            url,
            version: target.version,
            bytes_written: text.len(),
        })
    }
}

/// Write text to a file, mapping failures to a fetch error
pub(crate) fn write_text(path: &Utf8Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|source| FetchError::Write {
        path: path.to_path_buf(),
        source,
    })
}
