//! Error types for couscous-htmx

use camino::Utf8PathBuf;
use thiserror::Error;

/// Result type alias using couscous-htmx's FetchError type
pub type Result<T> = std::result::Result<T, FetchError>;

/// How a failed fetch ends the command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Stop with a failure exit status
    Abort,

    /// Stop after reporting, without a failure exit status
    Exit,
}

/// Asset fetcher error types
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP client could not be built
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Latest release could not be determined
    #[error("Could not determine the latest htmx release: {message}")]
    ReleaseLookup { message: String },

    /// Asset host unreachable
    #[error("Could not connect to {url}")]
    Connect { url: String },

    /// Asset host answered 404
    #[error("{}", not_found_message(.version, .extension.as_deref()))]
    NotFound {
        version: String,
        extension: Option<String>,
    },

    /// Asset host answered anything other than 200 or 404
    #[error("Something went wrong.")]
    UnexpectedStatus { url: String, status: u16 },

    /// Asset body is not UTF-8 text
    #[error("Downloaded content from {url} is not valid UTF-8 text")]
    InvalidBody { url: String },

    /// Writing a downloaded file failed
    #[error("Failed to write {path}: {source}")]
    Write {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Web-types document could not be fetched or decoded
    #[error("Could not download web-types file.")]
    WebTypes { reason: String },
}

fn not_found_message(version: &str, extension: Option<&str>) -> String {
    match extension {
        Some(ext) => format!(
            "Could not find {} extension for {} version of htmx.",
            ext, version
        ),
        None => format!("Could not find {} version of htmx.", version),
    }
}

impl FetchError {
    /// Create a release lookup error
    pub fn release_lookup(message: impl Into<String>) -> Self {
        Self::ReleaseLookup {
            message: message.into(),
        }
    }

    /// Create a web-types error
    pub fn web_types(reason: impl Into<String>) -> Self {
        Self::WebTypes {
            reason: reason.into(),
        }
    }

    /// How this failure terminates the command.
    ///
    /// Only the web-types step exits softly; the primary download already
    /// succeeded by the time it runs.
    pub fn termination(&self) -> Termination {
        match self {
            Self::WebTypes { .. } => Termination::Exit,
            _ => Termination::Abort,
        }
    }
}
