//! Requested and resolved htmx versions

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Token that asks for the most recent release
pub const LATEST: &str = "latest";

/// Version requested on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VersionSpec {
    /// Whatever the most recent release is
    #[default]
    Latest,

    /// A concrete version, used verbatim
    Exact(String),
}

impl FromStr for VersionSpec {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == LATEST {
            Ok(Self::Latest)
        } else {
            Ok(Self::Exact(s.to_string()))
        }
    }
}

impl fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => f.write_str(LATEST),
            Self::Exact(v) => f.write_str(v),
        }
    }
}

/// A concrete version, together with the latest release seen while resolving it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersion {
    /// Version used in URLs and messages
    pub version: String,

    /// Most recent release at resolution time
    pub latest: String,
}

impl ResolvedVersion {
    /// Resolve a requested version against a known latest version
    pub fn resolve(spec: &VersionSpec, latest: impl Into<String>) -> Self {
        let latest = latest.into();
        let version = match spec {
            VersionSpec::Latest => latest.clone(),
            VersionSpec::Exact(v) => v.clone(),
        };
        Self { version, latest }
    }

    /// The latest version, when it differs from the one being used
    pub fn newer_available(&self) -> Option<&str> {
        (self.version != self.latest).then_some(self.latest.as_str())
    }
}
