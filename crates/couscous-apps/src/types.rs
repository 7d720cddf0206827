//! App scaffolding types

use camino::{Utf8Path, Utf8PathBuf};
use std::fmt;

use crate::error::{Error, Result};

/// One app to create
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppRequest {
    /// App name, passed to the generator unchanged
    pub name: String,

    /// Directory the app is generated into
    pub path: Utf8PathBuf,
}

impl AppRequest {
    /// Build a request for `name` under `apps_root`.
    ///
    /// Names that could resolve outside the root are rejected.
    pub fn new(apps_root: &Utf8Path, name: &str) -> Result<Self> {
        validate_app_name(name)?;
        Ok(Self {
            name: name.to_string(),
            path: apps_root.join(name),
        })
    }
}

fn validate_app_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::invalid_app_name(name, "name is empty"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(Error::invalid_app_name(
            name,
            "name must not contain path separators",
        ));
    }
    if name == "." || name == ".." {
        return Err(Error::invalid_app_name(name, "name must not be . or .."));
    }
    Ok(())
}

/// What happened to one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppOutcome {
    /// The directory was created and the generator ran
    Created { name: String, path: Utf8PathBuf },

    /// The directory was already there; nothing was touched
    AlreadyExists { name: String, path: Utf8PathBuf },
}

impl AppOutcome {
    /// Name of the app this outcome is about
    pub fn name(&self) -> &str {
        match self {
            Self::Created { name, .. } | Self::AlreadyExists { name, .. } => name,
        }
    }

    /// Whether the app was generated in this run
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created { .. })
    }
}

impl fmt::Display for AppOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created { name, path } => write!(f, "App '{}' created at {}", name, path),
            Self::AlreadyExists { name, .. } => write!(f, "App '{}' already exists", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_path_under_root() {
        let request = AppRequest::new(Utf8Path::new("project/apps"), "blog").unwrap();
        assert_eq!(request.name, "blog");
        assert_eq!(request.path, Utf8PathBuf::from("project/apps/blog"));
    }

    #[test]
    fn test_rejects_escaping_names() {
        let root = Utf8Path::new("apps");
        for name in ["", "  ", "..", ".", "../etc", "a/b", "a\\b"] {
            assert!(
                matches!(
                    AppRequest::new(root, name),
                    Err(Error::InvalidAppName { .. })
                ),
                "accepted {:?}",
                name
            );
        }
    }

    #[test]
    fn test_outcome_messages() {
        let created = AppOutcome::Created {
            name: "blog".to_string(),
            path: Utf8PathBuf::from("apps/blog"),
        };
        assert_eq!(created.to_string(), "App 'blog' created at apps/blog");
        assert!(created.is_created());

        let skipped = AppOutcome::AlreadyExists {
            name: "shop".to_string(),
            path: Utf8PathBuf::from("apps/shop"),
        };
        assert_eq!(skipped.to_string(), "App 'shop' already exists");
        assert_eq!(skipped.name(), "shop");
        assert!(!skipped.is_created());
    }
}
