//! Batch app creation

use camino::{Utf8Path, Utf8PathBuf};
use couscous_core::types::ScaffoldConfig;
use std::fs;
use tracing::debug;

use crate::error::{Error, Result};
use crate::startapp::{AppGenerator, StartAppCommand};
use crate::types::{AppOutcome, AppRequest};

/// Creates apps under a root directory, one generator call per new app
pub struct AppScaffolder<G> {
    /// Directory apps are created in
    apps_root: Utf8PathBuf,

    /// Fills in a freshly created app directory
    generator: G,
}

impl AppScaffolder<StartAppCommand> {
    /// Scaffolder backed by the configured `startapp` command
    pub fn from_config(config: &ScaffoldConfig) -> Result<Self> {
        let generator = StartAppCommand::new(config.startapp_command.clone())?;
        Ok(Self::new(config.apps_dir.clone(), generator))
    }
}

impl<G: AppGenerator> AppScaffolder<G> {
    /// Create a scaffolder
    pub fn new(apps_root: impl Into<Utf8PathBuf>, generator: G) -> Self {
        Self {
            apps_root: apps_root.into(),
            generator,
        }
    }

    /// Root directory apps are created in
    pub fn apps_root(&self) -> &Utf8Path {
        &self.apps_root
    }

    /// Build a request for one app name
    pub fn request(&self, name: &str) -> Result<AppRequest> {
        AppRequest::new(&self.apps_root, name)
    }

    /// Create the applications root if it is missing
    pub fn ensure_root(&self) -> Result<()> {
        if !self.apps_root.exists() {
            debug!("Creating applications root {}", self.apps_root);
        }
        fs::create_dir_all(&self.apps_root)?;
        Ok(())
    }

    /// Create a single app, skipping it if its directory already exists.
    ///
    /// The app directory is only created once the generator reports it can run.
    pub async fn create_app(&self, request: AppRequest) -> Result<AppOutcome> {
        if request.path.exists() {
            debug!("App '{}' already exists at {}", request.name, request.path);
            return Ok(AppOutcome::AlreadyExists {
                name: request.name,
                path: request.path,
            });
        }

        self.generator.check()?;
        fs::create_dir_all(&request.path)?;
        self.generator.start_app(&request.name, &request.path).await?;

        Ok(AppOutcome::Created {
            name: request.name,
            path: request.path,
        })
    }

    /// Create every named app in order.
    ///
    /// All names are validated, and the generator checked, before anything
    /// touches the filesystem.
    /// `on_outcome` sees each result as soon as it is known. A generator
    /// failure stops the batch; apps created before it are left in place.
    pub async fn create_apps<F>(
        &self,
        names: &[String],
        mut on_outcome: F,
    ) -> Result<Vec<AppOutcome>>
    where
        F: FnMut(&AppOutcome),
    {
        if names.is_empty() {
            return Err(Error::NoAppNames);
        }

        let requests = names
            .iter()
            .map(|name| self.request(name))
            .collect::<Result<Vec<_>>>()?;

        self.generator.check()?;
        self.ensure_root()?;

        let mut outcomes = Vec::with_capacity(requests.len());
        for request in requests {
            let outcome = self.create_app(request).await?;
            on_outcome(&outcome);
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }
}
