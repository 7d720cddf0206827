//! Common test helpers for couscous-apps integration tests
//!
//! Provides a recording generator standing in for the framework's
//! `startapp` command, plus a temporary applications root.

// Not every test file uses every helper
#![allow(dead_code)]

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use couscous_apps::{AppGenerator, Error, Result};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Records every `start_app` call as (name, path)
#[derive(Debug, Clone, Default)]
pub struct RecordingGenerator {
    pub calls: Arc<Mutex<Vec<(String, Utf8PathBuf)>>>,
    fail_on: Option<String>,
}

impl RecordingGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail when asked to generate `name`
    pub fn failing_on(name: &str) -> Self {
        Self {
            fail_on: Some(name.to_string()),
            ..Self::default()
        }
    }

    /// Names the generator was invoked with, in order
    pub fn names(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }
}

#[async_trait]
impl AppGenerator for RecordingGenerator {
    async fn start_app(&self, name: &str, path: &Utf8Path) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push((name.to_string(), path.to_path_buf()));

        if self.fail_on.as_deref() == Some(name) {
            return Err(Error::start_app_failed(name, "generator exploded"));
        }

        // Mimic startapp populating the directory
        std::fs::write(path.join("apps.py"), format!("name = '{}'\n", name))?;
        Ok(())
    }
}

/// Temporary project with an (absent) applications root inside it
pub fn temp_apps_root() -> (TempDir, Utf8PathBuf) {
    let temp = TempDir::new().unwrap();
    let root = Utf8PathBuf::from_path_buf(temp.path().join("apps")).expect("utf-8 temp dir");
    (temp, root)
}

/// Collects formatted log output written through a tracing subscriber
#[derive(Debug, Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl std::io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
