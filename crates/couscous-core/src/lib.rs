//! # couscous-core
//!
//! Core library for the couscous CLI providing:
//! - Runtime configuration types (network, htmx endpoints, app scaffolding)
//! - Hierarchical configuration loading (embedded defaults, file, environment)

pub mod config;
pub mod error;
pub mod types;

pub use config::HierarchicalConfigLoader;
pub use error::{Error, Result};
pub use types::RuntimeConfig;
