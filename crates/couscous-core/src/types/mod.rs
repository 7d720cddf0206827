//! Type definitions for couscous configuration

mod runtime_config;

pub use runtime_config::*;
