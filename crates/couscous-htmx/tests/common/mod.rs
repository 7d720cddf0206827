//! Common test infrastructure for couscous-htmx tests
//!
//! # Modules
//!
//! - `constants`: Version strings, tags, asset bodies
//! - `mock_server`: Wiremock setup helpers for the release, CDN and contents endpoints

// Not every test file uses every helper
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod constants;
pub mod mock_server;

pub use constants::*;
pub use mock_server::*;
