//! Command implementations

pub mod createapps;
pub mod htmx;
