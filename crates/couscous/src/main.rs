//! couscous CLI - htmx downloads and Django app scaffolding
//!
//! This is the main entry point for the couscous command-line interface.

mod cli;
mod commands;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use couscous_core::{HierarchicalConfigLoader, RuntimeConfig};
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // Initialize rustls crypto provider (required for rustls 0.23+)
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let config = load_config(&cli)?;

    match cli.command {
        Commands::Htmx(args) => commands::htmx::run(args, &config).await,
        Commands::CreateApps(args) => commands::createapps::run(args, &config).await,
    }
}

/// Load runtime configuration from the selected config directory
fn load_config(cli: &Cli) -> Result<RuntimeConfig> {
    let loader = match &cli.config_dir {
        Some(dir) => HierarchicalConfigLoader::with_dir(dir.clone()),
        None => HierarchicalConfigLoader::new().context("Failed to locate config directory")?,
    };

    tracing::debug!("Loading configuration from {}", loader.config_dir());

    loader
        .load_runtime_config()
        .with_context(|| format!("Failed to load configuration from {}", loader.config_dir()))
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            // User-facing progress goes through `output`; logs are diagnostics only
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
