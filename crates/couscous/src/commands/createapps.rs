//! createapps command

use anyhow::{Context, Result};
use couscous_apps::{AppOutcome, AppScaffolder};
use couscous_core::RuntimeConfig;
use std::process::ExitCode;

use crate::cli::CreateAppsArgs;
use crate::output;

pub async fn run(args: CreateAppsArgs, config: &RuntimeConfig) -> Result<ExitCode> {
    let scaffolder = AppScaffolder::from_config(&config.scaffold)?;

    let outcomes = scaffolder
        .create_apps(&args.app_names, |outcome| match outcome {
            AppOutcome::Created { .. } => output::success(&outcome.to_string()),
            AppOutcome::AlreadyExists { .. } => output::warning(&outcome.to_string()),
        })
        .await
        .with_context(|| format!("Failed to create apps in {}", scaffolder.apps_root()))?;

    let created = outcomes.iter().filter(|o| o.is_created()).count();
    tracing::debug!("{} of {} apps created", created, outcomes.len());

    Ok(ExitCode::SUCCESS)
}
