//! htmx command

use anyhow::Result;
use couscous_core::RuntimeConfig;
use couscous_htmx::{
    AssetDownloader, AssetRequest, FetchError, HttpClient, ReleaseManager, ReqwestClient,
    Termination, WebTypesFetcher, WEB_TYPES_FILE,
};
use std::process::ExitCode;
use std::sync::Arc;

use crate::cli::HtmxArgs;
use crate::output;

pub async fn run(args: HtmxArgs, config: &RuntimeConfig) -> Result<ExitCode> {
    match fetch(args, config).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => Ok(report(&e)),
    }
}

/// Print a fetch failure and pick the exit code for its severity
fn report(err: &FetchError) -> ExitCode {
    output::error(&err.to_string());
    match err.termination() {
        Termination::Abort => {
            eprintln!("Aborted!");
            ExitCode::FAILURE
        }
        Termination::Exit => ExitCode::SUCCESS,
    }
}

async fn fetch(args: HtmxArgs, config: &RuntimeConfig) -> Result<(), FetchError> {
    let client: Arc<dyn HttpClient> = Arc::new(ReqwestClient::new(&config.network)?);

    let releases = ReleaseManager::new(client.clone(), config.htmx.clone());
    let spinner = output::spinner("Looking up the latest htmx release...");
    let resolved = releases.resolve(&args.target_version).await;
    spinner.finish_and_clear();
    let resolved = resolved?;

    let request = AssetRequest::new(args.output_dir.clone())
        .with_output_file(args.output_file)
        .with_extension(args.extension);

    let downloader = AssetDownloader::new(client.clone(), config.htmx.cdn_url.clone());
    let target = downloader.target(&resolved, &request);
    let spinner = output::spinner(&format!("Downloading {}", target.describe()));
    let asset = downloader.download(&resolved, &request).await;
    spinner.finish_and_clear();
    let asset = asset?;

    output::success(&format!(
        "File downloaded successfully to {}.",
        asset.filename()
    ));
    output::info(&format!("htmx version: {}", asset.version));
    if let Some(latest) = resolved.newer_available() {
        output::info(&format!(
            "The latest version available of htmx is {}",
            latest
        ));
    }

    if args.web_types {
        let fetcher = WebTypesFetcher::new(client, config.htmx.clone());
        let spinner = output::spinner("Downloading web-types file...");
        let written = fetcher.download(&asset.version, &args.output_dir).await;
        spinner.finish_and_clear();
        written?;
        output::success(&format!(
            "Web-types file downloaded to {}.",
            WEB_TYPES_FILE
        ));
    }

    Ok(())
}
