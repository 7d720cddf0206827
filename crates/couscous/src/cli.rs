//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use couscous_htmx::{VersionSpec, DEFAULT_OUTPUT_FILE};

/// couscous - htmx and Django project helpers
#[derive(Parser, Debug)]
#[command(name = "couscous")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Directory holding config.yaml [default: ~/.couscous]
    #[arg(long, global = true, env = "COUSCOUS_CONFIG_DIR")]
    pub config_dir: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download the htmx javascript library or one of its extensions
    Htmx(HtmxArgs),

    /// Create multiple Django apps
    #[command(name = "createapps")]
    CreateApps(CreateAppsArgs),
}

// Htmx command
#[derive(Args, Debug)]
pub struct HtmxArgs {
    /// The version of htmx to download
    #[arg(value_name = "VERSION", default_value = "latest")]
    pub target_version: VersionSpec,

    /// The filename for the htmx download
    #[arg(short = 'f', long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: String,

    /// The name of the extension to download
    #[arg(short, long)]
    pub extension: Option<String>,

    /// The directory to write the downloaded file to
    #[arg(short = 'd', long, default_value = ".", value_parser = writable_dir)]
    pub output_dir: Utf8PathBuf,

    /// Download the web-types file
    #[arg(short, long)]
    pub web_types: bool,
}

// Createapps command
#[derive(Args, Debug)]
pub struct CreateAppsArgs {
    /// List of app names to create
    #[arg(required = true, num_args = 1..)]
    pub app_names: Vec<String>,
}

/// Accept only an existing directory the current user can create files in.
///
/// Writability is checked by creating an anonymous temp file in it.
fn writable_dir(s: &str) -> Result<Utf8PathBuf, String> {
    let path = Utf8PathBuf::from(s);
    let metadata =
        std::fs::metadata(&path).map_err(|_| format!("Directory '{}' does not exist.", path))?;

    if !metadata.is_dir() {
        return Err(format!("Directory '{}' is a file.", path));
    }
    tempfile::tempfile_in(&path)
        .map_err(|_| format!("Directory '{}' is not writable.", path))?;

    Ok(path)
}
