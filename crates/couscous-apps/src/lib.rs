//! # couscous-apps
//!
//! Creates several framework applications in one go:
//! - One directory per app under a configured applications root
//! - Existing apps are skipped with a warning, never overwritten
//! - Generation is delegated to an external `startapp` command
//!
//! # Example
//!
//! ```no_run
//! use couscous_apps::{AppScaffolder, StartAppCommand};
//!
//! # async fn example() -> couscous_apps::Result<()> {
//! let generator = StartAppCommand::new(vec![
//!     "python".to_string(),
//!     "manage.py".to_string(),
//!     "startapp".to_string(),
//! ])?;
//! let scaffolder = AppScaffolder::new("apps", generator);
//! let names = vec!["blog".to_string(), "shop".to_string()];
//! scaffolder.create_apps(&names, |outcome| println!("{}", outcome)).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod scaffold;
pub mod startapp;
pub mod types;

pub use error::{Error, Result};
pub use scaffold::AppScaffolder;
pub use startapp::{AppGenerator, StartAppCommand};
pub use types::{AppOutcome, AppRequest};
