//! External app generator

use async_trait::async_trait;
use camino::Utf8Path;
use tokio::process::Command;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Generates the contents of a new app inside an existing directory
#[async_trait]
pub trait AppGenerator: Send + Sync {
    /// Fail early when the generator cannot run at all
    fn check(&self) -> Result<()> {
        Ok(())
    }

    /// Generate app `name` into `path`
    async fn start_app(&self, name: &str, path: &Utf8Path) -> Result<()>;
}

/// Runs the framework's `startapp` command as a child process.
///
/// The configured argv is used as a prefix; the app name and target
/// directory are appended, e.g. `python manage.py startapp blog apps/blog`.
#[derive(Debug, Clone)]
pub struct StartAppCommand {
    program: String,
    args: Vec<String>,
}

impl StartAppCommand {
    /// Create a generator from an argv prefix
    pub fn new(argv: Vec<String>) -> Result<Self> {
        let mut argv = argv.into_iter();
        let program = argv.next().ok_or(Error::EmptyCommand)?;
        Ok(Self {
            program,
            args: argv.collect(),
        })
    }

    /// Program that will be executed
    pub fn program(&self) -> &str {
        &self.program
    }

}

#[async_trait]
impl AppGenerator for StartAppCommand {
    fn check(&self) -> Result<()> {
        which::which(&self.program)
            .map(|_| ())
            .map_err(|_| Error::command_not_found(&self.program))
    }

    async fn start_app(&self, name: &str, path: &Utf8Path) -> Result<()> {
        self.check()?;

        debug!(
            "Running: {} {} {} {}",
            self.program,
            self.args.join(" "),
            name,
            path
        );

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(name)
            .arg(path.as_str())
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(Error::start_app_failed(name, stderr));
        }

        info!("Generated app '{}' in {}", name, path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_command_rejected() {
        assert!(matches!(
            StartAppCommand::new(Vec::new()),
            Err(Error::EmptyCommand)
        ));
    }

    #[test]
    fn test_program_split_from_args() {
        let cmd = StartAppCommand::new(argv(&["python", "manage.py", "startapp"])).unwrap();
        assert_eq!(cmd.program(), "python");
        assert_eq!(cmd.args, vec!["manage.py", "startapp"]);
    }

    #[tokio::test]
    async fn test_missing_program() {
        let cmd = StartAppCommand::new(argv(&["couscous-no-such-program-7f3a"])).unwrap();
        let err = cmd
            .start_app("blog", Utf8Path::new("apps/blog"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::CommandNotFound { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_name_and_path_are_appended() {
        let temp = TempDir::new().unwrap();
        let path = Utf8PathBuf::from_path_buf(temp.path().join("blog")).unwrap();
        std::fs::create_dir_all(&path).unwrap();

        // $0 = "startapp", $1 = name, $2 = path
        let cmd = StartAppCommand::new(argv(&[
            "sh",
            "-c",
            r#"echo "$1" > "$2/apps.py""#,
            "startapp",
        ]))
        .unwrap();
        cmd.start_app("blog", &path).await.unwrap();

        let written = std::fs::read_to_string(path.join("apps.py")).unwrap();
        assert_eq!(written.trim(), "blog");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failure_carries_stderr() {
        let cmd = StartAppCommand::new(argv(&[
            "sh",
            "-c",
            "echo \"CommandError: '$1' conflicts\" >&2; exit 1",
            "startapp",
        ]))
        .unwrap();

        let err = cmd
            .start_app("os", Utf8Path::new("apps/os"))
            .await
            .unwrap_err();
        match err {
            Error::StartAppFailed { name, stderr } => {
                assert_eq!(name, "os");
                assert_eq!(stderr, "CommandError: 'os' conflicts");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
