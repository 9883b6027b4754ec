use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;

/// Where run outcomes go: the workflow log for humans, step outputs for later steps.
pub trait Reporter: Send + Sync {
    /// Surface a run-terminating failure. The caller sets the exit code.
    fn report_failure(&self, message: &str);
    fn report_info(&self, message: &str);
    fn set_output(&self, _name: &str, _value: &str) -> Result<()> {
        Ok(())
    }
}

/// Reports through GitHub Actions workflow commands on stdout.
pub struct ActionsReporter {
    output_path: Option<PathBuf>,
}

impl ActionsReporter {
    pub fn new(output_path: Option<PathBuf>) -> Self {
        Self { output_path }
    }

    pub fn from_env() -> Self {
        Self::new(std::env::var_os("GITHUB_OUTPUT").map(PathBuf::from))
    }
}

/// Workflow commands end at the first newline, so escape the way the runner expects.
fn escape_command_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

impl Reporter for ActionsReporter {
    fn report_failure(&self, message: &str) {
        tracing::error!("{message}");
        println!("::error::{}", escape_command_data(message));
    }

    fn report_info(&self, message: &str) {
        tracing::info!("{message}");
        println!("{message}");
    }

    fn set_output(&self, name: &str, value: &str) -> Result<()> {
        let Some(path) = &self.output_path else {
            return Ok(());
        };
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open step output file {}", path.display()))?;
        writeln!(file, "{name}={value}")?;
        Ok(())
    }
}
