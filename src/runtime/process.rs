//! External command execution.

use anyhow::{Context, Result};
use log::debug;
use std::io::{self, Write};
use std::path::Path;
use std::process::Command;

use super::RealRuntime;
use crate::error::MigrateError;

/// Captured result of a finished external process.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    #[cfg(test)]
    pub fn success_with(stdout: impl Into<String>) -> Self {
        Self {
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Turn a non-zero exit into a [`MigrateError::ExternalTool`].
    pub fn check(self, program: &str) -> Result<Self> {
        if self.success() {
            return Ok(self);
        }
        Err(MigrateError::ExternalTool {
            program: program.to_string(),
            code: self.code,
            stderr: self.stderr.trim().to_string(),
        }
        .into())
    }

    /// Echo the captured streams to the terminal, stdout followed by a
    /// newline and stderr only when non-empty.
    pub fn print(&self) -> Result<()> {
        let stdout = io::stdout();
        let stderr = io::stderr();
        echo_with_io(self, &mut stdout.lock(), &mut stderr.lock())
    }
}

pub(crate) fn echo_with_io<O: Write, E: Write>(
    output: &CommandOutput,
    out: &mut O,
    err: &mut E,
) -> Result<()> {
    writeln!(out, "{}", output.stdout)?;
    if !output.stderr.is_empty() {
        write!(err, "{}", output.stderr)?;
        err.flush()?;
    }
    Ok(())
}

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn run_command_impl(
        &self,
        dir: &Path,
        program: &str,
        args: &[String],
    ) -> Result<CommandOutput> {
        debug!("Running {} {:?} in {:?}", program, args, dir);
        let output = Command::new(program)
            .args(args)
            .current_dir(dir)
            .output()
            .with_context(|| format!("Failed to execute {}", program))?;

        let result = CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };
        debug!("{} exited with {:?}", program, result.code);
        Ok(result)
    }
}
