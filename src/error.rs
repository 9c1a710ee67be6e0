//! Error kinds raised by the migration steps.
//!
//! Steps return `anyhow::Result` and raise these values so callers (and tests)
//! can `downcast_ref::<MigrateError>()` to tell the kinds apart.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MigrateError {
    #[error("Invalid manifest {}: {reason}", .path.display())]
    Manifest { path: PathBuf, reason: String },

    #[error("{program} failed with exit code {}: {stderr}", .code.map_or_else(|| "none".to_string(), |c| c.to_string()))]
    ExternalTool {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("No file contains '{marker}'")]
    PatternNotFound { marker: String },

    #[error("Linter not found at {}, run the package install first", .path.display())]
    LinterNotFound { path: PathBuf },

    #[error("No .eslintrc.js or .eslintrc.yml found in {}", .dir.display())]
    ConfigNotFound { dir: PathBuf },
}
