use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::runtime::Runtime;

pub const ESLINT_PACKAGE: &str = "eslint";
pub const PLUGIN_PACKAGE: &str = "@clever/eslint-plugin@latest";
pub const PLUGIN_NAME: &str = "@clever";
pub const RULE_NAME: &str = "@clever/no-app-listen-without-localhost";
pub const SEARCH_MARKER: &str = "app.listen";

/// Fixed parameters of a migration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationConfig {
    /// Packages ensured in order before the full install.
    pub packages: Vec<String>,
    pub plugin: String,
    pub rule: String,
    pub marker: String,
    /// File extension the linter is restricted to.
    pub lint_extension: String,
    pub lint_ignore_pattern: String,
    pub package_manager: String,
    pub search_tool: String,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            packages: vec![ESLINT_PACKAGE.to_string(), PLUGIN_PACKAGE.to_string()],
            plugin: PLUGIN_NAME.to_string(),
            rule: RULE_NAME.to_string(),
            marker: SEARCH_MARKER.to_string(),
            lint_extension: "ts".to_string(),
            lint_ignore_pattern: "*/node_modules/*".to_string(),
            package_manager: "npm".to_string(),
            search_tool: "rg".to_string(),
        }
    }
}

/// Resolve the project directory: an explicit one wins over the process
/// current directory. The result is always absolute, since child processes
/// run with it as their working directory.
pub fn resolve_project_dir<R: Runtime>(runtime: &R, dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(path) if path.is_relative() => Ok(runtime.current_dir()?.join(path)),
        Some(path) => Ok(path),
        None => runtime.current_dir(),
    }
}

/// Path of the locally installed linter binary.
pub fn local_eslint_path(dir: &Path) -> PathBuf {
    dir.join("node_modules").join(".bin").join("eslint")
}
