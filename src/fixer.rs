use anyhow::Result;
use log::info;
use std::path::{Path, PathBuf};

use crate::config::{MigrationConfig, local_eslint_path};
use crate::error::MigrateError;
use crate::runtime::Runtime;

/// Run the project's local eslint in fix mode on `paths`.
#[tracing::instrument(skip(runtime, config))]
pub fn run_eslint_fix<R: Runtime>(
    runtime: &R,
    dir: &Path,
    paths: &[PathBuf],
    config: &MigrationConfig,
) -> Result<()> {
    let eslint = local_eslint_path(dir);
    if !runtime.is_file(&eslint) {
        return Err(MigrateError::LinterNotFound { path: eslint }.into());
    }

    let program = eslint.to_string_lossy().to_string();
    let args = fix_args(paths, config);
    info!("Running eslint --fix on {} file(s)", paths.len());
    let output = runtime.run_command(dir, &program, &args)?.check(&program)?;
    output.print()?;
    Ok(())
}

fn fix_args(paths: &[PathBuf], config: &MigrationConfig) -> Vec<String> {
    let mut args = vec![
        "--ext".to_string(),
        config.lint_extension.clone(),
        "--fix".to_string(),
        "--ignore-pattern".to_string(),
        config.lint_ignore_pattern.clone(),
    ];
    args.extend(paths.iter().map(|p| p.to_string_lossy().to_string()));
    args
}
