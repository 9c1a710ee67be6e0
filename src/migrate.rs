//! The migration pipeline: Install → Install → InstallAll → Patch → Locate → Fix.
//!
//! Steps run strictly in order and the first failure stops the run. Nothing
//! is rolled back, so files patched or packages installed before a failure
//! stay modified.

use anyhow::Result;
use log::info;
use std::path::{Path, PathBuf};

use crate::config::{MigrationConfig, resolve_project_dir};
use crate::eslintrc::update_eslintrc;
use crate::fixer::run_eslint_fix;
use crate::installer::{ensure_package, install_all};
use crate::locator::find_pattern;
use crate::runtime::Runtime;

/// Entry point used by the CLI.
#[tracing::instrument(skip(runtime))]
pub fn migrate<R: Runtime>(runtime: R, dir: Option<PathBuf>) -> Result<()> {
    let dir = resolve_project_dir(&runtime, dir)?;
    run(&runtime, &dir, &MigrationConfig::default())
}

#[tracing::instrument(skip(runtime, config))]
pub fn run<R: Runtime>(runtime: &R, dir: &Path, config: &MigrationConfig) -> Result<()> {
    println!("CWD = {}", dir.display());

    for package in &config.packages {
        ensure_package(runtime, dir, package, config)?;
    }
    install_all(runtime, dir, config)?;

    let format = update_eslintrc(runtime, dir, &config.plugin, &config.rule)?;
    info!("Registered {} in {}", config.rule, format);

    let targets = find_pattern(runtime, dir, &config.marker, config)?;
    run_eslint_fix(runtime, dir, &targets, config)
}
