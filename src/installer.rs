use anyhow::Result;
use log::{debug, info};
use std::path::Path;

use crate::config::MigrationConfig;
use crate::manifest::Manifest;
use crate::runtime::Runtime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The manifest already declared the package; nothing was run.
    AlreadyPresent,
    /// The package manager was invoked to add the package.
    Installed,
}

/// Ensure `package` is declared in the manifest of `dir`, installing it with
/// the package manager when it is not.
#[tracing::instrument(skip(runtime, config))]
pub fn ensure_package<R: Runtime>(
    runtime: &R,
    dir: &Path,
    package: &str,
    config: &MigrationConfig,
) -> Result<InstallOutcome> {
    let manifest = Manifest::load(runtime, dir)?;
    if manifest.declares(package) {
        println!("{}", ready_notice(package));
        return Ok(InstallOutcome::AlreadyPresent);
    }

    info!("Installing {} with {}", package, config.package_manager);
    let args = vec!["i".to_string(), package.to_string()];
    let output = runtime
        .run_command(dir, &config.package_manager, &args)?
        .check(&config.package_manager)?;
    output.print()?;

    Ok(InstallOutcome::Installed)
}

fn ready_notice(package: &str) -> String {
    format!("{} is installed ready", package)
}

/// Full dependency install of the project in `dir`.
#[tracing::instrument(skip(runtime, config))]
pub fn install_all<R: Runtime>(runtime: &R, dir: &Path, config: &MigrationConfig) -> Result<()> {
    debug!("Installing all dependencies in {:?}", dir);
    let args = vec!["i".to_string()];
    let output = runtime
        .run_command(dir, &config.package_manager, &args)?
        .check(&config.package_manager)?;
    output.print()?;
    Ok(())
}
