use anyhow::Result;
use log::debug;
use std::path::{Path, PathBuf};

use crate::config::MigrationConfig;
use crate::error::MigrateError;
use crate::runtime::Runtime;

/// ripgrep exits with 1 when nothing matched.
const RG_NO_MATCH: i32 = 1;

/// Files under `dir` containing the literal `marker`, relative to `dir`.
#[tracing::instrument(skip(runtime, config))]
pub fn find_pattern<R: Runtime>(
    runtime: &R,
    dir: &Path,
    marker: &str,
    config: &MigrationConfig,
) -> Result<Vec<PathBuf>> {
    let args = vec![marker.to_string(), "-l".to_string()];
    let output = runtime.run_command(dir, &config.search_tool, &args)?;

    if output.code == Some(RG_NO_MATCH) && output.stdout.trim().is_empty() {
        return Err(MigrateError::PatternNotFound {
            marker: marker.to_string(),
        }
        .into());
    }
    let output = output.check(&config.search_tool)?;

    let paths = parse_file_list(&output.stdout);
    debug!("Found {} file(s) containing {:?}", paths.len(), marker);
    Ok(paths)
}

fn parse_file_list(stdout: &str) -> Vec<PathBuf> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect()
}
