use anyhow::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::MigrateError;
use crate::runtime::Runtime;

pub const MANIFEST_FILE: &str = "package.json";

/// The two dependency mappings of a `package.json`.
///
/// Both are required: a manifest without either key is rejected. All other
/// fields are ignored.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Manifest {
    pub dependencies: BTreeMap<String, String>,
    #[serde(rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, String>,
}

impl Manifest {
    pub fn path(dir: &Path) -> PathBuf {
        dir.join(MANIFEST_FILE)
    }

    #[tracing::instrument(skip(runtime))]
    pub fn load<R: Runtime>(runtime: &R, dir: &Path) -> Result<Self> {
        let path = Self::path(dir);
        let content = runtime
            .read_to_string(&path)
            .map_err(|e| MigrateError::Manifest {
                path: path.clone(),
                reason: format!("{:#}", e),
            })?;
        Self::parse(&path, &content)
    }

    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let manifest = serde_json::from_str(content).map_err(|e| MigrateError::Manifest {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(manifest)
    }

    /// Exact key lookup in either mapping. `pkg@latest` and `pkg` are
    /// different keys.
    pub fn declares(&self, package: &str) -> bool {
        self.dependencies.contains_key(package) || self.dev_dependencies.contains_key(package)
    }
}
