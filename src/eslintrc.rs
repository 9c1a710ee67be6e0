//! ESLint configuration patching.
//!
//! The config file is edited as plain text: each insertion locates the first
//! occurrence of a literal anchor and splices a fixed snippet right after it.
//! Nothing is parsed, so applying the patch twice inserts duplicate entries.

use anyhow::Result;
use log::debug;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::MigrateError;
use crate::runtime::Runtime;

/// Which supported config file a project uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.eslintrc.js`
    ScriptStyle,
    /// `.eslintrc.yml`
    DataStyle,
    NoneFound,
}

/// An anchor and the text inserted right after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    pub anchor: &'static str,
    pub text: String,
}

impl ConfigFormat {
    /// Detection order; the first existing file wins.
    const CANDIDATES: [ConfigFormat; 2] = [ConfigFormat::ScriptStyle, ConfigFormat::DataStyle];

    pub fn file_name(&self) -> Option<&'static str> {
        match self {
            ConfigFormat::ScriptStyle => Some(".eslintrc.js"),
            ConfigFormat::DataStyle => Some(".eslintrc.yml"),
            ConfigFormat::NoneFound => None,
        }
    }

    pub fn plugin_insertion(&self, plugin: &str) -> Option<Insertion> {
        let (anchor, text) = match self {
            ConfigFormat::ScriptStyle => ("plugins: [", format!("\n    \"{}\",", plugin)),
            ConfigFormat::DataStyle => ("plugins:", format!("\n  - \"{}\"", plugin)),
            ConfigFormat::NoneFound => return None,
        };
        Some(Insertion { anchor, text })
    }

    pub fn rule_insertion(&self, rule: &str) -> Option<Insertion> {
        let (anchor, text) = match self {
            ConfigFormat::ScriptStyle => ("rules: {", format!("\n    \"{}\": \"error\",", rule)),
            ConfigFormat::DataStyle => ("rules:", format!("\n  \"{}\": \"error\"", rule)),
            ConfigFormat::NoneFound => return None,
        };
        Some(Insertion { anchor, text })
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.file_name() {
            Some(name) => f.write_str(name),
            None => f.write_str("(no eslintrc)"),
        }
    }
}

/// Detect the config format present in `dir`.
#[tracing::instrument(skip(runtime))]
pub fn detect_format<R: Runtime>(runtime: &R, dir: &Path) -> ConfigFormat {
    ConfigFormat::CANDIDATES
        .into_iter()
        .find(|format| {
            format
                .file_name()
                .is_some_and(|name| runtime.exists(&dir.join(name)))
        })
        .unwrap_or(ConfigFormat::NoneFound)
}

/// Splice `insert` right after the first occurrence of `anchor`.
/// Returns `None` when the anchor does not occur.
pub fn insert_after(text: &str, anchor: &str, insert: &str) -> Option<String> {
    let idx = text.find(anchor)? + anchor.len();
    let mut updated = String::with_capacity(text.len() + insert.len());
    updated.push_str(&text[..idx]);
    updated.push_str(insert);
    updated.push_str(&text[idx..]);
    Some(updated)
}

/// Apply [`insert_after`] to the file at `path`, rewriting it in full.
///
/// A missing anchor leaves the file untouched and is not an error; the
/// return value tells whether the file was modified.
#[tracing::instrument(skip(runtime, insert))]
pub fn insert_after_anchor<R: Runtime>(
    runtime: &R,
    path: &Path,
    anchor: &str,
    insert: &str,
) -> Result<bool> {
    let text = runtime.read_to_string(path)?;
    match insert_after(&text, anchor, insert) {
        Some(updated) => {
            runtime.write(path, updated.as_bytes())?;
            Ok(true)
        }
        None => {
            debug!("Anchor {:?} not found in {:?}, skipping", anchor, path);
            Ok(false)
        }
    }
}

/// Register `plugin` and `rule` in the project's eslintrc.
#[tracing::instrument(skip(runtime))]
pub fn update_eslintrc<R: Runtime>(
    runtime: &R,
    dir: &Path,
    plugin: &str,
    rule: &str,
) -> Result<ConfigFormat> {
    let format = detect_format(runtime, dir);
    let (Some(file_name), Some(plugin_insertion), Some(rule_insertion)) = (
        format.file_name(),
        format.plugin_insertion(plugin),
        format.rule_insertion(rule),
    ) else {
        return Err(MigrateError::ConfigNotFound {
            dir: dir.to_path_buf(),
        }
        .into());
    };

    let path: PathBuf = dir.join(file_name);
    debug!("Patching {:?} as {:?}", path, format);
    for insertion in [plugin_insertion, rule_insertion] {
        insert_after_anchor(runtime, &path, insertion.anchor, &insertion.text)?;
    }

    println!("Updated {} to have plugin and rule", file_name);
    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PLUGIN_NAME, RULE_NAME};
    use crate::runtime::{MockRuntime, RealRuntime};
    use crate::test_utils::test_project_dir;
    use mockall::predicate::eq;
    use tempfile::tempdir;

    const SCRIPT_CONFIG: &str = r#"module.exports = {
  root: true,
  parser: "@typescript-eslint/parser",
  plugins: [
    "@typescript-eslint",
  ],
  rules: {
    "no-console": "warn",
  },
};
"#;

    #[test]
    fn test_insert_after_splices_at_anchor_end() {
        assert_eq!(
            insert_after("a: [b]", "a: [", "X").as_deref(),
            Some("a: [Xb]")
        );
    }

    #[test]
    fn test_insert_after_uses_first_occurrence_only() {
        assert_eq!(
            insert_after("rules:\nrules:\n", "rules:", "!").as_deref(),
            Some("rules:!\nrules:\n")
        );
    }

    #[test]
    fn test_insert_after_missing_anchor() {
        assert_eq!(insert_after("extends: []", "plugins: [", "X"), None);
    }

    #[test]
    fn test_detect_format_prefers_script_style() {
        let dir = test_project_dir();
        let mut runtime = MockRuntime::new();
        runtime
            .expect_exists()
            .with(eq(dir.join(".eslintrc.js")))
            .returning(|_| true);
        runtime
            .expect_exists()
            .with(eq(dir.join(".eslintrc.yml")))
            .returning(|_| true);

        assert_eq!(detect_format(&runtime, &dir), ConfigFormat::ScriptStyle);
    }

    #[test]
    fn test_detect_format_falls_back_to_data_style() {
        let dir = test_project_dir();
        let mut runtime = MockRuntime::new();
        runtime
            .expect_exists()
            .with(eq(dir.join(".eslintrc.js")))
            .returning(|_| false);
        runtime
            .expect_exists()
            .with(eq(dir.join(".eslintrc.yml")))
            .returning(|_| true);

        assert_eq!(detect_format(&runtime, &dir), ConfigFormat::DataStyle);
    }

    #[test]
    fn test_detect_format_none_found() {
        let mut runtime = MockRuntime::new();
        runtime.expect_exists().returning(|_| false);

        assert_eq!(
            detect_format(&runtime, &test_project_dir()),
            ConfigFormat::NoneFound
        );
    }

    #[test]
    fn test_script_style_patch_inserts_plugin_and_rule() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".eslintrc.js");
        std::fs::write(&path, SCRIPT_CONFIG).unwrap();

        let format = update_eslintrc(&RealRuntime, dir.path(), PLUGIN_NAME, RULE_NAME).unwrap();
        assert_eq!(format, ConfigFormat::ScriptStyle);

        let patched = std::fs::read_to_string(&path).unwrap();
        let expected = SCRIPT_CONFIG
            .replacen(
                "plugins: [",
                "plugins: [\n    \"@clever\",",
                1,
            )
            .replacen(
                "rules: {",
                "rules: {\n    \"@clever/no-app-listen-without-localhost\": \"error\",",
                1,
            );
        assert_eq!(patched, expected);
        assert_eq!(patched.matches("\"@clever\",").count(), 1);
    }

    #[test]
    fn test_data_style_patch() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".eslintrc.yml");
        std::fs::write(&path, "plugins:\nrules:\n").unwrap();

        update_eslintrc(&RealRuntime, dir.path(), PLUGIN_NAME, RULE_NAME).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "plugins:\n  - \"@clever\"\nrules:\n  \"@clever/no-app-listen-without-localhost\": \"error\"\n"
        );
    }

    #[test]
    fn test_missing_anchor_leaves_file_byte_identical() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".eslintrc.js");
        let original = "module.exports = { extends: [\"eslint:recommended\"] };\n";
        std::fs::write(&path, original).unwrap();

        update_eslintrc(&RealRuntime, dir.path(), PLUGIN_NAME, RULE_NAME).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_missing_anchor_does_not_write() {
        let path = test_project_dir().join(".eslintrc.yml");
        let mut runtime = MockRuntime::new();
        runtime
            .expect_read_to_string()
            .returning(|_| Ok("extends: standard\n".to_string()));
        runtime.expect_write().never();

        let modified = insert_after_anchor(&runtime, &path, "plugins:", "\n  - \"@clever\"").unwrap();
        assert!(!modified);
    }

    #[test]
    fn test_patching_twice_duplicates_entries() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".eslintrc.js");
        std::fs::write(&path, SCRIPT_CONFIG).unwrap();

        update_eslintrc(&RealRuntime, dir.path(), PLUGIN_NAME, RULE_NAME).unwrap();
        update_eslintrc(&RealRuntime, dir.path(), PLUGIN_NAME, RULE_NAME).unwrap();

        let patched = std::fs::read_to_string(&path).unwrap();
        assert_eq!(patched.matches("\"@clever\",").count(), 2);
        assert_eq!(
            patched
                .matches("\"@clever/no-app-listen-without-localhost\": \"error\",")
                .count(),
            2
        );
    }

    #[test]
    fn test_no_config_file_is_an_error() {
        let dir = tempdir().unwrap();

        let err = update_eslintrc(&RealRuntime, dir.path(), PLUGIN_NAME, RULE_NAME).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MigrateError>(),
            Some(MigrateError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn test_format_display() {
        assert_eq!(ConfigFormat::ScriptStyle.to_string(), ".eslintrc.js");
        assert_eq!(ConfigFormat::DataStyle.to_string(), ".eslintrc.yml");
        assert_eq!(ConfigFormat::NoneFound.to_string(), "(no eslintrc)");
    }
}
