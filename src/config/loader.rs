//! Configuration file discovery and loading.
//!
//! This module finds the BLT configuration files for a project, layers
//! them over built-in defaults and expands `${key}` placeholders.

use crate::config::interpolation::expand_all;
use crate::config::keys;
use crate::config::merger::merge_layers;
use crate::config::store::{ConfigStore, YamlConfigStore};
use crate::error::{InspectorError, Result};
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Project config file names, newest first.
const PROJECT_FILES: &[&str] = &["blt.yml", "project.yml"];

/// Local override file names, newest first.
const LOCAL_FILES: &[&str] = &["local.blt.yml", "project.local.yml"];

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. Built-in defaults
/// 2. Project config (`blt/blt.yml`, or legacy `blt/project.yml`)
/// 3. Local overrides (`blt/local.blt.yml`, or legacy `blt/project.local.yml`)
/// 4. An explicit file passed on the command line
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config.
    pub project: Option<PathBuf>,

    /// Local overrides, usually git-ignored.
    pub project_local: Option<PathBuf>,

    /// Extra overlay from `--config`.
    pub explicit: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        let blt_dir = project_root.join("blt");
        Self {
            project: first_existing(&blt_dir, PROJECT_FILES),
            project_local: first_existing(&blt_dir, LOCAL_FILES),
            explicit: None,
        }
    }

    /// Add an explicit overlay file.
    pub fn with_explicit(mut self, path: Option<PathBuf>) -> Self {
        self.explicit = path;
        self
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        [&self.project, &self.project_local, &self.explicit]
            .into_iter()
            .flatten()
            .collect()
    }

    /// Check if any project config exists.
    pub fn has_project_config(&self) -> bool {
        self.project.is_some()
    }
}

fn first_existing(dir: &Path, names: &[&str]) -> Option<PathBuf> {
    names.iter().map(|n| dir.join(n)).find(|p| p.is_file())
}

/// Find the project root by walking up from `start`.
///
/// Looks for:
/// 1. a `blt` directory (primary indicator)
/// 2. a `.git` directory (fallback)
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join("blt").is_dir() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Built-in defaults for a project rooted at `project_root`.
///
/// Every derived path is written as a placeholder so that overriding
/// `repo.root` or `docroot` moves the paths beneath it.
pub fn defaults(project_root: &Path) -> Value {
    let mut store = YamlConfigStore::new();
    store.set(
        keys::REPO_ROOT,
        Value::String(project_root.to_string_lossy().to_string()),
    );
    store.set(keys::DOCROOT, Value::String("${repo.root}/docroot".into()));
    store.set(keys::COMPOSER_BIN, Value::String("${repo.root}/vendor/bin".into()));
    store.set(
        keys::SETTINGS_FILE,
        Value::String("${docroot}/sites/default/settings.php".into()),
    );
    store.set(keys::DRUSH_BIN, Value::String("${composer.bin}/drush".into()));
    store.set(keys::DRUSH_ALIAS, Value::String("self".into()));
    store.into_value()
}

/// Load a config file as a raw YAML value.
///
/// An empty file is an empty mapping.
pub fn load_config_value(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            InspectorError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            InspectorError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content, reporting errors against `source_path`.
pub fn parse_config(content: &str, source_path: &Path) -> Result<Value> {
    if content.trim().is_empty() {
        return Ok(Value::Mapping(Default::default()));
    }

    let value: Value =
        serde_yaml::from_str(content).map_err(|e| InspectorError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

    match value {
        Value::Mapping(_) => Ok(value),
        Value::Null => Ok(Value::Mapping(Default::default())),
        _ => Err(InspectorError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: "top level must be a mapping".to_string(),
        }),
    }
}

/// Load, merge and expand all config for a project.
///
/// A project without any BLT config files still loads: the defaults
/// alone describe the standard layout.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the explicit overlay doesn't exist.
/// Returns `ConfigParseError` if any config file is invalid.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<YamlConfigStore> {
    let paths = ConfigPaths::discover(project_root).with_explicit(explicit.map(Path::to_path_buf));

    let mut layers = vec![defaults(project_root)];
    for path in paths.all_existing() {
        tracing::debug!("Loading config from {}", path.display());
        layers.push(load_config_value(path)?);
    }

    let merged = expand_all(merge_layers(&layers));
    Ok(YamlConfigStore::from_value(merged))
}
