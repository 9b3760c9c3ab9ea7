//! Project configuration.
//!
//! This module handles all aspects of configuration:
//! - The dotted-key [`ConfigStore`] in [`store`]
//! - File discovery and loading in [`loader`]
//! - Layering in [`merger`]
//! - `${key}` expansion in [`interpolation`]
//!
//! # Example
//!
//! ```
//! use blt_inspector::config::{load_config, ConfigStore};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::create_dir_all(temp.path().join("blt")).unwrap();
//! fs::write(temp.path().join("blt/blt.yml"), "docroot: ${repo.root}/web").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.get_path("docroot"), Some(temp.path().join("web")));
//! ```
//!
//! # Configuration File Locations
//!
//! Configuration is layered in this order:
//! 1. Built-in defaults (standard BLT layout under `repo.root`)
//! 2. Project config (`blt/blt.yml`)
//! 3. Local overrides (`blt/local.blt.yml`)
//! 4. An explicit file passed with `--config`

pub mod interpolation;
pub mod loader;
pub mod merger;
pub mod store;

pub use interpolation::{expand_all, expand_str, has_placeholders};
pub use loader::{
    defaults, find_project_root, load_config, load_config_value, parse_config, ConfigPaths,
};
pub use merger::{merge_into, merge_layers};
pub use store::{is_truthy, ConfigStore, YamlConfigStore};

/// Configuration keys the inspector reads and writes.
pub mod keys {
    /// Repository root directory.
    pub const REPO_ROOT: &str = "repo.root";
    /// Drupal docroot directory.
    pub const DOCROOT: &str = "docroot";
    /// Drupal `settings.php`.
    pub const SETTINGS_FILE: &str = "drupal.settings_file";
    /// Composer `bin-dir`.
    pub const COMPOSER_BIN: &str = "composer.bin";
    /// Drush binary.
    pub const DRUSH_BIN: &str = "drush.bin";
    /// Drush site alias.
    pub const DRUSH_ALIAS: &str = "drush.alias";
    /// Cached Drupal install state.
    pub const STATE_DRUPAL_INSTALLED: &str = "state.drupal.installed";
    /// Cached `drush status` report.
    pub const STATE_DRUSH_STATUS: &str = "state.drush.status";
}
