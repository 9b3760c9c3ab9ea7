//! BLT Inspector - Status checks for BLT-managed Drupal checkouts.
//!
//! The inspector answers yes/no questions about a local checkout: whether
//! the docroot and `settings.php` exist, whether `settings.php` includes
//! BLT's settings, whether Drupal is installed, whether PhantomJS is set
//! up, and whether a binary is on `PATH`.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, layering, and expansion
//! - [`error`] - Error types and result aliases
//! - [`inspector`] - The checks and their memoization
//! - [`shell`] - Shell command execution and `PATH` lookup
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use blt_inspector::config::YamlConfigStore;
//! use blt_inspector::shell::ShellRunner;
//! use blt_inspector::Inspector;
//!
//! assert!(Inspector::<ShellRunner, YamlConfigStore>::command_exists("sh"));
//! assert!(!Inspector::<ShellRunner, YamlConfigStore>::command_exists("no-such-binary-here"));
//! ```
//!
//! For checks against a project on disk, see [`inspector`].

pub mod cli;
pub mod config;
pub mod error;
pub mod inspector;
pub mod shell;
pub mod ui;

pub use error::{InspectorError, Result};
pub use inspector::Inspector;
