//! External command execution behind a trait seam.
//!
//! The inspector never spawns processes directly; it goes through a
//! [`CommandRunner`]. [`ShellRunner`] is the production implementation,
//! tests substitute fakes that record calls.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::config::{keys, ConfigStore};
use crate::error::Result;

use super::command::{execute_quiet, shell_quote, CommandResult};
use super::probe::command_exists;

/// Executes external commands on behalf of the inspector.
pub trait CommandRunner {
    /// Run a shell command line and capture its output.
    fn run(&self, command: &str) -> Result<CommandResult>;

    /// Run a drush subcommand against the project's site.
    ///
    /// `args` is appended verbatim to the drush invocation.
    fn run_drush(&self, args: &str) -> Result<CommandResult>;

    /// Whether any line of the file at `path` matches `pattern`.
    ///
    /// A missing or unreadable file, or an invalid pattern, is `false`.
    fn search_file(&self, path: &Path, pattern: &str) -> bool;

    /// Whether a drush binary is available to run at all.
    fn has_drush(&self) -> bool {
        true
    }
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, command: &str) -> Result<CommandResult> {
        (**self).run(command)
    }

    fn run_drush(&self, args: &str) -> Result<CommandResult> {
        (**self).run_drush(args)
    }

    fn search_file(&self, path: &Path, pattern: &str) -> bool {
        (**self).search_file(path, pattern)
    }

    fn has_drush(&self) -> bool {
        (**self).has_drush()
    }
}

/// Runs commands through `/bin/sh`.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    working_dir: PathBuf,
    drush_bin: String,
    drush_alias: Option<String>,
    drush_dir: PathBuf,
}

impl ShellRunner {
    /// Create a runner using `drush` from `PATH` with no site alias.
    pub fn new(working_dir: &Path) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            drush_bin: "drush".to_string(),
            drush_alias: None,
            drush_dir: working_dir.to_path_buf(),
        }
    }

    /// Create a runner from project configuration.
    ///
    /// Reads `drush.bin`, `drush.alias`, `docroot` and `repo.root`. A
    /// configured drush binary that does not exist falls back to `drush`
    /// on `PATH`. Drush runs from the docroot when it exists, otherwise
    /// from the repository root.
    pub fn from_config<C: ConfigStore + ?Sized>(config: &C, working_dir: &Path) -> Self {
        let drush_bin = match config.get_path(keys::DRUSH_BIN) {
            Some(path) if path.is_file() => path.to_string_lossy().to_string(),
            Some(path) => {
                tracing::debug!(
                    "Configured drush binary {} not found, using drush from PATH",
                    path.display()
                );
                "drush".to_string()
            }
            None => "drush".to_string(),
        };

        let drush_alias = config
            .get_string(keys::DRUSH_ALIAS)
            .map(|a| a.trim_start_matches('@').to_string())
            .filter(|a| !a.is_empty());

        let drush_dir = [config.get_path(keys::DOCROOT), config.get_path(keys::REPO_ROOT)]
            .into_iter()
            .flatten()
            .find(|p| p.is_dir())
            .unwrap_or_else(|| working_dir.to_path_buf());

        Self {
            working_dir: working_dir.to_path_buf(),
            drush_bin,
            drush_alias,
            drush_dir,
        }
    }

    /// Override the drush binary.
    pub fn with_drush_bin(mut self, bin: impl Into<String>) -> Self {
        self.drush_bin = bin.into();
        self
    }

    /// Directory commands run in.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Directory drush runs in.
    pub fn drush_dir(&self) -> &Path {
        &self.drush_dir
    }

    /// The drush binary that will be invoked.
    pub fn drush_bin(&self) -> &str {
        &self.drush_bin
    }

    /// Build the full drush command line for `args`.
    pub fn drush_command_line(&self, args: &str) -> String {
        let mut line = shell_quote(&self.drush_bin);
        if let Some(alias) = &self.drush_alias {
            line.push_str(&format!(" @{}", alias));
        }
        line.push(' ');
        line.push_str(args);
        line.push_str(" -n");
        line
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> Result<CommandResult> {
        execute_quiet(command, Some(&self.working_dir))
    }

    fn run_drush(&self, args: &str) -> Result<CommandResult> {
        execute_quiet(&self.drush_command_line(args), Some(&self.drush_dir))
    }

    fn search_file(&self, path: &Path, pattern: &str) -> bool {
        let path = if path.is_relative() {
            self.working_dir.join(path)
        } else {
            path.to_path_buf()
        };
        search_file(&path, pattern)
    }

    fn has_drush(&self) -> bool {
        Path::new(&self.drush_bin).is_file() || command_exists(&self.drush_bin)
    }
}

/// Line-oriented regex search over a file.
pub fn search_file(path: &Path, pattern: &str) -> bool {
    let re = match Regex::new(pattern) {
        Ok(re) => re,
        Err(e) => {
            tracing::debug!("Invalid search pattern {:?}: {}", pattern, e);
            return false;
        }
    };

    match fs::read_to_string(path) {
        Ok(content) => content.lines().any(|line| re.is_match(line)),
        Err(e) => {
            tracing::debug!("Cannot search {}: {}", path.display(), e);
            false
        }
    }
}
