//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, StatusArgs};
use crate::config::{load_config, YamlConfigStore};
use crate::error::Result;
use crate::inspector::Inspector;
use crate::shell::ShellRunner;
use crate::ui::UserInterface;

/// Exit code for a check that answered `false`.
pub const EXIT_FALSE: i32 = 1;

/// Exit code for a check that could not be answered.
pub const EXIT_ERROR: i32 = 2;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// Returns a [`CommandResult`] carrying the process exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Map a check answer to an exit code.
    pub fn from_answer(answer: bool) -> Self {
        if answer {
            Self::success()
        } else {
            Self::failure(EXIT_FALSE)
        }
    }
}

/// Where a command finds its project.
///
/// `working_dir` is the directory the command was run from; `composer.json`
/// is read there. It defaults to the project root.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    project_root: PathBuf,
    config_file: Option<PathBuf>,
    working_dir: PathBuf,
}

impl ProjectContext {
    pub fn new(project_root: &Path, config_file: Option<&Path>) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_file: config_file.map(Path::to_path_buf),
            working_dir: project_root.to_path_buf(),
        }
    }

    /// Read `composer.json` from `dir` instead of the project root.
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = dir.to_path_buf();
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Load the project's resolved configuration.
    pub fn load_config(&self) -> Result<YamlConfigStore> {
        load_config(&self.project_root, self.config_file.as_deref())
    }

    /// Build an inspector over the project checkout.
    pub fn inspector(&self) -> Result<Inspector<ShellRunner, YamlConfigStore>> {
        let config = self.load_config()?;
        let runner = ShellRunner::from_config(&config, &self.project_root);
        Ok(Inspector::new(runner, config, &self.working_dir))
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: ProjectContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf, config_file: Option<PathBuf>) -> Self {
        Self {
            context: ProjectContext {
                working_dir: project_root.clone(),
                project_root,
                config_file,
            },
        }
    }

    /// Set the directory the command was run from.
    pub fn with_working_dir(mut self, working_dir: PathBuf) -> Self {
        self.context.working_dir = working_dir;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        self.context.project_root()
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let context = self.context.clone();
        match &cli.command {
            Some(Commands::Status(args)) => {
                super::status::StatusCommand::new(context, args.clone()).execute(ui)
            }
            Some(Commands::Check(args)) => {
                super::check::CheckCommand::new(context, args.clone()).execute(ui)
            }
            Some(Commands::CommandExists(args)) => {
                super::exists::CommandExistsCommand::new(args.clone()).execute(ui)
            }
            Some(Commands::DrushStatus(args)) => {
                super::drush::DrushStatusCommand::new(context, args.clone()).execute(ui)
            }
            Some(Commands::Config(args)) => {
                super::config::ConfigCommand::new(context, args.clone()).execute(ui)
            }
            Some(Commands::Completions(args)) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
            None => super::status::StatusCommand::new(context, StatusArgs::default()).execute(ui),
        }
    }
}
