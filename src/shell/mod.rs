//! Shell command execution and `PATH` probing.

pub mod command;
pub mod probe;
pub mod runner;

pub use command::{execute, execute_quiet, shell_quote, CommandOptions, CommandResult};
pub use probe::command_exists;
pub use runner::{search_file, CommandRunner, ShellRunner};
