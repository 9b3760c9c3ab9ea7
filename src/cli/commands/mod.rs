//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Commands that inspect a
//! checkout share a [`ProjectContext`] for config loading.
//!
//! Exit codes: 0 when the answer is yes, 1 when it is no, 2 when the
//! question could not be answered.

pub mod check;
pub mod completions;
pub mod config;
pub mod dispatcher;
pub mod drush;
pub mod exists;
pub mod status;

pub use dispatcher::{
    Command, CommandDispatcher, CommandResult, ProjectContext, EXIT_ERROR, EXIT_FALSE,
};
