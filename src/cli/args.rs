//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::inspector::Check;

/// BLT Inspector - Status checks for BLT-managed Drupal checkouts.
#[derive(Debug, Parser)]
#[command(name = "blt-inspector")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Extra config file layered over blt/blt.yml and blt/local.blt.yml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides discovery from the current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show detail for every check
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only report failures
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run every check (default if no command specified)
    Status(StatusArgs),

    /// Run a single check
    Check(CheckArgs),

    /// Check whether a binary is on PATH
    CommandExists(CommandExistsArgs),

    /// Show the drush status report
    DrushStatus(DrushStatusArgs),

    /// Show resolved configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Check to run
    #[arg(value_enum)]
    pub check: Check,
}

/// Arguments for the `command-exists` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CommandExistsArgs {
    /// Binary name to look up
    pub name: String,
}

/// Arguments for the `drush-status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DrushStatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Show a single dotted key (e.g. drush.alias)
    #[arg(long)]
    pub key: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
