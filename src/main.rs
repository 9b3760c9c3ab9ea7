//! BLT Inspector CLI entry point.

use std::process::ExitCode;

use blt_inspector::cli::{Cli, CommandDispatcher};
use blt_inspector::config::find_project_root;
use blt_inspector::ui::{create_ui, OutputMode};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Exit code when a question could not be answered.
const EXIT_ERROR: u8 = 2;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("blt_inspector=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("blt_inspector=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("blt-inspector starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = create_ui(output_mode);

    // Explicit --project wins, then discovery upward from the current directory.
    let cwd = std::env::current_dir();
    let project_root = match (&cli.project, &cwd) {
        (Some(project), _) => project.clone(),
        (None, Ok(cwd)) => find_project_root(cwd).unwrap_or_else(|| cwd.clone()),
        (None, Err(e)) => {
            ui.error(&format!("Error: cannot read current directory: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    };
    // composer.json is read from where the command was run.
    let working_dir = cwd.unwrap_or_else(|_| project_root.clone());
    tracing::debug!(
        "Project root: {}, working directory: {}",
        project_root.display(),
        working_dir.display()
    );

    let dispatcher =
        CommandDispatcher::new(project_root, cli.config.clone()).with_working_dir(working_dir);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(EXIT_ERROR)
        }
    }
}
