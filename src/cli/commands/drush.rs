//! Drush status command implementation.
//!
//! `blt-inspector drush-status` refreshes the drush status report and
//! prints it.

use crate::cli::args::DrushStatusArgs;
use crate::config::ConfigStore;
use crate::error::{InspectorError, Result};
use crate::inspector::{DrushStatus, Inspector};
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ProjectContext, EXIT_FALSE};

/// The drush-status command implementation.
pub struct DrushStatusCommand {
    context: ProjectContext,
    args: DrushStatusArgs,
}

impl DrushStatusCommand {
    pub fn new(context: ProjectContext, args: DrushStatusArgs) -> Self {
        Self { context, args }
    }

    /// Refresh and print the status through an existing inspector.
    pub fn report<R: CommandRunner, C: ConfigStore>(
        &self,
        inspector: &mut Inspector<R, C>,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let Some(status) = inspector.refresh_drush_status().drush_status() else {
            ui.error("drush status did not return a report");
            return Ok(CommandResult::failure(EXIT_FALSE));
        };

        if self.args.json {
            let json = serde_json::to_string_pretty(status)
                .map_err(|e| InspectorError::Other(e.into()))?;
            ui.data(&json);
        } else {
            show_status(ui, status);
        }
        Ok(CommandResult::success())
    }
}

impl Command for DrushStatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut inspector = self.context.inspector()?;
        self.report(&mut inspector, ui)
    }
}

fn show_status(ui: &mut dyn UserInterface, status: &DrushStatus) {
    ui.show_header("Drush status");
    for (key, value) in status.fields() {
        let value = match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        ui.message(&format!("{:<20} {}", key, value));
    }
}
