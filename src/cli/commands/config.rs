//! Config command implementation.
//!
//! The `blt-inspector config` command shows resolved configuration.

use crate::cli::args::ConfigArgs;
use crate::config::{ConfigPaths, ConfigStore};
use crate::error::{InspectorError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ProjectContext, EXIT_FALSE};

/// The config command implementation.
pub struct ConfigCommand {
    context: ProjectContext,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(context: ProjectContext, args: ConfigArgs) -> Self {
        Self { context, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ConfigArgs {
        &self.args
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.context.load_config()?;

        let value = match &self.args.key {
            Some(key) => match config.get(key) {
                Some(value) => value.clone(),
                None => {
                    ui.error(&format!("{} is not set", key));
                    return Ok(CommandResult::failure(EXIT_FALSE));
                }
            },
            None => {
                // Show config file path(s)
                let paths = ConfigPaths::discover(self.context.project_root());
                for path in paths.all_existing() {
                    ui.message(&format!("# {}", path.display()));
                }
                config.into_value()
            }
        };

        let rendered = if self.args.json {
            serde_json::to_string_pretty(&value).map_err(|e| InspectorError::Other(e.into()))?
        } else {
            serde_yaml::to_string(&value).map_err(|e| InspectorError::Other(e.into()))?
        };
        ui.data(rendered.trim_end());

        Ok(CommandResult::success())
    }
}
