//! `blt-inspector command-exists <name>`.

use crate::cli::args::CommandExistsArgs;
use crate::error::Result;
use crate::shell::command_exists;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Looks a binary up on `PATH`. Needs no project.
pub struct CommandExistsCommand {
    args: CommandExistsArgs,
}

impl CommandExistsCommand {
    pub fn new(args: CommandExistsArgs) -> Self {
        Self { args }
    }
}

impl Command for CommandExistsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let found = command_exists(&self.args.name);
        if found {
            ui.success(&format!("{} found", self.args.name));
        } else {
            ui.error(&format!("{} not found", self.args.name));
        }
        Ok(CommandResult::from_answer(found))
    }
}
