//! Check command implementation.
//!
//! `blt-inspector check <name>` answers one question through the exit
//! code, so it can be used directly in shell conditionals.

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ProjectContext};

/// The check command implementation.
pub struct CheckCommand {
    context: ProjectContext,
    args: CheckArgs,
}

impl CheckCommand {
    pub fn new(context: ProjectContext, args: CheckArgs) -> Self {
        Self { context, args }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut inspector = self.context.inspector()?;
        let check = self.args.check;
        let answer = inspector.check(check)?;

        tracing::debug!("{:?} answered {}", check, answer);
        if answer {
            ui.success(check.label());
        } else {
            ui.error(check.label());
        }

        Ok(CommandResult::from_answer(answer))
    }
}
