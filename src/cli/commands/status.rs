//! Status command implementation.
//!
//! The `blt-inspector status` command runs every check against the
//! checkout and prints the report.

use crate::cli::args::StatusArgs;
use crate::error::{InspectorError, Result};
use crate::inspector::{CheckOutcome, CheckStatus, InspectionReport};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ProjectContext, EXIT_FALSE};

/// The status command implementation.
pub struct StatusCommand {
    context: ProjectContext,
    args: StatusArgs,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(context: ProjectContext, args: StatusArgs) -> Self {
        Self { context, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &StatusArgs {
        &self.args
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut inspector = self.context.inspector()?;
        let report = inspector.inspect()?;

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&report).map_err(|e| InspectorError::Other(e.into()))?;
            ui.data(&json);
        } else {
            ui.show_header(&format!(
                "BLT checkout {}",
                self.context.project_root().display()
            ));
            show_report(ui, &report);
        }

        if report.all_passed() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(EXIT_FALSE))
        }
    }
}

/// Print each outcome followed by tool availability.
pub fn show_report(ui: &mut dyn UserInterface, report: &InspectionReport) {
    for outcome in &report.checks {
        show_outcome(ui, outcome);
    }

    let tools: Vec<String> = report
        .tools
        .iter()
        .map(|t| format!("{} {}", t.name, if t.found { "found" } else { "missing" }))
        .collect();
    if !tools.is_empty() {
        ui.message("");
        ui.message(&format!("Tools: {}", tools.join(", ")));
    }
}

fn show_outcome(ui: &mut dyn UserInterface, outcome: &CheckOutcome) {
    let label = outcome.check.label();
    let line = match (&outcome.detail, ui.output_mode().shows_detail()) {
        (Some(detail), true) => format!("{} ({})", label, detail),
        _ => label.to_string(),
    };

    match outcome.status {
        CheckStatus::Pass => ui.success(&line),
        CheckStatus::Fail => ui.error(&line),
        CheckStatus::Skipped => ui.skipped(&line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspector::Check;
    use crate::ui::{MockUI, OutputMode};
    use std::fs;
    use tempfile::TempDir;

    fn command(temp: &TempDir, json: bool) -> StatusCommand {
        StatusCommand::new(
            ProjectContext::new(temp.path(), None),
            StatusArgs { json },
        )
    }

    #[test]
    fn bare_checkout_fails() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = command(&temp, false).execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, EXIT_FALSE);
        assert!(ui.successes().contains(&Check::RepoRoot.label().to_string()));
        assert!(ui.errors().contains(&Check::Docroot.label().to_string()));
        assert!(ui.skips().contains(&Check::SettingsValid.label().to_string()));
    }

    #[test]
    fn json_report_lists_every_check() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        command(&temp, true).execute(&mut ui).unwrap();

        let json: serde_json::Value = serde_json::from_str(&ui.payloads()[0]).unwrap();
        let checks = json["checks"].as_array().unwrap();
        assert_eq!(checks.len(), Check::ALL.len());
        assert_eq!(checks[0]["check"], "repo-root");
        assert_eq!(checks[0]["status"], "pass");
        assert!(ui.headers().is_empty());
    }

    #[test]
    fn verbose_mode_shows_paths() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("docroot")).unwrap();
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        command(&temp, false).execute(&mut ui).unwrap();

        let docroot = temp.path().join("docroot").display().to_string();
        assert!(ui.successes().iter().any(|m| m.contains(&docroot)));
    }

    #[test]
    fn reports_tools() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        command(&temp, false).execute(&mut ui).unwrap();

        assert!(ui.messages().iter().any(|m| m.starts_with("Tools: php")));
    }
}
