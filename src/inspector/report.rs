//! Aggregate inspection results.

use serde::Serialize;

/// A named check the inspector can answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Check {
    /// Repository root exists.
    RepoRoot,
    /// Docroot exists.
    Docroot,
    /// `settings.php` exists.
    SettingsFile,
    /// `settings.php` includes the BLT settings file.
    SettingsValid,
    /// Drupal's `config` table exists.
    DrupalInstalled,
    /// Behat `local.yml` exists.
    Behat,
    /// PhantomJS is required, scripted and installed.
    Phantomjs,
}

impl Check {
    /// Every check, in report order.
    pub const ALL: [Check; 7] = [
        Check::RepoRoot,
        Check::Docroot,
        Check::SettingsFile,
        Check::SettingsValid,
        Check::DrupalInstalled,
        Check::Behat,
        Check::Phantomjs,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Check::RepoRoot => "Repository root",
            Check::Docroot => "Docroot",
            Check::SettingsFile => "settings.php present",
            Check::SettingsValid => "settings.php includes blt.settings.php",
            Check::DrupalInstalled => "Drupal installed",
            Check::Behat => "Behat configured",
            Check::Phantomjs => "PhantomJS configured",
        }
    }
}

/// Outcome of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Fail,
    Skipped,
}

impl CheckStatus {
    /// Map a boolean answer to pass/fail.
    pub fn from_bool(passed: bool) -> Self {
        if passed {
            CheckStatus::Pass
        } else {
            CheckStatus::Fail
        }
    }
}

/// A check with its outcome and an optional explanation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckOutcome {
    pub check: Check,
    pub status: CheckStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl CheckOutcome {
    /// Outcome from a boolean answer.
    pub fn new(check: Check, passed: bool) -> Self {
        Self {
            check,
            status: CheckStatus::from_bool(passed),
            detail: None,
        }
    }

    /// A check that was not run.
    pub fn skipped(check: Check, reason: &str) -> Self {
        Self {
            check,
            status: CheckStatus::Skipped,
            detail: Some(reason.to_string()),
        }
    }

    /// Attach an explanation.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Whether an external tool resolves on `PATH`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolAvailability {
    pub name: String,
    pub found: bool,
}

/// Every check outcome for a checkout plus tool availability.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InspectionReport {
    pub checks: Vec<CheckOutcome>,
    pub tools: Vec<ToolAvailability>,
}

impl InspectionReport {
    /// Outcome for one check, if it was recorded.
    pub fn get(&self, check: Check) -> Option<&CheckOutcome> {
        self.checks.iter().find(|o| o.check == check)
    }

    /// Checks that ran and failed.
    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.checks
            .iter()
            .filter(|o| o.status == CheckStatus::Fail)
    }

    /// Whether every check that ran passed.
    pub fn all_passed(&self) -> bool {
        self.failures().next().is_none()
    }
}
