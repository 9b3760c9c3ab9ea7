//! Yes/no questions about a BLT project checkout.
//!
//! The [`Inspector`] answers point-in-time questions: does the docroot
//! exist, does `settings.php` include BLT's settings, is Drupal installed.
//! Every check reflects the current filesystem except the two expensive
//! drush queries, which run at most once per process.
//!
//! # Modules
//!
//! - [`cache`] - Per-run memoization of drush answers
//! - [`drush`] - Parsed `drush status` output
//! - [`report`] - Aggregate report over every check
//!
//! # Example
//!
//! ```
//! use blt_inspector::config::load_config;
//! use blt_inspector::inspector::Inspector;
//! use blt_inspector::shell::ShellRunner;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! std::fs::create_dir_all(temp.path().join("docroot")).unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! let runner = ShellRunner::from_config(&config, temp.path());
//! let inspector = Inspector::new(runner, config, temp.path());
//!
//! assert!(inspector.is_repo_root_present().unwrap());
//! assert!(inspector.is_docroot_present().unwrap());
//! assert!(!inspector.is_settings_file_present().unwrap());
//! ```

pub mod cache;
pub mod drush;
pub mod report;

pub use cache::InspectorCache;
pub use drush::DrushStatus;
pub use report::{Check, CheckOutcome, CheckStatus, InspectionReport, ToolAvailability};

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;

use crate::config::{keys, ConfigStore};
use crate::error::{InspectorError, Result};
use crate::shell::{self, CommandRunner};

/// Include line every BLT-managed `settings.php` must carry.
pub const BLT_SETTINGS_INCLUDE: &str = "/../vendor/acquia/blt/settings/blt.settings.php";

/// Drush query whose only output is `config` on an installed site.
pub const INSTALLED_QUERY: &str = r#"sqlq "SHOW TABLES LIKE 'config'""#;

/// Drush arguments for a machine-readable status report.
pub const STATUS_QUERY: &str = "status --format=json";

/// Composer package that downloads PhantomJS.
pub const PHANTOMJS_PACKAGE: &str = "jakoch/phantomjs-installer";

/// Composer script hook that runs the PhantomJS installer.
pub const PHANTOMJS_SCRIPT: &str = "installPhantomJS";

/// Behat local config, relative to the repository root.
pub const BEHAT_LOCAL_CONFIG: &str = "tests/behat/local.yml";

/// Tools listed in the inspection report.
pub const REPORTED_TOOLS: &[&str] = &["php", "composer", "drush", "git"];

/// Answers status questions about a project checkout.
///
/// The inspector owns its configuration so the values it learns (install
/// state, drush status) are visible to later readers of the same store.
pub struct Inspector<R, C> {
    runner: R,
    config: C,
    working_dir: PathBuf,
    cache: InspectorCache,
}

impl<R: CommandRunner, C: ConfigStore> Inspector<R, C> {
    /// Create an inspector.
    ///
    /// `working_dir` is where `composer.json` is looked up. Cached state
    /// already present in `config` is honoured.
    pub fn new(runner: R, config: C, working_dir: &Path) -> Self {
        let cache = InspectorCache::seeded_from(&config);
        Self {
            runner,
            config,
            working_dir: working_dir.to_path_buf(),
            cache,
        }
    }

    /// The command runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// The configuration store.
    pub fn config(&self) -> &C {
        &self.config
    }

    /// Mutable access to the configuration store.
    pub fn config_mut(&mut self) -> &mut C {
        &mut self.config
    }

    /// Consume the inspector, returning its configuration.
    pub fn into_config(self) -> C {
        self.config
    }

    /// The memoization cache.
    pub fn cache(&self) -> &InspectorCache {
        &self.cache
    }

    /// Directory holding `composer.json`.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Check if a given command exists on the system.
    pub fn command_exists(command: &str) -> bool {
        shell::command_exists(command)
    }

    /// Whether the path stored under `key` exists.
    ///
    /// An unset key is a negative answer.
    fn config_path_exists(&self, key: &str) -> Result<bool> {
        match self.config.get_path(key) {
            Some(path) => path_exists(&path),
            None => {
                tracing::debug!("{} is not configured", key);
                Ok(false)
            }
        }
    }

    pub fn is_repo_root_present(&self) -> Result<bool> {
        self.config_path_exists(keys::REPO_ROOT)
    }

    pub fn is_docroot_present(&self) -> Result<bool> {
        self.config_path_exists(keys::DOCROOT)
    }

    pub fn is_settings_file_present(&self) -> Result<bool> {
        self.config_path_exists(keys::SETTINGS_FILE)
    }

    /// Whether `settings.php` includes BLT's settings file.
    ///
    /// Does not check that the file exists first; a missing file is an
    /// I/O error, not `false`.
    pub fn is_settings_file_valid(&self) -> Result<bool> {
        let path = self
            .config
            .get_path(keys::SETTINGS_FILE)
            .ok_or_else(|| InspectorError::MissingConfigKey {
                key: keys::SETTINGS_FILE.to_string(),
            })?;

        let contents = fs::read(&path)?;
        let valid = String::from_utf8_lossy(&contents).contains(BLT_SETTINGS_INCLUDE);
        tracing::debug!("{} includes BLT settings: {}", path.display(), valid);
        Ok(valid)
    }

    /// Whether Drupal is installed.
    ///
    /// A truthy `state.drupal.installed` in config answers without running
    /// drush. Otherwise the drush query runs and its answer is written back,
    /// so a site installed mid-run is picked up on the next call.
    pub fn is_drupal_installed(&mut self) -> bool {
        self.cache.sync_from(&self.config);
        let runner = &self.runner;
        let mut checked = false;
        let installed = self.cache.drupal_installed_or_check_with(|| {
            checked = true;
            query_drupal_installed(runner)
        });

        if checked {
            self.config
                .set(keys::STATE_DRUPAL_INSTALLED, Value::Bool(installed));
        }
        installed
    }

    /// Forget the memoized install state.
    pub fn invalidate_drupal_installed(&mut self) {
        self.cache.invalidate_drupal_installed();
        self.config.remove(keys::STATE_DRUPAL_INSTALLED);
    }

    pub fn is_behat_configured(&self) -> Result<bool> {
        match self.config.get_path(keys::REPO_ROOT) {
            Some(root) => path_exists(&root.join(BEHAT_LOCAL_CONFIG)),
            None => Ok(false),
        }
    }

    /// Fetch and cache the drush status report if it isn't cached yet.
    ///
    /// A failing command or output that isn't a JSON object leaves the
    /// cache empty, so the next call tries again.
    pub fn refresh_drush_status(&mut self) -> &mut Self {
        self.cache.sync_from(&self.config);
        if self.cache.drush_status().is_some() {
            return self;
        }

        let result = match self.runner.run_drush(STATUS_QUERY) {
            Ok(result) if result.success => result,
            Ok(result) => {
                tracing::warn!(
                    "drush status exited with {:?}: {}",
                    result.exit_code,
                    result.stderr.trim()
                );
                return self;
            }
            Err(e) => {
                tracing::warn!("drush status could not run: {}", e);
                return self;
            }
        };

        match DrushStatus::parse(&result.stdout) {
            Ok(status) => {
                self.config
                    .set(keys::STATE_DRUSH_STATUS, status.to_yaml());
                self.cache.set_drush_status(status);
            }
            Err(e) => tracing::warn!("drush status output is not a JSON object: {}", e),
        }
        self
    }

    /// The cached drush status, if one was fetched.
    pub fn drush_status(&self) -> Option<&DrushStatus> {
        self.cache.drush_status()
    }

    /// Forget the cached drush status.
    pub fn invalidate_drush_status(&mut self) {
        self.cache.invalidate_drush_status();
        self.config.remove(keys::STATE_DRUSH_STATUS);
    }

    /// Whether PhantomJS is required, scripted and installed.
    ///
    /// Stops at the first negative answer.
    pub fn is_phantomjs_configured(&self) -> Result<bool> {
        Ok(self.is_phantomjs_required()
            && self.is_phantomjs_script_configured()
            && self.is_phantomjs_binary_present()?)
    }

    pub fn is_phantomjs_required(&self) -> bool {
        self.runner
            .search_file(&self.manifest_path(), PHANTOMJS_PACKAGE)
    }

    pub fn is_phantomjs_script_configured(&self) -> bool {
        self.runner
            .search_file(&self.manifest_path(), PHANTOMJS_SCRIPT)
    }

    pub fn is_phantomjs_binary_present(&self) -> Result<bool> {
        match self.config.get_path(keys::COMPOSER_BIN) {
            Some(bin) => path_exists(&bin.join("phantomjs")),
            None => Ok(false),
        }
    }

    /// Path to the project's `composer.json`.
    pub fn manifest_path(&self) -> PathBuf {
        self.working_dir.join("composer.json")
    }

    /// Answer a single named check.
    pub fn check(&mut self, check: Check) -> Result<bool> {
        match check {
            Check::RepoRoot => self.is_repo_root_present(),
            Check::Docroot => self.is_docroot_present(),
            Check::SettingsFile => self.is_settings_file_present(),
            Check::SettingsValid => self.is_settings_file_valid(),
            Check::DrupalInstalled => Ok(self.is_drupal_installed()),
            Check::Behat => self.is_behat_configured(),
            Check::Phantomjs => self.is_phantomjs_configured(),
        }
    }

    /// Run every check and collect the outcomes.
    ///
    /// The settings-validity check is skipped when `settings.php` is
    /// missing, and the install check when no drush binary is available.
    pub fn inspect(&mut self) -> Result<InspectionReport> {
        let mut checks = Vec::with_capacity(Check::ALL.len());

        checks.push(
            CheckOutcome::new(Check::RepoRoot, self.is_repo_root_present()?)
                .with_detail(self.describe_path(keys::REPO_ROOT)),
        );
        checks.push(
            CheckOutcome::new(Check::Docroot, self.is_docroot_present()?)
                .with_detail(self.describe_path(keys::DOCROOT)),
        );

        let settings_present = self.is_settings_file_present()?;
        checks.push(
            CheckOutcome::new(Check::SettingsFile, settings_present)
                .with_detail(self.describe_path(keys::SETTINGS_FILE)),
        );
        checks.push(if settings_present {
            CheckOutcome::new(Check::SettingsValid, self.is_settings_file_valid()?)
        } else {
            CheckOutcome::skipped(Check::SettingsValid, "settings.php is missing")
        });

        checks.push(if self.runner.has_drush() {
            CheckOutcome::new(Check::DrupalInstalled, self.is_drupal_installed())
        } else {
            CheckOutcome::skipped(Check::DrupalInstalled, "drush is not available")
        });

        checks.push(CheckOutcome::new(
            Check::Behat,
            self.is_behat_configured()?,
        ));
        checks.push(self.phantomjs_outcome()?);

        let tools = REPORTED_TOOLS
            .iter()
            .map(|name| ToolAvailability {
                name: name.to_string(),
                found: Self::command_exists(name),
            })
            .collect();

        Ok(InspectionReport { checks, tools })
    }

    fn phantomjs_outcome(&self) -> Result<CheckOutcome> {
        if !self.is_phantomjs_required() {
            return Ok(CheckOutcome::skipped(
                Check::Phantomjs,
                "not required by composer.json",
            ));
        }
        if !self.is_phantomjs_script_configured() {
            return Ok(CheckOutcome::new(Check::Phantomjs, false)
                .with_detail(format!("composer.json has no {} script", PHANTOMJS_SCRIPT)));
        }
        if !self.is_phantomjs_binary_present()? {
            return Ok(CheckOutcome::new(Check::Phantomjs, false)
                .with_detail("phantomjs binary not installed"));
        }
        Ok(CheckOutcome::new(Check::Phantomjs, true))
    }

    fn describe_path(&self, key: &str) -> String {
        self.config
            .get_path(key)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| format!("{} is not configured", key))
    }
}

/// Run the install query and interpret its output.
fn query_drupal_installed<R: CommandRunner + ?Sized>(runner: &R) -> bool {
    match runner.run_drush(INSTALLED_QUERY) {
        Ok(result) => {
            let installed = result.success && result.trimmed_stdout() == "config";
            tracing::debug!(
                "Install query exited with {:?}, output {:?}: installed={}",
                result.exit_code,
                result.trimmed_stdout(),
                installed
            );
            installed
        }
        Err(e) => {
            tracing::debug!("Install query could not run: {}", e);
            false
        }
    }
}

/// Existence check that reports I/O failures instead of hiding them.
fn path_exists(path: &Path) -> Result<bool> {
    Ok(path.try_exists()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load_config, YamlConfigStore};
    use crate::shell::CommandResult;
    use std::cell::RefCell;
    use std::time::Duration;
    use tempfile::TempDir;

    /// Runner that replays canned drush output and records every call.
    #[derive(Default)]
    struct FakeRunner {
        drush_responses: RefCell<Vec<CommandResult>>,
        drush_calls: RefCell<Vec<String>>,
        searches: RefCell<Vec<String>>,
        manifest_lines: Vec<String>,
        drush_missing: bool,
    }

    impl FakeRunner {
        fn with_drush(responses: Vec<CommandResult>) -> Self {
            Self {
                drush_responses: RefCell::new(responses),
                ..Default::default()
            }
        }

        fn with_manifest(lines: &[&str]) -> Self {
            Self {
                manifest_lines: lines.iter().map(|l| l.to_string()).collect(),
                ..Default::default()
            }
        }

        fn drush_calls(&self) -> Vec<String> {
            self.drush_calls.borrow().clone()
        }

        fn searches(&self) -> Vec<String> {
            self.searches.borrow().clone()
        }
    }

    impl CommandRunner for FakeRunner {
        fn run(&self, _command: &str) -> Result<CommandResult> {
            Ok(ok(""))
        }

        fn run_drush(&self, args: &str) -> Result<CommandResult> {
            self.drush_calls.borrow_mut().push(args.to_string());
            let mut responses = self.drush_responses.borrow_mut();
            if responses.is_empty() {
                return Err(InspectorError::CommandFailed {
                    command: args.to_string(),
                    code: None,
                });
            }
            Ok(responses.remove(0))
        }

        fn search_file(&self, _path: &Path, pattern: &str) -> bool {
            self.searches.borrow_mut().push(pattern.to_string());
            self.manifest_lines.iter().any(|l| l.contains(pattern))
        }

        fn has_drush(&self) -> bool {
            !self.drush_missing
        }
    }

    fn ok(stdout: &str) -> CommandResult {
        CommandResult::success(stdout.to_string(), String::new(), Duration::ZERO)
    }

    fn failed(stdout: &str) -> CommandResult {
        CommandResult::failure(Some(1), stdout.to_string(), String::new(), Duration::ZERO)
    }

    fn project() -> (TempDir, YamlConfigStore) {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path(), None).unwrap();
        (temp, config)
    }

    fn inspector(
        runner: FakeRunner,
        temp: &TempDir,
        config: YamlConfigStore,
    ) -> Inspector<FakeRunner, YamlConfigStore> {
        Inspector::new(runner, config, temp.path())
    }

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn repo_root_tracks_filesystem() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("checkout");
        let mut config = YamlConfigStore::new();
        config.set(keys::REPO_ROOT, Value::String(root.display().to_string()));
        let inspector = Inspector::new(FakeRunner::default(), config, temp.path());

        assert!(!inspector.is_repo_root_present().unwrap());
        fs::create_dir_all(&root).unwrap();
        assert!(inspector.is_repo_root_present().unwrap());
        fs::remove_dir(&root).unwrap();
        assert!(!inspector.is_repo_root_present().unwrap());
    }

    #[test]
    fn unset_keys_are_absent() {
        let temp = TempDir::new().unwrap();
        let inspector = Inspector::new(FakeRunner::default(), YamlConfigStore::new(), temp.path());

        assert!(!inspector.is_repo_root_present().unwrap());
        assert!(!inspector.is_docroot_present().unwrap());
        assert!(!inspector.is_settings_file_present().unwrap());
        assert!(!inspector.is_behat_configured().unwrap());
        assert!(!inspector.is_phantomjs_binary_present().unwrap());
    }

    #[test]
    fn docroot_and_settings_presence() {
        let (temp, config) = project();
        let settings = temp.path().join("docroot/sites/default/settings.php");
        let inspector = inspector(FakeRunner::default(), &temp, config);

        assert!(!inspector.is_docroot_present().unwrap());
        write(&settings, "<?php\n");
        assert!(inspector.is_docroot_present().unwrap());
        assert!(inspector.is_settings_file_present().unwrap());
    }

    #[test]
    fn settings_valid_with_blt_include() {
        let (temp, config) = project();
        let settings = temp.path().join("docroot/sites/default/settings.php");
        let inspector = inspector(FakeRunner::default(), &temp, config);

        write(
            &settings,
            "<?php\nrequire __DIR__ . '/../vendor/acquia/blt/settings/blt.settings.php';\n",
        );
        assert!(inspector.is_settings_file_valid().unwrap());

        write(
            &settings,
            "<?php\nrequire __DIR__ . '/../vendor/acquia/blt/settings/other.php';\n",
        );
        assert!(!inspector.is_settings_file_valid().unwrap());
    }

    #[test]
    fn settings_invalid_for_near_misses_and_empty_files() {
        let (temp, config) = project();
        let settings = temp.path().join("docroot/sites/default/settings.php");
        let inspector = inspector(FakeRunner::default(), &temp, config);

        write(&settings, "");
        assert!(!inspector.is_settings_file_valid().unwrap());

        write(
            &settings,
            "require __DIR__ . '/vendor/acquia/blt/settings/blt.settings.php';",
        );
        assert!(!inspector.is_settings_file_valid().unwrap());
    }

    #[test]
    fn settings_valid_on_missing_file_is_io_error() {
        let (temp, config) = project();
        let inspector = inspector(FakeRunner::default(), &temp, config);

        assert!(matches!(
            inspector.is_settings_file_valid(),
            Err(InspectorError::Io(_))
        ));
    }

    #[test]
    fn settings_valid_without_key_is_config_error() {
        let temp = TempDir::new().unwrap();
        let inspector = Inspector::new(FakeRunner::default(), YamlConfigStore::new(), temp.path());

        assert!(matches!(
            inspector.is_settings_file_valid(),
            Err(InspectorError::MissingConfigKey { .. })
        ));
    }

    #[test]
    fn drupal_installed_when_config_table_exists() {
        let (temp, config) = project();
        let mut inspector = inspector(FakeRunner::with_drush(vec![ok("config\n")]), &temp, config);

        assert!(inspector.is_drupal_installed());
        assert_eq!(inspector.runner().drush_calls(), vec![INSTALLED_QUERY]);
        assert_eq!(
            inspector.config().get_bool(keys::STATE_DRUPAL_INSTALLED),
            Some(true)
        );
    }

    #[test]
    fn drupal_installed_runs_query_once() {
        let (temp, config) = project();
        let runner = FakeRunner::with_drush(vec![ok("config"), ok("")]);
        let mut inspector = inspector(runner, &temp, config);

        assert!(inspector.is_drupal_installed());
        assert!(inspector.is_drupal_installed());
        assert_eq!(inspector.runner().drush_calls().len(), 1);
    }

    #[test]
    fn negative_install_answer_is_checked_again() {
        let (temp, config) = project();
        let runner = FakeRunner::with_drush(vec![ok(""), ok("config")]);
        let mut inspector = inspector(runner, &temp, config);

        assert!(!inspector.is_drupal_installed());
        assert_eq!(
            inspector.config().get_bool(keys::STATE_DRUPAL_INSTALLED),
            Some(false)
        );

        // Installed between the two calls.
        assert!(inspector.is_drupal_installed());
        assert_eq!(inspector.runner().drush_calls().len(), 2);
        assert_eq!(
            inspector.config().get_bool(keys::STATE_DRUPAL_INSTALLED),
            Some(true)
        );
    }

    #[test]
    fn install_state_set_through_config_is_honoured() {
        let (temp, config) = project();
        let mut inspector = inspector(FakeRunner::default(), &temp, config);

        inspector
            .config_mut()
            .set(keys::STATE_DRUPAL_INSTALLED, Value::Bool(true));
        assert!(inspector.is_drupal_installed());
        assert!(inspector.runner().drush_calls().is_empty());
    }

    #[test]
    fn install_state_removed_from_config_is_checked_again() {
        let (temp, config) = project();
        let runner = FakeRunner::with_drush(vec![ok("config"), ok("")]);
        let mut inspector = inspector(runner, &temp, config);

        assert!(inspector.is_drupal_installed());
        inspector.config_mut().remove(keys::STATE_DRUPAL_INSTALLED);
        assert!(!inspector.is_drupal_installed());
        assert_eq!(inspector.runner().drush_calls().len(), 2);
    }

    #[test]
    fn drupal_not_installed_for_near_miss_output() {
        for response in [ok("configs"), ok(""), ok("config_export"), failed("config")] {
            let (temp, config) = project();
            let mut inspector = inspector(FakeRunner::with_drush(vec![response]), &temp, config);
            assert!(!inspector.is_drupal_installed());
        }
    }

    #[test]
    fn drupal_not_installed_when_drush_cannot_run() {
        let (temp, config) = project();
        let mut inspector = inspector(FakeRunner::default(), &temp, config);
        assert!(!inspector.is_drupal_installed());
    }

    #[test]
    fn cached_install_state_skips_query() {
        let (temp, mut config) = project();
        config.set(keys::STATE_DRUPAL_INSTALLED, Value::Bool(true));
        let mut inspector = inspector(FakeRunner::default(), &temp, config);

        assert!(inspector.is_drupal_installed());
        assert!(inspector.runner().drush_calls().is_empty());
    }

    #[test]
    fn invalidate_reruns_install_query() {
        let (temp, config) = project();
        let runner = FakeRunner::with_drush(vec![ok(""), ok("config")]);
        let mut inspector = inspector(runner, &temp, config);

        assert!(!inspector.is_drupal_installed());
        inspector.invalidate_drupal_installed();
        assert!(!inspector.config().contains(keys::STATE_DRUPAL_INSTALLED));
        assert!(inspector.is_drupal_installed());
        assert_eq!(inspector.runner().drush_calls().len(), 2);
    }

    #[test]
    fn refresh_drush_status_parses_and_caches() {
        let (temp, config) = project();
        let runner = FakeRunner::with_drush(vec![ok(
            r#"{"drupal-version": "10.2.5", "bootstrap": "Successful"}"#,
        )]);
        let mut inspector = inspector(runner, &temp, config);

        inspector.refresh_drush_status().refresh_drush_status();

        assert_eq!(inspector.runner().drush_calls(), vec![STATUS_QUERY]);
        let status = inspector.drush_status().unwrap();
        assert_eq!(status.drupal_version(), Some("10.2.5"));
        assert!(status.bootstrap_successful());
        assert_eq!(
            inspector
                .config()
                .get_string("state.drush.status.drupal-version"),
            Some("10.2.5".to_string())
        );
    }

    #[test]
    fn unparseable_drush_status_is_retried() {
        let (temp, config) = project();
        let runner = FakeRunner::with_drush(vec![
            ok("The command could not be executed successfully"),
            ok(r#"{"drupal-version": "10.2.5"}"#),
        ]);
        let mut inspector = inspector(runner, &temp, config);

        inspector.refresh_drush_status();
        assert!(inspector.drush_status().is_none());
        assert!(!inspector.config().contains(keys::STATE_DRUSH_STATUS));

        inspector.refresh_drush_status();
        assert!(inspector.drush_status().is_some());
        assert_eq!(inspector.runner().drush_calls().len(), 2);
    }

    #[test]
    fn failed_drush_status_stores_nothing() {
        let (temp, config) = project();
        let mut inspector = inspector(
            FakeRunner::with_drush(vec![failed(r#"{"drupal-version": "10"}"#)]),
            &temp,
            config,
        );

        inspector.refresh_drush_status();
        assert!(inspector.drush_status().is_none());
    }

    #[test]
    fn drush_status_set_through_config_skips_command() {
        let (temp, config) = project();
        let mut inspector = inspector(FakeRunner::default(), &temp, config);

        inspector.config_mut().set(
            "state.drush.status.drupal-version",
            Value::String("10.3.1".into()),
        );
        inspector.refresh_drush_status();
        assert!(inspector.runner().drush_calls().is_empty());
        assert_eq!(
            inspector.drush_status().and_then(|s| s.drupal_version()),
            Some("10.3.1")
        );
    }

    #[test]
    fn cached_drush_status_skips_command() {
        let (temp, mut config) = project();
        config.set(
            "state.drush.status.drupal-version",
            Value::String("9.5.0".into()),
        );
        let mut inspector = inspector(FakeRunner::default(), &temp, config);

        inspector.refresh_drush_status();
        assert!(inspector.runner().drush_calls().is_empty());
        assert_eq!(
            inspector.drush_status().and_then(|s| s.drupal_version()),
            Some("9.5.0")
        );
    }

    #[test]
    fn behat_configured_when_local_yml_exists() {
        let (temp, config) = project();
        let inspector = inspector(FakeRunner::default(), &temp, config);

        assert!(!inspector.is_behat_configured().unwrap());
        write(&temp.path().join("tests/behat/local.yml"), "default: {}\n");
        assert!(inspector.is_behat_configured().unwrap());
    }

    #[test]
    fn phantomjs_short_circuits_when_not_required() {
        let (temp, config) = project();
        let inspector = inspector(FakeRunner::with_manifest(&[]), &temp, config);

        assert!(!inspector.is_phantomjs_configured().unwrap());
        assert_eq!(inspector.runner().searches(), vec![PHANTOMJS_PACKAGE]);
    }

    #[test]
    fn phantomjs_stops_at_missing_script() {
        let (temp, config) = project();
        let runner = FakeRunner::with_manifest(&[r#""jakoch/phantomjs-installer": "2.1.1-p08""#]);
        let inspector = inspector(runner, &temp, config);

        assert!(!inspector.is_phantomjs_configured().unwrap());
        assert_eq!(
            inspector.runner().searches(),
            vec![PHANTOMJS_PACKAGE, PHANTOMJS_SCRIPT]
        );
    }

    #[test]
    fn phantomjs_configured_when_all_present() {
        let (temp, config) = project();
        let runner = FakeRunner::with_manifest(&[
            r#""jakoch/phantomjs-installer": "2.1.1-p08""#,
            r#""PhantomInstaller\\Installer::installPhantomJS""#,
        ]);
        let inspector = inspector(runner, &temp, config);

        assert!(!inspector.is_phantomjs_configured().unwrap());
        write(&temp.path().join("vendor/bin/phantomjs"), "");
        assert!(inspector.is_phantomjs_configured().unwrap());
    }

    #[test]
    fn manifest_is_in_working_dir() {
        let (temp, config) = project();
        let inspector = inspector(FakeRunner::default(), &temp, config);
        assert_eq!(inspector.manifest_path(), temp.path().join("composer.json"));
    }

    #[test]
    fn command_exists_is_stateless() {
        assert!(Inspector::<FakeRunner, YamlConfigStore>::command_exists("sh"));
        assert!(!Inspector::<FakeRunner, YamlConfigStore>::command_exists(
            "definitely-not-a-real-binary-xyz"
        ));
    }

    #[test]
    fn check_dispatches_by_name() {
        let (temp, config) = project();
        fs::create_dir_all(temp.path().join("docroot")).unwrap();
        let mut inspector = inspector(FakeRunner::with_drush(vec![ok("config")]), &temp, config);

        assert!(inspector.check(Check::RepoRoot).unwrap());
        assert!(inspector.check(Check::Docroot).unwrap());
        assert!(!inspector.check(Check::SettingsFile).unwrap());
        assert!(inspector.check(Check::DrupalInstalled).unwrap());
        assert!(!inspector.check(Check::Behat).unwrap());
    }

    #[test]
    fn inspect_skips_dependent_checks() {
        let (temp, config) = project();
        let runner = FakeRunner {
            drush_missing: true,
            ..Default::default()
        };
        let mut inspector = inspector(runner, &temp, config);

        let report = inspector.inspect().unwrap();

        assert_eq!(report.checks.len(), Check::ALL.len());
        assert_eq!(
            report.get(Check::SettingsValid).map(|o| o.status),
            Some(CheckStatus::Skipped)
        );
        assert_eq!(
            report.get(Check::DrupalInstalled).map(|o| o.status),
            Some(CheckStatus::Skipped)
        );
        assert_eq!(
            report.get(Check::Phantomjs).map(|o| o.status),
            Some(CheckStatus::Skipped)
        );
        assert!(inspector.runner().drush_calls().is_empty());
        assert_eq!(report.tools.len(), REPORTED_TOOLS.len());
    }

    #[test]
    fn inspect_healthy_checkout() {
        let (temp, config) = project();
        write(
            &temp.path().join("docroot/sites/default/settings.php"),
            "require __DIR__ . '/../vendor/acquia/blt/settings/blt.settings.php';\n",
        );
        write(&temp.path().join("tests/behat/local.yml"), "");
        let mut inspector = inspector(FakeRunner::with_drush(vec![ok("config")]), &temp, config);

        let report = inspector.inspect().unwrap();

        assert!(report.all_passed(), "{:?}", report);
        assert_eq!(
            report.get(Check::DrupalInstalled).map(|o| o.status),
            Some(CheckStatus::Pass)
        );
    }

    #[test]
    fn inspect_reports_phantomjs_detail() {
        let (temp, config) = project();
        let runner = FakeRunner::with_manifest(&[r#""jakoch/phantomjs-installer": "*""#]);
        let mut inspector = inspector(runner, &temp, config);

        let report = inspector.inspect().unwrap();
        let outcome = report.get(Check::Phantomjs).unwrap();

        assert_eq!(outcome.status, CheckStatus::Fail);
        assert!(outcome.detail.as_deref().unwrap().contains(PHANTOMJS_SCRIPT));
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_settings_file_propagates() {
        use std::os::unix::fs::PermissionsExt;

        let (temp, config) = project();
        let settings = temp.path().join("docroot/sites/default/settings.php");
        write(&settings, "blt.settings.php");
        fs::set_permissions(&settings, fs::Permissions::from_mode(0o000)).unwrap();

        let inspector = inspector(FakeRunner::default(), &temp, config);
        let result = inspector.is_settings_file_valid();

        fs::set_permissions(&settings, fs::Permissions::from_mode(0o644)).unwrap();
        // Root can read anything, so only assert when the read was refused.
        if let Err(e) = result {
            assert!(matches!(e, InspectorError::Io(_)));
        }
    }
}
