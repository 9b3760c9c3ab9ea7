//! Per-run memoization of expensive checks.

use crate::config::{keys, ConfigStore};

use super::drush::DrushStatus;

/// Values reused across checks within a process.
///
/// Configuration is the source of truth: [`InspectorCache::sync_from`]
/// reloads both slots from the `state.*` keys. Only a positive install
/// answer is reused; a negative one is checked again on the next call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InspectorCache {
    drupal_installed: Option<bool>,
    drush_status: Option<DrushStatus>,
}

impl InspectorCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from state already present in configuration.
    ///
    /// Only a truthy `state.drupal.installed` counts as known; a falsy
    /// value is treated as unset and re-checked.
    pub fn seeded_from<C: ConfigStore + ?Sized>(config: &C) -> Self {
        let mut cache = Self::new();
        cache.sync_from(config);
        cache
    }

    /// Reload both slots from configuration.
    ///
    /// A truthy `state.drupal.installed` marks the site installed, anything
    /// else clears the slot. `state.drush.status` is kept only when it holds
    /// a mapping.
    pub fn sync_from<C: ConfigStore + ?Sized>(&mut self, config: &C) {
        self.drupal_installed = config
            .is_truthy(keys::STATE_DRUPAL_INSTALLED)
            .then_some(true);

        self.drush_status = config
            .get(keys::STATE_DRUSH_STATUS)
            .filter(|v| crate::config::is_truthy(v))
            .and_then(DrushStatus::from_yaml);
    }

    /// Cached install state, if known.
    pub fn drupal_installed(&self) -> Option<bool> {
        self.drupal_installed
    }

    /// Return `true` if the site is known to be installed, otherwise run
    /// `check` and store its answer.
    pub fn drupal_installed_or_check_with(&mut self, check: impl FnOnce() -> bool) -> bool {
        if self.drupal_installed == Some(true) {
            return true;
        }
        let installed = check();
        self.drupal_installed = Some(installed);
        installed
    }

    /// Forget the install state.
    pub fn invalidate_drupal_installed(&mut self) {
        self.drupal_installed = None;
    }

    /// Cached drush status, if known.
    pub fn drush_status(&self) -> Option<&DrushStatus> {
        self.drush_status.as_ref()
    }

    /// Store a drush status.
    pub fn set_drush_status(&mut self, status: DrushStatus) {
        self.drush_status = Some(status);
    }

    /// Forget the drush status.
    pub fn invalidate_drush_status(&mut self) {
        self.drush_status = None;
    }
}
