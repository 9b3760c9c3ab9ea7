//! Parsed `drush status --format=json` output.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::path::PathBuf;

/// The structured report printed by `drush status --format=json`.
///
/// Field names are drush's own (`drupal-version`, `db-status`, ...).
/// Fields vary between drush releases, so everything is kept and the
/// commonly used ones get typed accessors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrushStatus {
    fields: Map<String, JsonValue>,
}

impl DrushStatus {
    /// Parse drush output.
    ///
    /// Leading noise before the first `{` and trailing text after the
    /// object are ignored. Anything that isn't a JSON object is an error.
    pub fn parse(output: &str) -> Result<Self, serde_json::Error> {
        let start = output.find('{').unwrap_or(0);
        let mut stream =
            serde_json::Deserializer::from_str(&output[start..]).into_iter::<Map<String, JsonValue>>();

        match stream.next() {
            Some(fields) => Ok(Self { fields: fields? }),
            None => serde_json::from_str::<Map<String, JsonValue>>(output).map(|fields| Self { fields }),
        }
    }

    /// Rebuild from a value previously stored in configuration.
    pub fn from_yaml(value: &serde_yaml::Value) -> Option<Self> {
        serde_yaml::from_value::<Map<String, JsonValue>>(value.clone())
            .ok()
            .map(|fields| Self { fields })
    }

    /// Convert for storage in configuration.
    pub fn to_yaml(&self) -> serde_yaml::Value {
        serde_yaml::to_value(&self.fields).unwrap_or(serde_yaml::Value::Null)
    }

    /// Raw field lookup.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.fields.get(key)
    }

    /// String field lookup.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(JsonValue::as_str)
    }

    /// All fields.
    pub fn fields(&self) -> &Map<String, JsonValue> {
        &self.fields
    }

    /// Whether drush reported no fields at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Drupal core version.
    pub fn drupal_version(&self) -> Option<&str> {
        self.get_str("drupal-version")
    }

    /// Drush version.
    pub fn drush_version(&self) -> Option<&str> {
        self.get_str("drush-version")
    }

    /// Site URI.
    pub fn uri(&self) -> Option<&str> {
        self.get_str("uri")
    }

    /// Drupal root as drush sees it.
    pub fn root(&self) -> Option<PathBuf> {
        self.get_str("root").map(PathBuf::from)
    }

    /// Whether drush bootstrapped the site fully.
    pub fn bootstrap_successful(&self) -> bool {
        self.get_str("bootstrap")
            .is_some_and(|b| b.eq_ignore_ascii_case("successful"))
    }

    /// Whether drush could connect to the database.
    pub fn db_connected(&self) -> bool {
        self.get_str("db-status")
            .is_some_and(|s| s.eq_ignore_ascii_case("connected"))
    }
}
