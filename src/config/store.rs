//! Dotted-key configuration store.
//!
//! Configuration is a single YAML value tree. Keys address nested
//! mappings with dots: `drupal.settings_file` is
//! `root["drupal"]["settings_file"]`.

use serde_yaml::{Mapping, Value};
use std::path::PathBuf;

/// A key-value view over project configuration.
///
/// Values set during a run live in memory for the rest of the process;
/// nothing is written back to disk.
pub trait ConfigStore {
    /// Look up the value at a dotted key.
    fn get(&self, key: &str) -> Option<&Value>;

    /// Set the value at a dotted key, creating intermediate mappings.
    fn set(&mut self, key: &str, value: Value);

    /// Remove the value at a dotted key, returning it.
    fn remove(&mut self, key: &str) -> Option<Value>;

    /// Whether a non-null value is present at `key`.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !v.is_null())
    }

    /// Scalar value at `key` rendered as a string.
    fn get_string(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Non-empty string value at `key` as a path.
    fn get_path(&self, key: &str) -> Option<PathBuf> {
        self.get_string(key)
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
    }

    /// Boolean value at `key`.
    ///
    /// Accepts YAML booleans and the strings `true`/`false`/`1`/`0`/`yes`/`no`.
    fn get_bool(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            Value::Bool(b) => Some(*b),
            Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Some(true),
                "false" | "0" | "no" | "off" | "" => Some(false),
                _ => None,
            },
            Value::Number(n) => n.as_i64().map(|i| i != 0),
            _ => None,
        }
    }

    /// Whether the value at `key` is present and truthy.
    fn is_truthy(&self, key: &str) -> bool {
        self.get(key).is_some_and(is_truthy)
    }
}

/// Truthiness of a configuration value.
///
/// Null, `false`, zero, empty strings, `"0"` and empty collections are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Sequence(seq) => !seq.is_empty(),
        Value::Mapping(map) => !map.is_empty(),
        Value::Tagged(tagged) => is_truthy(&tagged.value),
    }
}

/// [`ConfigStore`] backed by an in-memory YAML tree.
#[derive(Debug, Clone, PartialEq)]
pub struct YamlConfigStore {
    root: Value,
}

impl Default for YamlConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl YamlConfigStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            root: Value::Mapping(Mapping::new()),
        }
    }

    /// Wrap an existing value tree. Non-mapping roots are replaced.
    pub fn from_value(root: Value) -> Self {
        match root {
            Value::Mapping(_) => Self { root },
            _ => Self::new(),
        }
    }

    /// The whole configuration tree.
    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Consume the store, returning the tree.
    pub fn into_value(self) -> Value {
        self.root
    }
}

impl ConfigStore for YamlConfigStore {
    fn get(&self, key: &str) -> Option<&Value> {
        key.split('.').try_fold(&self.root, |node, part| match node {
            Value::Mapping(map) => map.get(part),
            _ => None,
        })
    }

    fn set(&mut self, key: &str, value: Value) {
        let parts: Vec<&str> = key.split('.').collect();
        let Some((last, parents)) = parts.split_last() else {
            return;
        };

        let mut node = &mut self.root;
        for part in parents {
            if !node.is_mapping() {
                *node = Value::Mapping(Mapping::new());
            }
            let Some(map) = node.as_mapping_mut() else {
                return;
            };
            node = map
                .entry(Value::String(part.to_string()))
                .or_insert_with(|| Value::Mapping(Mapping::new()));
        }

        if !node.is_mapping() {
            *node = Value::Mapping(Mapping::new());
        }
        if let Some(map) = node.as_mapping_mut() {
            map.insert(Value::String(last.to_string()), value);
        }
    }

    fn remove(&mut self, key: &str) -> Option<Value> {
        let (parent, last) = match key.rsplit_once('.') {
            Some((parent, last)) => (Some(parent), last),
            None => (None, key),
        };

        let mut node = &mut self.root;
        if let Some(parent) = parent {
            for part in parent.split('.') {
                node = match node {
                    Value::Mapping(map) => map.get_mut(part)?,
                    _ => return None,
                };
            }
        }

        match node {
            Value::Mapping(map) => map.remove(last),
            _ => None,
        }
    }
}
