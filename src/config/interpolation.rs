//! `${key}` placeholder expansion.
//!
//! BLT configuration refers to other configuration values by dotted key:
//!
//! ```yaml
//! docroot: ${repo.root}/docroot
//! drupal:
//!   settings_file: ${docroot}/sites/default/settings.php
//! ```
//!
//! Placeholders are expanded after all layers are merged, so a project
//! that overrides `repo.root` moves every derived path with it.
//! Placeholders naming a missing or non-scalar key are left untouched.

use regex::{Captures, Regex};
use serde_yaml::Value;
use std::sync::OnceLock;

use super::store::{ConfigStore, YamlConfigStore};

/// Expansion passes before giving up on chained or cyclic references.
const MAX_PASSES: usize = 10;

fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\$\{([A-Za-z0-9_.\-]+)\}").expect("placeholder regex is valid"))
}

/// Whether a string contains any `${key}` placeholder.
pub fn has_placeholders(input: &str) -> bool {
    placeholder().is_match(input)
}

/// Expand placeholders in `input` against `config`, one level deep.
pub fn expand_str<C: ConfigStore + ?Sized>(input: &str, config: &C) -> String {
    placeholder()
        .replace_all(input, |caps: &Captures| {
            config
                .get_string(&caps[1])
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Expand every placeholder in the tree until nothing changes.
pub fn expand_all(root: Value) -> Value {
    let mut current = root;
    for _ in 0..MAX_PASSES {
        let snapshot = YamlConfigStore::from_value(current.clone());
        let mut changed = false;
        expand_value(&mut current, &snapshot, &mut changed);
        if !changed {
            break;
        }
    }
    current
}

fn expand_value(value: &mut Value, config: &YamlConfigStore, changed: &mut bool) {
    match value {
        Value::String(s) if has_placeholders(s) => {
            let expanded = expand_str(s, config);
            if expanded != *s {
                *s = expanded;
                *changed = true;
            }
        }
        Value::Sequence(seq) => {
            for item in seq {
                expand_value(item, config, changed);
            }
        }
        Value::Mapping(map) => {
            for (_, item) in map.iter_mut() {
                expand_value(item, config, changed);
            }
        }
        Value::Tagged(tagged) => expand_value(&mut tagged.value, config, changed),
        _ => {}
    }
}
