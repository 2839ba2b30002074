//! Menu configuration.
//!
//! The menu collaborator receives a key/value configuration. Callers supply
//! overrides; the component merges them over fixed defaults
//! (`attached = true`, `tabular = true`) with caller keys winning. Keys the
//! component does not interpret pass through untouched.
//!
//! # Example
//!
//! ```
//! use tabkit_core::MenuConfig;
//! use serde_json::json;
//!
//! let overrides = MenuConfig::from_value(json!({ "data-foo": "bar" })).unwrap();
//! let merged = MenuConfig::merged(&overrides);
//!
//! assert!(merged.attached());
//! assert!(merged.tabular());
//! assert_eq!(merged.get("data-foo"), Some(&json!("bar")));
//! ```

use crate::error::{TabError, TabResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key of the `attached` flag.
pub const ATTACHED: &str = "attached";
/// Key of the `tabular` flag.
pub const TABULAR: &str = "tabular";
/// Key of the `vertical` flag.
pub const VERTICAL: &str = "vertical";
/// Key of the `inverted` flag.
pub const INVERTED: &str = "inverted";

/// Key/value configuration handed to the menu renderer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuConfig(Map<String, Value>);

impl MenuConfig {
    /// Creates an empty configuration (no overrides).
    #[must_use]
    pub fn new() -> Self {
        MenuConfig(Map::new())
    }

    /// The fixed defaults: `{ attached: true, tabular: true }`.
    #[must_use]
    pub fn defaults() -> Self {
        MenuConfig::new().with(ATTACHED, true).with(TABULAR, true)
    }

    /// Merges `overrides` over [`MenuConfig::defaults`].
    #[must_use]
    pub fn merged(overrides: &MenuConfig) -> Self {
        MenuConfig::defaults().merge(overrides)
    }

    /// Builds a configuration from a JSON value.
    ///
    /// `null` is treated as no overrides.
    ///
    /// # Errors
    ///
    /// Returns [`TabError::InvalidMenuConfig`] for anything that is not an
    /// object or `null`.
    pub fn from_value(value: Value) -> TabResult<Self> {
        match value {
            Value::Object(map) => Ok(MenuConfig(map)),
            Value::Null => Ok(MenuConfig::new()),
            other => Err(TabError::InvalidMenuConfig(format!(
                "expected an object, got {}",
                value_kind(&other)
            ))),
        }
    }

    /// Sets `key`, replacing any previous value.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Returns `self` with every key of `overrides` written over it.
    #[must_use]
    pub fn merge(mut self, overrides: &MenuConfig) -> Self {
        for (key, value) in &overrides.0 {
            self.0.insert(key.clone(), value.clone());
        }
        self
    }

    /// Raw value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Interprets `key` as a flag.
    ///
    /// Booleans are taken as is; non-empty strings (for example
    /// `attached = "bottom"`) count as set; everything else is unset.
    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        match self.0.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => !s.is_empty(),
            _ => false,
        }
    }

    /// Whether the pane is joined to the menu.
    #[must_use]
    pub fn attached(&self) -> bool {
        self.flag(ATTACHED)
    }

    /// Whether the menu is drawn as a tab strip.
    #[must_use]
    pub fn tabular(&self) -> bool {
        self.flag(TABULAR)
    }

    /// Whether the menu is laid out vertically beside the pane.
    #[must_use]
    pub fn vertical(&self) -> bool {
        self.flag(VERTICAL)
    }

    /// Whether the active item uses inverted colors.
    #[must_use]
    pub fn inverted(&self) -> bool {
        self.flag(INVERTED)
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over all keys and values.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Converts back to a JSON value.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
