use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ChartError, ChartResult};

/// Declarative option tree handed to the charting backend.
///
/// Top-level keys keep insertion order so two composes of the same input
/// serialize byte-for-byte identically.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionTree(IndexMap<String, Value>);

impl OptionTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` under `key`, replacing any previous value in place.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    /// Inserts `value` only when present.
    pub fn set_opt(&mut self, key: impl Into<String>, value: Option<Value>) {
        if let Some(value) = value {
            self.set(key, value);
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `series` array, empty when absent.
    #[must_use]
    pub fn series(&self) -> &[Value] {
        self.get("series")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Spreads `overrides` over the tree at top level: every key present in
    /// `overrides` replaces the computed value wholesale.
    pub fn apply_overrides(&mut self, overrides: &Map<String, Value>) {
        for (key, value) in overrides {
            self.set(key.clone(), value.clone());
        }
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0.into_iter().collect())
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::Serialization(format!("failed to serialize option tree: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::Serialization(format!("failed to parse option tree: {e}")))
    }
}
