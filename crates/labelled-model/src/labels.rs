//! Value-label mappings.
//!
//! Internally a mapping goes from value to label. Serialized mappings use the
//! inverted entry list common to labelled-data interchange, where each entry
//! names its label first and carries the value alongside it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::value::{Value, ValueKind};

/// One serialized value label: the label text with its value attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelEntry {
    pub label: String,
    pub value: Value,
}

/// Mapping from data values to their display labels.
///
/// Keys need not cover every value of a vector, and a label may repeat
/// across values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<LabelEntry>", into = "Vec<LabelEntry>")]
pub struct ValueLabels {
    map: BTreeMap<Value, String>,
}

impl ValueLabels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a mapping with numeric keys.
    ///
    /// Fails with [`crate::ModelError::InvalidNumber`] when a key is NaN.
    pub fn numeric<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, S)>,
        S: Into<String>,
    {
        let mut labels = Self::new();
        for (value, label) in pairs {
            labels.insert(Value::try_from(value)?, label);
        }
        Ok(labels)
    }

    /// Builds a mapping with text keys.
    pub fn text<I, K, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, S)>,
        K: Into<String>,
        S: Into<String>,
    {
        pairs
            .into_iter()
            .map(|(value, label)| (Value::Text(value.into()), label.into()))
            .collect()
    }

    /// Sets the label for `value`, returning the label it replaced.
    pub fn insert(&mut self, value: Value, label: impl Into<String>) -> Option<String> {
        self.map.insert(value, label.into())
    }

    pub fn get(&self, value: &Value) -> Option<&str> {
        self.map.get(value).map(String::as_str)
    }

    pub fn remove(&mut self, value: &Value) -> Option<String> {
        self.map.remove(value)
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.map.contains_key(value)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Pairs in value order.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &str)> {
        self.map.iter().map(|(value, label)| (value, label.as_str()))
    }

    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&Value, &str) -> bool,
    {
        self.map.retain(|value, label| keep(value, label));
    }

    /// Number of keys whose type differs from `kind`.
    pub fn count_mismatched(&self, kind: ValueKind) -> usize {
        self.map.keys().filter(|value| value.kind() != kind).count()
    }

    /// Inverted storage form, in value order.
    pub fn to_entries(&self) -> Vec<LabelEntry> {
        self.map
            .iter()
            .map(|(value, label)| LabelEntry {
                label: label.clone(),
                value: value.clone(),
            })
            .collect()
    }

    /// Reads the inverted storage form. A value listed twice keeps its last label.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = LabelEntry>,
    {
        entries
            .into_iter()
            .map(|entry| (entry.value, entry.label))
            .collect()
    }
}

impl FromIterator<(Value, String)> for ValueLabels {
    fn from_iter<T: IntoIterator<Item = (Value, String)>>(iter: T) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

impl Extend<(Value, String)> for ValueLabels {
    fn extend<T: IntoIterator<Item = (Value, String)>>(&mut self, iter: T) {
        self.map.extend(iter);
    }
}

impl From<Vec<LabelEntry>> for ValueLabels {
    fn from(entries: Vec<LabelEntry>) -> Self {
        Self::from_entries(entries)
    }
}

impl From<ValueLabels> for Vec<LabelEntry> {
    fn from(labels: ValueLabels) -> Self {
        labels.to_entries()
    }
}
