//! Labelled vectors: raw data plus value-label and variable-label metadata.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::labels::ValueLabels;
use crate::value::{Number, Value, ValueKind};

/// Homogeneous column storage.
///
/// `None` marks a missing row. Float storage also treats `NaN` as missing.
/// Integer storage keeps every value exactly; as a factor level an integer
/// is compared through its `f64` form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "values", rename_all = "snake_case")]
pub enum VectorData {
    Integer(Vec<Option<i64>>),
    Numeric(Vec<Option<f64>>),
    Text(Vec<Option<String>>),
}

impl Default for VectorData {
    fn default() -> Self {
        Self::Numeric(Vec::new())
    }
}

// Bitwise on floats so a copied vector always equals its source, NaN included.
impl PartialEq for VectorData {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Numeric(a), Self::Numeric(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .zip(b)
                        .all(|(x, y)| x.map(f64::to_bits) == y.map(f64::to_bits))
            }
            (Self::Text(a), Self::Text(b)) => a == b,
            _ => false,
        }
    }
}

/// Physical type a vector was read from, kept so it can be written back as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageType {
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    Float32,
    Float64,
    Text,
}

impl VectorData {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Integer(_) | Self::Numeric(_) => ValueKind::Numeric,
            Self::Text(_) => ValueKind::Text,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Integer(values) => values.len(),
            Self::Numeric(values) => values.len(),
            Self::Text(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at `idx`, `None` when the row is missing or out of range.
    pub fn value_at(&self, idx: usize) -> Option<Value> {
        match self {
            Self::Integer(values) => values
                .get(idx)
                .copied()
                .flatten()
                .and_then(|v| Number::new(v as f64))
                .map(Value::Number),
            Self::Numeric(values) => values
                .get(idx)
                .copied()
                .flatten()
                .and_then(Number::new)
                .map(Value::Number),
            Self::Text(values) => values
                .get(idx)
                .and_then(Option::as_ref)
                .map(|s| Value::Text(s.clone())),
        }
    }

    /// Per-row values with missing markers as `None`.
    pub fn values(&self) -> Vec<Option<Value>> {
        (0..self.len()).map(|idx| self.value_at(idx)).collect()
    }

    /// Distinct non-missing values in natural sort order.
    pub fn distinct_values(&self) -> Vec<Value> {
        let set: BTreeSet<Value> = match self {
            Self::Integer(values) => values
                .iter()
                .filter_map(|v| v.and_then(|v| Number::new(v as f64)))
                .map(Value::Number)
                .collect(),
            Self::Numeric(values) => values
                .iter()
                .filter_map(|v| v.and_then(Number::new))
                .map(Value::Number)
                .collect(),
            Self::Text(values) => values.iter().flatten().cloned().map(Value::Text).collect(),
        };
        set.into_iter().collect()
    }

    pub fn missing_count(&self) -> usize {
        match self {
            Self::Integer(values) => values.iter().filter(|v| v.is_none()).count(),
            Self::Numeric(values) => values
                .iter()
                .filter(|v| v.is_none_or(f64::is_nan))
                .count(),
            Self::Text(values) => values.iter().filter(|v| v.is_none()).count(),
        }
    }
}

/// A data column carrying value labels and an optional variable label.
///
/// A plain vector is simply one with no labels attached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelledVector {
    data: VectorData,
    #[serde(default)]
    value_labels: ValueLabels,
    #[serde(default)]
    variable_label: Option<String>,
    #[serde(default)]
    storage_type: Option<StorageType>,
}

impl LabelledVector {
    pub fn new(data: VectorData) -> Self {
        Self {
            data,
            value_labels: ValueLabels::new(),
            variable_label: None,
            storage_type: None,
        }
    }

    pub fn integer(values: Vec<Option<i64>>) -> Self {
        Self::new(VectorData::Integer(values))
    }

    pub fn numeric(values: Vec<Option<f64>>) -> Self {
        Self::new(VectorData::Numeric(values))
    }

    pub fn text<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self::new(VectorData::Text(
            values.into_iter().map(|v| v.map(Into::into)).collect(),
        ))
    }

    pub fn with_value_labels(mut self, labels: ValueLabels) -> Self {
        self.value_labels = labels;
        self
    }

    pub fn with_variable_label(mut self, label: impl Into<String>) -> Self {
        self.variable_label = Some(label.into());
        self
    }

    /// Records the physical type the data was read from.
    pub fn with_storage_type(mut self, storage_type: StorageType) -> Self {
        self.storage_type = Some(storage_type);
        self
    }

    pub fn storage_type(&self) -> Option<StorageType> {
        self.storage_type
    }

    pub fn data(&self) -> &VectorData {
        &self.data
    }

    pub fn into_data(self) -> VectorData {
        self.data
    }

    pub fn kind(&self) -> ValueKind {
        self.data.kind()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Explicitly attached value labels.
    pub fn value_labels(&self) -> &ValueLabels {
        &self.value_labels
    }

    pub fn set_value_labels(&mut self, labels: ValueLabels) {
        self.value_labels = labels;
    }

    pub fn variable_label(&self) -> Option<&str> {
        self.variable_label.as_deref()
    }

    pub fn set_variable_label(&mut self, label: Option<String>) {
        self.variable_label = label;
    }

    /// Removes value labels whose value does not occur in the data.
    ///
    /// Keys of the other storage type never occur and are removed too.
    /// Returns the number of labels removed.
    pub fn drop_unused_labels(&mut self) -> usize {
        let present: BTreeSet<Value> = self.data.distinct_values().into_iter().collect();
        let before = self.value_labels.len();
        self.value_labels.retain(|value, _| present.contains(value));
        before - self.value_labels.len()
    }
}
