//! Categorical vectors.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::value::Value;

/// One admissible value of a factor, with its optional display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub value: Value,
    #[serde(default)]
    pub label: Option<String>,
}

impl Level {
    pub fn new(value: Value) -> Self {
        Self { value, label: None }
    }

    pub fn labelled(value: Value, label: impl Into<String>) -> Self {
        Self {
            value,
            label: Some(label.into()),
        }
    }

    /// The label when present, otherwise the value's string form.
    pub fn display(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| self.value.to_string())
    }
}

/// A vector restricted to an ordered set of levels.
///
/// Each row stores the index of its level, or `None` when missing.
/// Deserialization goes through the same checks as [`Factor::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFactor")]
pub struct Factor {
    levels: Vec<Level>,
    codes: Vec<Option<u32>>,
    #[serde(default)]
    variable_label: Option<String>,
}

#[derive(Deserialize)]
struct RawFactor {
    levels: Vec<Level>,
    codes: Vec<Option<u32>>,
    #[serde(default)]
    variable_label: Option<String>,
}

impl TryFrom<RawFactor> for Factor {
    type Error = ModelError;

    fn try_from(raw: RawFactor) -> Result<Self> {
        let mut factor = Self::new(raw.levels, raw.codes)?;
        factor.variable_label = raw.variable_label;
        Ok(factor)
    }
}

impl Factor {
    /// Builds a factor, checking that levels are distinct and codes in range.
    pub fn new(levels: Vec<Level>, codes: Vec<Option<u32>>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for level in &levels {
            if !seen.insert(&level.value) {
                return Err(ModelError::DuplicateLevel {
                    level: level.value.to_string(),
                });
            }
        }
        for (row, code) in codes.iter().enumerate() {
            if let Some(code) = *code
                && code as usize >= levels.len()
            {
                return Err(ModelError::CodeOutOfRange {
                    row,
                    code,
                    levels: levels.len(),
                });
            }
        }
        Ok(Self {
            levels,
            codes,
            variable_label: None,
        })
    }

    /// Builds an unlabelled factor whose levels are the distinct values in
    /// natural sort order. `None` rows stay missing.
    pub fn from_values(values: &[Option<Value>]) -> Self {
        let sorted: Vec<Value> = values
            .iter()
            .flatten()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let codes = values
            .iter()
            .map(|value| {
                value
                    .as_ref()
                    .and_then(|v| sorted.binary_search(v).ok())
                    .map(|idx| idx as u32)
            })
            .collect();
        Self {
            levels: sorted.into_iter().map(Level::new).collect(),
            codes,
            variable_label: None,
        }
    }

    /// Builds an unlabelled factor from text rows, levels in first-seen order.
    pub fn from_text<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        let mut levels: Vec<Level> = Vec::new();
        let mut codes = Vec::new();
        for value in values {
            let code = value.map(|raw| {
                let value = Value::Text(raw.into());
                match levels.iter().position(|level| level.value == value) {
                    Some(idx) => idx as u32,
                    None => {
                        levels.push(Level::new(value));
                        (levels.len() - 1) as u32
                    }
                }
            });
            codes.push(code);
        }
        Self {
            levels,
            codes,
            variable_label: None,
        }
    }

    pub fn with_variable_label(mut self, label: impl Into<String>) -> Self {
        self.variable_label = Some(label.into());
        self
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn codes(&self) -> &[Option<u32>] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn variable_label(&self) -> Option<&str> {
        self.variable_label.as_deref()
    }

    pub fn set_variable_label(&mut self, label: Option<String>) {
        self.variable_label = label;
    }

    /// Sets each level's label from `label_for`; `None` clears it.
    pub fn label_levels<F>(&mut self, mut label_for: F)
    where
        F: FnMut(&Value) -> Option<String>,
    {
        for level in &mut self.levels {
            level.label = label_for(&level.value);
        }
    }

    /// Number of levels carrying a label.
    pub fn labelled_level_count(&self) -> usize {
        self.levels.iter().filter(|level| level.label.is_some()).count()
    }

    /// Level at row `idx`; `None` for missing rows.
    pub fn level_at(&self, idx: usize) -> Option<&Level> {
        let code = (*self.codes.get(idx)?)?;
        self.levels.get(code as usize)
    }

    /// Display form of every level, in level order.
    pub fn level_labels(&self) -> Vec<String> {
        self.levels.iter().map(Level::display).collect()
    }

    /// Display form of every row.
    pub fn display_values(&self) -> Vec<Option<String>> {
        (0..self.len())
            .map(|idx| self.level_at(idx).map(Level::display))
            .collect()
    }
}
