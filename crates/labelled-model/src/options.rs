//! Configuration options for factor conversion and export.

use serde::{Deserialize, Serialize};

/// Options for converting labelled vectors to factors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionOptions {
    /// Give unlabelled values a label equal to their own string form,
    /// so every level of the result is labelled.
    /// Default: false.
    pub add_non_labelled: bool,
}

impl ConversionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_add_non_labelled(mut self, enable: bool) -> Self {
        self.add_non_labelled = enable;
        self
    }
}

/// How factor columns are rendered when a table leaves the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FactorRepr {
    /// Level display labels (falling back to the value for unlabelled levels).
    #[default]
    Label,
    /// Level values' string forms, ignoring labels.
    Value,
}

/// Options for exporting tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    pub factor_repr: FactorRepr,
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_factor_repr(mut self, repr: FactorRepr) -> Self {
        self.factor_repr = repr;
        self
    }
}
