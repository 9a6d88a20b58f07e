#![deny(unsafe_code)]

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::factor::Factor;
use crate::vector::LabelledVector;

/// A host column the model cannot represent, carried through untouched.
///
/// The payload is shared, so clones compare equal to their source.
#[derive(Clone)]
pub struct Passthrough {
    payload: Arc<dyn Any + Send + Sync>,
    dtype: String,
    len: usize,
    categorical: bool,
}

impl Passthrough {
    pub fn new<T>(payload: T, dtype: impl Into<String>, len: usize) -> Self
    where
        T: Any + Send + Sync,
    {
        Self {
            payload: Arc::new(payload),
            dtype: dtype.into(),
            len,
            categorical: false,
        }
    }

    /// Marks the host column as already categorical.
    pub fn with_categorical(mut self, categorical: bool) -> Self {
        self.categorical = categorical;
        self
    }

    pub fn dtype(&self) -> &str {
        &self.dtype
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_categorical(&self) -> bool {
        self.categorical
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.payload).downcast_ref::<T>()
    }
}

impl PartialEq for Passthrough {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.payload, &other.payload)
            && self.dtype == other.dtype
            && self.len == other.len
            && self.categorical == other.categorical
    }
}

impl fmt::Debug for Passthrough {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Passthrough")
            .field("dtype", &self.dtype)
            .field("len", &self.len)
            .field("categorical", &self.categorical)
            .finish_non_exhaustive()
    }
}

/// A single column: a labelled vector, one already converted to a factor,
/// or a host column passed through as is.
///
/// Passthrough columns cannot be serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Column {
    Labelled(LabelledVector),
    Factor(Factor),
    #[serde(skip)]
    Passthrough(Passthrough),
}

impl Default for Column {
    fn default() -> Self {
        Self::Labelled(LabelledVector::default())
    }
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Self::Labelled(vector) => vector.len(),
            Self::Factor(factor) => factor.len(),
            Self::Passthrough(column) => column.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_factor(&self) -> bool {
        matches!(self, Self::Factor(_))
    }

    pub fn variable_label(&self) -> Option<&str> {
        match self {
            Self::Labelled(vector) => vector.variable_label(),
            Self::Factor(factor) => factor.variable_label(),
            Self::Passthrough(_) => None,
        }
    }

    pub fn as_labelled(&self) -> Option<&LabelledVector> {
        match self {
            Self::Labelled(vector) => Some(vector),
            Self::Factor(_) | Self::Passthrough(_) => None,
        }
    }

    pub fn as_factor(&self) -> Option<&Factor> {
        match self {
            Self::Factor(factor) => Some(factor),
            Self::Labelled(_) | Self::Passthrough(_) => None,
        }
    }
}

impl From<LabelledVector> for Column {
    fn from(vector: LabelledVector) -> Self {
        Self::Labelled(vector)
    }
}

impl From<Factor> for Column {
    fn from(factor: Factor) -> Self {
        Self::Factor(factor)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct NamedColumn {
    name: String,
    column: Column,
}

/// Ordered, uniquely named columns of equal length.
///
/// Deserialization goes through the same checks as [`Table::push_column`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct Table {
    columns: Vec<NamedColumn>,
    #[serde(default)]
    row_names: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct RawTable {
    columns: Vec<NamedColumn>,
    #[serde(default)]
    row_names: Option<Vec<String>>,
}

impl TryFrom<RawTable> for Table {
    type Error = ModelError;

    fn try_from(raw: RawTable) -> Result<Self> {
        let table = Self::from_columns(
            raw.columns
                .into_iter()
                .map(|named| (named.name, named.column)),
        )?;
        match raw.row_names {
            Some(names) => table.with_row_names(names),
            None => Ok(table),
        }
    }
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_columns<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Column)>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (name, column) in columns {
            table.push_column(name, column)?;
        }
        Ok(table)
    }

    /// Appends a column. Names are trimmed and must be unique and non-blank.
    pub fn push_column(&mut self, name: impl Into<String>, column: Column) -> Result<()> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidColumnName { name });
        }
        if self.position(trimmed).is_some() {
            return Err(ModelError::DuplicateColumn {
                name: trimmed.to_string(),
            });
        }
        let expected = self.height();
        if !self.columns.is_empty() && column.len() != expected {
            return Err(ModelError::LengthMismatch {
                column: trimmed.to_string(),
                expected,
                actual: column.len(),
            });
        }
        if let Some(row_names) = &self.row_names
            && row_names.len() != column.len()
        {
            return Err(ModelError::RowNamesMismatch {
                expected: column.len(),
                actual: row_names.len(),
            });
        }
        self.columns.push(NamedColumn {
            name: trimmed.to_string(),
            column,
        });
        Ok(())
    }

    pub fn with_row_names<I, S>(mut self, names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if !self.columns.is_empty() && names.len() != self.height() {
            return Err(ModelError::RowNamesMismatch {
                expected: self.height(),
                actual: names.len(),
            });
        }
        self.row_names = Some(names);
        Ok(self)
    }

    pub fn row_names(&self) -> Option<&[String]> {
        self.row_names.as_deref()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.columns
            .first()
            .map(|named| named.column.len())
            .or_else(|| self.row_names.as_ref().map(Vec::len))
            .unwrap_or(0)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|named| named.name.as_str())
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.columns
            .iter()
            .map(|named| (named.name.as_str(), &named.column))
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|named| named.name == name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|named| named.name == name)
            .map(|named| &named.column)
    }

    /// Rebinds `name` to the column produced by `f`, if any.
    ///
    /// `f` returning `None` leaves the column as it is. A replacement must
    /// keep the row count.
    pub fn update_column<F>(&mut self, name: &str, f: F) -> Result<bool>
    where
        F: FnOnce(&Column) -> Option<Column>,
    {
        let expected = self.height();
        let idx = self
            .position(name)
            .ok_or_else(|| ModelError::UnknownColumn {
                name: name.to_string(),
            })?;
        let Some(updated) = f(&self.columns[idx].column) else {
            return Ok(false);
        };
        if updated.len() != expected {
            return Err(ModelError::LengthMismatch {
                column: name.to_string(),
                expected,
                actual: updated.len(),
            });
        }
        self.columns[idx].column = updated;
        Ok(true)
    }
}
