//! Error types for factor conversion.

use labelled_model::ModelError;
use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors raised while resolving column selectors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectorError {
    /// A named column, or a range endpoint, is not in the table.
    #[error("no column named '{name}'")]
    UnknownColumn { name: String },

    /// Selector text could not be parsed.
    #[error("malformed selector '{input}': {reason}")]
    Malformed { input: String, reason: &'static str },
}

/// Errors raised by factor conversion and the polars boundary.
#[derive(Debug, Error)]
pub enum FactorError {
    #[error(transparent)]
    Selector(#[from] SelectorError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),

    /// A selected table column holds a host type that cannot become a factor.
    #[error("column {column} has unsupported dtype {dtype}")]
    UnsupportedDtype { column: String, dtype: String },

    /// A single passthrough column was given for conversion.
    #[error("cannot convert a column of dtype {dtype} to a factor")]
    NotConvertible { dtype: String },

    /// Selectors were passed together with a single column.
    #[error("column selectors only apply to tables")]
    SelectorsOnColumn,
}

/// Result type alias for factor operations.
pub type Result<T> = std::result::Result<T, FactorError>;
