use thiserror::Error;

/// Errors raised while building or editing the labelled data model.
#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    /// Column names must not be blank.
    #[error("column name must not be empty")]
    InvalidColumnName { name: String },

    /// Column names must be unique within a table.
    #[error("duplicate column name: {name}")]
    DuplicateColumn { name: String },

    /// Column does not exist in the table.
    #[error("unknown column: {name}")]
    UnknownColumn { name: String },

    /// All columns of a table share one row count.
    #[error("column {column} has {actual} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// Row identifiers must cover every row.
    #[error("row names cover {actual} rows, table has {expected}")]
    RowNamesMismatch { expected: usize, actual: usize },

    /// NaN is the missing marker and cannot be used as a value.
    #[error("NaN cannot be used as a labelled value")]
    InvalidNumber,

    /// Factor levels must be distinct.
    #[error("duplicate factor level: {level}")]
    DuplicateLevel { level: String },

    /// Factor codes must index an existing level.
    #[error("factor code {code} at row {row} is out of range for {levels} levels")]
    CodeOutOfRange { row: usize, code: u32, levels: usize },
}

pub type Result<T> = std::result::Result<T, ModelError>;
