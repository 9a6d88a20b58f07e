//! Data model for labelled vectors and their factor conversions.
//!
//! - **value**: non-missing values with a total order
//! - **labels**: value-label mappings and their serialized entry form
//! - **vector**: labelled vectors over numeric or text storage
//! - **factor**: categorical vectors with labelled levels
//! - **table**: named columns of equal length
//! - **options**: conversion and export configuration

pub mod error;
pub mod factor;
pub mod labels;
pub mod options;
pub mod table;
pub mod value;
pub mod vector;

pub use error::{ModelError, Result};
pub use factor::{Factor, Level};
pub use labels::{LabelEntry, ValueLabels};
pub use options::{ConversionOptions, ExportOptions, FactorRepr};
pub use table::{Column, Passthrough, Table};
pub use value::{Number, Value, ValueKind, format_numeric};
pub use vector::{LabelledVector, StorageType, VectorData};
