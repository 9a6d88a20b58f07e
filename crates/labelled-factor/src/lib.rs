//! Label-preserving factor conversion.
//!
//! Converts labelled vectors, alone or as columns of a table, into factors
//! whose levels keep the value labels and whose variable label is carried
//! over unchanged.
//!
//! - **extract**: value-label lookup, optionally completed from the data
//! - **convert**: the single-vector conversion
//! - **select**: column selectors and their resolution
//! - **dispatch**: column/table entry points
//! - **frame**: polars DataFrame boundary
//!
//! # Example
//!
//! ```
//! use labelled_factor::to_factor;
//! use labelled_model::{Column, ConversionOptions, LabelledVector, ValueLabels};
//!
//! let labels = ValueLabels::numeric([(1.0, "independent"), (4.0, "severe dependency")]).unwrap();
//! let vector = LabelledVector::numeric(vec![Some(1.0), Some(4.0), Some(2.0)])
//!     .with_value_labels(labels)
//!     .with_variable_label("elder's dependency");
//!
//! let column = to_factor(Column::from(vector), &ConversionOptions::default());
//! let factor = column.as_factor().unwrap();
//! assert_eq!(factor.level_labels(), vec!["independent", "2", "severe dependency"]);
//! assert_eq!(factor.variable_label(), Some("elder's dependency"));
//! ```

pub mod convert;
pub mod dispatch;
pub mod error;
pub mod extract;
pub mod frame;
pub mod select;

pub use convert::{labelled_to_factor, to_factor};
pub use dispatch::{Convertible, convert, table_to_factor};
pub use error::{FactorError, Result, SelectorError};
pub use extract::{get_value_labels, vector_value_labels};
pub use frame::{column_from_frame, column_from_series, table_from_dataframe, table_to_dataframe};
pub use select::{NamePredicate, Selector, resolve_selectors};
