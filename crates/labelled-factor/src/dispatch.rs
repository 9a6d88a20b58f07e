//! Conversion entry points for columns and tables.

use labelled_model::{Column, ConversionOptions, Table};
use tracing::debug;

use crate::convert::{labelled_to_factor, to_factor};
use crate::error::{FactorError, Result};
use crate::select::{Selector, resolve_selectors};

/// Input accepted by [`convert`]: one column or a whole table.
#[derive(Debug, Clone, PartialEq)]
pub enum Convertible {
    SingleColumn(Column),
    Table(Table),
}

impl From<Column> for Convertible {
    fn from(column: Column) -> Self {
        Self::SingleColumn(column)
    }
}

impl From<Table> for Convertible {
    fn from(table: Table) -> Self {
        Self::Table(table)
    }
}

/// Converts a column, or the selected columns of a table, to factors.
///
/// Selectors only apply to tables. A passthrough column converts only when
/// the host marked it categorical, in which case it is left as is.
pub fn convert(
    input: Convertible,
    selectors: &[Selector],
    options: &ConversionOptions,
) -> Result<Convertible> {
    match input {
        Convertible::SingleColumn(_) if !selectors.is_empty() => {
            Err(FactorError::SelectorsOnColumn)
        }
        Convertible::SingleColumn(Column::Passthrough(column)) if !column.is_categorical() => {
            Err(FactorError::NotConvertible {
                dtype: column.dtype().to_string(),
            })
        }
        Convertible::SingleColumn(column) => {
            Ok(Convertible::SingleColumn(to_factor(column, options)))
        }
        Convertible::Table(table) => {
            table_to_factor(table, selectors, options).map(Convertible::Table)
        }
    }
}

/// Converts the selected columns of `table` to factors in place.
///
/// Selectors are resolved, and every selected column checked, before any
/// column changes, so an error leaves nothing half-converted. No selectors
/// means every column.
pub fn table_to_factor(
    mut table: Table,
    selectors: &[Selector],
    options: &ConversionOptions,
) -> Result<Table> {
    let names = resolve_selectors(&table, selectors)?;
    if names.is_empty() {
        debug!("no columns selected for factor conversion");
        return Ok(table);
    }

    for name in &names {
        if let Some(Column::Passthrough(column)) = table.column(name)
            && !column.is_categorical()
        {
            return Err(FactorError::UnsupportedDtype {
                column: name.clone(),
                dtype: column.dtype().to_string(),
            });
        }
    }

    for name in &names {
        table.update_column(name, |column| match column {
            Column::Factor(_) | Column::Passthrough(_) => None,
            Column::Labelled(vector) => {
                let factor = labelled_to_factor(vector, options);
                debug!(
                    column = %name,
                    levels = factor.levels().len(),
                    labelled = factor.labelled_level_count(),
                    "converted column to factor"
                );
                Some(Column::Factor(factor))
            }
        })?;
    }
    Ok(table)
}
