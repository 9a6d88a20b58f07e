//! Polars DataFrame boundary.
//!
//! Integer, float and string columns enter the model as unlabelled vectors
//! that remember their physical type. Every other column is carried through
//! untouched. On the way out, vectors are cast back to the type they were
//! read from and factors are rendered as strings.

use labelled_model::{
    Column, ExportOptions, FactorRepr, LabelledVector, Passthrough, StorageType, Table, VectorData,
};
use polars::prelude::{Column as FrameColumn, DataFrame, DataType, NamedFrom, Series};

use crate::error::{FactorError, Result};

fn storage_type(dtype: &DataType) -> Option<StorageType> {
    let storage = match dtype {
        DataType::Int8 => StorageType::Int8,
        DataType::Int16 => StorageType::Int16,
        DataType::Int32 => StorageType::Int32,
        DataType::Int64 => StorageType::Int64,
        DataType::UInt8 => StorageType::UInt8,
        DataType::UInt16 => StorageType::UInt16,
        DataType::UInt32 => StorageType::UInt32,
        DataType::Float32 => StorageType::Float32,
        DataType::Float64 => StorageType::Float64,
        DataType::String => StorageType::Text,
        _ => return None,
    };
    Some(storage)
}

fn polars_dtype(storage: StorageType) -> DataType {
    match storage {
        StorageType::Int8 => DataType::Int8,
        StorageType::Int16 => DataType::Int16,
        StorageType::Int32 => DataType::Int32,
        StorageType::Int64 => DataType::Int64,
        StorageType::UInt8 => DataType::UInt8,
        StorageType::UInt16 => DataType::UInt16,
        StorageType::UInt32 => DataType::UInt32,
        StorageType::Float32 => DataType::Float32,
        StorageType::Float64 => DataType::Float64,
        StorageType::Text => DataType::String,
    }
}

/// Reads one polars column as an unlabelled vector.
///
/// Integer columns (up to 32-bit unsigned and 64-bit signed) become integer
/// storage, float columns float storage, string columns text storage. Nulls
/// become missing rows. Other dtypes are rejected.
pub fn column_from_series(column: &FrameColumn) -> Result<LabelledVector> {
    let dtype = column.dtype();
    let Some(storage) = storage_type(dtype) else {
        return Err(FactorError::UnsupportedDtype {
            column: column.name().to_string(),
            dtype: dtype.to_string(),
        });
    };
    let data = match storage {
        StorageType::Text => VectorData::Text(
            column
                .str()?
                .into_iter()
                .map(|value| value.map(str::to_string))
                .collect(),
        ),
        StorageType::Float32 | StorageType::Float64 => {
            VectorData::Numeric(column.cast(&DataType::Float64)?.f64()?.into_iter().collect())
        }
        _ => VectorData::Integer(column.cast(&DataType::Int64)?.i64()?.into_iter().collect()),
    };
    Ok(LabelledVector::new(data).with_storage_type(storage))
}

/// Reads one polars column into the model.
///
/// Columns [`column_from_series`] cannot read are kept as passthrough
/// columns; polars categoricals and enums are marked categorical.
pub fn column_from_frame(column: &FrameColumn) -> Result<Column> {
    let dtype = column.dtype();
    if storage_type(dtype).is_some() {
        return Ok(Column::Labelled(column_from_series(column)?));
    }
    let passthrough = Passthrough::new(column.clone(), dtype.to_string(), column.len())
        .with_categorical(dtype.is_categorical() || dtype.is_enum());
    Ok(Column::Passthrough(passthrough))
}

/// Reads a DataFrame as a table of unlabelled vectors and passthrough columns.
pub fn table_from_dataframe(df: &DataFrame) -> Result<Table> {
    let mut table = Table::new();
    for column in df.get_columns() {
        table.push_column(column.name().as_str(), column_from_frame(column)?)?;
    }
    Ok(table)
}

fn vector_series(name: &str, vector: &LabelledVector) -> Result<Series> {
    let series = match vector.data() {
        VectorData::Integer(values) => Series::new(name.into(), values.as_slice()),
        VectorData::Numeric(values) => Series::new(name.into(), values.as_slice()),
        VectorData::Text(values) => {
            let values: Vec<Option<&str>> = values.iter().map(Option::as_deref).collect();
            Series::new(name.into(), values)
        }
    };
    match vector.storage_type().map(polars_dtype) {
        Some(dtype) if &dtype != series.dtype() => Ok(series.cast(&dtype)?),
        _ => Ok(series),
    }
}

/// Writes a table back to a DataFrame.
///
/// Labelled vectors keep their raw storage, cast back to the type they were
/// read from. Factors become string columns rendered per
/// [`ExportOptions::factor_repr`]. Passthrough columns are written as they
/// were read. Row names are not exported.
pub fn table_to_dataframe(table: &Table, options: &ExportOptions) -> Result<DataFrame> {
    let mut columns: Vec<FrameColumn> = Vec::with_capacity(table.width());
    for (name, column) in table.columns() {
        let exported = match column {
            Column::Labelled(vector) => vector_series(name, vector)?.into(),
            Column::Factor(factor) => {
                let rendered: Vec<Option<String>> = match options.factor_repr {
                    FactorRepr::Label => factor.display_values(),
                    FactorRepr::Value => (0..factor.len())
                        .map(|idx| factor.level_at(idx).map(|level| level.value.to_string()))
                        .collect(),
                };
                let values: Vec<Option<&str>> = rendered.iter().map(Option::as_deref).collect();
                Series::new(name.into(), values).into()
            }
            Column::Passthrough(passthrough) => {
                let mut original = passthrough
                    .downcast_ref::<FrameColumn>()
                    .cloned()
                    .ok_or_else(|| FactorError::UnsupportedDtype {
                        column: name.to_string(),
                        dtype: passthrough.dtype().to_string(),
                    })?;
                original.rename(name.into());
                original
            }
        };
        columns.push(exported);
    }
    Ok(DataFrame::new(columns)?)
}
