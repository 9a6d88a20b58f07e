//! Label-preserving conversion of a single vector to a factor.

use labelled_model::{Column, ConversionOptions, Factor, LabelledVector};
use tracing::{debug, warn};

use crate::extract::vector_value_labels;

/// Converts a column to a factor, keeping its value and variable labels.
///
/// A column that already is a factor is returned unchanged, and so is a
/// passthrough column.
pub fn to_factor(column: Column, options: &ConversionOptions) -> Column {
    match column {
        Column::Factor(_) | Column::Passthrough(_) => column,
        Column::Labelled(vector) => Column::Factor(labelled_to_factor(&vector, options)),
    }
}

/// Builds the factor for a labelled vector.
///
/// Levels are the distinct non-missing values in natural sort order. A level
/// takes the label of its value when one exists with the vector's storage
/// type; labels of absent values or of the other type are dropped.
pub fn labelled_to_factor(vector: &LabelledVector, options: &ConversionOptions) -> Factor {
    let label_map = vector_value_labels(vector, options.add_non_labelled);

    let mismatched = vector.value_labels().count_mismatched(vector.kind());
    if mismatched > 0 {
        if mismatched == vector.value_labels().len() {
            warn!(
                kind = ?vector.kind(),
                labels = mismatched,
                "no value label matches the vector's storage type"
            );
        } else {
            debug!(labels = mismatched, "skipping value labels of another type");
        }
    }

    let mut factor = Factor::from_values(&vector.data().values());
    factor.label_levels(|value| label_map.get(value).map(str::to_string));
    factor.set_variable_label(vector.variable_label().map(str::to_string));

    let unused = label_map.len() - mismatched - factor.labelled_level_count();
    if unused > 0 {
        debug!(labels = unused, "dropping labels for values not in the data");
    }
    factor
}

