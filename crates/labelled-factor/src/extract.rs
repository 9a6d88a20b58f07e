//! Value-label extraction.

use labelled_model::{Column, Factor, LabelledVector, ValueLabels};

/// Value labels of any column. Passthrough columns carry none.
///
/// With `include_unlabelled`, every distinct non-missing value lacking an
/// explicit label is added with its own string form as label.
pub fn get_value_labels(column: &Column, include_unlabelled: bool) -> ValueLabels {
    match column {
        Column::Labelled(vector) => vector_value_labels(vector, include_unlabelled),
        Column::Factor(factor) => factor_value_labels(factor, include_unlabelled),
        Column::Passthrough(_) => ValueLabels::new(),
    }
}

/// Explicit labels of `vector`, optionally completed from its data.
pub fn vector_value_labels(vector: &LabelledVector, include_unlabelled: bool) -> ValueLabels {
    let mut labels = vector.value_labels().clone();
    if include_unlabelled {
        for value in vector.data().distinct_values() {
            if !labels.contains(&value) {
                let label = value.to_string();
                labels.insert(value, label);
            }
        }
    }
    labels
}

fn factor_value_labels(factor: &Factor, include_unlabelled: bool) -> ValueLabels {
    factor
        .levels()
        .iter()
        .filter_map(|level| match &level.label {
            Some(label) => Some((level.value.clone(), label.clone())),
            None if include_unlabelled => Some((level.value.clone(), level.value.to_string())),
            None => None,
        })
        .collect()
}
