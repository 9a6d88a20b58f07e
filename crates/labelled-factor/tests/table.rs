//! Tests for table dispatch.

use labelled_factor::{Convertible, FactorError, Selector, SelectorError, convert, table_to_factor};
use labelled_model::{
    Column, ConversionOptions, Factor, LabelledVector, Passthrough, Table, Value, ValueLabels,
};

fn efc() -> Table {
    let e42dep = LabelledVector::numeric(vec![Some(3.0), Some(3.0), Some(1.0), Some(4.0)])
        .with_value_labels(
            ValueLabels::numeric([
                (1.0, "independent"),
                (2.0, "slightly dependent"),
                (3.0, "moderately dependent"),
                (4.0, "severely dependent"),
            ])
            .unwrap(),
        )
        .with_variable_label("elder's dependency");
    let e16sex = LabelledVector::numeric(vec![Some(2.0), Some(1.0), None, Some(2.0)]);
    let c172code = LabelledVector::numeric(vec![Some(2.0), None, Some(1.0), Some(3.0)])
    .with_value_labels(
        ValueLabels::numeric([(1.0, "low"), (2.0, "mid"), (3.0, "high")]).unwrap(),
    );
    Table::from_columns([
        ("e42dep", Column::from(e42dep)),
        ("e16sex", Column::from(e16sex)),
        ("c172code", Column::from(c172code)),
    ])
    .unwrap()
    .with_row_names(["1", "2", "3", "4"])
    .unwrap()
}

#[test]
fn selected_column_is_converted_and_others_untouched() {
    let table = efc();
    let converted =
        table_to_factor(table.clone(), &[Selector::name("e42dep")], &ConversionOptions::default())
            .unwrap();

    let factor = converted.column("e42dep").and_then(Column::as_factor).unwrap();
    assert_eq!(
        factor.level_labels(),
        vec!["independent", "moderately dependent", "severely dependent"]
    );
    assert_eq!(factor.variable_label(), Some("elder's dependency"));

    assert_eq!(converted.column("e16sex"), table.column("e16sex"));
    assert_eq!(converted.column("c172code"), table.column("c172code"));
    assert_eq!(converted.height(), 4);
    assert_eq!(converted.row_names(), table.row_names());
    assert_eq!(
        converted.column_names().collect::<Vec<_>>(),
        vec!["e42dep", "e16sex", "c172code"]
    );
}

#[test]
fn no_selectors_converts_every_column() {
    let options = ConversionOptions::new().with_add_non_labelled(true);
    let converted = table_to_factor(efc(), &[], &options).unwrap();
    assert!(converted.columns().all(|(_, column)| column.is_factor()));

    let sex = converted.column("e16sex").and_then(Column::as_factor).unwrap();
    assert_eq!(sex.level_labels(), vec!["1", "2"]);
    assert_eq!(sex.codes(), &[Some(1), Some(0), None, Some(1)]);
}

#[test]
fn unresolved_selector_aborts_conversion() {
    let result = table_to_factor(
        efc(),
        &[Selector::name("e42dep"), Selector::name("missing")],
        &ConversionOptions::default(),
    );
    assert!(matches!(
        result,
        Err(FactorError::Selector(SelectorError::UnknownColumn { .. }))
    ));
}

#[test]
fn empty_selection_returns_table_unmodified() {
    let table = efc();
    let converted = table_to_factor(
        table.clone(),
        &[Selector::contains("nothing")],
        &ConversionOptions::default(),
    )
    .unwrap();
    assert_eq!(converted, table);
}

#[test]
fn existing_factor_columns_pass_through() {
    let letters = Factor::from_text([Some("b"), Some("a"), Some("b"), None]);
    let mut table = efc();
    table.push_column("letters", Column::from(letters.clone())).unwrap();

    let selectors = [Selector::range("c172code", "letters")];
    let converted = table_to_factor(table, &selectors, &ConversionOptions::default()).unwrap();
    assert_eq!(converted.column("letters"), Some(&Column::Factor(letters)));
    assert!(converted.column("c172code").is_some_and(Column::is_factor));
    assert!(!converted.column("e16sex").is_some_and(Column::is_factor));
}

#[test]
fn convert_dispatches_on_input_shape() {
    let vector = LabelledVector::text([Some("x"), Some("y")]);
    let options = ConversionOptions::default();

    let single = convert(Convertible::from(Column::from(vector.clone())), &[], &options).unwrap();
    let Convertible::SingleColumn(column) = single else {
        panic!("expected a single column");
    };
    let factor = column.as_factor().unwrap();
    assert_eq!(factor.levels()[0].value, Value::text("x"));

    let table = convert(
        Convertible::from(efc()),
        &["starts_with(e)".parse().unwrap()],
        &options,
    )
    .unwrap();
    let Convertible::Table(table) = table else {
        panic!("expected a table");
    };
    assert!(table.column("e42dep").is_some_and(Column::is_factor));
    assert!(table.column("e16sex").is_some_and(Column::is_factor));
    assert!(!table.column("c172code").is_some_and(Column::is_factor));
}

#[test]
fn selectors_on_a_single_column_are_rejected() {
    let column = Column::from(LabelledVector::numeric(vec![Some(1.0)]));
    let result = convert(
        Convertible::SingleColumn(column),
        &[Selector::name("x")],
        &ConversionOptions::default(),
    );
    assert!(matches!(result, Err(FactorError::SelectorsOnColumn)));
}

fn with_host_column(categorical: bool) -> Table {
    let mut table = efc();
    let host = Passthrough::new(vec!["a", "b", "a", "c"], "cat", 4).with_categorical(categorical);
    table.push_column("group", Column::Passthrough(host)).unwrap();
    table
}

#[test]
fn categorical_host_columns_pass_through_selection() {
    let table = with_host_column(true);
    let selectors = [Selector::name("e42dep"), Selector::name("group")];
    let options = ConversionOptions::default();
    let converted = table_to_factor(table.clone(), &selectors, &options).unwrap();
    assert_eq!(converted.column("group"), table.column("group"));
    assert!(converted.column("e42dep").is_some_and(Column::is_factor));
}

#[test]
fn selecting_a_non_categorical_host_column_leaves_the_table_untouched() {
    let table = with_host_column(false);
    let selectors = [Selector::name("e42dep"), Selector::name("group")];
    let result = table_to_factor(table, &selectors, &ConversionOptions::default());
    assert!(matches!(
        result,
        Err(FactorError::UnsupportedDtype { ref column, ref dtype })
            if column == "group" && dtype == "cat"
    ));

    // Unselected, the same column is simply carried along.
    let selectors = [Selector::name("e42dep")];
    let options = ConversionOptions::default();
    let converted = table_to_factor(with_host_column(false), &selectors, &options).unwrap();
    assert!(matches!(converted.column("group"), Some(Column::Passthrough(_))));
}

#[test]
fn single_host_columns_convert_only_when_categorical() {
    let options = ConversionOptions::default();
    let plain = Column::Passthrough(Passthrough::new(1u8, "bool", 1));
    let result = convert(Convertible::SingleColumn(plain), &[], &options);
    assert!(matches!(result, Err(FactorError::NotConvertible { ref dtype }) if dtype == "bool"));

    let categorical = Column::Passthrough(Passthrough::new(1u8, "cat", 1).with_categorical(true));
    let converted = convert(Convertible::SingleColumn(categorical.clone()), &[], &options).unwrap();
    assert_eq!(converted, Convertible::SingleColumn(categorical));
}
