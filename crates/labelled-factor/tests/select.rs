//! Tests for column selector parsing and resolution.

use labelled_factor::{NamePredicate, Selector, SelectorError, resolve_selectors};
use labelled_model::{Column, LabelledVector, Table};

fn efc_table() -> Table {
    let column = || Column::from(LabelledVector::numeric(vec![Some(1.0), Some(2.0)]));
    Table::from_columns([
        ("c12hour", column()),
        ("e15relat", column()),
        ("e16sex", column()),
        ("e17age", column()),
        ("e42dep", column()),
        ("c161sex", column()),
    ])
    .unwrap()
}

fn resolve(selectors: &[Selector]) -> Result<Vec<String>, SelectorError> {
    resolve_selectors(&efc_table(), selectors)
}

#[test]
fn parses_each_selector_form() {
    assert_eq!("e42dep".parse::<Selector>(), Ok(Selector::name("e42dep")));
    assert_eq!(
        " e15relat : e17age ".parse::<Selector>(),
        Ok(Selector::range("e15relat", "e17age"))
    );
    assert_eq!(
        "contains(\"sex\")".parse::<Selector>(),
        Ok(Selector::Predicate(NamePredicate::Contains("sex".to_string())))
    );
    assert_eq!("starts_with(e1)".parse::<Selector>(), Ok(Selector::starts_with("e1")));
    assert_eq!("ends_with(age)".parse::<Selector>(), Ok(Selector::ends_with("age")));
}

#[test]
fn rejects_malformed_selectors() {
    for input in ["", "   ", "a:", ":b", "matches(x)", "contains()", "contains(\"\")", "oops)"] {
        let result = input.parse::<Selector>();
        assert!(
            matches!(result, Err(SelectorError::Malformed { .. })),
            "{input:?} should be malformed, got {result:?}"
        );
    }
}

#[test]
fn no_selectors_selects_every_column() {
    let names = resolve(&[]).unwrap();
    assert_eq!(names.len(), 6);
    assert_eq!(names[0], "c12hour");
}

#[test]
fn names_resolve_in_selection_order() {
    let names = resolve(&[Selector::name("e42dep"), Selector::name("c12hour")]).unwrap();
    assert_eq!(names, vec!["e42dep", "c12hour"]);
}

#[test]
fn unknown_name_is_an_error() {
    assert_eq!(
        resolve(&[Selector::name("e42dep"), Selector::name("nope")]),
        Err(SelectorError::UnknownColumn {
            name: "nope".to_string()
        })
    );
}

#[test]
fn range_is_inclusive() {
    let names = resolve(&[Selector::range("e15relat", "e17age")]).unwrap();
    assert_eq!(names, vec!["e15relat", "e16sex", "e17age"]);
}

#[test]
fn reversed_range_runs_right_to_left() {
    let names = resolve(&[Selector::range("e17age", "e15relat")]).unwrap();
    assert_eq!(names, vec!["e17age", "e16sex", "e15relat"]);
}

#[test]
fn range_with_unknown_endpoint_is_an_error() {
    assert!(matches!(
        resolve(&[Selector::range("e15relat", "zzz")]),
        Err(SelectorError::UnknownColumn { .. })
    ));
}

#[test]
fn predicates_select_matching_names() {
    let names = resolve(&[Selector::contains("sex")]).unwrap();
    assert_eq!(names, vec!["e16sex", "c161sex"]);

    let names = resolve(&[Selector::starts_with("c")]).unwrap();
    assert_eq!(names, vec!["c12hour", "c161sex"]);
}

#[test]
fn predicate_matching_nothing_is_empty() {
    assert_eq!(resolve(&[Selector::contains("xyz")]).unwrap(), Vec::<String>::new());
}

#[test]
fn overlapping_selectors_are_deduplicated() {
    let names = resolve(&[
        Selector::name("e16sex"),
        Selector::contains("sex"),
        Selector::range("e15relat", "e16sex"),
    ])
    .unwrap();
    assert_eq!(names, vec!["e16sex", "c161sex", "e15relat"]);
}
