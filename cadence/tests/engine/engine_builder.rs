use cadence::{Cadence, CadenceError, ColorAssignment, Palette, Periodicity, SeriesId, Toggle};

use crate::helpers::{MockConnector, example_table};

#[test]
fn build_requires_a_connector() {
    let err = Cadence::builder().build().err().expect("no connectors");
    assert!(matches!(err, CadenceError::InvalidArg(_)));
}

#[test]
fn build_rejects_empty_selection_defaults() {
    let c = MockConnector::builder()
        .with_series_table(example_table())
        .build();

    let err = Cadence::builder()
        .with_connector(c.clone())
        .selection_capacity(0)
        .build()
        .err()
        .expect("zero capacity");
    assert!(matches!(err, CadenceError::InvalidArg(_)));

    let err = Cadence::builder()
        .with_connector(c.clone())
        .palette(Palette::new(Vec::<String>::new()))
        .build()
        .err()
        .expect("empty palette");
    assert!(matches!(err, CadenceError::InvalidArg(_)));

    let err = Cadence::builder()
        .with_connector(c)
        .catalog_page_limit(0)
        .build()
        .err()
        .expect("zero page limit");
    assert!(matches!(err, CadenceError::InvalidArg(_)));
}

#[test]
fn comparison_inherits_configured_selection() {
    let c = MockConnector::builder()
        .with_series_table(example_table())
        .build();
    let cadence = Cadence::builder()
        .with_connector(c)
        .selection_capacity(2)
        .palette(Palette::new(["red", "blue"]))
        .color_assignment(ColorAssignment::Sticky)
        .build()
        .unwrap();

    let mut cmp = cadence.comparison(Periodicity::Monthly);
    assert_eq!(cmp.toggle(&SeriesId::from("A")), Toggle::Added);
    assert_eq!(cmp.toggle(&SeriesId::from("B")), Toggle::Added);
    assert_eq!(cmp.toggle(&SeriesId::from("C")), Toggle::Rejected);
    assert_eq!(cmp.selection().capacity(), 2);

    // Sticky: removing A keeps B's colour.
    cmp.toggle(&SeriesId::from("A"));
    assert_eq!(
        cmp.selection()
            .color_of(&SeriesId::from("B"))
            .map(cadence::Color::as_str),
        Some("blue")
    );
}
