use cadence::{
    Cadence, CadenceError, DerivedMetric, PeriodMode, Periodicity, SeriesId, TableOrder,
};

use crate::helpers::{MockConnector, example_table, m};

fn engine() -> Cadence {
    let c = MockConnector::builder()
        .with_series_table(example_table())
        .build();
    Cadence::builder().with_connector(c).build().unwrap()
}

fn approx(a: Option<f64>, b: f64) -> bool {
    a.is_some_and(|a| (a - b).abs() < 1e-9)
}

#[tokio::test]
async fn live_snapshot_of_two_series() {
    let cadence = engine();
    let (a, b) = (SeriesId::from("A"), SeriesId::from("B"));
    let mut cmp = cadence.comparison(Periodicity::Monthly);
    cmp.toggle(&a);
    cmp.toggle(&b);

    let snap = cadence.refresh(&mut cmp).await;
    assert!(snap.warnings.is_empty(), "{:?}", snap.warnings);
    assert_eq!(snap.rows.len(), 2);
    assert_eq!(snap.rows[0].value(&b), None);
    assert_eq!(snap.active, Some(1));
    assert_eq!(snap.active_period, Some(m(2023, 2)));
    assert_eq!(snap.mode, PeriodMode::Live);

    let sa = snap.summary(&a).unwrap();
    assert_eq!(sa.metric.latest, Some(102.0));
    assert_eq!(sa.metric.period_change_abs, Some(2.0));
    assert!(approx(sa.metric.period_change_pct, 2.0));
    assert_eq!(sa.metric.year_change_abs, None);

    let sb = snap.summary(&b).unwrap();
    assert_eq!(sb.metric.latest, Some(50.0));
    assert_eq!(sb.metric.period_change_abs, None);
    assert_eq!(sb.metric.period_change_pct, None);

    assert_eq!(snap.chart.series.len(), 2);
    assert_eq!(snap.chart.rows.len(), 2);
    assert_eq!(snap.table.order, TableOrder::Reverse);
    assert_eq!(snap.table.rows.len(), 4);
    assert_eq!(snap.table.rows[0].period, m(2023, 2));
}

#[tokio::test]
async fn frozen_period_shows_historical_values() {
    let cadence = engine();
    let (a, b) = (SeriesId::from("A"), SeriesId::from("B"));
    let mut cmp = cadence.comparison(Periodicity::Monthly);
    cmp.toggle(&a);
    cmp.toggle(&b);
    cmp.freeze(m(2023, 1));

    let snap = cadence.refresh(&mut cmp).await;
    assert_eq!(snap.active, Some(0));
    assert_eq!(snap.mode, PeriodMode::Frozen(m(2023, 1)));
    assert_eq!(snap.summary(&a).unwrap().metric.latest, Some(100.0));
    assert_eq!(snap.summary(&b).unwrap().metric, DerivedMetric::default());
    assert_eq!(snap.active_row().map(|r| r.period), Some(m(2023, 1)));
}

#[tokio::test]
async fn stale_frozen_period_falls_back_to_live() {
    let cadence = engine();
    let a = SeriesId::from("A");
    let mut cmp = cadence.comparison(Periodicity::Monthly);
    cmp.toggle(&a);
    cmp.freeze(m(2022, 7));

    let snap = cadence.refresh(&mut cmp).await;
    assert!(matches!(
        snap.warnings.as_slice(),
        [CadenceError::NotFound { .. }]
    ));
    assert!(cmp.mode().is_live());
    assert_eq!(snap.mode, PeriodMode::Live);
    assert_eq!(snap.active_period, Some(m(2023, 2)));
}

#[tokio::test]
async fn nothing_to_show_reports_no_data() {
    let cadence = engine();
    let missing = SeriesId::from("MISSING");
    let mut cmp = cadence.comparison(Periodicity::Monthly);
    cmp.toggle(&missing);

    let snap = cadence.refresh(&mut cmp).await;
    assert_eq!(snap.active, None);
    assert!(snap.rows.is_empty());
    assert_eq!(snap.warnings.len(), 2);
    assert!(matches!(snap.warnings[0], CadenceError::NotFound { .. }));
    assert!(matches!(snap.warnings[1], CadenceError::NoData { .. }));
    assert_eq!(snap.summaries.len(), 1);
    assert_eq!(snap.summaries[0].metric, DerivedMetric::default());
    assert!(snap.summaries[0].color.is_some());
}

#[tokio::test]
async fn empty_selection_snapshot_is_empty() {
    let cadence = engine();
    let mut cmp = cadence.comparison(Periodicity::Monthly);

    let snap = cadence.snapshot(&mut cmp).await;
    assert!(snap.rows.is_empty());
    assert!(snap.summaries.is_empty());
    assert!(snap.chart.rows.is_empty());
    assert!(matches!(
        snap.warnings.as_slice(),
        [CadenceError::NoData { .. }]
    ));
}

#[tokio::test]
async fn deselected_series_leave_the_views() {
    let cadence = engine();
    let (a, b) = (SeriesId::from("A"), SeriesId::from("B"));
    let mut cmp = cadence.comparison(Periodicity::Monthly);
    cmp.toggle(&a);
    cmp.toggle(&b);
    cadence.refresh(&mut cmp).await;

    cmp.toggle(&a);
    let snap = cadence.snapshot(&mut cmp).await;
    assert_eq!(snap.rows.len(), 1);
    assert_eq!(snap.chart.series.len(), 1);
    assert_eq!(snap.chart.series[0].id, b);
    assert!(snap.summary(&a).is_none());
}

#[tokio::test]
async fn range_start_limits_rows() {
    let cadence = engine();
    let a = SeriesId::from("A");
    let mut cmp = cadence
        .comparison(Periodicity::Monthly)
        .with_range_start(Some(m(2023, 2)))
        .with_table_order(TableOrder::Chronological);
    cmp.toggle(&a);

    let snap = cadence.refresh(&mut cmp).await;
    assert_eq!(snap.rows.len(), 1);
    assert_eq!(snap.rows[0].period, m(2023, 2));
    // No prior row inside the range.
    assert_eq!(snap.summary(&a).unwrap().metric.period_change_abs, None);
}
