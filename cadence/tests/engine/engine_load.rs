use std::time::Duration;

use cadence::{Cadence, CadenceError, Periodicity, SeriesId};

use crate::helpers::{MockConnector, example_table};

#[tokio::test]
async fn load_reports_fetched_cached_and_warnings() {
    let c = MockConnector::builder()
        .name("table")
        .with_series_table(example_table())
        .build();
    let cadence = Cadence::builder()
        .with_connector(c.clone())
        .build()
        .unwrap();
    let mut cmp = cadence.comparison(Periodicity::Monthly);
    cmp.toggle(&SeriesId::from("A"));
    cmp.toggle(&SeriesId::from("B"));
    cmp.toggle(&SeriesId::from("MISSING"));

    let report = cadence.load(&cmp).await.unwrap();
    let mut fetched: Vec<_> = report.fetched.iter().map(|(id, _)| id.as_str()).collect();
    fetched.sort_unstable();
    assert_eq!(fetched, vec!["A", "B"]);
    assert!(report.fetched.iter().all(|(_, by)| by == "table"));
    assert!(report.cached.is_empty());
    assert_eq!(
        report.warnings,
        vec![CadenceError::not_found("series MISSING")]
    );
    assert!(!report.is_complete());

    // Second load serves A and B from the store and retries the missing one.
    let report = cadence.load(&cmp).await.unwrap();
    assert!(report.fetched.is_empty());
    assert_eq!(
        report.cached,
        vec![SeriesId::from("A"), SeriesId::from("B")]
    );
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(c.series_calls(), 4);
}

#[tokio::test]
async fn duplicate_ids_are_fetched_once() {
    let c = MockConnector::builder()
        .with_series_table(example_table())
        .build();
    let cadence = Cadence::builder()
        .with_connector(c.clone())
        .build()
        .unwrap();
    let a = SeriesId::from("A");

    let report = cadence
        .load_ids(&[a.clone(), a.clone(), a], None)
        .await
        .unwrap();
    assert_eq!(report.fetched.len(), 1);
    assert_eq!(c.series_calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn request_deadline_fails_the_load() {
    let c = MockConnector::builder()
        .delay(Duration::from_secs(30))
        .with_series_table(example_table())
        .build();
    let cadence = Cadence::builder()
        .with_connector(c)
        .provider_timeout(Duration::from_secs(60))
        .request_timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let err = cadence
        .load_ids(&[SeriesId::from("A")], None)
        .await
        .unwrap_err();
    assert_eq!(err, CadenceError::request_timeout("load:series"));
    assert!(cadence.store().is_empty().await);
}

#[tokio::test]
async fn fixture_connector_failures_become_warnings() {
    let cadence = Cadence::builder()
        .with_connector(std::sync::Arc::new(cadence_mock::MockConnector::new()))
        .build()
        .unwrap();

    let report = cadence
        .load_ids(
            &[SeriesId::from("CUUR0000SA0"), SeriesId::from("FAIL")],
            None,
        )
        .await
        .unwrap();
    assert_eq!(report.fetched.len(), 1);
    assert_eq!(report.fetched[0].1, "cadence-mock");
    assert!(matches!(
        report.warnings.as_slice(),
        [CadenceError::AllProvidersFailed(_)]
    ));
}
