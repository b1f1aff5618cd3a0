use std::sync::Arc;

use cadence::{Cadence, CadenceError, SeriesId};

use crate::helpers::{MockConnector, m, ob};

#[tokio::test]
async fn series_is_fetched_once_and_normalised() {
    let c = MockConnector::builder()
        .with_series_fn(|_, _| {
            Ok(vec![
                ob(2023, 3, 3.0),
                ob(2023, 1, 1.0),
                ob(2023, 3, 9.0),
                ob(2023, 2, 2.0),
            ])
        })
        .build();
    let cadence = Cadence::builder()
        .with_connector(c.clone())
        .build()
        .unwrap();
    let id = SeriesId::from("A");

    let first = cadence.series(&id, None).await.unwrap();
    let second = cadence.series(&id, None).await.unwrap();

    assert_eq!(c.series_calls(), 1);
    assert!(Arc::ptr_eq(&first, &second));
    let periods: Vec<_> = first.iter().map(|o| o.period).collect();
    assert_eq!(periods, vec![m(2023, 1), m(2023, 2), m(2023, 3)]);
    // First occurrence of a duplicated period wins.
    assert_eq!(first[2].value, Some(3.0));
}

#[tokio::test]
async fn full_history_serves_narrower_ranges() {
    let c = MockConnector::builder()
        .with_series_fn(|_, _| Ok(vec![ob(2022, 12, 1.0), ob(2023, 1, 2.0)]))
        .build();
    let cadence = Cadence::builder()
        .with_connector(c.clone())
        .build()
        .unwrap();
    let id = SeriesId::from("A");

    cadence.series(&id, None).await.unwrap();
    let ranged = cadence.series(&id, Some(m(2023, 1))).await.unwrap();
    assert_eq!(c.series_calls(), 1);
    assert_eq!(cadence.store().len().await, 1);
    assert_eq!(ranged.len(), 1);
    assert_eq!(ranged[0].period, m(2023, 1));
}

#[tokio::test]
async fn ranged_series_is_the_same_whether_fetched_or_cached() {
    let engine = || {
        Cadence::builder()
            .with_connector(Arc::new(cadence_mock::MockConnector::new()))
            .build()
            .unwrap()
    };
    let cpi = SeriesId::from("CUUR0000SA0");
    let start = Some(m(2023, 6));

    let fresh = engine().series(&cpi, start).await.unwrap();

    let warm = engine();
    let full = warm.series(&cpi, None).await.unwrap();
    let cached = warm.series(&cpi, start).await.unwrap();

    assert_eq!(full.len(), 24);
    assert_eq!(fresh.len(), 7);
    assert_eq!(cached, fresh);
}

#[tokio::test]
async fn failed_fetch_is_not_stored() {
    let c = MockConnector::builder()
        .with_series_fn(|_, _| Err(CadenceError::Other("flaky".into())))
        .build();
    let cadence = Cadence::builder()
        .with_connector(c.clone())
        .build()
        .unwrap();
    let id = SeriesId::from("A");

    assert!(cadence.series(&id, None).await.is_err());
    assert!(cadence.series(&id, None).await.is_err());
    assert_eq!(c.series_calls(), 2);
    assert!(cadence.store().is_empty().await);
}

#[tokio::test]
async fn series_without_any_provider_is_unsupported() {
    let c = MockConnector::builder()
        .with_catalog_fn(|q| Ok(cadence::CatalogPage::empty(q.offset(), q.limit())))
        .build();
    let cadence = Cadence::builder().with_connector(c).build().unwrap();

    let err = cadence
        .series(&SeriesId::from("A"), None)
        .await
        .unwrap_err();
    assert!(matches!(err, CadenceError::Unsupported { .. }));
}
