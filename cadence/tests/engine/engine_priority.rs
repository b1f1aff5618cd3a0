use std::time::Duration;

use cadence::{Cadence, CadenceError, SeriesId};

use crate::helpers::{MockConnector, ob};

#[tokio::test]
async fn first_registered_connector_wins() {
    let p1 = MockConnector::builder()
        .name("p1")
        .with_series_fn(|_, _| Ok(vec![ob(2023, 1, 1.0)]))
        .build();
    let p2 = MockConnector::builder()
        .name("p2")
        .with_series_fn(|_, _| Ok(vec![ob(2023, 1, 2.0)]))
        .build();
    let cadence = Cadence::builder()
        .with_connector(p1.clone())
        .with_connector(p2.clone())
        .build()
        .unwrap();

    let obs = cadence.series(&SeriesId::from("A"), None).await.unwrap();
    assert_eq!(obs[0].value, Some(1.0));
    assert_eq!(p2.series_calls(), 0);
}

#[tokio::test]
async fn not_found_falls_through_to_next_connector() {
    let p1 = MockConnector::builder()
        .name("p1")
        .with_series_fn(|id, _| Err(CadenceError::not_found(format!("series {id}"))))
        .build();
    let p2 = MockConnector::builder()
        .name("p2")
        .with_series_fn(|_, _| Ok(vec![ob(2023, 1, 2.0)]))
        .build();
    let cadence = Cadence::builder()
        .with_connector(p1)
        .with_connector(p2)
        .build()
        .unwrap();

    let report = cadence
        .load_ids(&[SeriesId::from("A")], None)
        .await
        .unwrap();
    assert_eq!(report.fetched, vec![(SeriesId::from("A"), "p2".to_string())]);
}

#[tokio::test]
async fn all_not_found_collapses_to_not_found() {
    let p1 = MockConnector::builder()
        .name("p1")
        .with_series_fn(|id, _| Err(CadenceError::not_found(format!("series {id}"))))
        .build();
    let p2 = MockConnector::builder()
        .name("p2")
        .with_series_fn(|id, _| Err(CadenceError::not_found(format!("series {id}"))))
        .build();
    let cadence = Cadence::builder()
        .with_connector(p1)
        .with_connector(p2)
        .build()
        .unwrap();

    let err = cadence
        .series(&SeriesId::from("ZZZ"), None)
        .await
        .unwrap_err();
    assert_eq!(err, CadenceError::not_found("series ZZZ"));
}

#[tokio::test]
async fn plain_errors_are_tagged_with_connector() {
    let p1 = MockConnector::builder()
        .name("p1")
        .with_series_fn(|_, _| Err(CadenceError::Data("bad period code".into())))
        .build();
    let cadence = Cadence::builder().with_connector(p1).build().unwrap();

    let err = cadence
        .series(&SeriesId::from("A"), None)
        .await
        .unwrap_err();
    let CadenceError::AllProvidersFailed(inner) = err else {
        panic!("unexpected error: {err:?}");
    };
    assert!(matches!(
        &inner[..],
        [CadenceError::Connector { connector, .. }] if connector == "p1"
    ));
}

#[tokio::test(start_paused = true)]
async fn slow_connector_times_out_and_next_one_answers() {
    let slow = MockConnector::builder()
        .name("slow")
        .delay(Duration::from_secs(10))
        .with_series_fn(|_, _| Ok(vec![ob(2023, 1, 1.0)]))
        .build();
    let fast = MockConnector::builder()
        .name("fast")
        .with_series_fn(|_, _| Ok(vec![ob(2023, 1, 2.0)]))
        .build();
    let cadence = Cadence::builder()
        .with_connector(slow)
        .with_connector(fast)
        .provider_timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let obs = cadence.series(&SeriesId::from("A"), None).await.unwrap();
    assert_eq!(obs[0].value, Some(2.0));
}

#[tokio::test(start_paused = true)]
async fn every_connector_timing_out_is_reported_as_such() {
    let a = MockConnector::builder()
        .name("a")
        .delay(Duration::from_secs(10))
        .with_series_fn(|_, _| Ok(vec![]))
        .build();
    let b = MockConnector::builder()
        .name("b")
        .delay(Duration::from_secs(10))
        .with_series_fn(|_, _| Ok(vec![]))
        .build();
    let cadence = Cadence::builder()
        .with_connector(a)
        .with_connector(b)
        .provider_timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = cadence
        .series(&SeriesId::from("A"), None)
        .await
        .unwrap_err();
    assert!(matches!(err, CadenceError::AllProvidersTimedOut { .. }));
}
