use proptest::prelude::*;

use cadence::{Cadence, PeriodKey, PeriodMode, Periodicity, SeriesId};
use cadence_mock::{DynamicMockConnector, MockBehavior};

use crate::helpers::{m, ob};

const IDS: [&str; 4] = ["A", "B", "C", "D"];

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => (0usize..IDS.len()).prop_map(Action::Toggle),
        // Months of 2022 and 2023; 2022 has no data.
        2 => (2022i32..=2023, 1u8..=12).prop_map(|(y, mo)| Action::Freeze(y, mo)),
        1 => Just(Action::Unfreeze),
        2 => Just(Action::Refresh),
    ]
}

#[derive(Clone, Debug)]
enum Action {
    Toggle(usize),
    Freeze(i32, u8),
    Unfreeze,
    Refresh,
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 40, .. ProptestConfig::default() })]
    #[test]
    fn comparison_session_model_holds(actions in proptest::collection::vec(arb_action(), 0..40)) {
        tokio_test::block_on(async move {
            // A and B overlap, C is quarterly-sparse, D is unknown to the provider.
            let (p, ctl) = DynamicMockConnector::new_with_controller("P");
            ctl.set_series_behavior("A", MockBehavior::Return(
                (1..=12).map(|mo| ob(2023, mo, 100.0 + f64::from(mo))).collect(),
            )).await;
            ctl.set_series_behavior("B", MockBehavior::Return(
                (6..=12).map(|mo| ob(2023, mo, 0.0)).collect(),
            )).await;
            ctl.set_series_behavior("C", MockBehavior::Return(
                vec![ob(2023, 3, 1.0), ob(2023, 6, 2.0), ob(2023, 9, 3.0)],
            )).await;

            let cadence = Cadence::builder()
                .with_connector(p)
                .selection_capacity(3)
                .build()
                .expect("cadence");
            let mut cmp = cadence.comparison(Periodicity::Monthly);

            for action in actions {
                match action {
                    Action::Toggle(i) => { cmp.toggle(&SeriesId::from(IDS[i])); }
                    Action::Freeze(y, mo) => cmp.freeze(m(y, mo)),
                    Action::Unfreeze => cmp.unfreeze(),
                    Action::Refresh => { cadence.refresh(&mut cmp).await; }
                }

                let requested: Option<PeriodKey> = cmp.mode().explicit();
                let snap = cadence.snapshot(&mut cmp).await;

                // Selection never exceeds capacity; views follow selection order.
                assert!(cmp.ids().len() <= 3);
                let summary_ids: Vec<_> = snap.summaries.iter().map(|s| s.id.clone()).collect();
                assert_eq!(summary_ids, cmp.ids());
                let chart_ids: Vec<_> = snap.chart.series.iter().map(|s| s.id.clone()).collect();
                assert_eq!(chart_ids, cmp.ids());

                // Rows strictly ascending.
                assert!(snap.rows.windows(2).all(|w| w[0].period < w[1].period));

                match (requested, snap.mode) {
                    (Some(p), PeriodMode::Frozen(q)) => {
                        assert_eq!(p, q);
                        assert_eq!(snap.active_period, Some(p));
                    }
                    (Some(p), PeriodMode::Live) => {
                        // Stale period: it had no row and the mode was reset.
                        assert!(snap.rows.iter().all(|r| r.period != p));
                        assert!(cmp.mode().is_live());
                    }
                    (None, PeriodMode::Live) => {
                        if let Some(row) = snap.active_row() {
                            assert!(row.has_any(cmp.ids()));
                            let later = &snap.rows[snap.active.unwrap_or(0) + 1..];
                            assert!(later.iter().all(|r| !r.has_any(cmp.ids())));
                        }
                    }
                    (None, PeriodMode::Frozen(_)) => panic!("snapshot froze a live comparison"),
                }

                // No metric is ever NaN or infinite.
                for s in &snap.summaries {
                    for v in [
                        s.metric.latest,
                        s.metric.period_change_abs,
                        s.metric.period_change_pct,
                        s.metric.year_change_abs,
                        s.metric.year_change_pct,
                    ] {
                        assert!(v.is_none_or(f64::is_finite));
                    }
                }
            }

            // Known series are fetched at most once per session.
            for id in ["A", "B", "C"] {
                assert!(ctl.fetch_count(&SeriesId::from(id)).await <= 1);
            }
        });
    }
}
