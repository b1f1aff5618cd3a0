use cadence::{CadenceConnector, ChartView, Snapshot};
use std::sync::Arc;

/// Return a connector for demos.
///
/// Always the fixture connector: demos run offline and deterministically.
#[must_use]
pub fn get_connector() -> Arc<dyn CadenceConnector> {
    Arc::new(cadence_mock::MockConnector::new())
}

/// Install an env-filtered fmt subscriber; a second call is a no-op.
pub fn init_tracing() {
    // Err only when a global subscriber is already installed.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .try_init()
        .ok();
}

/// Print the headline block of a snapshot.
pub fn print_summaries(snap: &Snapshot) {
    let period = snap
        .active_row()
        .map_or_else(|| "-".to_string(), |r| r.label.clone());
    println!("\n## As of {period} ({:?})", snap.mode);
    println!(
        "{:<20} | {:>10} | {:>10} | {:>8} | {:>8}",
        "Series", "Value", "Chg", "Chg %", "Y/Y %"
    );
    println!("{:-<21}|{:-<12}|{:-<12}|{:-<10}|{:-<9}", "", "", "", "", "");
    for s in &snap.summaries {
        println!(
            "{:<20} | {:>10} | {:>10} | {:>8} | {:>8}",
            s.id,
            fmt_opt(s.metric.latest, 3),
            fmt_opt(s.metric.period_change_abs, 3),
            fmt_opt(s.metric.period_change_pct, 2),
            fmt_opt(s.metric.year_change_pct, 2),
        );
    }
    for w in &snap.warnings {
        println!("  ! {w}");
    }
}

/// Print the last `n` chart rows, one column per series.
pub fn print_chart_tail(chart: &ChartView, n: usize) {
    print!("{:<10}", "Period");
    for s in &chart.series {
        print!(" | {:>18}", s.id);
    }
    println!();
    for row in chart.rows.iter().rev().take(n).rev() {
        print!("{:<10}", row.label);
        for s in &chart.series {
            let v = row.values.get(&s.id).copied().flatten();
            print!(" | {:>18}", fmt_opt(v, 3));
        }
        println!();
    }
}

fn fmt_opt(v: Option<f64>, decimals: usize) -> String {
    v.map_or_else(|| "n/a".to_string(), |x| format!("{x:.decimals$}"))
}
