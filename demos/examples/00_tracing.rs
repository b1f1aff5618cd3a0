use cadence::{Cadence, Periodicity, SeriesId};
use cadence_demos::common::get_connector;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,cadence=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let cadence = Cadence::builder().with_connector(get_connector()).build()?;

    // Series (fetched once, then served from the store)
    let cpi = SeriesId::from("CUUR0000SA0");
    let _ = cadence.series(&cpi, None).await?;
    let _ = cadence.series(&cpi, None).await?;

    // Comparison with one failing identifier, reported as a warning span event
    let mut cmp = cadence.comparison(Periodicity::Monthly);
    cmp.toggle(&cpi);
    cmp.toggle(&SeriesId::from("FAIL"));
    let snap = cadence.refresh(&mut cmp).await;
    tracing::info!(warnings = snap.warnings.len(), "comparison refreshed");

    // Catalog
    let _ = cadence.search("price", 5).await;

    Ok(())
}
