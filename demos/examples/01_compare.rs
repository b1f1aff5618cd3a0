use cadence::{Cadence, PeriodKey, Periodicity, SeriesId};
use cadence_demos::common::{get_connector, init_tracing, print_chart_tail, print_summaries};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // 1. Setup the engine.
    let cadence = Cadence::builder().with_connector(get_connector()).build()?;

    // 2. Select the series to compare.
    let mut cmp = cadence.comparison(Periodicity::Monthly);
    for id in ["CUUR0000SA0", "LNS14000000", "LNS11300000"] {
        cmp.toggle(&SeriesId::from(id));
    }

    // 3. Load and show the latest period.
    let snap = cadence.refresh(&mut cmp).await;
    print_summaries(&snap);
    println!();
    print_chart_tail(&snap.chart, 4);

    // 4. Time travel: freeze on mid-2023, then on October (a placeholder month
    //    for participation).
    for month in [6, 10] {
        cmp.freeze(PeriodKey::monthly(2023, month)?);
        let snap = cadence.snapshot(&mut cmp).await;
        print_summaries(&snap);
    }

    // 5. A period outside the data drops back to live mode.
    cmp.freeze(PeriodKey::monthly(2019, 1)?);
    let snap = cadence.snapshot(&mut cmp).await;
    print_summaries(&snap);

    Ok(())
}
