use std::collections::BTreeMap;

use cadence::{Cadence, CatalogReport};
use cadence_demos::common::get_connector;

fn print_report(title: &str, report: &CatalogReport) {
    println!("\n## {title}");
    if let Some(e) = &report.error {
        println!("  error: {e}");
        return;
    }
    for m in &report.page.items {
        println!(
            "  {:<20} {:<10} {}",
            m.id,
            m.periodicity.as_str(),
            m.title
        );
    }
    println!(
        "  ({} of {} matching{})",
        report.page.items.len(),
        report.page.total,
        if report.page.has_more() { ", more available" } else { "" }
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cadence = Cadence::builder().with_connector(get_connector()).build()?;

    print_report("Search: \"rate\"", &cadence.search("rate", 10).await);

    let mut dims = BTreeMap::new();
    dims.insert("survey".to_string(), "CU".to_string());
    dims.insert("seasonal".to_string(), "U".to_string());
    print_report(
        "Filter: survey=CU, seasonal=U",
        &cadence.filter(dims, 10, 0).await,
    );

    // Page through the whole catalog two entries at a time.
    let mut offset = 0;
    loop {
        let report = cadence.browse(offset, 2, None).await;
        print_report(&format!("Browse from {offset}"), &report);
        if !report.page.has_more() {
            break;
        }
        offset += report.page.items.len();
    }

    // A failing catalog query returns an empty page and the error.
    print_report("Search: FAIL", &cadence.search("FAIL", 10).await);

    Ok(())
}
