use cadence_core::{Periodicity, SeriesMeta};

/// Catalog entries, one per fixture series, in publication-table order.
pub fn entries() -> Vec<SeriesMeta> {
    vec![
        SeriesMeta::new(
            "CUUR0000SA0",
            "CPI-U, all items in U.S. city average",
            Periodicity::Monthly,
        )
        .with_unit("index 1982-84=100")
        .with_dimension("survey", "CU")
        .with_dimension("area", "0000")
        .with_dimension("item", "SA0"),
        SeriesMeta::new(
            "CUSR0000SA0",
            "CPI-U, all items in U.S. city average",
            Periodicity::Monthly,
        )
        .with_unit("index 1982-84=100")
        .seasonally_adjusted(true)
        .with_dimension("survey", "CU")
        .with_dimension("area", "0000")
        .with_dimension("item", "SA0"),
        SeriesMeta::new(
            "LNS14000000",
            "Unemployment rate, 16 years and over",
            Periodicity::Monthly,
        )
        .with_unit("percent")
        .seasonally_adjusted(true)
        .with_dimension("survey", "LN"),
        SeriesMeta::new(
            "LNS11300000",
            "Labor force participation rate",
            Periodicity::Monthly,
        )
        .with_unit("percent")
        .seasonally_adjusted(true)
        .with_dimension("survey", "LN"),
        SeriesMeta::new(
            "CIU1020000000000I",
            "Employment cost index, wages and salaries, civilian workers",
            Periodicity::Quarterly,
        )
        .with_unit("index Dec 2005=100")
        .with_dimension("survey", "CI"),
    ]
}
