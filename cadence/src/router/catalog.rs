use cadence_core::{
    CadenceError, Capability, CatalogPage, CatalogQuery, CatalogReport, Dimensions,
};

use crate::Cadence;

impl Cadence {
    /// Run a catalog query against the first connector that answers it.
    ///
    /// Never fails outright: on error the report carries an empty page for the
    /// requested window and the error. Re-issuing the query is the retry path.
    /// A `limit` of zero is replaced by the configured catalog page limit.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "cadence::router",
            skip(self),
            fields(kind = query.kind()),
        )
    )]
    pub async fn catalog(&self, query: CatalogQuery) -> CatalogReport {
        let query = self.with_default_limit(query);
        let (offset, limit) = (query.offset(), query.limit());
        let res: Result<CatalogPage, CadenceError> = self
            .fetch_first(
                Capability::Catalog,
                format!("catalog {}", query.kind()),
                |c| {
                    c.as_catalog_provider()?;
                    let q = query.clone();
                    Some(async move {
                        match c.as_catalog_provider() {
                            Some(p) => p.catalog_page(&q).await,
                            None => Err(CadenceError::connector(
                                c.name(),
                                "missing catalog capability during call",
                            )),
                        }
                    })
                },
            )
            .await;

        match res {
            Ok(page) => CatalogReport { page, error: None },
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(kind = query.kind(), error = %e, "catalog query failed");
                CatalogReport {
                    page: CatalogPage::empty(offset, limit),
                    error: Some(e),
                }
            }
        }
    }

    /// Case-insensitive keyword search over identifiers, titles, units and
    /// dimension values.
    pub async fn search(&self, keyword: &str, limit: usize) -> CatalogReport {
        self.catalog(CatalogQuery::search(keyword, limit)).await
    }

    /// AND-combination of equality filters; empty values are ignored.
    pub async fn filter(&self, dimensions: Dimensions, limit: usize, offset: usize) -> CatalogReport {
        self.catalog(CatalogQuery::filter(dimensions, limit, offset))
            .await
    }

    /// One page of the full catalog, optionally filtered.
    pub async fn browse(
        &self,
        offset: usize,
        limit: usize,
        filters: Option<Dimensions>,
    ) -> CatalogReport {
        self.catalog(CatalogQuery::browse(offset, limit, filters))
            .await
    }

    fn with_default_limit(&self, query: CatalogQuery) -> CatalogQuery {
        if query.limit() != 0 {
            return query;
        }
        let limit = self.cfg.catalog_page_limit;
        match query {
            CatalogQuery::Search { keyword, .. } => CatalogQuery::Search { keyword, limit },
            CatalogQuery::Filter {
                dimensions, offset, ..
            } => CatalogQuery::Filter {
                dimensions,
                limit,
                offset,
            },
            CatalogQuery::Browse {
                offset, filters, ..
            } => CatalogQuery::Browse {
                offset,
                limit,
                filters,
            },
            other => other,
        }
    }
}
