use crate::{CatalogPage, CatalogQuery, Dimensions, SeriesMeta};

/// True when `meta` satisfies every constraint in `dims`.
///
/// Values are compared after trimming; an empty required value places no
/// constraint. A field the entry does not carry fails a non-empty constraint.
#[must_use]
pub fn matches_dimensions(meta: &SeriesMeta, dims: &Dimensions) -> bool {
    dims.iter().all(|(field, want)| {
        let want = want.trim();
        want.is_empty()
            || meta
                .dimension(field)
                .is_some_and(|have| have.trim() == want)
    })
}

/// Evaluate `query` over an in-memory list of catalog entries.
///
/// Matching entries keep the order of `entries`. `total` counts all matches;
/// `items` holds the `limit`-sized window starting at the query's offset.
/// An empty keyword matches every entry.
#[must_use]
pub fn evaluate(entries: &[SeriesMeta], query: &CatalogQuery) -> CatalogPage {
    let (offset, limit) = (query.offset(), query.limit());
    let matched: Vec<&SeriesMeta> = match query {
        CatalogQuery::Search { keyword, .. } => {
            let needle = keyword.trim().to_lowercase();
            entries
                .iter()
                .filter(|m| needle.is_empty() || m.matches_keyword(&needle))
                .collect()
        }
        CatalogQuery::Filter { dimensions, .. } => entries
            .iter()
            .filter(|m| matches_dimensions(m, dimensions))
            .collect(),
        CatalogQuery::Browse { filters, .. } => entries
            .iter()
            .filter(|m| filters.as_ref().is_none_or(|d| matches_dimensions(m, d)))
            .collect(),
        _ => return CatalogPage::empty(offset, limit),
    };

    CatalogPage {
        total: matched.len(),
        items: matched
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect(),
        offset,
        limit,
    }
}
