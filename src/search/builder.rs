use tracing::debug;
use url::Url;

use super::error::SearchError;
use super::params::SearchParams;

/// Builds the on-sale marketplace search URL for `params`.
///
/// Price bounds are truncated to whole currency units.
pub fn build_search_url(base: &str, params: &SearchParams) -> Result<Url, SearchError> {
    let mut url = Url::parse(base).map_err(|source| SearchError::InvalidBaseUrl {
        url: base.to_string(),
        source,
    })?;

    let keyword = params.native_query();
    if keyword.is_empty() {
        return Err(SearchError::EmptyKeywords);
    }

    let price_min = price_bound("price_min", params.filters.price_min)?;
    let price_max = price_bound("price_max", params.filters.price_max)?;

    {
        let mut query = url.query_pairs_mut();
        query.append_pair("keyword", &keyword);
        query.append_pair("status", "on_sale");
        query.append_pair("item_types", "mercari");
        if let Some(min) = price_min {
            query.append_pair("price_min", &min.to_string());
        }
        if let Some(max) = price_max {
            query.append_pair("price_max", &max.to_string());
        }
    }

    debug!(url = %url, "Built search URL");
    Ok(url)
}

fn price_bound(field: &'static str, value: Option<f64>) -> Result<Option<u64>, SearchError> {
    match value {
        None => Ok(None),
        Some(v) if v.is_finite() && v >= 0.0 => Ok(Some(v.trunc() as u64)),
        Some(v) => Err(SearchError::InvalidPriceBound { field, value: v }),
    }
}
