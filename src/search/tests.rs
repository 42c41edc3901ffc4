use super::*;
use crate::constants::DEFAULT_SEARCH_BASE_URL;

fn params(keywords: &[&str]) -> SearchParams {
    SearchParams {
        keywords_en: vec!["nintendo".to_string()],
        keywords_ja: keywords.iter().map(|k| k.to_string()).collect(),
        filters: SearchFilters::default(),
    }
}

fn query_value(url: &url::Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

#[test]
fn test_url_has_keyword_and_fixed_params() {
    let url = build_search_url(DEFAULT_SEARCH_BASE_URL, &params(&["任天堂", "スイッチ"])).unwrap();

    assert_eq!(url.host_str(), Some("jp.mercari.com"));
    assert_eq!(url.path(), "/search");
    assert_eq!(query_value(&url, "keyword").as_deref(), Some("任天堂 スイッチ"));
    assert_eq!(query_value(&url, "status").as_deref(), Some("on_sale"));
    assert_eq!(query_value(&url, "item_types").as_deref(), Some("mercari"));
    assert_eq!(query_value(&url, "price_min"), None);
    assert_eq!(query_value(&url, "price_max"), None);
}

#[test]
fn test_price_bounds_are_truncated() {
    let mut p = params(&["カメラ"]);
    p.filters.price_min = Some(5000.0);
    p.filters.price_max = Some(19999.9);

    let url = build_search_url(DEFAULT_SEARCH_BASE_URL, &p).unwrap();

    assert_eq!(query_value(&url, "price_min").as_deref(), Some("5000"));
    assert_eq!(query_value(&url, "price_max").as_deref(), Some("19999"));
}

#[test]
fn test_blank_keywords_are_dropped() {
    let url = build_search_url(DEFAULT_SEARCH_BASE_URL, &params(&[" ", "カメラ", ""])).unwrap();
    assert_eq!(query_value(&url, "keyword").as_deref(), Some("カメラ"));
}

#[test]
fn test_empty_keywords_rejected() {
    let err = build_search_url(DEFAULT_SEARCH_BASE_URL, &params(&["  "])).unwrap_err();
    assert!(matches!(err, SearchError::EmptyKeywords));
}

#[test]
fn test_invalid_base_url_rejected() {
    let err = build_search_url("not a url", &params(&["カメラ"])).unwrap_err();
    assert!(matches!(err, SearchError::InvalidBaseUrl { .. }));
}

#[test]
fn test_negative_price_bound_rejected() {
    let mut p = params(&["カメラ"]);
    p.filters.price_min = Some(-1.0);

    let err = build_search_url(DEFAULT_SEARCH_BASE_URL, &p).unwrap_err();
    assert!(matches!(
        err,
        SearchError::InvalidPriceBound {
            field: "price_min",
            ..
        }
    ));
}

#[test]
fn test_params_deserialize_extraction_output() {
    let json = r#"{
        "keywords_en": ["switch"],
        "keywords_ja": ["スイッチ"],
        "filters": {"condition": "used", "price_max": 30000}
    }"#;

    let p: SearchParams = serde_json::from_str(json).unwrap();

    assert_eq!(p.filters.condition, Some(ConditionFilter::Used));
    assert_eq!(p.filters.price_max, Some(30000.0));
    assert_eq!(p.filters.brand, None);
}

#[test]
fn test_filters_are_optional() {
    let p: SearchParams = serde_json::from_str(r#"{"keywords_ja": ["スイッチ"]}"#).unwrap();
    assert_eq!(p.filters, SearchFilters::default());
    assert!(p.keywords_en.is_empty());
}
