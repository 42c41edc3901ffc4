use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionFilter {
    New,
    Used,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<ConditionFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Keywords and filters extracted from a shopping request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchParams {
    /// English keywords, kept for logging and display.
    #[serde(default)]
    pub keywords_en: Vec<String>,
    /// Marketplace-language keywords; these drive the search.
    pub keywords_ja: Vec<String>,
    #[serde(default)]
    pub filters: SearchFilters,
}

impl SearchParams {
    /// Native keywords joined by single spaces, blanks dropped.
    pub fn native_query(&self) -> String {
        self.keywords_ja
            .iter()
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
