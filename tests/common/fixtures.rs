//! Test fixtures for integration tests.

#![allow(dead_code)]

use marketpick::candidate::Evaluation;
use marketpick::embedding::MockEmbedder;
use marketpick::listing::{RawListing, RawPrice};

pub const REQUEST: &str = "request";

pub const NEW_UNUSED: &str = "新品、未使用";

pub const MATCH_LEVELS: [&str; 5] = [
    "Excellent match",
    "Good match",
    "Partial match",
    "Weak match",
    "No match",
];

#[derive(Default)]
pub struct RawListingBuilder {
    title: Option<String>,
    price: Option<RawPrice>,
    condition: Option<String>,
    url: Option<String>,
}

impl RawListingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn price(mut self, price: impl Into<RawPrice>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn build(self) -> RawListing {
        RawListing {
            title: self.title.unwrap_or_else(|| "テスト商品".to_string()),
            price: self.price.unwrap_or(RawPrice::Amount(1000)),
            condition: self.condition.unwrap_or_else(|| NEW_UNUSED.to_string()),
            url: self
                .url
                .unwrap_or_else(|| "https://jp.mercari.com/item/m0".to_string()),
        }
    }
}

/// `n` listings with distinct titles and URLs at the given prices.
pub fn listings_at(prices: &[u64]) -> Vec<RawListing> {
    prices
        .iter()
        .enumerate()
        .map(|(i, &price)| {
            RawListingBuilder::new()
                .title(format!("商品{}", i))
                .price(price)
                .url(format!("https://jp.mercari.com/item/m{}", i))
                .build()
        })
        .collect()
}

/// Evaluation with one entry per level; titles are `Item {i}`.
pub fn evaluation_with_levels(levels: &[&str]) -> Evaluation {
    Evaluation {
        titles_translated: (0..levels.len()).map(|i| format!("Item {}", i)).collect(),
        match_levels: levels.iter().map(|l| l.to_string()).collect(),
        match_reasons: (0..levels.len()).map(|i| format!("reason {}", i)).collect(),
    }
}

/// Request along the first axis, every title at 60° from it (similarity 0.5).
pub fn half_similarity_embedder() -> MockEmbedder {
    MockEmbedder::new(2)
        .with_default(vec![0.5, 0.75f32.sqrt()])
        .with_vector(REQUEST, vec![1.0, 0.0])
}

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
