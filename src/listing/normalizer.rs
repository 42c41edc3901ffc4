use tracing::debug;

use super::error::ListingError;
use super::types::{Listing, RawListing, RawPrice};

/// Thousands separators stripped from textual prices (ASCII and full-width comma).
const THOUSANDS_SEPARATORS: [char; 2] = [',', '，'];

/// Coerces a raw price into an integer amount.
///
/// Fractional, negative and non-finite numbers are rejected rather than rounded.
/// `index` is only used to identify the listing in the error.
pub fn normalize_price(index: usize, price: &RawPrice) -> Result<u64, ListingError> {
    let amount = match price {
        RawPrice::Amount(amount) => Some(*amount),
        RawPrice::Number(value) => whole_amount(*value),
        RawPrice::Text(text) => {
            let cleaned: String = text
                .trim()
                .chars()
                .filter(|c| !THOUSANDS_SEPARATORS.contains(c))
                .collect();
            cleaned.parse::<u64>().ok()
        }
    };

    amount.ok_or_else(|| ListingError::MalformedPrice {
        index,
        value: price.display_value(),
    })
}

fn whole_amount(value: f64) -> Option<u64> {
    let representable = value.is_finite() && value >= 0.0 && value < u64::MAX as f64;
    (representable && value.fract() == 0.0).then_some(value as u64)
}

pub fn normalize_listing(index: usize, raw: &RawListing) -> Result<Listing, ListingError> {
    let price = normalize_price(index, &raw.price)?;

    Ok(Listing {
        title_native: raw.title.clone(),
        price,
        condition_label: raw.condition.clone(),
        url: raw.url.clone(),
    })
}

/// Normalizes a whole batch, failing on the first malformed price.
///
/// The input slice is left untouched; callers may keep using the raw records.
pub fn normalize_listings(raw: &[RawListing]) -> Result<Vec<Listing>, ListingError> {
    let listings = raw
        .iter()
        .enumerate()
        .map(|(index, listing)| normalize_listing(index, listing))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = listings.len(), "Normalized listing batch");

    Ok(listings)
}
