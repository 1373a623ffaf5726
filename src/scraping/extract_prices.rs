use scraper::Html;

use crate::error::ScrapeError;
use crate::scraping::build_tier_list::{element_text, TierList};
use crate::scraping::extract_currency_amount::canonical_price;
use crate::scraping::selectors;

/// Regular and promotional price of a page, currency stripped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedPrices {
    pub regular_price: Option<String>,
    pub sales_price: Option<String>,
}

/// Resolves prices on a page without a tier widget.
///
/// When a non-sale price is shown the main price is the promotional one.
/// The main price element is required.
pub fn extract_non_tiered_prices(document: &Html) -> Result<ResolvedPrices, ScrapeError> {
    let main_price = document
        .select(&selectors::MAIN_PRICE)
        .next()
        .map(element_text)
        .ok_or_else(|| ScrapeError::PageStructure {
            selector: selectors::MAIN_PRICE_CSS.to_string(),
        })?;

    let non_sale_price = document
        .select(&selectors::NON_SALE_PRICE)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty());

    let prices = match non_sale_price {
        Some(non_sale_price) => ResolvedPrices {
            regular_price: canonical_price(&non_sale_price),
            sales_price: canonical_price(&main_price),
        },
        None => ResolvedPrices {
            regular_price: canonical_price(&main_price),
            sales_price: None,
        },
    };

    Ok(prices)
}

/// Default regular price of a tiered page: the baseline row of the widget.
pub fn extract_tiered_regular_price(tiers: &TierList) -> Option<String> {
    tiers.fallback_price.as_deref().and_then(canonical_price)
}
