use scraper::Html;

use crate::error::ScrapeError;
use crate::pricing::PricingRecord;
use crate::scraping::build_tier_list::build_tier_list;
use crate::scraping::extract_price_for_quantity::extract_price_for_quantity;
use crate::scraping::extract_prices::{extract_non_tiered_prices, extract_tiered_regular_price};
use crate::utilities::fetch_page::PageFetcher;

/// Fetches a product page and resolves its pricing record.
///
/// Never fails: transport and parsing problems come back as a record with
/// an error status.
pub async fn scrape_pricing<F: PageFetcher>(
    fetcher: &F,
    url: &str,
    requested_quantity: Option<u32>,
) -> PricingRecord {
    let body = match fetcher.fetch(url).await {
        Ok(body) => body,
        Err(e) => return PricingRecord::failed(e.to_string()),
    };

    price_page(&body, requested_quantity).unwrap_or_else(|e| PricingRecord::failed(e.to_string()))
}

/// Resolves the pricing record of an already fetched page.
pub fn price_page(html: &str, requested_quantity: Option<u32>) -> Result<PricingRecord, ScrapeError> {
    if html.trim().is_empty() {
        return Err(ScrapeError::Parsing {
            reason: "empty response body".to_string(),
        });
    }

    let document = Html::parse_document(html);

    // No tier widget: plain product page
    let Some(tiers) = build_tier_list(&document) else {
        let prices = extract_non_tiered_prices(&document)?;
        return Ok(PricingRecord::non_tiered(
            prices.regular_price,
            prices.sales_price,
        ));
    };

    let mut regular_price = extract_tiered_regular_price(&tiers);
    if let Some(quantity) = requested_quantity {
        if let Some(price) = extract_price_for_quantity(&document, quantity) {
            regular_price = Some(price);
        }
    }

    Ok(PricingRecord::tiered(regular_price, tiers.entries))
}
