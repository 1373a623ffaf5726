use scraper::Html;

use crate::scraping::build_tier_list::element_text;
use crate::scraping::extract_currency_amount::currency_amount;
use crate::scraping::selectors;

/// Absolute price shown on the tier button whose minimum quantity equals
/// `quantity`.
///
/// Best effort: a missing button, label or amount yields `None`.
pub fn extract_price_for_quantity(document: &Html, quantity: u32) -> Option<String> {
    let Some(button) = document.select(&selectors::TIER_BUTTON).find(|button| {
        button
            .value()
            .attr(selectors::TIER_MIN_ATTR)
            .and_then(|min| min.trim().parse::<u32>().ok())
            == Some(quantity)
    }) else {
        tracing::debug!(quantity, "no tier button for requested quantity");
        return None;
    };

    let Some(label) = button.select(&selectors::TIER_DISCOUNT).next().map(element_text) else {
        tracing::debug!(quantity, "tier button has no discount label");
        return None;
    };

    let price = currency_amount(&label);
    if price.is_none() {
        tracing::debug!(quantity, label = %label, "tier label has no price");
    }
    price
}
