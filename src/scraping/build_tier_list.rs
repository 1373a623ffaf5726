use scraper::{ElementRef, Html};

use crate::pricing::TierEntry;
use crate::scraping::extract_tier_discount::discount_from_tier_label;
use crate::scraping::extract_tier_quantity::quantity_from_tier_label;
use crate::scraping::selectors;

/// Tiers found on a page, in document order, plus the baseline price row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TierList {
    pub entries: Vec<TierEntry>,
    /// Raw label of the row that shows a price instead of a percentage.
    pub fallback_price: Option<String>,
}

/// Walks the tier widget of a product page.
///
/// Returns `None` when the page has no tier container. Buttons missing the
/// quantity or discount label are skipped.
pub fn build_tier_list(document: &Html) -> Option<TierList> {
    let container = document.select(&selectors::TIER_CONTAINER).next()?;
    let mut tiers = TierList::default();

    for button in container.select(&selectors::TIER_BUTTON) {
        let (Some(quantity_elem), Some(discount_elem)) = (
            button.select(&selectors::TIER_QUANTITY).next(),
            button.select(&selectors::TIER_DISCOUNT).next(),
        ) else {
            tracing::debug!("tier button without quantity or discount label, skipping");
            continue;
        };

        let discount_label = element_text(discount_elem);
        let Some(discount_percent) = discount_from_tier_label(&discount_label) else {
            tiers.fallback_price = Some(discount_label);
            continue;
        };

        match quantity_from_tier_label(&element_text(quantity_elem)) {
            Some(quantity_threshold) if quantity_threshold > 0 && discount_percent > 0 => {
                tiers.entries.push(TierEntry {
                    quantity_threshold,
                    discount_percent,
                });
            }
            _ => {}
        }
    }

    Some(tiers)
}

/// Concatenated, trimmed text content of an element.
pub fn element_text(element: ElementRef) -> String {
    element.text().collect::<Vec<_>>().join("").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier_button(quantity: &str, discount: &str) -> String {
        format!(
            r#"<div class="tier-button"><div class="quantity-range">{quantity}</div><div class="discount-info">{discount}</div></div>"#
        )
    }

    fn page(buttons: &[String]) -> Html {
        Html::parse_document(&format!(
            r#"<html><body><div class="tier-buttons">{}</div></body></html>"#,
            buttons.concat()
        ))
    }

    #[test]
    fn page_without_container_has_no_tiers() {
        let document = Html::parse_document("<html><body><p>nothing</p></body></html>");
        assert_eq!(build_tier_list(&document), None);
    }

    #[test]
    fn collects_tiers_in_document_order() {
        let document = page(&[
            tier_button("Buy 10", "$9.50 (5%)"),
            tier_button("Buy 25", "$9.00 (10%)"),
        ]);

        let tiers = build_tier_list(&document).unwrap();
        assert_eq!(
            tiers.entries,
            vec![
                TierEntry { quantity_threshold: 10, discount_percent: 5 },
                TierEntry { quantity_threshold: 25, discount_percent: 10 },
            ]
        );
        assert_eq!(tiers.fallback_price, None);
    }

    #[test]
    fn price_row_becomes_fallback_not_tier() {
        let document = page(&[
            tier_button("Buy 1", "$29.99"),
            tier_button("Buy 10", "(5%)"),
        ]);

        let tiers = build_tier_list(&document).unwrap();
        assert_eq!(tiers.entries.len(), 1);
        assert_eq!(tiers.fallback_price.as_deref(), Some("$29.99"));
    }

    #[test]
    fn skips_incomplete_and_zero_rows() {
        let document = page(&[
            r#"<div class="tier-button"><div class="quantity-range">Buy 5</div></div>"#.to_string(),
            tier_button("Buy 0", "(5%)"),
            tier_button("Buy 20", "(0%)"),
            tier_button("Any amount", "(7%)"),
            tier_button("Buy 50", "(12.75%)"),
        ]);

        let tiers = build_tier_list(&document).unwrap();
        assert_eq!(
            tiers.entries,
            vec![TierEntry { quantity_threshold: 50, discount_percent: 12 }]
        );
        assert_eq!(tiers.fallback_price, None);
    }

    #[test]
    fn oversized_percentage_is_never_the_fallback_price() {
        let document = page(&[
            tier_button("Buy 1", "$29.99"),
            tier_button("Buy 9", "(99999999999%)"),
        ]);

        let tiers = build_tier_list(&document).unwrap();
        assert_eq!(tiers.fallback_price.as_deref(), Some("$29.99"));
        assert_eq!(
            tiers.entries,
            vec![TierEntry { quantity_threshold: 9, discount_percent: u32::MAX }]
        );
    }

    #[test]
    fn empty_container_yields_empty_list() {
        let tiers = build_tier_list(&page(&[])).unwrap();
        assert!(tiers.entries.is_empty());
    }
}
