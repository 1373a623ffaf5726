//! CSS selectors for the storefront product page.
//!
//! Update this file when the theme markup changes.

use std::sync::LazyLock;

use scraper::Selector;

pub const TIER_CONTAINER_CSS: &str = "div.tier-buttons";
pub const MAIN_PRICE_CSS: &str = "span.price.price--withoutTax.price--main";
pub const NON_SALE_PRICE_CSS: &str = "span.price.price--non-sale";

/// Minimum-quantity attribute on each tier button.
pub const TIER_MIN_ATTR: &str = "data-min";

fn compile(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e}"))
}

/// Wrapper around the tier buttons; its presence makes a page tiered.
pub static TIER_CONTAINER: LazyLock<Selector> = LazyLock::new(|| compile(TIER_CONTAINER_CSS));

pub static TIER_BUTTON: LazyLock<Selector> = LazyLock::new(|| compile("div.tier-button"));

/// "Buy 10" label inside a tier button.
pub static TIER_QUANTITY: LazyLock<Selector> = LazyLock::new(|| compile("div.quantity-range"));

/// "(5%)" label, or the baseline price on the fallback row.
pub static TIER_DISCOUNT: LazyLock<Selector> = LazyLock::new(|| compile("div.discount-info"));

pub static MAIN_PRICE: LazyLock<Selector> = LazyLock::new(|| compile(MAIN_PRICE_CSS));

pub static NON_SALE_PRICE: LazyLock<Selector> = LazyLock::new(|| compile(NON_SALE_PRICE_CSS));
