pub mod build_tier_list;
pub mod extract_currency_amount;
pub mod extract_name_quantity;
pub mod extract_price_for_quantity;
pub mod extract_prices;
pub mod extract_tier_discount;
pub mod extract_tier_quantity;
pub mod scrape_pricing;
pub mod selectors;
