use std::sync::LazyLock;

use regex::Regex;

static BUY_QUANTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Buy (\d+)").expect("valid tier quantity regex"));

/// Extracts N from a tier label such as "Buy 10".
pub fn quantity_from_tier_label(text: &str) -> Option<u32> {
    BUY_QUANTITY
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
}
