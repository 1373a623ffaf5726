use std::sync::LazyLock;

use regex::Regex;

static PERCENT_IN_PARENS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\((\d+)(?:\.\d+)?%\)").expect("valid tier discount regex")
});

/// Extracts the discount from a label such as "(25%)".
///
/// Fractional percentages are floored: "(3.99%)" gives 3. Text without a
/// parenthesized percentage is not a discount. Values too large for `u32`
/// saturate, so a matched percentage is always `Some`.
pub fn discount_from_tier_label(text: &str) -> Option<u32> {
    PERCENT_IN_PARENS
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().parse::<u32>().unwrap_or(u32::MAX))
}
