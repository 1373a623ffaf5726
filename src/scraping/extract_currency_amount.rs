use std::sync::LazyLock;

use regex::Regex;

static DOLLAR_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$(\d+\.?\d*)").expect("valid currency regex"));

/// Extracts the amount after the currency symbol, keeping only the low end
/// of a range: "$21.49 - $298.99" gives "21.49".
pub fn currency_amount(text: &str) -> Option<String> {
    let first_segment = first_range_segment(text);
    if first_segment.is_empty() {
        return None;
    }

    DOLLAR_AMOUNT
        .captures(first_segment)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Text before the first range separator, trimmed.
pub fn first_range_segment(text: &str) -> &str {
    text.split('-').next().unwrap_or_default().trim()
}

/// Canonical decimal text for a displayed price.
///
/// Prefers the `$amount` pattern and falls back to the first range segment
/// with the currency symbol removed. Blank results are absent.
pub fn canonical_price(text: &str) -> Option<String> {
    currency_amount(text)
        .or_else(|| Some(first_range_segment(text).replace('$', "").trim().to_string()))
        .filter(|price| !price.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_amount() {
        assert_eq!(currency_amount("$25.99").as_deref(), Some("25.99"));
        assert_eq!(currency_amount("Now $7").as_deref(), Some("7"));
    }

    #[test]
    fn range_keeps_low_end() {
        assert_eq!(currency_amount("$21.49 - $298.99").as_deref(), Some("21.49"));
        assert_eq!(currency_amount("$5-$9").as_deref(), Some("5"));
    }

    #[test]
    fn no_amount_is_absent() {
        assert_eq!(currency_amount(""), None);
        assert_eq!(currency_amount("   "), None);
        assert_eq!(currency_amount("(10%)"), None);
        assert_eq!(currency_amount("- $12.00"), None);
    }

    #[test]
    fn canonical_price_strips_symbol() {
        assert_eq!(canonical_price("$13.49").as_deref(), Some("13.49"));
        assert_eq!(canonical_price(" $4.89 - $9.99 ").as_deref(), Some("4.89"));
        assert_eq!(canonical_price("29.99").as_deref(), Some("29.99"));
        assert_eq!(canonical_price(" $ "), None);
    }
}
