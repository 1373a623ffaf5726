/// Reads the package quantity from the start of a product name
/// ("250 Capsules" gives 250).
///
/// Missing names, names that do not start with a digit and digit runs too
/// large for `u32` all yield `None`.
pub fn quantity_from_label_prefix(text: Option<&str>) -> Option<u32> {
    let text = text?;
    let digits_end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());

    if digits_end == 0 {
        return None;
    }

    text[..digits_end].parse::<u32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_digits_become_quantity() {
        assert_eq!(quantity_from_label_prefix(Some("250 Capsules")), Some(250));
        assert_eq!(quantity_from_label_prefix(Some("10ct Tablets")), Some(10));
        assert_eq!(quantity_from_label_prefix(Some("42")), Some(42));
    }

    #[test]
    fn non_digit_start_is_absent() {
        assert_eq!(quantity_from_label_prefix(Some("Capsules 250")), None);
        assert_eq!(quantity_from_label_prefix(Some(" 250 Capsules")), None);
        assert_eq!(quantity_from_label_prefix(Some("")), None);
    }

    #[test]
    fn missing_value_is_absent() {
        assert_eq!(quantity_from_label_prefix(None), None);
    }
}
