use reqwest::Url;

/// Whether `url` points at the storefront whose host contains `domain`.
///
/// URLs that do not parse are never recognized.
pub fn is_storefront_url(url: &str, domain: &str) -> bool {
    Url::parse(url.trim())
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_ascii_lowercase))
        .is_some_and(|host| host.contains(&domain.to_ascii_lowercase()))
}
