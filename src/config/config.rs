use std::path::Path;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

pub const DEFAULT_SETTINGS_FILE: &str = "Settings.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub storefront: StorefrontConfig,
    pub columns: ColumnConfig,
    pub file: FileConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorefrontConfig {
    /// Host fragment identifying the storefront, e.g. `pureleafkratom`.
    pub domain: String,
    pub request_timeout_secs: u64,
    pub request_delay_ms: u64,
    pub user_agent: String,
}

/// Column layout of the input table.
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnConfig {
    pub url_index: usize,
    pub name: String,
    pub regular_price: String,
    pub sale_price: String,
    pub tier_schedule: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FileConfig {
    pub processing_suffix: String,
}

/// Built-in settings, before any file or environment source.
fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("storefront.domain", "pureleafkratom")?
        .set_default("storefront.request_timeout_secs", 10)?
        .set_default("storefront.request_delay_ms", 3000)?
        .set_default(
            "storefront.user_agent",
            concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")),
        )?
        .set_default("columns.url_index", 0)?
        .set_default("columns.name", "Name")?
        .set_default("columns.regular_price", "PLK Regular price")?
        .set_default("columns.sale_price", "PLK Sale price")?
        .set_default("columns.tier_schedule", "PLK Percentage Tiered Prices")?
        .set_default("file.processing_suffix", "_processed")
}

/// Loads defaults, then the optional settings file, then `APP_*` variables
/// (`APP_STOREFRONT__REQUEST_DELAY_MS=500`).
pub fn load_config(settings_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let settings_file = match settings_path {
        Some(path) => File::from(path).required(true),
        None => File::new(DEFAULT_SETTINGS_FILE, config::FileFormat::Toml).required(false),
    };

    with_defaults()?
        .add_source(settings_file)
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?
        .try_deserialize::<AppConfig>()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_without_settings_file() {
        let config: AppConfig = with_defaults()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.storefront.domain, "pureleafkratom");
        assert_eq!(config.storefront.request_timeout_secs, 10);
        assert_eq!(config.columns.url_index, 0);
        assert_eq!(config.columns.name, "Name");
        assert_eq!(config.file.processing_suffix, "_processed");
    }

    #[test]
    fn settings_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[storefront]\nrequest_delay_ms = 0\n\n[columns]\nregular_price = \"Regular\""
        )
        .unwrap();

        let config: AppConfig = with_defaults()
            .unwrap()
            .add_source(File::from(file.path()))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.storefront.request_delay_ms, 0);
        assert_eq!(config.columns.regular_price, "Regular");
        assert_eq!(config.columns.sale_price, "PLK Sale price");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        assert!(load_config(Some(Path::new("/nonexistent/settings.toml"))).is_err());
    }
}
