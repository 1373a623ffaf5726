//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use tier_price_sync::config::ColumnConfig;
use tier_price_sync::{Dataset, PageFetcher, ReconcileSettings, RowLog, RowReporter, ScrapeError};

pub const REGULAR: &str = "PLK Regular price";
pub const SALE: &str = "PLK Sale price";
pub const TIERS: &str = "PLK Percentage Tiered Prices";

/// Serves canned pages and remembers every requested URL.
#[derive(Default)]
pub struct FakeFetcher {
    pages: HashMap<String, Result<String, ScrapeError>>,
    pub requests: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn with_page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), Ok(html.to_string()));
        self
    }

    pub fn with_failure(mut self, url: &str, reason: &str) -> Self {
        self.pages.insert(
            url.to_string(),
            Err(ScrapeError::Transport {
                url: url.to_string(),
                reason: reason.to_string(),
            }),
        );
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl PageFetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        self.requests.lock().unwrap().push(url.to_string());
        self.pages.get(url).cloned().unwrap_or_else(|| {
            Err(ScrapeError::Transport {
                url: url.to_string(),
                reason: "HTTP status 404 Not Found".to_string(),
            })
        })
    }
}

#[derive(Default)]
pub struct RecordingReporter {
    pub logs: Mutex<Vec<RowLog>>,
}

impl RecordingReporter {
    pub fn logs(&self) -> Vec<RowLog> {
        self.logs.lock().unwrap().clone()
    }
}

impl RowReporter for RecordingReporter {
    fn report(&self, log: &RowLog) {
        self.logs.lock().unwrap().push(log.clone());
    }
}

pub fn settings(domain: &str, request_delay_ms: u64) -> ReconcileSettings {
    ReconcileSettings {
        domain: domain.to_string(),
        request_delay_ms,
        columns: ColumnConfig {
            url_index: 0,
            name: "Name".to_string(),
            regular_price: REGULAR.to_string(),
            sale_price: SALE.to_string(),
            tier_schedule: TIERS.to_string(),
        },
    }
}

/// Table with `URL`, `Name` and `Notes` columns.
pub fn dataset(rows: &[(&str, &str)]) -> Dataset {
    Dataset::new(
        vec!["URL".into(), "Name".into(), "Notes".into()],
        rows.iter()
            .map(|(url, name)| vec![url.to_string(), name.to_string(), "keep me".to_string()])
            .collect(),
    )
}

pub fn column(dataset: &Dataset, row_index: usize, name: &str) -> Option<String> {
    dataset.named_cell(row_index, name).map(str::to_string)
}

pub const SALE_PAGE: &str = r#"
    <html><body>
      <span data-product-non-sale-price-without-tax="" class="price price--non-sale">$13.49</span>
      <span data-product-price-without-tax="" class="price price--withoutTax price--main _hasSale">$4.89</span>
    </body></html>"#;

pub const PLAIN_PAGE: &str = r#"
    <html><body>
      <span class="price price--withoutTax price--main">$21.49 - $298.99</span>
    </body></html>"#;

pub const TIERED_PAGE: &str = r#"
    <html><body>
      <div class="tier-buttons">
        <div class="tier-button" data-min="1">
          <div class="quantity-range">Buy 1</div>
          <div class="discount-info">$29.99</div>
        </div>
        <div class="tier-button" data-min="10">
          <div class="quantity-range">Buy 10</div>
          <div class="discount-info">$28.49 (5%)</div>
        </div>
        <div class="tier-button" data-min="25">
          <div class="quantity-range">Buy 25</div>
          <div class="discount-info">$26.99 (10%)</div>
        </div>
      </div>
    </body></html>"#;
