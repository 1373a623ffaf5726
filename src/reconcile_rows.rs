//! Drives the pricing engine over every row of the dataset.

use std::cell::Cell;

use crate::config::{AppConfig, ColumnConfig};
use crate::error::DatasetError;
use crate::pricing::PricingRecord;
use crate::row_report::{BatchSummary, RowLog, RowOutcome, RowReporter};
use crate::scraping::extract_name_quantity::quantity_from_label_prefix;
use crate::scraping::scrape_pricing::scrape_pricing;
use crate::utilities::dataset::Dataset;
use crate::utilities::fetch_page::PageFetcher;
use crate::utilities::request_delay::request_delay;
use crate::utilities::storefront_url::is_storefront_url;

pub const NO_URL_SENTINEL: &str = "No URL provided";

/// Work item for one dataset row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowTask {
    pub row_index: usize,
    pub url: Option<String>,
    pub requested_quantity: Option<u32>,
}

impl RowTask {
    pub fn from_row(dataset: &Dataset, row_index: usize, columns: &ColumnConfig) -> Self {
        let url = dataset
            .cell(row_index, columns.url_index)
            .map(|url| url.trim().to_string());
        let requested_quantity =
            quantity_from_label_prefix(dataset.named_cell(row_index, &columns.name))
                .filter(|quantity| *quantity > 0);

        Self {
            row_index,
            url,
            requested_quantity,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReconcileSettings {
    /// Host fragment of the storefront; other URLs are passed through.
    pub domain: String,
    pub request_delay_ms: u64,
    pub columns: ColumnConfig,
}

impl From<&AppConfig> for ReconcileSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            domain: config.storefront.domain.clone(),
            request_delay_ms: config.storefront.request_delay_ms,
            columns: config.columns.clone(),
        }
    }
}

/// Sequential row processor; the only writer of the dataset.
pub struct RowReconciler<'a, F, R> {
    fetcher: &'a F,
    reporter: &'a R,
    settings: ReconcileSettings,
    /// Set once a storefront page has been requested.
    has_fetched: Cell<bool>,
}

impl<'a, F: PageFetcher, R: RowReporter> RowReconciler<'a, F, R> {
    pub fn new(fetcher: &'a F, reporter: &'a R, settings: ReconcileSettings) -> Self {
        Self {
            fetcher,
            reporter,
            settings,
            has_fetched: Cell::new(false),
        }
    }

    /// Processes every row in order. A row's failure never stops the run.
    pub async fn run(&self, dataset: &mut Dataset) -> BatchSummary {
        let mut summary = BatchSummary::default();

        for row_index in 0..dataset.len() {
            let task = RowTask::from_row(dataset, row_index, &self.settings.columns);
            let log = self.process_row(dataset, task).await;

            self.reporter.report(&log);
            summary.record(&log);
        }

        summary
    }

    pub async fn process_row(&self, dataset: &mut Dataset, task: RowTask) -> RowLog {
        let row_index = task.row_index;

        let Some(url) = task.url else {
            let detail = self
                .write_missing_url(dataset, row_index)
                .err()
                .map(|e| e.to_string());
            return RowLog {
                row_index,
                url: None,
                outcome: RowOutcome::MissingUrl,
                detail,
            };
        };

        if !is_storefront_url(&url, &self.settings.domain) {
            return RowLog {
                row_index,
                url: Some(url),
                outcome: RowOutcome::ForeignDomain,
                detail: None,
            };
        }

        tracing::debug!(
            row = row_index + 1,
            url = %url,
            quantity = ?task.requested_quantity,
            "pricing row"
        );

        // Throttle between storefront requests, never after the last one.
        if self.has_fetched.replace(true) {
            request_delay(self.settings.request_delay_ms).await;
        }

        let record = scrape_pricing(self.fetcher, &url, task.requested_quantity).await;

        let (outcome, detail) = match record.error_detail() {
            Some(detail) => (RowOutcome::Failed, detail.to_string()),
            None => match self.write_pricing(dataset, row_index, &record) {
                Ok(()) => (RowOutcome::Updated, describe(&record)),
                Err(e) => (RowOutcome::WriteFailed, format!("{e} ({})", describe(&record))),
            },
        };

        RowLog {
            row_index,
            url: Some(url),
            outcome,
            detail: Some(detail),
        }
    }

    fn write_missing_url(&self, dataset: &mut Dataset, row_index: usize) -> Result<(), DatasetError> {
        let columns = &self.settings.columns;

        let regular_column = dataset.ensure_column(&columns.regular_price);
        dataset.set_cell(row_index, regular_column, NO_URL_SENTINEL)?;

        let tier_column = dataset.ensure_column(&columns.tier_schedule);
        dataset.set_cell(row_index, tier_column, NO_URL_SENTINEL)
    }

    /// Writes a resolved record. Cells written before a failure stay.
    ///
    /// With a promotional price the storefront's sale price goes to the
    /// regular-price column and the list price to the sale-price column.
    fn write_pricing(
        &self,
        dataset: &mut Dataset,
        row_index: usize,
        record: &PricingRecord,
    ) -> Result<(), DatasetError> {
        let columns = &self.settings.columns;

        match (&record.sales_price, &record.regular_price) {
            (Some(sales_price), Some(regular_price)) => {
                let regular_column = dataset.ensure_column(&columns.regular_price);
                dataset.set_cell(row_index, regular_column, strip_currency(sales_price))?;

                let sale_column = dataset.ensure_column(&columns.sale_price);
                dataset.set_cell(row_index, sale_column, strip_currency(regular_price))?;
            }
            (_, Some(regular_price)) => {
                let regular_column = dataset.ensure_column(&columns.regular_price);
                dataset.set_cell(row_index, regular_column, strip_currency(regular_price))?;
            }
            _ => {}
        }

        if let Some(tiers) = record.tier_column_value() {
            let tier_column = dataset.ensure_column(&columns.tier_schedule);
            dataset.set_cell(row_index, tier_column, tiers)?;
        }

        Ok(())
    }
}

fn strip_currency(price: &str) -> String {
    price.replace('$', "").trim().to_string()
}

fn describe(record: &PricingRecord) -> String {
    format!(
        "regular={} sale={} tiers={}",
        record.regular_price.as_deref().unwrap_or("-"),
        record.sales_price.as_deref().unwrap_or("-"),
        record.tier_column_value().unwrap_or_default()
    )
}
