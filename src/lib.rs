//! Volume-tier price extraction for a single storefront, merged back into a
//! CSV product table keyed by URL.

pub mod config;
pub mod error;
pub mod pricing;
pub mod reconcile_rows;
pub mod row_report;
pub mod scraping;
pub mod utilities;

pub use error::{DatasetError, ScrapeError};
pub use pricing::{PricingRecord, PricingStatus, TierEntry};
pub use reconcile_rows::{ReconcileSettings, RowReconciler, RowTask};
pub use row_report::{BatchSummary, RowLog, RowOutcome, RowReporter, TracingReporter};
pub use utilities::dataset::Dataset;
pub use utilities::fetch_page::{HttpPageFetcher, PageFetcher};
