//! Structured per-row diagnostics.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    /// Row has no URL; sentinel written.
    MissingUrl,
    /// URL belongs to another site; row left untouched.
    ForeignDomain,
    /// Pricing written to the output columns.
    Updated,
    /// Page could not be fetched or priced; output columns left untouched.
    Failed,
    /// Writing the output columns failed part way.
    WriteFailed,
}

impl RowOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingUrl => "missing_url",
            Self::ForeignDomain => "foreign_domain",
            Self::Updated => "updated",
            Self::Failed => "failed",
            Self::WriteFailed => "write_failed",
        }
    }
}

impl fmt::Display for RowOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowLog {
    /// Zero-based data row index (header excluded).
    pub row_index: usize,
    pub url: Option<String>,
    pub outcome: RowOutcome,
    pub detail: Option<String>,
}

/// Receives one record per processed row.
pub trait RowReporter {
    fn report(&self, log: &RowLog);
}

/// Emits each row record as a `tracing` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl RowReporter for TracingReporter {
    fn report(&self, log: &RowLog) {
        let row = log.row_index + 1;
        let url = log.url.as_deref().unwrap_or_default();
        let detail = log.detail.as_deref().unwrap_or_default();
        let outcome = log.outcome.as_str();

        match log.outcome {
            RowOutcome::Updated => tracing::info!(row, url, outcome, detail, "row updated"),
            RowOutcome::ForeignDomain => {
                tracing::debug!(row, url, outcome, "row skipped, not a storefront URL");
            }
            RowOutcome::MissingUrl if log.detail.is_none() => {
                tracing::info!(row, outcome, "row has no URL");
            }
            RowOutcome::MissingUrl | RowOutcome::Failed | RowOutcome::WriteFailed => {
                tracing::warn!(row, url, outcome, detail, "row not updated");
            }
        }
    }
}

/// Row counts per outcome for one batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub rows: usize,
    pub missing_url: usize,
    pub foreign_domain: usize,
    pub updated: usize,
    pub failed: usize,
    pub write_failed: usize,
}

impl BatchSummary {
    pub fn record(&mut self, log: &RowLog) {
        self.rows += 1;
        match log.outcome {
            RowOutcome::MissingUrl => self.missing_url += 1,
            RowOutcome::ForeignDomain => self.foreign_domain += 1,
            RowOutcome::Updated => self.updated += 1,
            RowOutcome::Failed => self.failed += 1,
            RowOutcome::WriteFailed => self.write_failed += 1,
        }
    }

    /// Rows that reached the storefront.
    pub fn requests(&self) -> usize {
        self.updated + self.failed + self.write_failed
    }
}
