//! Canonical pricing record produced for one product page.

use std::fmt;

/// Written to the tier-schedule column for pages without a tier widget.
pub const NO_TIERS_MARKER: &str = "No tiers present";

/// One volume-discount rule: buy at least `quantity_threshold`, save
/// `discount_percent` percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierEntry {
    pub quantity_threshold: u32,
    pub discount_percent: u32,
}

impl fmt::Display for TierEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.quantity_threshold, self.discount_percent)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingStatus {
    Tiered,
    NonTiered,
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingRecord {
    pub regular_price: Option<String>,
    pub sales_price: Option<String>,
    pub tier_schedule: Vec<TierEntry>,
    pub status: PricingStatus,
}

impl PricingRecord {
    pub fn non_tiered(regular_price: Option<String>, sales_price: Option<String>) -> Self {
        Self {
            regular_price,
            sales_price,
            tier_schedule: Vec::new(),
            status: PricingStatus::NonTiered,
        }
    }

    pub fn tiered(regular_price: Option<String>, tier_schedule: Vec<TierEntry>) -> Self {
        Self {
            regular_price,
            sales_price: None,
            tier_schedule,
            status: PricingStatus::Tiered,
        }
    }

    /// A failed page carries no prices and no schedule, only the detail.
    pub fn failed(detail: impl Into<String>) -> Self {
        Self {
            regular_price: None,
            sales_price: None,
            tier_schedule: Vec::new(),
            status: PricingStatus::Error(detail.into()),
        }
    }

    pub fn error_detail(&self) -> Option<&str> {
        match &self.status {
            PricingStatus::Error(detail) => Some(detail),
            _ => None,
        }
    }

    /// Value for the tier-schedule column, or `None` for failed pages.
    ///
    /// A tiered page without any valid tier yields an empty string, which is
    /// distinct from the marker used for non-tiered pages.
    pub fn tier_column_value(&self) -> Option<String> {
        match self.status {
            PricingStatus::Tiered => Some(serialize_tier_schedule(&self.tier_schedule)),
            PricingStatus::NonTiered => Some(NO_TIERS_MARKER.to_string()),
            PricingStatus::Error(_) => None,
        }
    }
}

/// Joins tiers as `quantity:percent` tokens in document order.
pub fn serialize_tier_schedule(entries: &[TierEntry]) -> String {
    entries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
