use crate::model::{Amount, ExportDate, Mapping};
use crate::Result;
use anyhow::Context;
use std::str::FromStr;

/// Represents a single data row from a Shopify Payouts export.
///
/// A payout is a transfer of the Shopify balance to a bank account. Only the
/// date and the net amount of the transfer matter; the per-charge detail
/// lives in the transactions export.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PayoutRecord {
    payout_date: ExportDate,
    total: Option<Amount>,
}

impl PayoutRecord {
    /// Extracts a `PayoutRecord` from a data row using the header mapping.
    pub fn from_row(mapping: &Mapping, row: &[String]) -> Result<Self> {
        let payout_date = ExportDate::from_str(mapping.field(PAYOUT_DATE_STR, row)?)
            .with_context(|| format!("Bad '{PAYOUT_DATE_STR}' value"))?;
        let total = Amount::from_cell(mapping.field(TOTAL_STR, row)?)
            .with_context(|| format!("Bad '{TOTAL_STR}' value"))?;
        Ok(Self { payout_date, total })
    }

    pub fn payout_date(&self) -> ExportDate {
        self.payout_date
    }

    /// The net amount transferred out of the Shopify balance.
    pub fn total(&self) -> Option<Amount> {
        self.total
    }
}

pub(super) const PAYOUT_DATE_STR: &str = "Payout Date";
pub(super) const TOTAL_STR: &str = "Total";
