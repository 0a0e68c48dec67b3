//! Date handling for Shopify exports.

use anyhow::Context;
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// A date taken from a Shopify export.
///
/// Shopify writes timestamps like `2023-07-15 23:11:02 -0400` in the
/// transactions export and bare dates like `2023-07-18` in the payouts
/// export. Only the date portion is significant, and YNAB wants it as
/// `MM/DD/YYYY`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ExportDate(NaiveDate);

impl ExportDate {
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl FromStr for ExportDate {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // The time and offset, when present, follow the first whitespace.
        let token = s.trim().split_whitespace().next().unwrap_or_default();
        let date = NaiveDate::parse_from_str(token, "%Y-%m-%d")
            .with_context(|| format!("Unable to parse date '{s}'"))?;
        Ok(Self(date))
    }
}

impl fmt::Display for ExportDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%m/%d/%Y"))
    }
}
