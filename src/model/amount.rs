//! Amount type for monetary values taken from bank exports.
//!
//! Shopify writes plain numbers like `-12.34`, but exports that have passed
//! through a spreadsheet can carry a dollar sign and thousands separators.
//! `Amount` parses either form and remembers which it saw, so values pass
//! through to the output unchanged.

use anyhow::{bail, Context};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Represents how a dollar amount was (or should be) formatted.
///
/// # Examples
///  - `AmountFormat{ dollar: false, commas: false }` -> `-60000.00`
///  - `AmountFormat{ dollar: true, commas: true }` -> `-$60,000.00`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct AmountFormat {
    /// Whether a dollar sign is present in the formatting.
    dollar: bool,
    /// Whether commas are present as thousands separators in the formatting.
    commas: bool,
}

/// Represents a dollar amount.
///
/// This type wraps `Decimal` and keeps track of how the value was written in
/// the input so that `Display` reproduces it. Formatting is significant for
/// equality; use [`Amount::value`] for numeric comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount {
    /// The parsed numerical value.
    value: Decimal,
    /// The way the numerical value was parsed from, or should be written to,
    /// a `String`.
    format: AmountFormat,
}

impl Amount {
    /// Creates a new Amount from a Decimal value with plain formatting.
    pub const fn new(value: Decimal) -> Self {
        Self {
            value,
            format: AmountFormat {
                dollar: false,
                commas: false,
            },
        }
    }

    /// Parses a cell that may be empty. Empty cells are `None`.
    pub fn from_cell(s: &str) -> crate::Result<Option<Self>> {
        if s.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(Self::from_str(s)?))
    }

    /// Returns the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Returns the absolute value with the same formatting.
    pub fn abs(&self) -> Self {
        Self {
            value: self.value.abs(),
            format: self.format,
        }
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.value().is_zero()
    }

    /// Returns true if the amount is negative.
    pub fn is_negative(&self) -> bool {
        self.value().is_sign_negative() && !self.is_zero()
    }
}

impl FromStr for Amount {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            bail!("An amount cannot be parsed from an empty string");
        }

        // Remove the dollar sign, which may follow a minus sign
        let mut dollar = false;
        let without_dollar = if let Some(after_minus) = trimmed.strip_prefix('-') {
            if let Some(after_dollar) = after_minus.strip_prefix('$') {
                dollar = true;
                format!("-{after_dollar}")
            } else {
                trimmed.to_string()
            }
        } else if let Some(after_dollar) = trimmed.strip_prefix('$') {
            dollar = true;
            after_dollar.to_string()
        } else {
            trimmed.to_string()
        };

        // Remove thousands separators
        let without_commas = without_dollar.replace(',', "");
        let commas = without_commas.len() < without_dollar.len();

        let value = Decimal::from_str(&without_commas)
            .with_context(|| format!("Unable to parse amount '{s}'"))?;
        Ok(Amount {
            value,
            format: AmountFormat { dollar, commas },
        })
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (sign, num) = if self.is_negative() {
            ("-", self.value().abs())
        } else {
            ("", self.value())
        };
        let dol = if self.format.dollar { "$" } else { "" };
        if self.format.commas {
            write!(
                f,
                "{sign}{dol}{}",
                format_num::format_num!(",.2", num.to_f64().unwrap_or_default())
            )
        } else {
            write!(f, "{sign}{dol}{num}")
        }
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.value()
    }
}
