use crate::model::{Amount, ExportDate, Mapping};
use crate::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents a single data row from a Shopify Transactions export.
///
/// The raw `Type` string is kept as-is so that unrecognized values can be
/// reported verbatim before the row is dropped.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TransactionRecord {
    order: String,
    transaction_date: ExportDate,
    transaction_type: String,
    amount: Option<Amount>,
    fee: Option<Amount>,
}

impl TransactionRecord {
    /// Extracts a `TransactionRecord` from a data row using the header mapping.
    pub fn from_row(mapping: &Mapping, row: &[String]) -> Result<Self> {
        let order = mapping.field(ORDER_STR, row)?.to_string();
        let transaction_date = ExportDate::from_str(mapping.field(TRANSACTION_DATE_STR, row)?)
            .with_context(|| format!("Bad '{TRANSACTION_DATE_STR}' value"))?;
        let transaction_type = mapping.field(TYPE_STR, row)?.to_string();
        let amount = Amount::from_cell(mapping.field(AMOUNT_STR, row)?)
            .with_context(|| format!("Bad '{AMOUNT_STR}' value"))?;
        let fee = Amount::from_cell(mapping.field(FEE_STR, row)?)
            .with_context(|| format!("Bad '{FEE_STR}' value"))?;
        Ok(Self {
            order,
            transaction_date,
            transaction_type,
            amount,
            fee,
        })
    }

    /// The order number with any `#` stripped, for use in memos.
    pub fn order_number(&self) -> &str {
        self.order.trim_matches('#')
    }

    pub fn transaction_date(&self) -> ExportDate {
        self.transaction_date
    }

    /// The raw `Type` value from the export.
    pub fn raw_type(&self) -> &str {
        &self.transaction_type
    }

    /// The gross amount. Positive for charges, negative for refunds and
    /// chargebacks.
    pub fn amount(&self) -> Option<Amount> {
        self.amount
    }

    /// The payment fee. Negative when the fee is being returned.
    pub fn fee(&self) -> Option<Amount> {
        self.fee
    }
}

/// The `Type` values Shopify writes in a transactions export.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Charge,
    Refund,
    Adjustment,
    Chargeback,
    #[serde(rename = "chargeback won")]
    ChargebackWon,
}

serde_plain::derive_display_from_serialize!(TransactionType);
serde_plain::derive_fromstr_from_deserialize!(TransactionType);

pub(super) const ORDER_STR: &str = "Order";
pub(super) const TRANSACTION_DATE_STR: &str = "Transaction Date";
pub(super) const TYPE_STR: &str = "Type";
pub(super) const AMOUNT_STR: &str = "Amount";
pub(super) const FEE_STR: &str = "Fee";
