//! Converters for the two Shopify export formats.
//!
//! A payouts export is essentially just transfers to another account, and
//! maps one row to one row. A transactions export covers the full details of
//! each charge including the payment fee, refunds and the associated fee
//! adjustment; each row maps to a gross row and/or a fee row depending on
//! its `Type`.

use crate::args::ConvertArgs;
use crate::commands::Out;
use crate::import::Table;
use crate::model::{OutputRow, PayoutRecord, TransactionRecord, TransactionType};
use crate::{export, import, Config, Result};
use anyhow::Context;
use serde::Serialize;
use std::str::FromStr;
use tracing::error;

/// Row counts from a conversion.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ConvertSummary {
    /// Data rows read from the export.
    pub rows_read: usize,
    /// Normalized rows written.
    pub rows_written: usize,
    /// Rows dropped because their transaction type was not recognized.
    pub rows_skipped: usize,
}

/// Converts a Shopify Payouts export. Every payout row becomes one transfer
/// row in the output.
pub fn payouts(config: &Config, args: &ConvertArgs) -> Result<Out<ConvertSummary>> {
    let table = read_input(config, args)?;
    let mut rows = Vec::new();
    for (index, row) in table.rows().iter().enumerate() {
        let record = PayoutRecord::from_row(table.mapping(), row)
            .with_context(|| format!("Unable to parse payout row {}", index + 1))?;
        rows.push(payout_row(config, &record));
    }
    let summary = ConvertSummary {
        rows_read: table.rows().len(),
        rows_written: rows.len(),
        rows_skipped: 0,
    };
    write_output(config, args, &rows)?;
    Ok(Out::new(
        format!(
            "Wrote {} transfer rows from {} payout rows",
            summary.rows_written, summary.rows_read
        ),
        summary,
    ))
}

/// Converts a Shopify Transactions export. Rows with an unrecognized `Type`
/// are reported and dropped from the output.
pub fn transactions(config: &Config, args: &ConvertArgs) -> Result<Out<ConvertSummary>> {
    let table = read_input(config, args)?;
    let mut rows = Vec::new();
    let mut skipped = 0;
    for (index, row) in table.rows().iter().enumerate() {
        let record = TransactionRecord::from_row(table.mapping(), row)
            .with_context(|| format!("Unable to parse transaction row {}", index + 1))?;
        match transaction_rows(config, &record) {
            Some((gross, fee)) => rows.extend(gross.into_iter().chain(fee)),
            None => skipped += 1,
        }
    }
    let summary = ConvertSummary {
        rows_read: table.rows().len(),
        rows_written: rows.len(),
        rows_skipped: skipped,
    };
    write_output(config, args, &rows)?;
    Ok(Out::new(
        format!(
            "Wrote {} rows from {} transaction rows, skipped {}",
            summary.rows_written, summary.rows_read, summary.rows_skipped
        ),
        summary,
    ))
}

fn read_input(config: &Config, args: &ConvertArgs) -> Result<Table> {
    let input = import::open_input(args.file())?;
    import::read_table(input, config.input_delimiter()?, config.header_rows())
}

fn write_output(config: &Config, args: &ConvertArgs, rows: &[OutputRow]) -> Result<()> {
    let output = export::open_output(args.output())?;
    export::write_table(
        output,
        config.output_delimiter()?,
        config.output_columns(),
        rows,
    )
}

/// Builds the single transfer row for a payout.
fn payout_row(config: &Config, record: &PayoutRecord) -> OutputRow {
    OutputRow {
        date: Some(record.payout_date()),
        payee: format!("Transfer: {}", config.payees().payouts()),
        // net outbound transfer amount
        outflow: record.total(),
        ..OutputRow::default()
    }
}

/// Maps one transaction record to its gross and fee rows. Returns `None` for
/// unrecognized transaction types.
fn transaction_rows(
    config: &Config,
    record: &TransactionRecord,
) -> Option<(Option<OutputRow>, Option<OutputRow>)> {
    let transaction_type = match TransactionType::from_str(record.raw_type()) {
        Ok(t) => t,
        Err(_) => {
            error!("Transaction type \"{}\" not recognized", record.raw_type());
            return None;
        }
    };
    let date = Some(record.transaction_date());
    let order = record.order_number();
    let payees = config.payees();
    let categories = config.categories();
    Some(match transaction_type {
        // An ordinary charge: the gross inflow plus the payment fee.
        TransactionType::Charge => (
            Some(OutputRow {
                date,
                memo: format!("order # {order}"),
                inflow: record.amount(),
                payee: payees.you().to_string(),
                category: categories.income().to_string(),
                ..OutputRow::default()
            }),
            Some(OutputRow {
                date,
                memo: format!("order # {order}"),
                outflow: record.fee(),
                payee: payees.fees().to_string(),
                category: categories.fees().to_string(),
                ..OutputRow::default()
            }),
        ),
        // A refund: negative inflow for the amount refunded. The fee
        // adjustment arrives in a separate row.
        TransactionType::Refund => (
            Some(OutputRow {
                date,
                memo: format!("order # {order} refund"),
                inflow: record.amount(),
                payee: payees.refunds().to_string(),
                category: categories.refunds().to_string(),
                ..OutputRow::default()
            }),
            None,
        ),
        // A fee adjustment matching a refund: reverses part of a previous
        // payment fee.
        TransactionType::Adjustment => (
            None,
            Some(OutputRow {
                date,
                memo: format!("order # {order} refund fee adjustment"),
                inflow: record.amount(),
                payee: payees.fees_adjustment().to_string(),
                category: categories.fees().to_string(),
                ..OutputRow::default()
            }),
        ),
        // The initial chargeback: the amount is reversed and an extra fee is
        // charged for the chargeback itself.
        TransactionType::Chargeback => (
            Some(OutputRow {
                date,
                memo: format!("order # {order} chargeback"),
                inflow: record.amount(),
                payee: payees.chargebacks().to_string(),
                category: categories.chargebacks().to_string(),
                ..OutputRow::default()
            }),
            Some(OutputRow {
                date,
                memo: format!("order # {order} chargeback fee"),
                outflow: record.fee(),
                payee: payees.fees_chargebacks().to_string(),
                category: categories.fees().to_string(),
                ..OutputRow::default()
            }),
        ),
        // A won chargeback: the original inflow returns, and the chargeback
        // fee comes back too. The export writes the returned fee negative.
        TransactionType::ChargebackWon => (
            Some(OutputRow {
                date,
                memo: format!("order # {order} chargeback won"),
                inflow: record.amount(),
                payee: payees.chargebacks_won().to_string(),
                category: categories.chargebacks().to_string(),
                ..OutputRow::default()
            }),
            Some(OutputRow {
                date,
                memo: format!("order # {order} chargeback won fee refund"),
                inflow: record.fee().map(|fee| fee.abs()),
                payee: payees.fees_adjustment().to_string(),
                category: categories.fees().to_string(),
                ..OutputRow::default()
            }),
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Mapping, OutputColumn};
    use crate::test::{PAYOUTS_EXPORT, TRANSACTIONS_EXPORT};

    fn record(transaction_type: &str, amount: &str, fee: &str) -> TransactionRecord {
        let mapping =
            Mapping::new(vec!["Transaction Date", "Type", "Order", "Amount", "Fee"]).unwrap();
        let row: Vec<String> = vec![
            "2023-07-15 23:11:02 -0400",
            transaction_type,
            "#1001",
            amount,
            fee,
        ]
        .into_iter()
        .map(String::from)
        .collect();
        TransactionRecord::from_row(&mapping, &row).unwrap()
    }

    #[test]
    fn test_charge_emits_gross_and_fee() {
        let config = Config::default();
        let (gross, fee) = transaction_rows(&config, &record("charge", "25.00", "1.03")).unwrap();
        let gross = gross.unwrap();
        assert_eq!(gross.cell(OutputColumn::Date), "07/15/2023");
        assert_eq!(gross.cell(OutputColumn::Payee), "Shopify Sales");
        assert_eq!(gross.cell(OutputColumn::Category), "Sales");
        assert_eq!(gross.cell(OutputColumn::Memo), "order # 1001");
        assert_eq!(gross.cell(OutputColumn::Inflow), "25.00");
        assert_eq!(gross.cell(OutputColumn::Outflow), "");
        let fee = fee.unwrap();
        assert_eq!(fee.cell(OutputColumn::Date), "07/15/2023");
        assert_eq!(fee.cell(OutputColumn::Payee), "Shopify");
        assert_eq!(fee.cell(OutputColumn::Category), "Merchant Fees");
        assert_eq!(fee.cell(OutputColumn::Memo), "order # 1001");
        assert_eq!(fee.cell(OutputColumn::Outflow), "1.03");
        assert_eq!(fee.cell(OutputColumn::Inflow), "");
    }

    #[test]
    fn test_charge_with_empty_fee_still_emits_fee_row() {
        let config = Config::default();
        let (_, fee) = transaction_rows(&config, &record("charge", "25.00", "")).unwrap();
        let fee = fee.unwrap();
        assert_eq!(fee.cell(OutputColumn::Outflow), "");
        assert_eq!(fee.cell(OutputColumn::Payee), "Shopify");
    }

    #[test]
    fn test_refund_emits_gross_only() {
        let config = Config::default();
        let (gross, fee) = transaction_rows(&config, &record("refund", "-10.00", "0.00")).unwrap();
        assert!(fee.is_none());
        let gross = gross.unwrap();
        assert_eq!(gross.cell(OutputColumn::Memo), "order # 1001 refund");
        assert_eq!(gross.cell(OutputColumn::Inflow), "-10.00");
        assert_eq!(gross.cell(OutputColumn::Payee), "Shopify Customer");
        assert_eq!(gross.cell(OutputColumn::Category), "Refunds");
    }

    #[test]
    fn test_adjustment_emits_fee_only() {
        let config = Config::default();
        let (gross, fee) = transaction_rows(&config, &record("adjustment", "0.41", "")).unwrap();
        assert!(gross.is_none());
        let fee = fee.unwrap();
        assert_eq!(
            fee.cell(OutputColumn::Memo),
            "order # 1001 refund fee adjustment"
        );
        assert_eq!(fee.cell(OutputColumn::Inflow), "0.41");
        assert_eq!(fee.cell(OutputColumn::Outflow), "");
        assert_eq!(fee.cell(OutputColumn::Category), "Merchant Fees");
    }

    #[test]
    fn test_chargeback_emits_gross_and_fee() {
        let config = Config::default();
        let (gross, fee) =
            transaction_rows(&config, &record("chargeback", "-50.00", "15.00")).unwrap();
        let gross = gross.unwrap();
        assert_eq!(gross.cell(OutputColumn::Memo), "order # 1001 chargeback");
        assert_eq!(gross.cell(OutputColumn::Inflow), "-50.00");
        assert_eq!(gross.cell(OutputColumn::Category), "Chargebacks");
        let fee = fee.unwrap();
        assert_eq!(fee.cell(OutputColumn::Memo), "order # 1001 chargeback fee");
        assert_eq!(fee.cell(OutputColumn::Outflow), "15.00");
    }

    #[test]
    fn test_chargeback_won_fee_refund_is_positive() {
        let config = Config::default();
        let (gross, fee) =
            transaction_rows(&config, &record("chargeback won", "50.00", "-15.00")).unwrap();
        let gross = gross.unwrap();
        assert_eq!(gross.cell(OutputColumn::Memo), "order # 1001 chargeback won");
        assert_eq!(gross.cell(OutputColumn::Inflow), "50.00");
        let fee = fee.unwrap();
        assert_eq!(
            fee.cell(OutputColumn::Memo),
            "order # 1001 chargeback won fee refund"
        );
        assert_eq!(fee.cell(OutputColumn::Inflow), "15.00");
        assert_eq!(fee.cell(OutputColumn::Outflow), "");
    }

    #[test]
    fn test_unrecognized_type_maps_to_nothing() {
        let config = Config::default();
        assert!(transaction_rows(&config, &record("payout_failure", "0.00", "")).is_none());
    }

    #[test]
    fn test_payout_row() {
        let mapping = Mapping::new(vec!["Payout Date", "Total"]).unwrap();
        let row: Vec<String> = vec!["2023-07-18".to_string(), "13.97".to_string()];
        let record = PayoutRecord::from_row(&mapping, &row).unwrap();
        let row = payout_row(&Config::default(), &record);
        assert_eq!(row.cell(OutputColumn::Date), "07/18/2023");
        assert_eq!(row.cell(OutputColumn::Payee), "Transfer: Checking");
        assert_eq!(row.cell(OutputColumn::Outflow), "13.97");
        assert_eq!(row.cell(OutputColumn::Inflow), "");
        assert_eq!(row.cell(OutputColumn::Category), "");
        assert_eq!(row.cell(OutputColumn::Memo), "");
    }

    const EXPECTED_TRANSACTIONS_OUTPUT: &str = "\
Date,Payee,Category,Memo,Outflow,Inflow
07/15/2023,Shopify Sales,Sales,order # 1001,,25.00
07/15/2023,Shopify,Merchant Fees,order # 1001,1.03,
07/16/2023,Shopify Customer,Refunds,order # 1001 refund,,-10.00
07/16/2023,Shopify,Merchant Fees,order # 1001 refund fee adjustment,,0.41
07/20/2023,Shopify Customer,Chargebacks,order # 1002 chargeback,,-50.00
07/20/2023,Shopify,Merchant Fees,order # 1002 chargeback fee,15.00,
08/02/2023,Shopify Customer,Chargebacks,order # 1002 chargeback won,,50.00
08/02/2023,Shopify,Merchant Fees,order # 1002 chargeback won fee refund,,15.00
";

    #[test]
    fn test_transactions_end_to_end() {
        let dir = tempfile::TempDir::new().unwrap();
        let input = dir.path().join("transactions.csv");
        let output = dir.path().join("ynab.csv");
        std::fs::write(&input, TRANSACTIONS_EXPORT).unwrap();

        let args = ConvertArgs::new(Some(input), Some(output.clone()));
        let out = transactions(&Config::default(), &args).unwrap();
        let summary = out.structure().unwrap();
        assert_eq!(summary.rows_read, 6);
        assert_eq!(summary.rows_written, 8);
        assert_eq!(summary.rows_skipped, 1);

        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(written, EXPECTED_TRANSACTIONS_OUTPUT);
    }

    const EXPECTED_PAYOUTS_OUTPUT: &str = "\
Date,Payee,Category,Memo,Outflow,Inflow
07/18/2023,Transfer: Checking,,,13.97,
07/25/2023,Transfer: Checking,,,116.23,
";

    #[test]
    fn test_payouts_end_to_end() {
        let dir = tempfile::TempDir::new().unwrap();
        let input = dir.path().join("payouts.csv");
        let output = dir.path().join("ynab.csv");
        std::fs::write(&input, PAYOUTS_EXPORT).unwrap();

        let args = ConvertArgs::new(Some(input), Some(output.clone()));
        let out = payouts(&Config::default(), &args).unwrap();
        let summary = out.structure().unwrap();
        assert_eq!(summary.rows_read, 2);
        assert_eq!(summary.rows_written, 2);
        assert_eq!(summary.rows_skipped, 0);

        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(written, EXPECTED_PAYOUTS_OUTPUT);
    }

    #[test]
    fn test_output_columns_are_respected() {
        let dir = tempfile::TempDir::new().unwrap();
        let config_path = dir.path().join("shopify2ynab.json");
        std::fs::write(
            &config_path,
            r#"{
                "app_name": "shopify2ynab",
                "config_version": 1,
                "input_delimiter": ",",
                "output_delimiter": ",",
                "header_rows": 1,
                "output_columns": ["Date", "Inflow"],
                "payees": {
                    "you": "Shopify Sales",
                    "payouts": "Checking",
                    "fees": "Shopify",
                    "refunds": "Shopify Customer",
                    "fees_adjustment": "Shopify",
                    "fees_chargebacks": "Shopify",
                    "chargebacks": "Shopify Customer",
                    "chargebacks_won": "Shopify Customer"
                },
                "categories": {
                    "income": "Sales",
                    "fees": "Merchant Fees",
                    "refunds": "Refunds",
                    "chargebacks": "Chargebacks"
                }
            }"#,
        )
        .unwrap();
        let config = Config::load(Some(&config_path)).unwrap();

        let input = dir.path().join("transactions.csv");
        let output = dir.path().join("ynab.csv");
        std::fs::write(
            &input,
            "Transaction Date,Type,Order,Amount,Fee\n2023-07-15,charge,#1001,25.00,1.03\n",
        )
        .unwrap();

        let args = ConvertArgs::new(Some(input), Some(output.clone()));
        transactions(&config, &args).unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(written, "Date,Inflow\n07/15/2023,25.00\n07/15/2023,\n");
    }
}
