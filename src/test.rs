//! Shared test fixtures.
//!
//! This module is only compiled when running tests (`#[cfg(test)]`).

/// A Shopify Transactions export covering every recognized type plus one
/// unrecognized row.
pub(crate) const TRANSACTIONS_EXPORT: &str = "\
Transaction Date,Type,Order,Card Brand,Card Source,Payout Status,Payout Date,Amount,Fee,Net
2023-07-15 23:11:02 -0400,charge,#1001,visa,card,paid,2023-07-18,25.00,1.03,23.97
2023-07-16 10:02:44 -0400,refund,#1001,visa,card,paid,2023-07-18,-10.00,0.00,-10.00
2023-07-16 10:02:45 -0400,adjustment,#1001,,,paid,2023-07-18,0.41,0.00,0.41
2023-07-20 08:15:00 -0400,chargeback,#1002,mastercard,card,paid,2023-07-25,-50.00,15.00,-65.00
2023-08-02 12:00:00 -0400,chargeback won,#1002,mastercard,card,paid,2023-08-04,50.00,-15.00,65.00
2023-08-03 09:30:00 -0400,payout_failure,#1003,,,pending,2023-08-08,0.00,0.00,0.00
";

/// A Shopify Payouts export with two transfers.
pub(crate) const PAYOUTS_EXPORT: &str = "\
Payout Date,Status,Currency,Charges,Refunds,Adjustments,Reserved Funds,Fees,Retried Amount,Total
2023-07-18,paid,USD,25.00,-10.00,0.41,0.00,-1.44,0.00,13.97
2023-07-25,paid,USD,120.00,0.00,0.00,0.00,-3.77,0.00,116.23
";
