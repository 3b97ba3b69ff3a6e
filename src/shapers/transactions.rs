use log::debug;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::Result;
use crate::fields::{num_field, record_list, str_field, str_field_or};
use crate::numeric::round2;
use crate::shapers::DebitCreditTotals;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub date: Option<String>,
    pub description: Option<String>,
    pub debit: f64,
    pub credit: f64,
    pub account_type: String,
    pub vendor: Option<String>,
    pub department: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSummary {
    pub count: usize,
    pub total_debits: f64,
    pub total_credits: f64,
    /// Debit/credit subtotals keyed by account type ("Unknown" when untyped).
    pub by_account_type: BTreeMap<String, DebitCreditTotals>,
    pub transactions: Vec<Transaction>,
}

pub fn shape_transactions(raw: &Value) -> Result<TransactionSummary> {
    let records = record_list(raw, "transaction")?;
    debug!("Shaping {} transaction records", records.len());

    let mut total_debits = 0.0;
    let mut total_credits = 0.0;
    let mut by_account_type: BTreeMap<String, DebitCreditTotals> = BTreeMap::new();
    let mut transactions = Vec::with_capacity(records.len());

    for record in records {
        let debit = num_field(record, &["debit", "debit_amount", "debitAmount"]);
        let credit = num_field(record, &["credit", "credit_amount", "creditAmount"]);
        let account_type = str_field_or(record, &["account_type", "accountType", "type"], "Unknown");

        total_debits += debit;
        total_credits += credit;
        by_account_type
            .entry(account_type.clone())
            .or_default()
            .add(debit, credit);

        transactions.push(Transaction {
            date: str_field(record, &["date", "transaction_date", "transactionDate"]),
            description: str_field(record, &["description", "memo"]),
            debit: round2(debit),
            credit: round2(credit),
            account_type,
            vendor: str_field(record, &["vendor", "vendor_name", "vendorName", "merchant"]),
            department: str_field(
                record,
                &["department", "department_name", "departmentName"],
            ),
        });
    }

    for totals in by_account_type.values_mut() {
        totals.finish();
    }

    Ok(TransactionSummary {
        count: transactions.len(),
        total_debits: round2(total_debits),
        total_credits: round2(total_credits),
        by_account_type,
        transactions,
    })
}
