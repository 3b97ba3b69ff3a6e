use log::debug;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::Result;
use crate::fields::{num_field, record_list, str_field_or};
use crate::numeric::round2;
use crate::shapers::DebitCreditTotals;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrialBalanceAccount {
    pub name: String,
    pub account_type: String,
    pub debits: f64,
    pub credits: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrialBalanceSummary {
    pub count: usize,
    pub total_debits: f64,
    pub total_credits: f64,
    /// Whether total debits equal total credits to the cent.
    pub is_balanced: bool,
    pub by_account_type: BTreeMap<String, DebitCreditTotals>,
    pub accounts: Vec<TrialBalanceAccount>,
}

pub fn shape_trial_balance(raw: &Value) -> Result<TrialBalanceSummary> {
    let records = record_list(raw, "trial balance account")?;
    debug!("Shaping {} trial balance accounts", records.len());

    let mut total_debits = 0.0;
    let mut total_credits = 0.0;
    let mut by_account_type: BTreeMap<String, DebitCreditTotals> = BTreeMap::new();
    let mut accounts = Vec::with_capacity(records.len());

    for record in records {
        let debits = num_field(record, &["debit", "debits", "debit_balance", "debitBalance"]);
        let credits = num_field(
            record,
            &["credit", "credits", "credit_balance", "creditBalance"],
        );
        let account_type =
            str_field_or(record, &["account_type", "accountType", "type"], "Unknown");

        total_debits += debits;
        total_credits += credits;
        by_account_type
            .entry(account_type.clone())
            .or_default()
            .add(debits, credits);

        accounts.push(TrialBalanceAccount {
            name: str_field_or(record, &["name", "account_name", "accountName"], "Unknown"),
            account_type,
            debits: round2(debits),
            credits: round2(credits),
        });
    }

    for totals in by_account_type.values_mut() {
        totals.finish();
    }

    let total_debits = round2(total_debits);
    let total_credits = round2(total_credits);

    Ok(TrialBalanceSummary {
        count: accounts.len(),
        total_debits,
        total_credits,
        is_balanced: (total_debits - total_credits).abs() < 0.01,
        by_account_type,
        accounts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_input_is_total() {
        let summary = shape_trial_balance(&json!([])).unwrap();
        assert_eq!(summary.count, 0);
        assert!(summary.is_balanced);
    }

    #[test]
    fn test_balanced_books() {
        let raw = json!([
            {"name": "Cash", "account_type": "Asset", "debit_balance": 500.0},
            {"name": "Revenue", "accountType": "Revenue", "credit_balance": 300.0},
            {"name": "Loans", "type": "Liability", "credits": 200.0}
        ]);
        let summary = shape_trial_balance(&raw).unwrap();

        assert_eq!(summary.total_debits, 500.0);
        assert_eq!(summary.total_credits, 500.0);
        assert!(summary.is_balanced);
        assert_eq!(summary.by_account_type["Asset"].debits, 500.0);
        assert_eq!(summary.by_account_type["Liability"].credits, 200.0);
    }

    #[test]
    fn test_out_of_balance_books() {
        let raw = json!([
            {"name": "Cash", "debit": 100.0},
            {"name": "Mystery", "credit": 99.0}
        ]);
        let summary = shape_trial_balance(&raw).unwrap();
        assert!(!summary.is_balanced);
        assert_eq!(summary.by_account_type["Unknown"].count, 2);
    }
}
