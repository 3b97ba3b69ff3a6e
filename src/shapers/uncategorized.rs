use log::debug;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::Result;
use crate::fields::{num_field, record_list, str_field, str_field_or};
use crate::numeric::round2;
use crate::shapers::GroupTotals;

/// A transaction the accounting system could not categorize, possibly with a
/// machine-generated suggestion attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UncategorizedTransaction {
    pub date: Option<String>,
    pub description: Option<String>,
    pub vendor: String,
    pub amount: f64,
    pub suggested_category: Option<String>,
    pub bill_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UncategorizedSummary {
    pub count: usize,
    pub total_amount: f64,
    pub by_vendor: BTreeMap<String, GroupTotals>,
    /// How many items carry a non-null categorization suggestion.
    pub with_suggestions: usize,
    pub transactions: Vec<UncategorizedTransaction>,
}

pub fn shape_uncategorized_transactions(raw: &Value) -> Result<UncategorizedSummary> {
    let records = record_list(raw, "uncategorized transaction")?;
    debug!("Shaping {} uncategorized transaction records", records.len());

    let mut total_amount = 0.0;
    let mut with_suggestions = 0;
    let mut by_vendor: BTreeMap<String, GroupTotals> = BTreeMap::new();
    let mut transactions = Vec::with_capacity(records.len());

    for record in records {
        let debit = num_field(record, &["debit", "debit_amount", "debitAmount"]);
        let credit = num_field(record, &["credit", "credit_amount", "creditAmount"]);
        let amount = debit + credit;
        let vendor = str_field_or(
            record,
            &["vendor", "vendor_name", "vendorName", "merchant", "merchant_name"],
            "Unknown",
        );
        let suggestion = str_field(
            record,
            &[
                "suggested_category",
                "suggestedCategory",
                "suggestion",
                "suggested_account",
            ],
        );

        total_amount += amount;
        by_vendor.entry(vendor.clone()).or_default().add(amount);
        if suggestion.is_some() {
            with_suggestions += 1;
        }

        transactions.push(UncategorizedTransaction {
            date: str_field(record, &["date", "transaction_date", "transactionDate"]),
            description: str_field(record, &["description", "memo"]),
            vendor,
            amount: round2(amount),
            suggested_category: suggestion,
            bill_id: str_field(record, &["bill_id", "billId"]),
        });
    }

    for totals in by_vendor.values_mut() {
        totals.finish();
    }

    Ok(UncategorizedSummary {
        count: transactions.len(),
        total_amount: round2(total_amount),
        by_vendor,
        with_suggestions,
        transactions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_input_is_total() {
        let summary = shape_uncategorized_transactions(&json!([])).unwrap();
        assert_eq!(summary.count, 0);
        assert_eq!(summary.with_suggestions, 0);
    }

    #[test]
    fn test_vendor_grouping_and_suggestions() {
        let raw = json!([
            {"vendor": "AWS", "debit": 120.0, "suggested_category": "Cloud Hosting"},
            {"merchant": "AWS", "debit": 80.0},
            {"credit": 15.5, "suggestion": "Refunds", "bill_id": 991}
        ]);
        let summary = shape_uncategorized_transactions(&raw).unwrap();

        assert_eq!(summary.by_vendor["AWS"].count, 2);
        assert_eq!(summary.by_vendor["AWS"].total, 200.0);
        assert_eq!(summary.by_vendor["Unknown"].total, 15.5);
        assert_eq!(summary.with_suggestions, 2);
        assert_eq!(summary.transactions[2].bill_id.as_deref(), Some("991"));
        assert_eq!(summary.total_amount, 215.5);
    }
}
