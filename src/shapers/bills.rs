use log::debug;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::Result;
use crate::fields::{num_field, pick, record_list, str_field_or};
use crate::numeric::round2;
use crate::shapers::GroupTotals;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub vendor: String,
    pub status: String,
    pub total: f64,
    pub amount_due: f64,
    pub amount_paid: f64,
    pub line_item_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BillSummary {
    pub count: usize,
    pub total_amount: f64,
    pub total_due: f64,
    pub total_paid: f64,
    pub line_item_count: usize,
    pub by_status: BTreeMap<String, GroupTotals>,
    pub by_vendor: BTreeMap<String, GroupTotals>,
    pub bills: Vec<Bill>,
}

pub fn shape_bills(raw: &Value) -> Result<BillSummary> {
    let records = record_list(raw, "bill")?;
    debug!("Shaping {} bill records", records.len());

    let mut total_amount = 0.0;
    let mut total_due = 0.0;
    let mut total_paid = 0.0;
    let mut line_item_count = 0;
    let mut by_status: BTreeMap<String, GroupTotals> = BTreeMap::new();
    let mut by_vendor: BTreeMap<String, GroupTotals> = BTreeMap::new();
    let mut bills = Vec::with_capacity(records.len());

    for record in records {
        let total = num_field(record, &["total", "total_amount", "totalAmount", "amount"]);
        let due = num_field(
            record,
            &["due", "amount_due", "amountDue", "due_amount", "balance"],
        );
        let paid = num_field(record, &["paid", "amount_paid", "amountPaid", "paid_amount"]);
        let status = str_field_or(record, &["status", "state"], "unspecified");
        let vendor = str_field_or(record, &["vendor", "vendor_name", "vendorName"], "Unknown");
        let lines = pick(record, &["line_items", "lineItems", "lines"])
            .and_then(Value::as_array)
            .map(Vec::len)
            .unwrap_or(0);

        total_amount += total;
        total_due += due;
        total_paid += paid;
        line_item_count += lines;
        by_status.entry(status.clone()).or_default().add(total);
        by_vendor.entry(vendor.clone()).or_default().add(total);

        bills.push(Bill {
            vendor,
            status,
            total: round2(total),
            amount_due: round2(due),
            amount_paid: round2(paid),
            line_item_count: lines,
        });
    }

    for totals in by_status.values_mut() {
        totals.finish();
    }
    for totals in by_vendor.values_mut() {
        totals.finish();
    }

    Ok(BillSummary {
        count: bills.len(),
        total_amount: round2(total_amount),
        total_due: round2(total_due),
        total_paid: round2(total_paid),
        line_item_count,
        by_status,
        by_vendor,
        bills,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_input_is_total() {
        let summary = shape_bills(&json!([])).unwrap();
        assert_eq!(summary.count, 0);
        assert_eq!(summary.line_item_count, 0);
    }

    #[test]
    fn test_status_and_vendor_grouping() {
        let raw = json!([
            {"vendor": "Staples", "status": "open", "total": 120.0, "amount_due": 120.0,
             "line_items": [{"amount": 70.0}, {"amount": 50.0}]},
            {"vendor": "Staples", "status": "paid", "total": 80.0, "amount_paid": 80.0,
             "lines": [{"amount": 80.0}]},
            {"total_amount": 42.5}
        ]);
        let summary = shape_bills(&raw).unwrap();

        assert_eq!(summary.by_vendor["Staples"].total, 200.0);
        assert_eq!(summary.by_vendor["Unknown"].total, 42.5);
        assert_eq!(summary.by_status["open"].count, 1);
        assert_eq!(summary.by_status["unspecified"].count, 1);
        assert_eq!(summary.line_item_count, 3);
        assert_eq!(summary.total_paid, 80.0);
    }
}
