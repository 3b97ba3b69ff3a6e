use log::debug;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::Result;
use crate::fields::{num_field, record_list, str_field, str_field_or};
use crate::numeric::round2;
use crate::shapers::GroupTotals;

/// Compact invoice shape. Zero-valued `amount_paid` and `past_due_days` are
/// omitted entirely rather than emitted as 0, to keep payloads small for the
/// AI-assistant consumer; invoices are the only entity that does this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub number: Option<String>,
    pub customer: Option<String>,
    pub status: String,
    pub total: f64,
    pub amount_due: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_paid: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub past_due_days: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceSummary {
    pub count: usize,
    pub total_amount: f64,
    pub total_paid: f64,
    pub total_due: f64,
    /// Count/total keyed by invoice status ("unspecified" when absent).
    pub by_status: BTreeMap<String, GroupTotals>,
    pub invoices: Vec<Invoice>,
}

pub fn shape_invoices(raw: &Value) -> Result<InvoiceSummary> {
    let records = record_list(raw, "invoice")?;
    debug!("Shaping {} invoice records", records.len());

    let mut total_amount = 0.0;
    let mut total_paid = 0.0;
    let mut total_due = 0.0;
    let mut by_status: BTreeMap<String, GroupTotals> = BTreeMap::new();
    let mut invoices = Vec::with_capacity(records.len());

    for record in records {
        let total = num_field(record, &["total", "total_amount", "totalAmount", "amount"]);
        let paid = num_field(record, &["paid", "amount_paid", "amountPaid", "paid_amount"]);
        let due = num_field(
            record,
            &["due", "amount_due", "amountDue", "due_amount", "balance"],
        );
        let past_due = num_field(record, &["past_due_days", "pastDueDays", "days_past_due"]);
        let status = str_field_or(record, &["status", "state"], "unspecified");

        total_amount += total;
        total_paid += paid;
        total_due += due;
        by_status.entry(status.clone()).or_default().add(total);

        invoices.push(Invoice {
            number: str_field(record, &["number", "invoice_number", "invoiceNumber"]),
            customer: str_field(record, &["customer", "customer_name", "customerName"]),
            status,
            total: round2(total),
            amount_due: round2(due),
            amount_paid: (paid != 0.0).then(|| round2(paid)),
            past_due_days: (past_due != 0.0).then_some(past_due),
        });
    }

    for totals in by_status.values_mut() {
        totals.finish();
    }

    Ok(InvoiceSummary {
        count: invoices.len(),
        total_amount: round2(total_amount),
        total_paid: round2(total_paid),
        total_due: round2(total_due),
        by_status,
        invoices,
    })
}
