use log::debug;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::fields::{num_field, record_list, str_field_or};
use crate::numeric::round2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub name: String,
    pub revenue: f64,
    pub mrr: f64,
    pub billed: f64,
    pub unbilled: f64,
    pub paid: f64,
    pub outstanding: f64,
    pub deferred_revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSummary {
    pub count: usize,
    pub total_revenue: f64,
    pub total_mrr: f64,
    pub total_billed: f64,
    pub total_unbilled: f64,
    pub total_paid: f64,
    pub total_outstanding: f64,
    pub total_deferred_revenue: f64,
    pub customers: Vec<Customer>,
}

pub fn shape_customers(raw: &Value) -> Result<CustomerSummary> {
    let records = record_list(raw, "customer")?;
    debug!("Shaping {} customer records", records.len());

    let mut total_revenue = 0.0;
    let mut total_mrr = 0.0;
    let mut total_billed = 0.0;
    let mut total_unbilled = 0.0;
    let mut total_paid = 0.0;
    let mut total_outstanding = 0.0;
    let mut total_deferred = 0.0;
    let mut customers = Vec::with_capacity(records.len());

    for record in records {
        let revenue = num_field(record, &["revenue", "total_revenue", "totalRevenue"]);
        let mrr = num_field(record, &["mrr", "monthly_recurring_revenue", "monthlyRecurringRevenue"]);
        let billed = num_field(record, &["billed", "billed_amount", "billedAmount"]);
        let unbilled = num_field(record, &["unbilled", "unbilled_amount", "unbilledAmount"]);
        let paid = num_field(record, &["paid", "amount_paid", "amountPaid"]);
        let outstanding = num_field(record, &["outstanding", "amount_outstanding", "amountOutstanding"]);
        let deferred = num_field(record, &["deferred_revenue", "deferredRevenue", "deferred"]);

        total_revenue += revenue;
        total_mrr += mrr;
        total_billed += billed;
        total_unbilled += unbilled;
        total_paid += paid;
        total_outstanding += outstanding;
        total_deferred += deferred;

        customers.push(Customer {
            name: str_field_or(record, &["name", "customer_name", "customerName"], "Unknown"),
            revenue: round2(revenue),
            mrr: round2(mrr),
            billed: round2(billed),
            unbilled: round2(unbilled),
            paid: round2(paid),
            outstanding: round2(outstanding),
            deferred_revenue: round2(deferred),
        });
    }

    Ok(CustomerSummary {
        count: customers.len(),
        total_revenue: round2(total_revenue),
        total_mrr: round2(total_mrr),
        total_billed: round2(total_billed),
        total_unbilled: round2(total_unbilled),
        total_paid: round2(total_paid),
        total_outstanding: round2(total_outstanding),
        total_deferred_revenue: round2(total_deferred),
        customers,
    })
}
