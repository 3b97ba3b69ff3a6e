use log::debug;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::Result;
use crate::fields::{num_field, pick, record_list, str_field, str_field_or};
use crate::numeric::{coerce_num, round2};
use crate::shapers::GroupTotals;

/// A single outstanding receivable or payable; the same shape serves both
/// AR and AP aging reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AgingItem {
    pub counterparty: String,
    pub amount: f64,
    pub days_outstanding: f64,
    pub bucket: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AgingSummary {
    pub count: usize,
    pub total_outstanding: f64,
    /// Outstanding totals keyed by aging bucket ("0-30", "31-60", ...).
    pub buckets: BTreeMap<String, GroupTotals>,
    /// Items 90+ days out, whether flagged numerically or by bucket label.
    pub critical_items: Vec<AgingItem>,
    pub critical_total: f64,
    pub items: Vec<AgingItem>,
}

fn bucket_for_days(days: f64) -> &'static str {
    if days <= 30.0 {
        "0-30"
    } else if days <= 60.0 {
        "31-60"
    } else if days <= 90.0 {
        "61-90"
    } else {
        "90+"
    }
}

pub fn shape_aging(raw: &Value) -> Result<AgingSummary> {
    let records = record_list(raw, "aging item")?;
    debug!("Shaping {} aging records", records.len());

    let mut total_outstanding = 0.0;
    let mut critical_total = 0.0;
    let mut buckets: BTreeMap<String, GroupTotals> = BTreeMap::new();
    let mut critical_items = Vec::new();
    let mut items = Vec::with_capacity(records.len());

    for record in records {
        let amount = num_field(
            record,
            &[
                "amount",
                "amount_outstanding",
                "outstanding",
                "outstanding_amount",
                "balance",
            ],
        );
        let days = pick(
            record,
            &["days_outstanding", "daysOutstanding", "days_overdue", "age_days"],
        )
        .map(coerce_num)
        .unwrap_or(0.0);
        let explicit_bucket = str_field(record, &["bucket", "aging_bucket", "agingBucket"]);
        let bucket = explicit_bucket
            .clone()
            .unwrap_or_else(|| bucket_for_days(days).to_string());

        let item = AgingItem {
            counterparty: str_field_or(
                record,
                &[
                    "customer",
                    "customer_name",
                    "customerName",
                    "vendor",
                    "vendor_name",
                    "vendorName",
                    "name",
                ],
                "Unknown",
            ),
            amount: round2(amount),
            days_outstanding: days,
            bucket: bucket.clone(),
        };

        total_outstanding += amount;
        buckets.entry(bucket.clone()).or_default().add(amount);

        // the substring test only covers pre-labeled 90+ buckets; a derived
        // "61-90" bucket must not make an item critical
        let labeled_critical = explicit_bucket
            .as_deref()
            .is_some_and(|bucket| bucket.contains("90"));
        if days >= 90.0 || labeled_critical {
            critical_total += amount;
            critical_items.push(item.clone());
        }

        items.push(item);
    }

    for totals in buckets.values_mut() {
        totals.finish();
    }

    Ok(AgingSummary {
        count: items.len(),
        total_outstanding: round2(total_outstanding),
        buckets,
        critical_items,
        critical_total: round2(critical_total),
        items,
    })
}
