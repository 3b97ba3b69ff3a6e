use log::debug;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::Result;
use crate::fields::{num_field, record_list, str_field, str_field_or};
use crate::numeric::round2;
use crate::shapers::GroupTotals;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BudgetAllocation {
    pub account: Option<String>,
    /// Chart-of-accounts path, e.g. "Expenses > Payroll > Salaries".
    pub lineage: Option<String>,
    pub department: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BudgetAllocationSummary {
    pub count: usize,
    pub total_allocated: f64,
    /// Totals keyed by the top-level lineage segment (before the first ">").
    pub by_account_type: BTreeMap<String, GroupTotals>,
    pub by_department: BTreeMap<String, GroupTotals>,
    pub allocations: Vec<BudgetAllocation>,
}

/// Top-level group for an allocation: the lineage segment before the first
/// ">" delimiter, falling back to the account name, then "Unknown".
fn lineage_group(lineage: Option<&str>, account: Option<&str>) -> String {
    if let Some(lineage) = lineage {
        let head = lineage.split('>').next().unwrap_or("").trim();
        if !head.is_empty() {
            return head.to_string();
        }
    }
    match account {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => "Unknown".to_string(),
    }
}

pub fn shape_budget_allocations(raw: &Value) -> Result<BudgetAllocationSummary> {
    let records = record_list(raw, "budget allocation")?;
    debug!("Shaping {} budget allocation records", records.len());

    let mut total_allocated = 0.0;
    let mut by_account_type: BTreeMap<String, GroupTotals> = BTreeMap::new();
    let mut by_department: BTreeMap<String, GroupTotals> = BTreeMap::new();
    let mut allocations = Vec::with_capacity(records.len());

    for record in records {
        let amount = num_field(
            record,
            &["amount", "allocated", "allocated_amount", "allocatedAmount"],
        );
        let account = str_field(record, &["account", "account_name", "accountName"]);
        let lineage = str_field(
            record,
            &["lineage", "account_lineage", "accountLineage", "path"],
        );
        let department = str_field_or(
            record,
            &["department", "department_name", "departmentName"],
            "Unassigned",
        );

        total_allocated += amount;
        by_account_type
            .entry(lineage_group(lineage.as_deref(), account.as_deref()))
            .or_default()
            .add(amount);
        by_department
            .entry(department.clone())
            .or_default()
            .add(amount);

        allocations.push(BudgetAllocation {
            account,
            lineage,
            department,
            amount: round2(amount),
        });
    }

    for totals in by_account_type.values_mut() {
        totals.finish();
    }
    for totals in by_department.values_mut() {
        totals.finish();
    }

    Ok(BudgetAllocationSummary {
        count: allocations.len(),
        total_allocated: round2(total_allocated),
        by_account_type,
        by_department,
        allocations,
    })
}
