use log::debug;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::Result;
use crate::fields::{pick, record_list, str_field, str_field_or};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub name: Option<String>,
    pub cadence: String,
    pub entity: Option<String>,
    pub department: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    pub count: usize,
    /// Budget counts keyed by cadence ("unspecified" when absent).
    pub by_cadence: BTreeMap<String, usize>,
    pub budgets: Vec<Budget>,
}

fn tag_list(record: &Value) -> Vec<String> {
    pick(record, &["tags", "labels"])
        .and_then(Value::as_array)
        .map(|tags| {
            tags.iter()
                .filter_map(|tag| tag.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

pub fn shape_budgets(raw: &Value) -> Result<BudgetSummary> {
    let records = record_list(raw, "budget")?;
    debug!("Shaping {} budget records", records.len());

    let mut by_cadence: BTreeMap<String, usize> = BTreeMap::new();
    let mut budgets = Vec::with_capacity(records.len());

    for record in records {
        let cadence = str_field_or(record, &["cadence", "frequency", "period"], "unspecified");
        *by_cadence.entry(cadence.clone()).or_insert(0) += 1;

        budgets.push(Budget {
            name: str_field(record, &["name", "budget_name", "budgetName"]),
            cadence,
            entity: str_field(record, &["entity", "entity_id", "entityId"]),
            department: str_field(record, &["department", "department_id", "departmentId"]),
            tags: tag_list(record),
        });
    }

    Ok(BudgetSummary {
        count: budgets.len(),
        by_cadence,
        budgets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_input_is_total() {
        let summary = shape_budgets(&json!([])).unwrap();
        assert_eq!(summary.count, 0);
        assert!(summary.by_cadence.is_empty());
    }

    #[test]
    fn test_count_by_cadence() {
        let raw = json!([
            {"name": "Marketing", "cadence": "monthly"},
            {"name": "Payroll", "frequency": "monthly", "tags": ["fixed", "core"]},
            {"name": "Offsite"}
        ]);
        let summary = shape_budgets(&raw).unwrap();

        assert_eq!(summary.by_cadence["monthly"], 2);
        assert_eq!(summary.by_cadence["unspecified"], 1);
        assert_eq!(summary.budgets[1].tags, vec!["fixed", "core"]);
        assert!(summary.budgets[2].tags.is_empty());
    }

    #[test]
    fn test_numeric_entity_ids_become_strings() {
        let raw = json!([{"cadence": "annual", "entity_id": 42, "department_id": "ops"}]);
        let summary = shape_budgets(&raw).unwrap();
        assert_eq!(summary.budgets[0].entity.as_deref(), Some("42"));
        assert_eq!(summary.budgets[0].department.as_deref(), Some("ops"));
    }
}
