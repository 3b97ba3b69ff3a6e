use log::debug;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::fields::{bool_field, record_list, str_field, str_field_or};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: Option<String>,
    pub name: String,
    pub active: bool,
    pub parent: Option<String>,
    pub entity: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentSummary {
    pub count: usize,
    pub active_count: usize,
    pub departments: Vec<Department>,
}

pub fn shape_departments(raw: &Value) -> Result<DepartmentSummary> {
    let records = record_list(raw, "department")?;
    debug!("Shaping {} department records", records.len());

    let mut active_count = 0;
    let mut departments = Vec::with_capacity(records.len());

    for record in records {
        let active = bool_field(record, &["active", "is_active", "isActive"]);
        if active {
            active_count += 1;
        }

        departments.push(Department {
            id: str_field(record, &["id", "department_id", "departmentId"]),
            name: str_field_or(record, &["name", "department_name", "departmentName"], "Unknown"),
            active,
            parent: str_field(record, &["parent", "parent_id", "parentId"]),
            entity: str_field(record, &["entity", "entity_id", "entityId"]),
        });
    }

    Ok(DepartmentSummary {
        count: departments.len(),
        active_count,
        departments,
    })
}
