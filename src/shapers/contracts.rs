use log::debug;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::fields::{num_field, record_list, str_field};
use crate::numeric::round2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub name: Option<String>,
    pub customer: Option<String>,
    pub revenue: f64,
    pub recognized: f64,
    pub unbilled: f64,
    /// Share of revenue already recognized; 0 when the contract has no revenue.
    pub percent_recognized: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContractSummary {
    pub count: usize,
    pub total_revenue: f64,
    pub total_recognized: f64,
    pub total_unbilled: f64,
    /// Portfolio-level recognition; null (not 0) when aggregate revenue is 0.
    pub percent_recognized: Option<f64>,
    pub contracts: Vec<Contract>,
}

pub fn shape_contracts(raw: &Value) -> Result<ContractSummary> {
    let records = record_list(raw, "contract")?;
    debug!("Shaping {} contract records", records.len());

    let mut total_revenue = 0.0;
    let mut total_recognized = 0.0;
    let mut total_unbilled = 0.0;
    let mut contracts = Vec::with_capacity(records.len());

    for record in records {
        let revenue = num_field(
            record,
            &[
                "revenue",
                "total_revenue",
                "totalRevenue",
                "contract_value",
                "contractValue",
            ],
        );
        let recognized = num_field(
            record,
            &[
                "billed",
                "billed_amount",
                "billedAmount",
                "recognized",
                "recognized_revenue",
            ],
        );
        let unbilled = num_field(
            record,
            &[
                "unbilled",
                "unbilled_amount",
                "unbilledAmount",
                "remaining",
                "remaining_amount",
            ],
        );

        total_revenue += revenue;
        total_recognized += recognized;
        total_unbilled += unbilled;

        contracts.push(Contract {
            name: str_field(record, &["name", "contract_name", "contractName"]),
            customer: str_field(record, &["customer", "customer_name", "customerName"]),
            revenue: round2(revenue),
            recognized: round2(recognized),
            unbilled: round2(unbilled),
            percent_recognized: if revenue > 0.0 {
                round2(recognized / revenue * 100.0)
            } else {
                0.0
            },
        });
    }

    // Unlike the per-contract figure, the portfolio percentage is null when
    // there is no revenue at all. Preserved from observed behavior.
    let percent_recognized = if total_revenue > 0.0 {
        Some(round2(total_recognized / total_revenue * 100.0))
    } else {
        None
    };

    Ok(ContractSummary {
        count: contracts.len(),
        total_revenue: round2(total_revenue),
        total_recognized: round2(total_recognized),
        total_unbilled: round2(total_unbilled),
        percent_recognized,
        contracts,
    })
}
