//! Burn rate composer.
//!
//! Folds an ordered run of monthly income statements (oldest first) and the
//! current balance sheet into a burn profile: per-month burn, the average,
//! a trend classification, and estimated runway.

use log::debug;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::numeric::round2;
use crate::snapshot::{CASH_KEYWORDS, EXPENSE_KEYWORDS, REVENUE_KEYWORDS};
use crate::statement::extract_total;

/// One month of input: a label plus the raw income statement tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyIncome {
    pub label: String,
    pub income_statement: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBurn {
    pub month: String,
    pub revenue: f64,
    pub expenses: f64,
    /// Net cash outflow for the month; positive means spending down cash.
    pub burn: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum BurnTrend {
    Increasing,
    Decreasing,
    Stable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BurnRateSummary {
    pub months: Vec<MonthlyBurn>,
    pub monthly_burn_avg: f64,
    pub trend: BurnTrend,
    pub cash_position: Option<f64>,
    /// Months of cash left at the average burn; null when burn is zero or
    /// negative (runway undefined) or cash is unknown.
    pub runway_months: Option<f64>,
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Classifies the burn trajectory by comparing the halves of the series.
/// The split is at the floor midpoint, so the later half takes the extra
/// month when the count is odd. The change must exceed 10% of the average
/// burn in either direction to leave "stable"; under 3 months there is not
/// enough signal and the trend is always stable.
fn classify_trend(burns: &[f64], avg: f64) -> BurnTrend {
    if burns.len() < 3 {
        return BurnTrend::Stable;
    }

    let mid = burns.len() / 2;
    let delta = mean(&burns[mid..]) - mean(&burns[..mid]);
    let threshold = avg * 0.1;

    if delta > threshold {
        BurnTrend::Increasing
    } else if delta < -threshold {
        BurnTrend::Decreasing
    } else {
        BurnTrend::Stable
    }
}

pub fn compute_burn_rate(months: &[MonthlyIncome], balance_sheet: &Value) -> BurnRateSummary {
    debug!("Computing burn rate over {} months", months.len());

    let mut burns = Vec::with_capacity(months.len());
    let mut monthly = Vec::with_capacity(months.len());

    for month in months {
        let revenue = extract_total(&month.income_statement, &REVENUE_KEYWORDS);
        let expenses = extract_total(&month.income_statement, &EXPENSE_KEYWORDS).abs();
        let burn = expenses - revenue;

        burns.push(burn);
        monthly.push(MonthlyBurn {
            month: month.label.clone(),
            revenue: round2(revenue),
            expenses: round2(expenses),
            burn: round2(burn),
        });
    }

    let avg = mean(&burns);
    let trend = classify_trend(&burns, avg);

    let cash = extract_total(balance_sheet, &CASH_KEYWORDS);
    let runway_months = if avg > 0.0 && cash > 0.0 {
        Some(round2(cash / avg))
    } else {
        None
    };

    BurnRateSummary {
        months: monthly,
        monthly_burn_avg: round2(avg),
        trend,
        cash_position: (cash != 0.0).then(|| round2(cash)),
        runway_months,
    }
}
