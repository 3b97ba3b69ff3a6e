//! Financial snapshot composer.
//!
//! Derives the headline metrics an assistant needs for a period (revenue,
//! expenses, margins, cash, liquidity) from raw income-statement and
//! balance-sheet trees, via the recursive statement search.

use log::debug;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::numeric::round2;
use crate::statement::extract_total;

pub(crate) const REVENUE_KEYWORDS: [&str; 3] = ["revenue", "income", "sales"];
pub(crate) const EXPENSE_KEYWORDS: [&str; 3] = ["expense", "operating expense", "total expense"];
pub(crate) const CASH_KEYWORDS: [&str; 3] = ["cash", "cash and cash equivalents", "bank"];
const COGS_KEYWORDS: [&str; 4] = ["cost of goods", "cost of sales", "cogs", "cost of revenue"];
const NET_INCOME_KEYWORDS: [&str; 3] = ["net income", "net profit", "net earnings"];
const CURRENT_ASSET_KEYWORDS: [&str; 2] = ["current assets", "total current assets"];
const CURRENT_LIABILITY_KEYWORDS: [&str; 2] =
    ["current liabilities", "total current liabilities"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSnapshot {
    /// Human-readable period label, e.g. "2026-01" or "Q4 FY2025".
    pub period: String,
    pub revenue: f64,
    /// Total expenses as a positive magnitude.
    pub expenses: f64,
    pub net_income: f64,
    /// Null when revenue is zero (margin undefined).
    pub gross_margin_percent: Option<f64>,
    pub net_margin_percent: Option<f64>,
    /// Null when no cash line was found; a zero cash balance is reported as
    /// unknown rather than 0.
    pub cash_position: Option<f64>,
    /// Null when current liabilities are zero.
    pub current_ratio: Option<f64>,
}

/// Builds a snapshot from an income statement, balance sheet, and cash flow
/// statement for one period. The cash flow tree is accepted for interface
/// stability but not consulted yet.
pub fn build_financial_snapshot(
    income_statement: &Value,
    balance_sheet: &Value,
    _cash_flow: &Value,
    period: &str,
) -> FinancialSnapshot {
    debug!("Building financial snapshot for period {period}");

    let revenue = extract_total(income_statement, &REVENUE_KEYWORDS);
    let cogs = extract_total(income_statement, &COGS_KEYWORDS);
    let expenses = extract_total(income_statement, &EXPENSE_KEYWORDS);

    // A statement without an explicit net income line reports 0 here, which
    // this design treats as absent; derive it from the top line instead.
    let mut net_income = extract_total(income_statement, &NET_INCOME_KEYWORDS);
    if net_income == 0.0 {
        net_income = revenue - expenses;
    }

    let gross_margin_percent = if revenue != 0.0 {
        Some(round2((revenue - cogs.abs()) / revenue * 100.0))
    } else {
        None
    };
    let net_margin_percent = if revenue != 0.0 {
        Some(round2(net_income / revenue * 100.0))
    } else {
        None
    };

    let cash = extract_total(balance_sheet, &CASH_KEYWORDS);
    let current_assets = extract_total(balance_sheet, &CURRENT_ASSET_KEYWORDS);
    let current_liabilities = extract_total(balance_sheet, &CURRENT_LIABILITY_KEYWORDS);

    let current_ratio = if current_liabilities != 0.0 {
        Some(round2(current_assets / current_liabilities))
    } else {
        None
    };

    FinancialSnapshot {
        period: period.to_string(),
        revenue: round2(revenue),
        expenses: round2(expenses.abs()),
        net_income: round2(net_income),
        gross_margin_percent,
        net_margin_percent,
        cash_position: (cash != 0.0).then(|| round2(cash)),
        current_ratio,
    }
}
