use accounting_normalizer::*;
use anyhow::Result;
use chrono::NaiveDate;
use serde_json::{json, Value};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_every_shaper_is_total_on_empty_input() -> Result<()> {
    let empty = json!([]);

    assert_eq!(shape_transactions(&empty)?.count, 0);
    assert_eq!(shape_aging(&empty)?.count, 0);
    assert_eq!(shape_contracts(&empty)?.count, 0);
    assert_eq!(shape_customers(&empty)?.count, 0);
    assert_eq!(shape_invoices(&empty)?.count, 0);
    assert_eq!(shape_trial_balance(&empty)?.count, 0);
    assert_eq!(shape_budgets(&empty)?.count, 0);
    assert_eq!(shape_budget_allocations(&empty)?.count, 0);
    assert_eq!(shape_uncategorized_transactions(&empty)?.count, 0);
    assert_eq!(shape_bills(&empty)?.count, 0);
    assert_eq!(shape_departments(&empty)?.count, 0);

    // a null response field shapes the same way as an empty list
    assert_eq!(shape_transactions(&json!(null))?.count, 0);

    Ok(())
}

#[test]
fn test_non_list_input_is_the_only_error() {
    assert!(shape_transactions(&json!({"data": []})).is_err());
    assert!(shape_bills(&json!("nope")).is_err());
    assert!(shape_departments(&json!(12)).is_err());

    // records of the wrong shape inside the list do not error, they default
    let summary = shape_transactions(&json!(["garbage", 42, {}])).unwrap();
    assert_eq!(summary.count, 3);
    assert_eq!(summary.total_debits, 0.0);
    assert_eq!(summary.by_account_type["Unknown"].count, 3);
}

#[test]
fn test_transaction_item_sums_match_totals() -> Result<()> {
    let raw = json!([
        {"debit": 10.11, "credit": 0.0, "account_type": "Expenses", "vendor": "A"},
        {"debit_amount": 20.22, "creditAmount": 5.5, "accountType": "Expenses"},
        {"debitAmount": "30.33", "credit_amount": 14.5, "type": "Revenue"}
    ]);
    let summary = shape_transactions(&raw)?;

    let debit_sum: f64 = summary.transactions.iter().map(|t| t.debit).sum();
    let credit_sum: f64 = summary.transactions.iter().map(|t| t.credit).sum();
    assert_eq!(round2(debit_sum), summary.total_debits);
    assert_eq!(round2(credit_sum), summary.total_credits);
    assert_eq!(summary.total_debits, 60.66);
    assert_eq!(summary.total_credits, 20.0);
    assert_eq!(summary.by_account_type["Expenses"].debits, 30.33);

    Ok(())
}

#[test]
fn test_aging_buckets_and_critical_membership() -> Result<()> {
    let raw = json!([
        {"customer": "Early", "amount": 100.0, "days_outstanding": 5},
        {"customer": "Late", "amount": 200.0, "days_outstanding": 65},
        {"customer": "VeryLate", "amount": 300.0, "days_outstanding": 120},
        {"customer": "Labeled", "amount": 400.0, "bucket": "90+"}
    ]);
    let summary = shape_aging(&raw)?;

    let bucket_sum: f64 = summary.buckets.values().map(|b| b.total).sum();
    assert_eq!(round2(bucket_sum), summary.total_outstanding);
    assert_eq!(summary.total_outstanding, 1000.0);

    let critical: Vec<&str> = summary
        .critical_items
        .iter()
        .map(|item| item.counterparty.as_str())
        .collect();
    assert_eq!(critical, vec!["VeryLate", "Labeled"]);
    assert_eq!(summary.critical_total, 700.0);

    Ok(())
}

#[test]
fn test_month_range_examples() {
    let now = date(2026, 2, 8);
    assert_eq!(
        month_range(0, now),
        DateRange {
            from: "2026-02-01".into(),
            to: "2026-02-28".into()
        }
    );
    assert_eq!(
        month_range(3, now),
        DateRange {
            from: "2025-11-01".into(),
            to: "2025-11-30".into()
        }
    );
}

#[test]
fn test_snapshot_worked_example() {
    let income = json!([
        {"name": "Revenue", "total": 500000.0},
        {"name": "Cost of Goods Sold", "total": 200000.0},
        {"name": "Net Income", "total": 150000.0}
    ]);
    let balance = json!([
        {"name": "Total Current Assets", "total": 1200000.0},
        {"name": "Total Current Liabilities", "total": 400000.0}
    ]);

    let snapshot = build_financial_snapshot(&income, &balance, &json!(null), "FY2025");

    assert_eq!(snapshot.gross_margin_percent, Some(60.0));
    assert_eq!(snapshot.net_margin_percent, Some(30.0));
    assert_eq!(snapshot.current_ratio, Some(3.0));
}

#[test]
fn test_burn_rate_worked_example() {
    let month = |label: &str| MonthlyIncome {
        label: label.to_string(),
        income_statement: json!([
            {"name": "Revenue", "total": 10000.0},
            {"name": "Total Expenses", "total": 30000.0}
        ]),
    };
    let balance = json!([{"name": "Cash", "total": 500000.0}]);

    let summary = compute_burn_rate(&[month("m1"), month("m2"), month("m3")], &balance);

    assert_eq!(summary.monthly_burn_avg, 20000.0);
    assert_eq!(summary.trend, BurnTrend::Stable);
    assert_eq!(summary.runway_months, Some(25.0));
}

#[test]
fn test_allocation_lineage_totals() -> Result<()> {
    let raw = json!([
        {"lineage": "Expenses > Payroll", "amount": 120.5, "department": "Eng"},
        {"lineage": "Expenses > Rent", "amount": 79.5, "department": "Ops"},
        {"lineage": "Expenses > Tools", "amount": 50.0}
    ]);
    let summary = shape_budget_allocations(&raw)?;

    assert_eq!(summary.by_account_type["Expenses"].total, 250.0);
    assert_eq!(summary.by_account_type["Expenses"].count, 3);
    assert_eq!(summary.total_allocated, 250.0);

    Ok(())
}

#[test]
fn test_reshaping_is_deterministic() -> Result<()> {
    let raw = json!([
        {"total": 150.0, "status": "open", "amount_due": 150.0, "customer": "Acme"},
        {"total": 90.0, "status": "paid", "amount_paid": 90.0, "past_due_days": 0}
    ]);

    let first = serde_json::to_string(&shape_invoices(&raw)?)?;
    let second = serde_json::to_string(&shape_invoices(&raw)?)?;
    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_output_contract_serialization() -> Result<()> {
    let summary = shape_invoices(&json!([
        {"total_amount": 100.0, "status": "open", "amount_due": 100.0, "past_due_days": 14}
    ]))?;
    let value: Value = serde_json::to_value(&summary)?;

    // camelCase keys, lists and groupings always present
    assert!(value.get("totalAmount").is_some());
    assert!(value.get("byStatus").is_some());
    assert_eq!(value["invoices"][0]["pastDueDays"], json!(14.0));
    // zero paid amount omitted entirely on the compact invoice shape
    assert!(value["invoices"][0].get("amountPaid").is_none());
    // absent optional fields serialize as null, not missing
    assert_eq!(value["invoices"][0]["customer"], json!(null));

    let burn = compute_burn_rate(&[], &json!(null));
    let value: Value = serde_json::to_value(&burn)?;
    assert_eq!(value["trend"], json!("stable"));

    Ok(())
}

#[test]
fn test_ytd_and_month_to_date_ranges() {
    let now = date(2024, 2, 29);
    assert_eq!(current_ytd_range(now).from, "2024-01-01");
    assert_eq!(current_ytd_range(now).to, "2024-02-29");
    assert_eq!(current_month_range(now).from, "2024-02-01");

    // wrappers just supply the real clock; shape only
    let today = current_month_range_today();
    assert_eq!(today.from.len(), 10);
    assert_eq!(today.to.len(), 10);
}

#[test]
fn test_statement_search_asymmetry_end_to_end() {
    // list nodes: first match wins across siblings
    let list_tree = json!([
        {"name": "Revenue - Product", "total": 300.0},
        {"name": "Revenue - Services", "total": 200.0}
    ]);
    assert_eq!(extract_total(&list_tree, &["revenue"]), 300.0);

    // matched object sections holding lists are summed instead
    let section_tree = json!({
        "Revenue": [
            {"name": "Product", "amount": 300.0},
            {"name": "Services", "amount": 200.0}
        ]
    });
    assert_eq!(extract_total(&section_tree, &["revenue"]), 500.0);
}
