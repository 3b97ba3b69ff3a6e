//! # Accounting Normalizer
//!
//! A library for normalizing heterogeneous, loosely-typed financial records
//! (as returned by an external accounting API) into stable, typed, aggregated
//! summaries for downstream tooling such as an AI assistant.
//!
//! ## Core Concepts
//!
//! - **Raw records**: schema-less JSON mappings with inconsistent field
//!   naming (snake_case vs. camelCase, several synonyms per concept)
//! - **Shaped records**: strict output structs with documented defaults for
//!   every missing field (0, null, "Unknown")
//! - **Entity shapers**: one single-pass aggregator per record type
//!   (transactions, invoices, bills, contracts, customers, budgets, aging
//!   items, trial balance accounts, departments)
//! - **Statement search**: recursive lookup of labeled line items inside
//!   arbitrarily nested financial statement trees
//! - **Derived metrics**: financial snapshot (margins, liquidity) and burn
//!   rate (trend, runway) composed from the above
//!
//! Everything here is pure and synchronous: fetching, authentication,
//! pagination, and the transport that exposes these functions are the
//! caller's concern. Shapers never fail on missing or malformed fields,
//! only on a non-list where a record list is required.
//!
//! ## Example
//!
//! ```rust
//! use accounting_normalizer::shape_transactions;
//! use serde_json::json;
//!
//! let raw = json!([
//!     {"debit_amount": 120.5, "accountType": "Expenses", "vendor": "Acme"},
//!     {"creditAmount": "99.95", "account_type": "Revenue"}
//! ]);
//!
//! let summary = shape_transactions(&raw).unwrap();
//! assert_eq!(summary.total_debits, 120.5);
//! assert_eq!(summary.total_credits, 99.95);
//! assert_eq!(summary.by_account_type["Revenue"].count, 1);
//! ```

pub mod burn_rate;
pub mod dates;
pub mod error;
pub mod fields;
pub mod numeric;
pub mod shapers;
pub mod snapshot;
pub mod statement;

pub use burn_rate::{compute_burn_rate, BurnRateSummary, BurnTrend, MonthlyBurn, MonthlyIncome};
pub use dates::{
    current_month_range, current_month_range_today, current_ytd_range, current_ytd_range_today,
    month_range, month_range_today, DateRange,
};
pub use error::{NormalizerError, Result};
pub use numeric::{coerce_num, round2, round_to};
pub use shapers::*;
pub use snapshot::{build_financial_snapshot, FinancialSnapshot};
pub use statement::extract_total;
