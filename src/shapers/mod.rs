//! Entity shapers: one aggregator per financial entity type.
//!
//! Each shaper takes the raw record list exactly as deserialized from the
//! accounting API, normalizes every record into a stable shaped item, and
//! accumulates summary statistics in a single pass. Group totals are rounded
//! only after the pass completes so intermediate sums don't compound
//! rounding error. All shapers are total over well-formed lists: an empty
//! (or null) input produces zero counts, zero sums, and empty groupings.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::numeric::round2;

pub mod aging;
pub mod allocations;
pub mod bills;
pub mod budgets;
pub mod contracts;
pub mod customers;
pub mod departments;
pub mod invoices;
pub mod trial_balance;
pub mod transactions;
pub mod uncategorized;

pub use aging::{shape_aging, AgingItem, AgingSummary};
pub use allocations::{shape_budget_allocations, BudgetAllocation, BudgetAllocationSummary};
pub use bills::{shape_bills, Bill, BillSummary};
pub use budgets::{shape_budgets, Budget, BudgetSummary};
pub use contracts::{shape_contracts, Contract, ContractSummary};
pub use customers::{shape_customers, Customer, CustomerSummary};
pub use departments::{shape_departments, Department, DepartmentSummary};
pub use invoices::{shape_invoices, Invoice, InvoiceSummary};
pub use transactions::{shape_transactions, Transaction, TransactionSummary};
pub use trial_balance::{shape_trial_balance, TrialBalanceAccount, TrialBalanceSummary};
pub use uncategorized::{
    shape_uncategorized_transactions, UncategorizedSummary, UncategorizedTransaction,
};

/// Running count/total pair used by most groupings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupTotals {
    pub count: usize,
    pub total: f64,
}

impl GroupTotals {
    pub(crate) fn add(&mut self, amount: f64) {
        self.count += 1;
        self.total += amount;
    }

    pub(crate) fn finish(&mut self) {
        self.total = round2(self.total);
    }
}

/// Running debit/credit pair for double-entry groupings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DebitCreditTotals {
    pub count: usize,
    pub debits: f64,
    pub credits: f64,
}

impl DebitCreditTotals {
    pub(crate) fn add(&mut self, debit: f64, credit: f64) {
        self.count += 1;
        self.debits += debit;
        self.credits += credit;
    }

    pub(crate) fn finish(&mut self) {
        self.debits = round2(self.debits);
        self.credits = round2(self.credits);
    }
}
