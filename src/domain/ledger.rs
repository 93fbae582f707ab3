use chrono::NaiveDate;
use tracing::debug;

use super::{Amount, Kind, Transaction};

/// Income, expense and their difference at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub income: Amount,
    pub expense: Amount,
    pub net: Amount,
}

/// In-memory, append-only collection of transactions.
///
/// Running totals are maintained on every insert rather than recomputed, so
/// `total_income` always equals the sum of income amounts in `transactions`
/// (and likewise for expenses). There is no removal path.
#[derive(Debug, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    total_income: Amount,
    total_expense: Amount,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a transaction. Inputs must already be validated; an amount that
    /// is not positive panics in `Transaction::new`.
    pub fn add_transaction(
        &mut self,
        date: NaiveDate,
        category: impl Into<String>,
        amount: Amount,
        kind: Kind,
    ) {
        let transaction = Transaction::new(date, category, amount, kind);
        if transaction.is_income() {
            self.total_income += transaction.amount;
        } else {
            self.total_expense += transaction.amount;
        }
        debug!(
            date = %transaction.date,
            category = %transaction.category,
            amount = transaction.amount,
            kind = %transaction.kind,
            "recorded transaction"
        );
        self.transactions.push(transaction);
    }

    pub fn totals(&self) -> Totals {
        Totals {
            income: self.total_income,
            expense: self.total_expense,
            net: self.total_income - self.total_expense,
        }
    }

    /// All transactions in insertion order.
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
