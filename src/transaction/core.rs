//! Defines the core data models and the in-memory ledger operations.

use serde::{Deserialize, Serialize};
use time::Date;

/// Alias for transaction IDs to aid readability.
pub type TransactionId = i64;

/// Whether a transaction brings money in or takes money out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money earned, e.g. a salary payment.
    Income,
    /// Money spent, e.g. a coffee.
    Expense,
}

impl TransactionKind {
    /// The lowercase name of the kind, used as a CSS hook in the list view.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Transactions are immutable once created; the ledger only changes by
/// appending and removing them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// A short label for what the transaction was, e.g. "Salary".
    pub name: String,
    /// The amount of money spent or earned. Always positive; the sign of the
    /// cash flow is carried by `kind`.
    pub amount: f64,
    /// When the transaction happened.
    pub date: Date,
    /// Whether the transaction is income or an expense.
    pub kind: TransactionKind,
}

/// The summary figures derived from the ledger.
///
/// Totals are never stored or adjusted incrementally; they are recomputed
/// from the full transaction list after every change via [Totals::of].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    /// The sum of all income amounts.
    pub income: f64,
    /// The sum of all expense amounts.
    pub expense: f64,
    /// Income minus expenses.
    pub balance: f64,
}

impl Totals {
    /// Compute summary totals from a transaction list.
    pub fn of(transactions: &[Transaction]) -> Self {
        let income: f64 = transactions
            .iter()
            .filter(|transaction| transaction.kind == TransactionKind::Income)
            .map(|transaction| transaction.amount)
            .sum();

        let expense: f64 = transactions
            .iter()
            .filter(|transaction| transaction.kind == TransactionKind::Expense)
            .map(|transaction| transaction.amount)
            .sum();

        Self {
            income,
            expense,
            balance: income - expense,
        }
    }
}

/// The ordered collection of transactions for one server session.
///
/// IDs come from a counter that only ever increases, so an ID is never reused
/// within a session even after deletions.
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    next_id: TransactionId,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            next_id: 1,
        }
    }

    /// The transactions in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Append a new transaction and return a reference to it.
    pub fn add(
        &mut self,
        name: String,
        amount: f64,
        date: Date,
        kind: TransactionKind,
    ) -> &Transaction {
        let transaction = Transaction {
            id: self.next_id,
            name,
            amount,
            date,
            kind,
        };
        self.next_id += 1;
        self.transactions.push(transaction);

        self.transactions
            .last()
            .expect("the transaction was just pushed")
    }

    /// Remove the transaction with the given ID.
    ///
    /// Returns whether a transaction was removed. A missing ID leaves the
    /// ledger unchanged and is not an error, so a repeated delete (e.g. from
    /// a double-clicked button) is harmless.
    pub fn delete(&mut self, id: TransactionId) -> bool {
        let count_before = self.transactions.len();
        self.transactions.retain(|transaction| transaction.id != id);

        self.transactions.len() < count_before
    }

    /// Recompute the summary totals from the current transactions.
    pub fn totals(&self) -> Totals {
        Totals::of(&self.transactions)
    }
}

#[cfg(test)]
mod ledger_tests {
    use time::macros::date;

    use super::{Ledger, Totals, TransactionKind};

    fn assert_totals(ledger: &Ledger, income: f64, expense: f64, balance: f64) {
        let totals = ledger.totals();
        assert_eq!(
            totals,
            Totals {
                income,
                expense,
                balance
            }
        );
        assert_eq!(totals.balance, totals.income - totals.expense);
    }

    #[test]
    fn empty_ledger_has_zero_totals() {
        let ledger = Ledger::new();

        assert_totals(&ledger, 0.0, 0.0, 0.0);
    }

    #[test]
    fn add_income_raises_income_total_only() {
        let mut ledger = Ledger::new();

        ledger.add(
            "Salary".to_owned(),
            1000.0,
            date!(2024 - 01 - 01),
            TransactionKind::Income,
        );

        assert_totals(&ledger, 1000.0, 0.0, 1000.0);
    }

    #[test]
    fn add_expense_raises_expense_total_only() {
        let mut ledger = Ledger::new();
        ledger.add(
            "Salary".to_owned(),
            1000.0,
            date!(2024 - 01 - 01),
            TransactionKind::Income,
        );

        ledger.add(
            "Coffee".to_owned(),
            4.50,
            date!(2024 - 01 - 02),
            TransactionKind::Expense,
        );

        assert_totals(&ledger, 1000.0, 4.50, 995.50);
    }

    #[test]
    fn delete_recomputes_totals_from_remaining_transactions() {
        let mut ledger = Ledger::new();
        let salary_id = ledger
            .add(
                "Salary".to_owned(),
                1000.0,
                date!(2024 - 01 - 01),
                TransactionKind::Income,
            )
            .id;
        ledger.add(
            "Coffee".to_owned(),
            4.50,
            date!(2024 - 01 - 02),
            TransactionKind::Expense,
        );

        let removed = ledger.delete(salary_id);

        assert!(removed);
        assert_totals(&ledger, 0.0, 4.50, -4.50);
    }

    #[test]
    fn delete_missing_id_changes_nothing() {
        let mut ledger = Ledger::new();
        ledger.add(
            "Coffee".to_owned(),
            4.50,
            date!(2024 - 01 - 02),
            TransactionKind::Expense,
        );
        let before = ledger.clone();

        let removed = ledger.delete(999);

        assert!(!removed);
        assert_eq!(ledger, before);
    }

    #[test]
    fn ids_are_not_reused_after_deletion() {
        let mut ledger = Ledger::new();
        let today = date!(2024 - 01 - 01);
        for name in ["one", "two", "three"] {
            ledger.add(name.to_owned(), 1.0, today, TransactionKind::Expense);
        }

        ledger.delete(2);
        let new_id = ledger
            .add("four".to_owned(), 1.0, today, TransactionKind::Expense)
            .id;

        assert_eq!(new_id, 4);
        let mut ids: Vec<_> = ledger
            .transactions()
            .iter()
            .map(|transaction| transaction.id)
            .collect();
        ids.dedup();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn transactions_keep_insertion_order() {
        let mut ledger = Ledger::new();
        let today = date!(2024 - 01 - 01);
        ledger.add("first".to_owned(), 1.0, today, TransactionKind::Income);
        ledger.add("second".to_owned(), 2.0, today, TransactionKind::Expense);
        ledger.add("third".to_owned(), 3.0, today, TransactionKind::Income);

        let names: Vec<_> = ledger
            .transactions()
            .iter()
            .map(|transaction| transaction.name.as_str())
            .collect();

        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn balance_matches_income_minus_expense_after_mixed_operations() {
        let mut ledger = Ledger::new();
        let today = date!(2024 - 06 - 15);

        let id = ledger
            .add("Rent".to_owned(), 1200.0, today, TransactionKind::Expense)
            .id;
        ledger.add("Pay".to_owned(), 2500.0, today, TransactionKind::Income);
        ledger.add("Lunch".to_owned(), 18.75, today, TransactionKind::Expense);
        ledger.delete(id);
        ledger.add("Bonus".to_owned(), 100.0, today, TransactionKind::Income);

        assert_totals(&ledger, 2600.0, 18.75, 2581.25);
    }
}
