//! Shared view-model structs for the tracker page.

use time::Date;

use crate::{endpoints, transaction::TransactionId};

use super::core::{Transaction, TransactionKind};

/// Renders a transaction as a list row.
#[derive(Debug, PartialEq, Clone)]
pub(crate) struct TransactionRow {
    /// A short label for what the transaction was.
    pub(crate) name: String,
    /// The amount with the sign of the cash flow applied, i.e. expenses are
    /// negative.
    pub(crate) amount: f64,
    /// When the transaction happened.
    pub(crate) date: Date,
    /// Whether the transaction is income or an expense.
    pub(crate) kind: TransactionKind,
    /// The API path to delete this transaction.
    pub(crate) delete_url: String,
}

impl TransactionRow {
    pub(crate) fn new_from_transaction(transaction: &Transaction) -> Self {
        let amount = match transaction.kind {
            TransactionKind::Income => transaction.amount,
            TransactionKind::Expense => -transaction.amount,
        };

        Self {
            name: transaction.name.clone(),
            amount,
            date: transaction.date,
            kind: transaction.kind,
            delete_url: delete_url(transaction.id),
        }
    }
}

fn delete_url(id: TransactionId) -> String {
    endpoints::format_endpoint(endpoints::DELETE_TRANSACTION, id)
}

#[cfg(test)]
mod transaction_row_tests {
    use time::macros::date;

    use crate::transaction::core::{Transaction, TransactionKind};

    use super::TransactionRow;

    fn test_transaction(kind: TransactionKind) -> Transaction {
        Transaction {
            id: 7,
            name: "Coffee".to_owned(),
            amount: 4.5,
            date: date!(2024 - 01 - 02),
            kind,
        }
    }

    #[test]
    fn expense_amounts_are_negated_for_display() {
        let row = TransactionRow::new_from_transaction(&test_transaction(TransactionKind::Expense));

        assert_eq!(row.amount, -4.5);
    }

    #[test]
    fn income_amounts_keep_their_sign() {
        let row = TransactionRow::new_from_transaction(&test_transaction(TransactionKind::Income));

        assert_eq!(row.amount, 4.5);
    }

    #[test]
    fn delete_url_contains_the_transaction_id() {
        let row = TransactionRow::new_from_transaction(&test_transaction(TransactionKind::Expense));

        assert_eq!(row.delete_url, "/api/transactions/7");
    }
}
