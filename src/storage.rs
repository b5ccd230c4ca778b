//! The persistence seam for the ledger.
//!
//! The app deliberately keeps all transactions in memory, but the save
//! contract is defined here so that a real backing store can be slotted in
//! without touching the route handlers.

use std::fmt::Debug;

use crate::{Error, transaction::Transaction};

/// Writes the full transaction list to a backing store.
///
/// Stores receive the whole list on every save rather than a diff. The
/// ledger is small enough that rewriting it wholesale keeps the contract
/// simple.
pub trait TransactionStore: Debug + Send + Sync {
    /// Save `transactions`, replacing whatever was stored before.
    ///
    /// # Errors
    /// Returns [Error::SaveError] if the store could not be written.
    fn save(&self, transactions: &[Transaction]) -> Result<(), Error>;
}

/// A store that discards all writes.
///
/// This is the only store that ships today.
// TODO: replace with a JSON file store once a --data-path flag is added to the server binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopStore;

impl TransactionStore for NoopStore {
    fn save(&self, transactions: &[Transaction]) -> Result<(), Error> {
        tracing::debug!(
            "discarding save of {} transaction(s): no backing store is configured",
            transactions.len()
        );

        Ok(())
    }
}
