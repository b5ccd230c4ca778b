//! Implements a struct that holds the state of the server.

use std::sync::{Arc, Mutex};

use crate::{
    storage::{NoopStore, TransactionStore},
    transaction::Ledger,
};

/// The state of the server.
///
/// The ledger is owned here exclusively; route handlers mutate it through
/// the mutex and derive everything else (totals, the rendered list) from it.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The in-memory ledger holding this session's transactions.
    pub ledger: Arc<Mutex<Ledger>>,

    /// The persistence seam. See [crate::storage].
    pub store: Arc<dyn TransactionStore>,
}

impl AppState {
    /// Create a new [AppState] with an empty ledger and the given store.
    pub fn new(store: impl TransactionStore + 'static) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(Ledger::new())),
            store: Arc::new(store),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(NoopStore)
    }
}
