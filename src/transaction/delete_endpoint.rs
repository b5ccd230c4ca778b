//! Defines the endpoint for deleting a transaction.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{
    AppState, Error, endpoints,
    storage::TransactionStore,
    transaction::{Ledger, TransactionId},
};

/// The state needed to delete a transaction.
#[derive(Debug, Clone)]
pub struct DeleteTransactionState {
    /// The in-memory ledger holding this session's transactions.
    pub ledger: Arc<Mutex<Ledger>>,
    /// The persistence seam, invoked after every change.
    pub store: Arc<dyn TransactionStore>,
}

impl FromRef<AppState> for DeleteTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
            store: state.store.clone(),
        }
    }
}

/// A route handler for deleting a transaction, redirects to the tracker page
/// so that the list and totals re-render.
///
/// Deleting an ID that is not in the ledger is not an error: the ledger is
/// left unchanged and the client is redirected all the same, so a repeated
/// delete of the same row is harmless.
pub async fn delete_transaction_endpoint(
    State(state): State<DeleteTransactionState>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<Response, Error> {
    let mut ledger = state
        .ledger
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire ledger lock: {error}"))
        .map_err(|_| Error::LedgerLockError)?;

    if ledger.delete(transaction_id) {
        tracing::debug!("deleted transaction {transaction_id}");

        state
            .store
            .save(ledger.transactions())
            .inspect_err(|error| tracing::error!("could not save transactions: {error}"))?;
    } else {
        tracing::debug!("transaction {transaction_id} was already gone, nothing to delete");
    }

    Ok((
        HxRedirect(endpoints::TRACKER_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response())
}
