//! Defines the route handler for the tracker page.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use time::OffsetDateTime;

use crate::{AppState, Error, transaction::Ledger};

use super::{models::TransactionRow, view::tracker_view};

/// The state needed for the tracker page.
#[derive(Debug, Clone)]
pub struct TrackerPageState {
    /// The in-memory ledger holding this session's transactions.
    ledger: Arc<Mutex<Ledger>>,
}

impl FromRef<AppState> for TrackerPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}

/// Render the tracker page: summary totals, the entry form, and the
/// transaction list.
pub async fn get_tracker_page(State(state): State<TrackerPageState>) -> Result<Response, Error> {
    let (totals, rows) = {
        let ledger = state
            .ledger
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire ledger lock: {error}"))
            .map_err(|_| Error::LedgerLockError)?;

        let rows: Vec<TransactionRow> = ledger
            .transactions()
            .iter()
            .map(TransactionRow::new_from_transaction)
            .collect();

        (ledger.totals(), rows)
    };

    let form_date = OffsetDateTime::now_utc().date();

    Ok(tracker_view(totals, &rows, form_date).into_response())
}
