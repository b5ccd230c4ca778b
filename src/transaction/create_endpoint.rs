//! Defines the endpoint for creating a new transaction.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use serde::Deserialize;
use time::Date;

use crate::{
    AppState, Error, endpoints,
    storage::TransactionStore,
    transaction::{Ledger, TransactionKind},
};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The in-memory ledger holding this session's transactions.
    pub ledger: Arc<Mutex<Ledger>>,
    /// The persistence seam, invoked after every change.
    pub store: Arc<dyn TransactionStore>,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
            store: state.store.clone(),
        }
    }
}

/// The form data for creating a transaction.
///
/// The browser enforces the form's constraints (required fields, a positive
/// amount) before submission; typed extraction rejects anything that does
/// not parse. No further validation happens here.
#[derive(Debug, Deserialize)]
pub struct TransactionForm {
    /// A short label for what the transaction was.
    pub name: String,
    /// The value of the transaction in dollars.
    pub amount: f64,
    /// The date when the transaction occurred.
    pub date: Date,
    /// The income checkbox: present ("on") when checked, absent otherwise.
    #[serde(default, rename = "type")]
    pub income: Option<String>,
}

/// A route handler for creating a new transaction, redirects to the tracker
/// page on success so that the totals re-render and the form is cleared.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Form(form): Form<TransactionForm>,
) -> Result<Response, Error> {
    let kind = if form.income.is_some() {
        TransactionKind::Income
    } else {
        TransactionKind::Expense
    };

    let mut ledger = state
        .ledger
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire ledger lock: {error}"))
        .map_err(|_| Error::LedgerLockError)?;

    let transaction = ledger.add(form.name, form.amount, form.date, kind);
    tracing::debug!("created transaction {}", transaction.id);

    state
        .store
        .save(ledger.transactions())
        .inspect_err(|error| tracing::error!("could not save transactions: {error}"))?;

    Ok((
        HxRedirect(endpoints::TRACKER_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response())
}
