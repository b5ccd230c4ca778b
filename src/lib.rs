//! Tally is a web app for recording income and expenses against a running
//! balance.
//!
//! The server renders HTML pages directly and keeps all transactions in
//! memory for the lifetime of the process. There is no database: the
//! persistence seam in [storage] exists as a contract for a future backing
//! store.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod app_state;
mod endpoints;
mod html;
mod logging;
mod not_found;
mod routing;
pub mod storage;
mod transaction;

pub use app_state::AppState;
pub use routing::build_router;
pub use transaction::{Ledger, Totals, Transaction, TransactionId, TransactionKind};

use crate::html::error_view;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The lock guarding the in-memory ledger was poisoned by a panicking
    /// request handler.
    ///
    /// The error string should only be logged for debugging on the server.
    /// Clients receive a general internal server error page.
    #[error("could not acquire the ledger lock")]
    LedgerLockError,

    /// The transaction store failed to save the ledger.
    ///
    /// The shipped store is a no-op stub that never fails; this variant is
    /// part of the [storage::TransactionStore] contract for real stores.
    #[error("could not save transactions: {0}")]
    SaveError(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!("An unexpected error occurred: {}", self);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_view(
                "Internal Server Error",
                "500",
                "Sorry, something went wrong.",
                "Try again later or check the server logs.",
            ),
        )
            .into_response()
    }
}
