//! Application router configuration.

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use crate::{
    AppState, endpoints,
    logging::logging_middleware,
    not_found::get_404_not_found,
    transaction::{create_transaction_endpoint, delete_transaction_endpoint, get_tracker_page},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::TRACKER_VIEW, get(get_tracker_page))
        .route(
            endpoints::TRANSACTIONS_API,
            post(create_transaction_endpoint),
        )
        .route(
            endpoints::DELETE_TRANSACTION,
            delete(delete_transaction_endpoint),
        )
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}
