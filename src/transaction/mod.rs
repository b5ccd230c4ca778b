//! Transaction management for the expense tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the in-memory `Ledger` that owns it
//! - The `Totals` summary recomputed from the ledger after every change
//! - View handlers for the tracker page and its endpoints

mod core;
mod create_endpoint;
mod delete_endpoint;
mod models;
mod tracker_page;
mod view;

pub use core::{Ledger, Totals, Transaction, TransactionId, TransactionKind};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use tracker_page::get_tracker_page;
