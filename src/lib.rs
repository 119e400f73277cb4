#![doc(test(attr(deny(warnings))))]

//! Fintrack offers an in-memory ledger of income and expense transactions
//! together with the interactive shell that drives it.

pub mod cli;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Fintrack tracing initialized.");
    });
}
