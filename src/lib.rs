#![doc(test(attr(deny(warnings))))]

//! Jangorithm tracks household and small-business expenses: it registers
//! fixed monthly costs automatically, aggregates spending per month and
//! category, and derives the dashboard figures shown to the user.

pub mod account;
pub mod cli;
pub mod clock;
pub mod config;
pub mod currency;
pub mod dashboard;
pub mod errors;
pub mod expense;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("jangorithm tracing initialized");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_idempotent() {
        super::init();
        super::init();
    }
}
