//! Persistence of the expense and account lists.
//!
//! The core never depends on this module; it only receives and returns
//! record slices.

pub mod json_backend;

use crate::{account::Account, errors::StorageError, expense::ExpenseRecord};

pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage key of the expense list.
pub const EXPENSES_KEY: &str = "jangorithm_expenses";
/// Storage key of the account list.
pub const ACCOUNTS_KEY: &str = "jangorithm_accounts";

/// Backend able to load and save the two persisted lists.
///
/// Loading is tolerant: missing or malformed data yields an empty list.
pub trait Storage {
    fn load_expenses(&self) -> Result<Vec<ExpenseRecord>>;
    fn save_expenses(&self, records: &[ExpenseRecord]) -> Result<()>;
    fn load_accounts(&self) -> Result<Vec<Account>>;
    fn save_accounts(&self, accounts: &[Account]) -> Result<()>;
}

pub use json_backend::JsonStore;
