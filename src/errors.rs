use thiserror::Error;
use uuid::Uuid;

/// Failures raised while validating or mutating the expense list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpenseError {
    #[error("Invalid date `{0}`: expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Invalid month `{0}`: expected YYYY-MM")]
    InvalidMonth(String),
    #[error("Category must not be empty")]
    EmptyCategory,
    #[error("Invalid amount `{0}`: expected a non-negative whole number")]
    InvalidAmount(String),
    #[error("Expense not found: {0}")]
    NotFound(Uuid),
}

/// Failures raised by the account registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("No account at index {index} ({len} registered)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Persistence failures. Malformed content is not an error; see `storage`.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid recurring rule `{memo}`: day {day} is outside 1-31")]
    InvalidRule { memo: String, day: u32 },
}
