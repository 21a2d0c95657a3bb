// errors.rs
use std::fmt;

/// Errors from the persistence layers (snapshot history, subscriber
/// store).
#[derive(Debug)]
pub enum StoreError {
    Io(String),
    Csv(String),
    Json(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(msg) => write!(f, "I/O error: {msg}"),
            StoreError::Csv(msg) => write!(f, "CSV error: {msg}"),
            StoreError::Json(msg) => write!(f, "JSON error: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}
