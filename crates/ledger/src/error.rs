//! The module contains the errors the ledger can produce.
//!
//! The two outcomes of opening a file are deliberately distinct:
//! a missing file is benign (the store initializes it), while a file
//! that exists but cannot be parsed is [`Corrupt`] and is surfaced to
//! the caller instead of being treated as empty.
//!
//! [`Corrupt`]: LedgerError::Corrupt
use thiserror::Error;

/// Ledger custom errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("\"{0}\" not found!")]
    KeyNotFound(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
    #[error("{path} is corrupt at line {line}: {reason}")]
    Corrupt {
        path: String,
        line: u64,
        reason: String,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl PartialEq for LedgerError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::InvalidRecord(a), Self::InvalidRecord(b)) => a == b,
            (
                Self::Corrupt {
                    path: a_path,
                    line: a_line,
                    reason: a_reason,
                },
                Self::Corrupt {
                    path: b_path,
                    line: b_line,
                    reason: b_reason,
                },
            ) => a_path == b_path && a_line == b_line && a_reason == b_reason,
            (Self::Io(a), Self::Io(b)) => a.to_string() == b.to_string(),
            (Self::Csv(a), Self::Csv(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
