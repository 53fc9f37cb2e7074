// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Error taxonomy shared by the ledger core.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    /// Rejected user input (non-positive amount, empty label, short PIN, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Access denied: {0}")]
    Auth(String),

    #[error("Unknown currency '{0}'")]
    UnknownCurrency(String),

    /// Failure at the persistence boundary (database engine or filesystem)
    #[error("Storage error: {0}")]
    Storage(String),
}

pub type LedgerResult<T> = Result<T, LedgerError>;

impl LedgerError {
    /// Decimal arithmetic that would leave the representable range.
    pub fn out_of_range() -> Self {
        LedgerError::Validation("amount out of range".into())
    }
}

impl From<rusqlite::Error> for LedgerError {
    fn from(e: rusqlite::Error) -> Self {
        LedgerError::Storage(e.to_string())
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(e: std::io::Error) -> Self {
        LedgerError::Storage(e.to_string())
    }
}
