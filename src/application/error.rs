use thiserror::Error;

use crate::domain::Balance;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to get state for {key}")]
    NotFound { key: String },

    #[error("State store error for {key}: {source}")]
    Store {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Malformed account record for {key}: {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Insufficient balance in account {account}: balance {balance}, required {required}")]
    InsufficientBalance {
        account: String,
        balance: Balance,
        required: Balance,
    },

    #[error("Received unknown function {surface}: {name}")]
    UnknownOperation { surface: &'static str, name: String },
}

impl LedgerError {
    /// JSON payload handed back to the host, e.g.
    /// `{"Error":"Failed to get state for Vatsala"}`.
    pub fn to_payload(&self) -> Vec<u8> {
        serde_json::json!({ "Error": self.to_string() })
            .to_string()
            .into_bytes()
    }

    /// True for failures raised before the ledger touched the store.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LedgerError::InvalidArgument(_)
                | LedgerError::InsufficientBalance { .. }
                | LedgerError::UnknownOperation { .. }
        )
    }
}
