use serde::{Deserialize, Serialize};

use super::Balance;

/// Names of the accounts written by ledger initialization, in write order.
pub const SEED_ACCOUNTS: [&str; 3] = ["Vatsala", "Harish", "Narayan"];

/// Opening balance of every seed account.
pub const SEED_BALANCE: Balance = 1000;

/// A named balance. Stored under its own name as a JSON object with exactly
/// the fields `name` and `balance`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    pub balance: Balance,
}

impl Account {
    pub fn new(name: impl Into<String>, balance: Balance) -> Self {
        Self {
            name: name.into(),
            balance,
        }
    }

    /// Encode the record as it is persisted in the state store.
    pub fn to_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    /// Decode a persisted record. Fails if `name` or `balance` is missing or
    /// has the wrong type; unknown extra fields are ignored.
    pub fn from_bytes(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}

/// The records written by ledger initialization.
pub fn seed_accounts() -> Vec<Account> {
    SEED_ACCOUNTS
        .iter()
        .map(|name| Account::new(*name, SEED_BALANCE))
        .collect()
}
