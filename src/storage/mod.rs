mod memory;
mod sqlite;

pub use memory::*;
pub use sqlite::*;

use anyhow::Result;

/// SQL migration for the key-value state table
pub const MIGRATION_001_STATE: &str = include_str!("migrations/001_state.sql");

/// Key-value state store supplied by the host.
///
/// The ledger only needs point reads and writes. Durability, snapshot
/// isolation and ordering of concurrent callers are the store's (and the
/// host's) business.
#[allow(async_fn_in_trait)]
pub trait StateStore {
    /// Read the value under `key`. A missing key is `Ok(None)`, not an error.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Write `value` under `key`, replacing any previous value.
    async fn put(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Write several entries.
    ///
    /// The default writes them in order and stops at the first failure,
    /// leaving earlier entries written. Stores with transactions override
    /// this to commit all entries or none.
    async fn put_batch(&self, entries: &[(String, Vec<u8>)]) -> Result<()> {
        for (key, value) in entries {
            self.put(key, value).await?;
        }
        Ok(())
    }
}
