// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Result, bail};
use keyledger::{Balance, LedgerService, MemoryStateStore, StateStore};

/// Memory store that counts accesses and can be told to fail on a key.
#[derive(Default)]
pub struct FlakyStore {
    inner: MemoryStateStore,
    fail_get_key: Mutex<Option<String>>,
    fail_put_key: Mutex<Option<String>>,
    gets: AtomicUsize,
    puts: AtomicUsize,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every read of `key` from now on.
    pub fn fail_get_on(&self, key: &str) {
        *self.fail_get_key.lock().unwrap() = Some(key.to_string());
    }

    /// Fail every write of `key` from now on.
    pub fn fail_put_on(&self, key: &str) {
        *self.fail_put_key.lock().unwrap() = Some(key.to_string());
    }

    pub fn inner(&self) -> &MemoryStateStore {
        &self.inner
    }

    pub fn get_count(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn put_count(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    pub fn reset_counts(&self) {
        self.gets.store(0, Ordering::SeqCst);
        self.puts.store(0, Ordering::SeqCst);
    }
}

impl StateStore for FlakyStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        if self.fail_get_key.lock().unwrap().as_deref() == Some(key) {
            bail!("injected read failure for {}", key);
        }
        self.inner.get(key).await
    }

    async fn put(&self, key: &str, value: &[u8]) -> Result<()> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        if self.fail_put_key.lock().unwrap().as_deref() == Some(key) {
            bail!("injected write failure for {}", key);
        }
        self.inner.put(key, value).await
    }
}

/// Build an argument list the way the host passes it.
pub fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Service over a fresh store with the seed accounts written and counters
/// reset.
pub async fn seeded_service() -> Result<LedgerService<FlakyStore>> {
    let service = LedgerService::new(FlakyStore::new());
    service.init(&[]).await?;
    service.store().reset_counts();
    Ok(service)
}

pub async fn balance_of(service: &LedgerService<FlakyStore>, name: &str) -> Result<Balance> {
    Ok(service.get_account(name).await?.balance)
}
