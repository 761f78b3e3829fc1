use tracing::{debug, info, warn};

use crate::domain::{
    Account, Balance, TransferError, apply_transfer, parse_amount, seed_accounts,
};
use crate::storage::StateStore;

use super::{InvokeOperation, LedgerError, QueryOperation};

/// Ledger of named accounts kept in a host-supplied key-value store.
///
/// Every call re-reads the records it needs; nothing is cached between calls.
///
/// # Execution contract
///
/// `transfer` is a read-modify-write over two keys with no compare-and-swap.
/// The host must run invocations of a given ledger one at a time (a single
/// writer per state height). The service adds no locking of its own.
pub struct LedgerService<S> {
    store: S,
}

impl<S: StateStore> LedgerService<S> {
    /// Create a new ledger service over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying state store.
    pub fn store(&self) -> &S {
        &self.store
    }

    // ========================
    // Host entry points
    // ========================

    /// Host initialization hook. Takes no arguments.
    pub async fn init(&self, args: &[String]) -> Result<(), LedgerError> {
        expect_args::<0>(args, "no arguments required")?;
        self.initialize().await
    }

    /// Route a state-changing operation by name.
    pub async fn invoke(&self, operation: &str, args: &[String]) -> Result<Vec<u8>, LedgerError> {
        info!(operation, "invoke is running");

        let Some(op) = InvokeOperation::parse(operation) else {
            warn!(operation, "invoke did not find operation");
            return Err(LedgerError::UnknownOperation {
                surface: "invocation",
                name: operation.to_string(),
            });
        };

        let result = self.dispatch_invoke(op, args).await;
        log_outcome(op.as_str(), &result);
        result.map(|()| Vec::new())
    }

    /// Route a read-only operation by name.
    pub async fn query(&self, operation: &str, args: &[String]) -> Result<Vec<u8>, LedgerError> {
        info!(operation, "query is running");

        let Some(op) = QueryOperation::parse(operation) else {
            warn!(operation, "query did not find operation");
            return Err(LedgerError::UnknownOperation {
                surface: "query",
                name: operation.to_string(),
            });
        };

        let result = self.dispatch_query(op, args).await;
        log_outcome(op.as_str(), &result);
        result
    }

    async fn dispatch_invoke(
        &self,
        op: InvokeOperation,
        args: &[String],
    ) -> Result<(), LedgerError> {
        match op {
            InvokeOperation::Init => self.init(args).await,
            InvokeOperation::Write => {
                let [key, value] = expect_args::<2>(args, "expecting 2: key and value to set")?;
                self.write_raw(key, value.as_bytes()).await
            }
            InvokeOperation::Transfer => {
                let [from, to, amount] =
                    expect_args::<3>(args, "expecting 3: source, destination and amount")?;
                let amount = parse_amount(amount)
                    .map_err(|e| LedgerError::InvalidArgument(e.to_string()))?;
                self.transfer(from, to, amount).await
            }
        }
    }

    async fn dispatch_query(
        &self,
        op: QueryOperation,
        args: &[String],
    ) -> Result<Vec<u8>, LedgerError> {
        match op {
            QueryOperation::Read => {
                let [key] = expect_args::<1>(args, "expecting name of the key to query")?;
                self.read_raw(key).await
            }
        }
    }

    // ========================
    // Account operations
    // ========================

    /// Write the seed accounts.
    ///
    /// Stops at the first failure; seeds already written stay written.
    pub async fn initialize(&self) -> Result<(), LedgerError> {
        for account in seed_accounts() {
            let bytes = encode(&account, &account.name)?;
            self.put(&account.name, &bytes).await?;
            debug!(account = %account.name, balance = account.balance, "seeded account");
        }
        info!("ledger initialized");
        Ok(())
    }

    /// Read and decode the account stored under `key`.
    pub async fn get_account(&self, key: &str) -> Result<Account, LedgerError> {
        let bytes = self.get(key).await?;
        Account::from_bytes(&bytes).map_err(|source| LedgerError::Serialization {
            key: key.to_string(),
            source,
        })
    }

    /// Move `amount` from the account under `from_key` to the one under
    /// `to_key`.
    ///
    /// Argument checks and the balance check happen before any write. The two
    /// updated records go to the store as one batch, so atomicity across them
    /// is whatever the store's `put_batch` provides.
    pub async fn transfer(
        &self,
        from_key: &str,
        to_key: &str,
        amount: Balance,
    ) -> Result<(), LedgerError> {
        if amount < 0 {
            return Err(LedgerError::InvalidArgument(format!(
                "amount {} must not be negative",
                amount
            )));
        }
        if from_key == to_key {
            return Err(LedgerError::InvalidArgument(format!(
                "cannot transfer from {} to itself",
                from_key
            )));
        }

        let mut from = self.get_account(from_key).await?;
        let mut to = self.get_account(to_key).await?;

        apply_transfer(&mut from, &mut to, amount).map_err(|e| match e {
            TransferError::InsufficientBalance { balance, required } => {
                LedgerError::InsufficientBalance {
                    account: from_key.to_string(),
                    balance,
                    required,
                }
            }
            TransferError::Overflow { .. } => {
                LedgerError::InvalidArgument(format!("{}: {}", to_key, e))
            }
        })?;

        let entries = [
            (from_key.to_string(), encode(&from, from_key)?),
            (to_key.to_string(), encode(&to, to_key)?),
        ];
        self.store
            .put_batch(&entries)
            .await
            .map_err(|source| LedgerError::Store {
                key: format!("{},{}", from_key, to_key),
                source,
            })?;

        info!(
            from = from_key,
            to = to_key,
            amount,
            from_balance = from.balance,
            to_balance = to.balance,
            "transfer committed"
        );
        Ok(())
    }

    // ========================
    // Raw key/value operations
    // ========================

    /// Write `value` under `key` verbatim.
    ///
    /// This bypasses the account schema entirely. Overwriting an account key
    /// with anything but a well-formed record makes later transfers and
    /// account reads of that key fail, and a hand-written record may carry a
    /// negative balance.
    pub async fn write_raw(&self, key: &str, value: &[u8]) -> Result<(), LedgerError> {
        if key.is_empty() {
            return Err(LedgerError::InvalidArgument("key must not be empty".into()));
        }
        self.put(key, value).await
    }

    /// Read the bytes stored under `key`, unparsed.
    pub async fn read_raw(&self, key: &str) -> Result<Vec<u8>, LedgerError> {
        self.get(key).await
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>, LedgerError> {
        debug!(key, "reading state");
        self.store
            .get(key)
            .await
            .map_err(|source| LedgerError::Store {
                key: key.to_string(),
                source,
            })?
            .ok_or_else(|| LedgerError::NotFound {
                key: key.to_string(),
            })
    }

    async fn put(&self, key: &str, value: &[u8]) -> Result<(), LedgerError> {
        debug!(key, len = value.len(), "writing state");
        self.store
            .put(key, value)
            .await
            .map_err(|source| LedgerError::Store {
                key: key.to_string(),
                source,
            })
    }
}

fn encode(account: &Account, key: &str) -> Result<Vec<u8>, LedgerError> {
    account.to_bytes().map_err(|source| LedgerError::Serialization {
        key: key.to_string(),
        source,
    })
}

/// Check the argument count and hand back the arguments as a fixed array.
fn expect_args<'a, const N: usize>(
    args: &'a [String],
    expected: &str,
) -> Result<&'a [String; N], LedgerError> {
    args.try_into().map_err(|_| {
        LedgerError::InvalidArgument(format!(
            "incorrect number of arguments ({}), {}",
            args.len(),
            expected
        ))
    })
}

fn log_outcome<T>(operation: &str, result: &Result<T, LedgerError>) {
    match result {
        Ok(_) => debug!(operation, "operation succeeded"),
        Err(e) if e.is_validation() => warn!(operation, error = %e, "operation rejected"),
        Err(e) => warn!(operation, error = %e, "operation failed"),
    }
}
