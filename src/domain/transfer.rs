use std::fmt;

use super::{Account, Balance};

/// Move `amount` from `from` to `to` in memory.
///
/// Either both balances change or neither does: the source must cover the
/// amount and the destination must not overflow. `amount` is expected to be
/// non-negative (see [`super::parse_amount`]).
pub fn apply_transfer(
    from: &mut Account,
    to: &mut Account,
    amount: Balance,
) -> Result<(), TransferError> {
    debug_assert!(amount >= 0, "transfer amount must not be negative");

    if from.balance < amount {
        return Err(TransferError::InsufficientBalance {
            balance: from.balance,
            required: amount,
        });
    }

    let credited = to
        .balance
        .checked_add(amount)
        .ok_or(TransferError::Overflow {
            balance: to.balance,
            amount,
        })?;

    // from.balance >= amount >= 0, cannot underflow
    from.balance -= amount;
    to.balance = credited;
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    InsufficientBalance { balance: Balance, required: Balance },
    Overflow { balance: Balance, amount: Balance },
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferError::InsufficientBalance { balance, required } => {
                write!(f, "balance {} is less than required {}", balance, required)
            }
            TransferError::Overflow { balance, amount } => {
                write!(f, "crediting {} to balance {} overflows", amount, balance)
            }
        }
    }
}

impl std::error::Error for TransferError {}
