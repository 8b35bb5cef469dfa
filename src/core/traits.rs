//! Core trait for guarded balance access
//!
//! This module defines the capability surface through which
//! [`crate::core::Transaction`] drives an account. Exposing the operations
//! behind a trait lets a test harness substitute a recording or stubbing
//! double for a real [`Account`].

use crate::types::{Account, TransferError};

/// Guarded access to an account balance
///
/// Implementations pair a readable balance with a non-reentrant
/// exclusive-access flag. The contract mirrors [`Account`]:
///
/// - `lock` fails fast if the flag is already held; it never blocks.
/// - `change_balance` only succeeds while the flag is held and does not
///   release it.
/// - `unlock` is unconditional; releasing an unheld flag is a no-op.
pub trait BalanceAccess {
    /// Read the current balance without taking the lock
    fn balance(&self) -> i64;

    /// Acquire the exclusive-access flag
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::AlreadyLocked`] if the flag is already held.
    fn lock(&self) -> Result<(), TransferError>;

    /// Release the exclusive-access flag
    fn unlock(&self);

    /// Apply a signed delta to the balance
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::NotLocked`] if the flag is not held.
    fn change_balance(&self, diff: i64) -> Result<(), TransferError>;
}

impl BalanceAccess for Account {
    fn balance(&self) -> i64 {
        Account::balance(self)
    }

    fn lock(&self) -> Result<(), TransferError> {
        Account::lock(self)
    }

    fn unlock(&self) {
        Account::unlock(self)
    }

    fn change_balance(&self, diff: i64) -> Result<(), TransferError> {
        Account::change_balance(self, diff)
    }
}
