//! Error types for the transfer engine
//!
//! This module defines all error conditions that can occur while operating
//! on accounts and making transfers.
//!
//! # Error Categories
//!
//! - **Lock-discipline errors**: mutating a balance without holding the
//!   guard, or locking an account that is already locked. These are
//!   programmer errors and propagate to the caller uncaught.
//! - **Argument errors**: structurally invalid input (negative amount).
//! - **Business-rule errors**: well-formed requests that violate transfer
//!   rules (self-transfer, amount below the minimum).
//!
//! A transfer that is well-formed but cannot be honored under policy
//! (disproportionate fee, insufficient funds) is *not* an error: it is
//! signaled by `Ok(false)` from [`crate::core::Transaction::make`].

use crate::types::AccountId;
use thiserror::Error;

/// Main error type for the transfer engine
///
/// Each variant carries enough context to diagnose the failure without
/// access to the accounts involved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    /// The account's exclusive-access flag is already held
    ///
    /// The guard is non-reentrant and never blocks: a second `lock` call
    /// without an intervening `unlock` fails immediately.
    #[error("account {id} is already locked")]
    AlreadyLocked {
        /// Identifier of the account whose lock was contended
        id: AccountId,
    },

    /// A balance mutation was attempted without holding the lock
    ///
    /// `change_balance` requires the exclusive-access flag to be held;
    /// the account is never mutated without the guard.
    #[error("account {id} cannot change balance without holding the lock")]
    NotLocked {
        /// Identifier of the account that was mutated unguarded
        id: AccountId,
    },

    /// Source and destination of a transfer are the same account
    #[error("cannot transfer from an account to itself")]
    SameAccount,

    /// The transfer amount is negative
    #[error("transfer amount {amount} is negative")]
    NegativeAmount {
        /// The rejected amount
        amount: i64,
    },

    /// The transfer amount is below the minimum transferable amount
    ///
    /// Zero amounts are caught here too, since zero is below the minimum.
    #[error("transfer amount {amount} is below the minimum of {minimum}")]
    BelowMinimum {
        /// The rejected amount
        amount: i64,
        /// The minimum transferable amount
        minimum: i64,
    },
}

// Helper functions for creating common errors

impl TransferError {
    /// Create an AlreadyLocked error
    pub fn already_locked(id: AccountId) -> Self {
        TransferError::AlreadyLocked { id }
    }

    /// Create a NotLocked error
    pub fn not_locked(id: AccountId) -> Self {
        TransferError::NotLocked { id }
    }

    /// Create a BelowMinimum error for the given amount
    pub fn below_minimum(amount: i64, minimum: i64) -> Self {
        TransferError::BelowMinimum { amount, minimum }
    }

    /// Whether this error is a lock-discipline violation
    ///
    /// Lock-discipline violations indicate a bug in the calling code rather
    /// than a malformed transfer request.
    pub fn is_lock_violation(&self) -> bool {
        matches!(
            self,
            TransferError::AlreadyLocked { .. } | TransferError::NotLocked { .. }
        )
    }
}
