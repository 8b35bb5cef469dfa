//! Account type for the transfer engine
//!
//! This module defines the Account structure: a balance paired with a
//! non-reentrant exclusive-access flag that must be held to mutate it.

use crate::types::{AccountId, TransferError};
use log::trace;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

/// An account holding a balance under an explicit mutual-exclusion guard
///
/// The guard is a fail-fast try-lock, not a blocking mutex: [`Account::lock`]
/// never waits, it fails immediately if the flag is already held. Only code
/// that successfully locked the account may call [`Account::change_balance`],
/// and unlocking afterwards is the caller's responsibility.
///
/// Both the balance and the flag are atomics, so every operation takes
/// `&self` and the account can be shared across threads.
#[derive(Debug)]
pub struct Account {
    /// Account identifier, immutable after construction
    ///
    /// Uniqueness is a caller concern; this type does not enforce it.
    id: AccountId,

    /// Current balance
    ///
    /// Signed: the normal transfer protocol never drives it negative, but
    /// callers applying raw deltas under the lock may.
    balance: AtomicI64,

    /// Exclusive-access flag
    ///
    /// `true` while some caller holds the account for mutation.
    locked: AtomicBool,
}

impl Account {
    /// Create a new account with the given identifier and starting balance
    ///
    /// The account starts unlocked.
    ///
    /// # Arguments
    ///
    /// * `id` - The account identifier
    /// * `balance` - The initial balance
    pub fn new(id: AccountId, balance: i64) -> Self {
        Account {
            id,
            balance: AtomicI64::new(balance),
            locked: AtomicBool::new(false),
        }
    }

    /// The account identifier
    pub fn id(&self) -> AccountId {
        self.id
    }

    /// Read the current balance
    ///
    /// No side effects and no locking required; callable at any time,
    /// including while another caller holds the lock.
    pub fn balance(&self) -> i64 {
        self.balance.load(Ordering::Acquire)
    }

    /// Acquire the exclusive-access flag
    ///
    /// Fails fast: the guard is non-reentrant and never blocks or queues.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::AlreadyLocked`] if the flag is already held,
    /// whether by this caller or another.
    pub fn lock(&self) -> Result<(), TransferError> {
        self.locked
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .map_err(|_| TransferError::already_locked(self.id))?;

        trace!("account {} locked", self.id);
        Ok(())
    }

    /// Release the exclusive-access flag
    ///
    /// Unconditional: unlocking an account that is not locked is a no-op,
    /// not an error.
    pub fn unlock(&self) {
        self.locked.store(false, Ordering::Release);
        trace!("account {} unlocked", self.id);
    }

    /// Apply a signed delta to the balance
    ///
    /// Does not change the lock state: the caller remains responsible for
    /// calling [`Account::unlock`] once its mutation sequence completes.
    ///
    /// # Arguments
    ///
    /// * `diff` - The signed delta to apply
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::NotLocked`] if the exclusive-access flag is
    /// not held; the balance is never mutated without the guard.
    pub fn change_balance(&self, diff: i64) -> Result<(), TransferError> {
        if !self.locked.load(Ordering::Acquire) {
            return Err(TransferError::not_locked(self.id));
        }

        let previous = self.balance.fetch_add(diff, Ordering::AcqRel);
        trace!(
            "account {} balance changed by {} ({} -> {})",
            self.id,
            diff,
            previous,
            previous + diff
        );
        Ok(())
    }
}
