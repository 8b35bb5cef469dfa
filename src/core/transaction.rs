//! Transfer protocol
//!
//! This module provides the [`Transaction`] operator that validates a
//! proposed transfer between two accounts and, only if every precondition
//! holds, performs it by driving each account's lock/mutate/unlock sequence.
//!
//! The protocol enforces, in order:
//! - No self-transfers
//! - No negative amounts
//! - A minimum transferable amount ([`MIN_TRANSFER_AMOUNT`])
//! - A fee no greater than half the transferred amount
//! - Sufficient sender funds to cover amount plus fee
//!
//! The first three violations are errors; the last two are refusals
//! signaled by an `Ok(false)` return with no balance changes.

use crate::core::traits::BalanceAccess;
use crate::types::TransferError;
use log::{debug, warn};
use std::ptr;

/// Minimum transferable amount
///
/// Transfer requests below this threshold are rejected as malformed,
/// including zero-amount requests.
pub const MIN_TRANSFER_AMOUNT: i64 = 100;

/// Stateless transfer operator
///
/// Holds only the configurable fee; each [`Transaction::make`] call is
/// independent and no transfer history is retained. The accounts are
/// borrowed for the duration of one call only.
pub struct Transaction {
    /// Fee charged to the sender on every successful transfer
    ///
    /// Bundled with the transferred amount in a single debit; not credited
    /// to the recipient.
    fee: i64,
}

/// Default fee charged on each transfer
const DEFAULT_FEE: i64 = 1;

impl Transaction {
    /// Create a new Transaction with the default fee of 1
    pub fn new() -> Self {
        Transaction { fee: DEFAULT_FEE }
    }

    /// The current fee
    pub fn fee(&self) -> i64 {
        self.fee
    }

    /// Set the fee charged on subsequent transfers
    ///
    /// Overwrites unconditionally. A negative fee is stored as given but
    /// logged, since it turns the fee into a sender credit.
    pub fn set_fee(&mut self, fee: i64) {
        if fee < 0 {
            warn!("negative fee {} configured", fee);
        }
        self.fee = fee;
    }

    /// Validate and perform a transfer between two accounts
    ///
    /// Validation runs entirely before any mutation begins, in a fixed
    /// order; the first failing check determines the outcome. Once the
    /// application phase starts no further validation failure is possible,
    /// so no rollback logic exists.
    ///
    /// Each account is locked only around its own balance mutation: `from`
    /// is locked, debited `amount + fee`, and unlocked before `to` is
    /// touched. A concurrent observer may therefore see the debit before
    /// the credit; what is guaranteed is that neither balance is ever
    /// mutated without its guard.
    ///
    /// # Arguments
    ///
    /// * `from` - The sender account, debited `amount + fee`
    /// * `to` - The recipient account, credited `amount` (the fee is not
    ///   credited to any account)
    /// * `amount` - The amount to transfer
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The transfer was applied
    /// * `Ok(false)` - The transfer was refused under policy (fee greater
    ///   than half the amount, or insufficient sender funds); no balance
    ///   changed
    ///
    /// # Errors
    ///
    /// Returns an error, with no balance changes, if:
    /// - `from` and `to` are the same account ([`TransferError::SameAccount`])
    /// - `amount` is negative ([`TransferError::NegativeAmount`])
    /// - `amount` is below [`MIN_TRANSFER_AMOUNT`] ([`TransferError::BelowMinimum`])
    ///
    /// Lock-discipline errors from the accounts themselves (for example a
    /// race on `lock`) propagate unchanged.
    pub fn make<A: BalanceAccess>(
        &self,
        from: &A,
        to: &A,
        amount: i64,
    ) -> Result<bool, TransferError> {
        if ptr::eq(from, to) {
            return Err(TransferError::SameAccount);
        }

        if amount < 0 {
            return Err(TransferError::NegativeAmount { amount });
        }

        if amount < MIN_TRANSFER_AMOUNT {
            return Err(TransferError::below_minimum(amount, MIN_TRANSFER_AMOUNT));
        }

        // Integer division: a fee of 51 on an amount of 100 is refused
        if self.fee > amount / 2 {
            debug!(
                "transfer of {} refused: fee {} exceeds half the amount",
                amount, self.fee
            );
            return Ok(false);
        }

        let available = from.balance();
        if available < amount + self.fee {
            debug!(
                "transfer of {} refused: sender balance {} below {}",
                amount,
                available,
                amount + self.fee
            );
            return Ok(false);
        }

        from.lock()?;
        from.change_balance(-(amount + self.fee))?;
        from.unlock();

        to.lock()?;
        to.change_balance(amount)?;
        to.unlock();

        debug!("transferred {} (fee {})", amount, self.fee);
        Ok(true)
    }
}

impl Default for Transaction {
    fn default() -> Self {
        Self::new()
    }
}
