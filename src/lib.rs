//! Transfer Engine Library
//! # Overview
//!
//! This library provides a guarded account balance and the transfer protocol
//! built on it: an [`Account`] whose balance may only be mutated while its
//! non-reentrant exclusive-access flag is held, and a [`Transaction`] that
//! validates a proposed transfer and, only if every precondition holds,
//! drives both accounts' lock/mutate/unlock sequences.
//!
//! # Architecture
//!
//! The system is organized into two modules:
//!
//! - [`types`] - Core data types:
//!   - [`types::account`] - The Account and its lock discipline
//!   - [`types::error`] - Error taxonomy for lock and transfer violations
//! - [`core`] - Business logic:
//!   - [`core::traits`] - The [`BalanceAccess`] capability surface, which a
//!     test harness can substitute with a recording double
//!   - [`core::transaction`] - Transfer validation and application
//!
//! # Transfer Protocol
//!
//! `Transaction::make(from, to, amount)` validates, in order: no
//! self-transfer, no negative amount, amount at least
//! [`MIN_TRANSFER_AMOUNT`], fee no greater than half the amount, and
//! sufficient sender funds. Malformed requests are errors; unaffordable but
//! well-formed requests are refusals (`Ok(false)`). Only when every check
//! passes is the sender debited `amount + fee` and the recipient credited
//! `amount`, each under its own lock. The fee is not credited to any
//! account.
//!
//! # Locking Model
//!
//! The account guard is a fail-fast try-lock, never a blocking mutex:
//! `lock` fails immediately with an error when the flag is already held,
//! and `unlock` on an unlocked account is a no-op. Each account is locked
//! only around its own mutation, so a concurrent observer may see the debit
//! before the credit; no balance is ever mutated without its guard.

// Module declarations
pub mod core;
pub mod types;

pub use crate::core::{BalanceAccess, Transaction, MIN_TRANSFER_AMOUNT};
pub use types::{Account, AccountId, TransferError};
