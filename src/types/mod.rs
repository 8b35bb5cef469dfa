//! Types module
//!
//! Contains core data structures used throughout the crate:
//! - `account`: the Account type and its lock discipline
//! - `error`: error types for the transfer engine

pub mod account;
pub mod error;

pub use account::Account;
pub use error::TransferError;

/// Account identifier
///
/// Supports account IDs from 0 to 4,294,967,295. This component does not
/// require IDs to be unique; that is a caller concern.
pub type AccountId = u32;
