//! Core business logic module
//!
//! This module contains the transfer protocol components:
//! - `traits` - The guarded balance-access capability surface
//! - `transaction` - Transfer validation and application

pub mod traits;
pub mod transaction;

pub use traits::BalanceAccess;
pub use transaction::{Transaction, MIN_TRANSFER_AMOUNT};
