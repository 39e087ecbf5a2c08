//! Data models for finance tracker entities.
//!
//! This module contains strongly-typed representations of the
//! tracker's domain records: newtype ID wrappers, currency codes, and
//! the account/transaction/category shapes the core computes over.

mod account;
mod category;
mod currency;
mod enums;
mod ids;
mod transaction;

pub use account::Account;
pub use category::Category;
pub use currency::CurrencyCode;
pub use enums::TransactionKind;
pub use ids::{AccountId, CategoryId, TransactionId};
pub use transaction::Transaction;
