//! Account model.

use serde::{Deserialize, Serialize};

use super::{AccountId, CurrencyCode, Transaction};

/// A user account (the original UI calls these "profiles").
///
/// Each account owns its transactions exclusively and keeps them in
/// insertion order, not time order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique identifier.
    pub id: AccountId,
    /// Display name.
    pub name: String,
    /// Currency all of this account's amounts are denominated in.
    pub currency: CurrencyCode,
    /// Day of month (1..=31) the account's financial month begins.
    ///
    /// Days past the end of a target month are clamped to that
    /// month's last day by the period computation.
    pub period_start_day: u32,
    /// Ledger entries in insertion order.
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Account {
    /// Creates an account with an empty transaction list.
    ///
    /// `period_start_day` is clamped into `1..=31`.
    #[must_use]
    pub fn new(
        id: AccountId,
        name: String,
        currency: CurrencyCode,
        period_start_day: u32,
    ) -> Self {
        Self {
            id,
            name,
            currency,
            period_start_day: period_start_day.clamp(1, 31),
            transactions: Vec::new(),
        }
    }
}
