//! Transaction model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{CategoryId, TransactionId, TransactionKind};

/// A single income or outcome entry in an account's ledger.
///
/// The amount is always denominated in the owning account's currency;
/// a transaction never carries its own currency field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier.
    pub id: TransactionId,
    /// Income or outcome.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Free-form description.
    pub description: String,
    /// Positive amount in the owning account's currency.
    pub amount: f64,
    /// Wall-clock instant the transaction occurred at.
    pub timestamp: NaiveDateTime,
    /// Opaque category label.
    pub category_id: CategoryId,
    /// Whether an outcome has been reimbursed.
    ///
    /// Only meaningful for outcomes; always `false` for income.
    #[serde(default)]
    pub reimbursed: bool,
}

impl Transaction {
    /// Creates a new transaction.
    ///
    /// `reimbursed` is forced to `false` when `kind` is
    /// [`TransactionKind::Income`], where the flag has no meaning.
    #[must_use]
    pub fn new(
        id: TransactionId,
        kind: TransactionKind,
        description: String,
        amount: f64,
        timestamp: NaiveDateTime,
        category_id: CategoryId,
        reimbursed: bool,
    ) -> Self {
        let effective_reimbursed = match kind {
            TransactionKind::Income => false,
            TransactionKind::Outcome => reimbursed,
        };
        Self {
            id,
            kind,
            description,
            amount,
            timestamp,
            category_id,
            reimbursed: effective_reimbursed,
        }
    }

    /// Returns `true` if this transaction counts towards total income.
    ///
    /// Income always does; a reimbursed outcome is economically a wash
    /// and is counted as income rather than as a negated expense.
    #[inline]
    #[must_use]
    pub const fn counts_as_income(&self) -> bool {
        match self.kind {
            TransactionKind::Income => true,
            TransactionKind::Outcome => self.reimbursed,
        }
    }
}
