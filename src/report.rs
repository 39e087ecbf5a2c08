//! Cross-account aggregation into reportable totals and a
//! transaction feed.
//!
//! The aggregator folds every in-window transaction into income and
//! outcome totals, converting heterogeneous currencies through a
//! [`RateTable`] when viewing all accounts together. A transaction the
//! table cannot convert is excluded from the totals and surfaced in
//! [`Report::unconverted`], never silently summed under the wrong
//! currency.

use serde::Serialize;

use crate::models::{Account, AccountId, CurrencyCode, Transaction, TransactionId};
use crate::period::PeriodWindow;
use crate::rates::RateTable;

/// Which accounts a report covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportScope {
    /// Every account, converted into the requested display currency.
    All,
    /// A single account, reported in its own currency without any
    /// conversion.
    Account(AccountId),
}

/// One transaction as it appears in a report feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEntry {
    /// The source transaction.
    #[serde(flatten)]
    pub transaction: Transaction,
    /// Account the transaction belongs to.
    pub account_id: AccountId,
    /// Display name of that account.
    pub account_name: String,
    /// Amount expressed in the report currency.
    pub converted_amount: f64,
    /// Currency of `converted_amount` (always the report currency).
    pub converted_currency: CurrencyCode,
}

/// A transaction excluded from a report because its amount could not
/// be converted into the report currency.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnconvertedEntry {
    /// The excluded transaction.
    pub transaction_id: TransactionId,
    /// Account the transaction belongs to.
    pub account_id: AccountId,
    /// Currency the amount is denominated in.
    pub currency: CurrencyCode,
    /// Human-readable conversion failure.
    pub reason: String,
}

/// Totals and transaction feed for one reporting window.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Sum of income and reimbursed outcomes, in `currency`.
    pub total_income: f64,
    /// Sum of non-reimbursed outcomes, in `currency`.
    pub total_outcome: f64,
    /// `total_income - total_outcome`.
    pub net_balance: f64,
    /// Currency every total and entry is expressed in.
    pub currency: CurrencyCode,
    /// In-window transactions, most recent first.
    pub transactions: Vec<ReportEntry>,
    /// Transactions excluded because conversion failed.
    pub unconverted: Vec<UnconvertedEntry>,
}

/// Aggregates the in-window transactions of the scoped accounts.
///
/// In [`ReportScope::All`] every amount is converted into
/// `display_currency`; in [`ReportScope::Account`] the report currency
/// is forced to that account's own currency and amounts pass through
/// unconverted. A scope naming an unknown account yields an empty
/// report in the display currency.
///
/// The sign rule: income counts toward `total_income`; an outcome
/// counts toward `total_outcome` unless it was reimbursed, in which
/// case it counts toward `total_income`.
///
/// The feed is sorted by timestamp descending; ties keep account
/// iteration order, then per-account insertion order. Transactions the
/// rate table cannot convert are excluded from totals and feed and
/// listed in [`Report::unconverted`] instead.
#[must_use]
pub fn aggregate(
    accounts: &[Account],
    window: &PeriodWindow,
    display_currency: &CurrencyCode,
    rates: &RateTable,
    scope: ReportScope,
) -> Report {
    let mut report = Report {
        total_income: 0.0_f64,
        total_outcome: 0.0_f64,
        net_balance: 0.0_f64,
        currency: display_currency.clone(),
        transactions: Vec::new(),
        unconverted: Vec::new(),
    };

    match scope {
        ReportScope::All => {
            for account in accounts {
                fold_account(&mut report, account, window, Some(rates));
            }
        }
        ReportScope::Account(account_id) => {
            if let Some(account) = accounts.iter().find(|candidate| candidate.id == account_id) {
                report.currency = account.currency.clone();
                fold_account(&mut report, account, window, None);
            }
        }
    }

    // Stable sort: ties keep the account-iteration and insertion order.
    report
        .transactions
        .sort_by(|left, right| right.transaction.timestamp.cmp(&left.transaction.timestamp));
    report.net_balance = report.total_income - report.total_outcome;
    report
}

/// Folds one account's in-window transactions into the report.
///
/// `rates` is `Some` only in all-accounts scope; `None` passes amounts
/// through untouched.
fn fold_account(
    report: &mut Report,
    account: &Account,
    window: &PeriodWindow,
    rates: Option<&RateTable>,
) {
    for tx in &account.transactions {
        if !window.contains(tx.timestamp) {
            continue;
        }
        let converted = match rates {
            None => Ok(tx.amount),
            Some(table) => table.convert(tx.amount, &account.currency, &report.currency),
        };
        match converted {
            Ok(amount) => {
                if tx.counts_as_income() {
                    report.total_income += amount;
                } else {
                    report.total_outcome += amount;
                }
                report.transactions.push(ReportEntry {
                    transaction: tx.clone(),
                    account_id: account.id.clone(),
                    account_name: account.name.clone(),
                    converted_amount: amount,
                    converted_currency: report.currency.clone(),
                });
            }
            Err(err) => {
                tracing::warn!(
                    transaction = %tx.id,
                    account = %account.id,
                    error = %err,
                    "excluding transaction that cannot be converted"
                );
                report.unconverted.push(UnconvertedEntry {
                    transaction_id: tx.id.clone(),
                    account_id: account.id.clone(),
                    currency: account.currency.clone(),
                    reason: err.to_string(),
                });
            }
        }
    }
}
