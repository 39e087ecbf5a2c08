//! Exchange-rate table management and currency conversion.
//!
//! A [`RateTable`] is a star-shaped rate graph pivoted on one base
//! currency: every stored rate says how many units of that currency
//! equal one unit of the base. Conversions between two non-base
//! currencies go through the pivot.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, Result};
use crate::models::CurrencyCode;

/// Returns `true` if a rate is usable: finite and strictly positive.
fn is_usable(rate: f64) -> bool {
    rate.is_finite() && rate > 0.0_f64
}

/// A self-consistent exchange-rate table pivoted on one base currency.
///
/// Invariant: the base currency's own entry is always exactly `1`.
/// Every currency the system knows about should have an entry; a
/// missing entry is a conversion error, never an implicit `1`.
///
/// The table is only ever mutated wholesale: [`RateTable::rebase`]
/// and [`RateTable::replace`] return a new value and either fully
/// succeed or leave the original untouched. Callers sharing a table
/// across writers are responsible for serializing those swaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateTable {
    /// Pivot currency all rates are expressed against.
    base: CurrencyCode,
    /// Units of each currency per one unit of `base`.
    rates: BTreeMap<CurrencyCode, f64>,
    /// Instant the table was last rebuilt.
    last_updated: DateTime<Utc>,
}

impl RateTable {
    /// Creates a table from the given rates, forcing the base
    /// currency's own entry to exactly `1`.
    #[must_use]
    pub fn new(
        base: CurrencyCode,
        rates: BTreeMap<CurrencyCode, f64>,
        now: DateTime<Utc>,
    ) -> Self {
        let mut pinned = rates;
        let _previous: Option<f64> = pinned.insert(base.clone(), 1.0_f64);
        Self {
            base,
            rates: pinned,
            last_updated: now,
        }
    }

    /// Returns the base currency.
    #[inline]
    #[must_use]
    pub const fn base(&self) -> &CurrencyCode {
        &self.base
    }

    /// Returns the full rate mapping.
    #[inline]
    #[must_use]
    pub const fn rates(&self) -> &BTreeMap<CurrencyCode, f64> {
        &self.rates
    }

    /// Returns the stored rate for a currency, if any.
    #[inline]
    #[must_use]
    pub fn rate(&self, code: &CurrencyCode) -> Option<f64> {
        self.rates.get(code).copied()
    }

    /// Returns the instant the table was last rebuilt.
    #[inline]
    #[must_use]
    pub const fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    /// Looks up a usable rate for a currency.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Conversion`] if the rate is missing,
    /// non-finite, or non-positive.
    fn usable_rate(&self, code: &CurrencyCode) -> Result<f64> {
        self.rate(code)
            .filter(|rate| is_usable(*rate))
            .ok_or_else(|| LedgerError::Conversion(code.clone()))
    }

    /// Converts an amount between two currencies through the pivot.
    ///
    /// Converting a currency to itself returns the amount unchanged,
    /// without touching the table.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Conversion`] naming the first currency
    /// whose rate is missing or non-positive. The caller decides
    /// whether to abort or exclude the affected amount; no unconverted
    /// value is ever silently substituted.
    pub fn convert(&self, amount: f64, from: &CurrencyCode, to: &CurrencyCode) -> Result<f64> {
        if from == to {
            return Ok(amount);
        }
        let amount_in_base = if *from == self.base {
            amount
        } else {
            amount / self.usable_rate(from)?
        };
        if *to == self.base {
            Ok(amount_in_base)
        } else {
            Ok(amount_in_base * self.usable_rate(to)?)
        }
    }

    /// Recomputes the table around a new base currency.
    ///
    /// `rates_vs_old_base` expresses each currency against the
    /// *current* base and must include an entry for `new_base` itself
    /// (the pivot). Every currency known to the table or supplied in
    /// the input gets a new rate:
    ///
    /// - supplied and usable → divided by the pivot;
    /// - otherwise the previous rate divided by the pivot (logged,
    ///   non-fatal);
    /// - otherwise parity with the old base, `1 / pivot` (logged).
    ///
    /// When `new_base` equals the current base no pivot math happens:
    /// usable supplied rates are taken directly and anything else
    /// keeps its previous value.
    ///
    /// The new base's entry is forced to exactly `1` and
    /// `last_updated` is set to `now`. The original table is never
    /// modified.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Rebase`] if the pivot rate is missing,
    /// non-finite, or non-positive.
    pub fn rebase(
        &self,
        new_base: &CurrencyCode,
        rates_vs_old_base: &BTreeMap<CurrencyCode, f64>,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        let supplied_pivot = rates_vs_old_base.get(new_base).copied();
        let Some(pivot) = supplied_pivot.filter(|rate| is_usable(*rate)) else {
            return Err(LedgerError::Rebase {
                base: new_base.clone(),
                rate: supplied_pivot.unwrap_or(f64::NAN),
            });
        };

        let mut universe: BTreeSet<&CurrencyCode> = self.rates.keys().collect();
        universe.extend(rates_vs_old_base.keys());

        let mut rebased: BTreeMap<CurrencyCode, f64> = BTreeMap::new();
        for code in universe {
            let supplied = rates_vs_old_base
                .get(code)
                .copied()
                .filter(|rate| is_usable(*rate));
            let next_rate = if *new_base == self.base {
                supplied
                    .or_else(|| self.rate(code))
                    .unwrap_or(1.0_f64)
            } else {
                supplied.map_or_else(
                    || {
                        self.rate(code).map_or_else(
                            || {
                                tracing::warn!(
                                    currency = %code,
                                    "no supplied or previous rate during rebase, assuming parity with old base"
                                );
                                1.0_f64 / pivot
                            },
                            |old_rate| {
                                tracing::warn!(
                                    currency = %code,
                                    "invalid or missing supplied rate during rebase, converting previous rate"
                                );
                                old_rate / pivot
                            },
                        )
                    },
                    |rate_vs_old| rate_vs_old / pivot,
                )
            };
            let _previous: Option<f64> = rebased.insert(code.clone(), next_rate);
        }
        let _previous: Option<f64> = rebased.insert(new_base.clone(), 1.0_f64);

        tracing::debug!(old_base = %self.base, new_base = %new_base, "rate table rebased");
        Ok(Self {
            base: new_base.clone(),
            rates: rebased,
            last_updated: now,
        })
    }

    /// Validates and normalizes a wholesale replacement table, e.g.
    /// one read from an imported file.
    ///
    /// If the declared base's own rate is present but not exactly `1`,
    /// the whole table is renormalized by dividing every rate by it.
    /// The base entry is then forced to `1`. The imported
    /// `last_updated` stamp is kept.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Import`] naming the first currency with
    /// a non-positive or non-finite rate; nothing is installed in that
    /// case.
    pub fn replace(imported: Self) -> Result<Self> {
        for (currency, rate) in &imported.rates {
            if !is_usable(*rate) {
                return Err(LedgerError::Import {
                    currency: currency.clone(),
                    rate: *rate,
                });
            }
        }

        let Self {
            base,
            mut rates,
            last_updated,
        } = imported;

        let correction = rates.get(&base).copied().unwrap_or(1.0_f64);
        if (correction - 1.0_f64).abs() > f64::EPSILON {
            tracing::warn!(
                base = %base,
                rate = correction,
                "declared base rate is not 1, renormalizing imported table"
            );
            for value in rates.values_mut() {
                *value /= correction;
            }
        }
        let _previous: Option<f64> = rates.insert(base.clone(), 1.0_f64);

        tracing::debug!(base = %base, "rate table replaced");
        Ok(Self {
            base,
            rates,
            last_updated,
        })
    }

    /// Serializes the table into its external JSON shape
    /// (`{ base, rates, lastUpdated }`).
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Serialization`] if encoding fails.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self).map_err(LedgerError::from)
    }

    /// Parses a table from its external JSON shape and validates it
    /// through [`RateTable::replace`].
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Serialization`] on malformed JSON, or
    /// [`LedgerError::Import`] on invalid rates.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let parsed: Self = serde_json::from_str(raw)?;
        Self::replace(parsed)
    }
}
