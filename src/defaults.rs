//! Seed values for a fresh tracker installation.
//!
//! New installations start from a small hand-maintained set of
//! currencies and approximate rates so the tracker is usable before
//! any real rates are imported.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::models::CurrencyCode;
use crate::rates::RateTable;

/// Display symbol for each currency shipped out of the box.
pub const CURRENCY_SYMBOLS: [(&str, &str); 5] = [
    ("EUR", "\u{20ac}"),
    ("IDR", "Rp"),
    ("JPY", "\u{a5}"),
    ("SGD", "S$"),
    ("USD", "$"),
];

/// Currency new installations display totals in.
pub const DISPLAY_CURRENCY: &str = "IDR";

/// Base currency of the seed rate table.
pub const BASE_CURRENCY: &str = "USD";

/// Financial-month start day new accounts get.
pub const PERIOD_START_DAY: u32 = 1;

/// Returns the display symbol for a currency, falling back to the
/// code itself for currencies without a known symbol.
#[must_use]
pub fn symbol(code: &CurrencyCode) -> &str {
    CURRENCY_SYMBOLS
        .iter()
        .find(|(known, _)| *known == code.as_str())
        .map_or_else(|| code.as_str(), |(_, sign)| *sign)
}

/// Returns how many fractional digits amounts in a currency are
/// displayed with.
///
/// Rupiah and yen are conventionally shown without decimals.
#[must_use]
pub fn decimal_places(code: &CurrencyCode) -> u32 {
    match code.as_str() {
        "IDR" | "JPY" => 0,
        _ => 2,
    }
}

/// Builds the seed rate table: USD-based, with rough placeholder rates
/// for the shipped currencies.
#[must_use]
pub fn rate_table(now: DateTime<Utc>) -> RateTable {
    let mut rates = BTreeMap::new();
    let _previous: Option<f64> = rates.insert(CurrencyCode::from("IDR"), 15_000.0_f64);
    let _previous: Option<f64> = rates.insert(CurrencyCode::from("JPY"), 150.0_f64);
    let _previous: Option<f64> = rates.insert(CurrencyCode::from("EUR"), 0.92_f64);
    let _previous: Option<f64> = rates.insert(CurrencyCode::from("SGD"), 1.35_f64);
    RateTable::new(CurrencyCode::from(BASE_CURRENCY), rates, now)
}
