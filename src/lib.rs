//! Core engine of a personal multi-account finance tracker.
//!
//! The crate is a pure library: it models accounts, transactions and
//! exchange rates, computes the active accounting period, and folds
//! everything into cross-account reports. Persistence, rate fetching
//! and presentation live with the caller.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use chrono::Utc;
//! use moneta_core::models::CurrencyCode;
//! use moneta_core::rates::RateTable;
//!
//! let mut rates = BTreeMap::new();
//! let _ = rates.insert(CurrencyCode::from("IDR"), 15_000.0);
//! let _ = rates.insert(CurrencyCode::from("EUR"), 0.92);
//! let table = RateTable::new(CurrencyCode::from("USD"), rates, Utc::now());
//!
//! let eur = table
//!     .convert(150_000.0, &CurrencyCode::from("IDR"), &CurrencyCode::from("EUR"))
//!     .unwrap();
//! assert!((eur - 9.2).abs() < 1e-9);
//! ```

pub mod defaults;
pub mod error;
pub mod models;
pub mod period;
pub mod rates;
pub mod report;
