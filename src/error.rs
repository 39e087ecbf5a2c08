//! Error types for the finance tracker core.

use crate::models::CurrencyCode;

/// All errors that can occur in the finance tracker core.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// A conversion needed a rate that is missing or non-positive.
    ///
    /// Names the currency whose rate was unusable. Callers decide
    /// whether to abort or exclude the affected transaction; the core
    /// never substitutes an unconverted value.
    #[error("no usable exchange rate for currency {0}")]
    Conversion(CurrencyCode),

    /// The pivot rate supplied for a base-currency change is invalid.
    ///
    /// The rate table is left unchanged when this is returned.
    #[error("invalid pivot rate {rate} for new base currency {base}")]
    Rebase {
        /// The base currency the rebase was attempted towards.
        base: CurrencyCode,
        /// The rejected pivot rate (NaN when absent from the input).
        rate: f64,
    },

    /// An externally supplied rate table contains an invalid rate.
    ///
    /// Any non-positive or non-finite rate aborts the whole
    /// replacement; no partial table is ever installed.
    #[error("imported rate {rate} for currency {currency} is invalid")]
    Import {
        /// The currency carrying the invalid rate.
        currency: CurrencyCode,
        /// The rejected rate value.
        rate: f64,
    },

    /// JSON serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias for results produced by this crate.
pub type Result<T> = core::result::Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_display_names_currency() {
        let err = LedgerError::Conversion(CurrencyCode::from("XYZ"));
        let msg = err.to_string();
        assert!(msg.contains("XYZ"));
        assert!(msg.contains("exchange rate"));
    }

    #[test]
    fn rebase_display_names_base_and_rate() {
        let err = LedgerError::Rebase {
            base: CurrencyCode::from("IDR"),
            rate: -3.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("IDR"));
        assert!(msg.contains("-3"));
    }

    #[test]
    fn import_display_names_currency() {
        let err = LedgerError::Import {
            currency: CurrencyCode::from("JPY"),
            rate: 0.0,
        };
        assert!(err.to_string().contains("JPY"));
    }

    #[test]
    fn error_from_serde_json() {
        let serde_err = serde_json::from_str::<String>("not json").unwrap_err();
        let err = LedgerError::from(serde_err);
        assert!(matches!(err, LedgerError::Serialization(_)));
        assert!(err.to_string().contains("serialization error"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LedgerError>();
    }
}
