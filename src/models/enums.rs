//! Enumeration types for constrained values.

use serde::{Deserialize, Serialize};

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money entering the account.
    Income,
    /// Money leaving the account.
    Outcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serde_roundtrip() {
        let variants = [
            (TransactionKind::Income, r#""income""#),
            (TransactionKind::Outcome, r#""outcome""#),
        ];
        for (variant, expected_json) in variants {
            let json = serde_json::to_string(&variant).unwrap();
            assert_eq!(json, expected_json);
            let deserialized: TransactionKind = serde_json::from_str(&json).unwrap();
            assert_eq!(deserialized, variant);
        }
    }

    #[test]
    fn invalid_kind_fails() {
        let result = serde_json::from_str::<TransactionKind>(r#""transfer""#);
        assert!(result.is_err());
    }
}
