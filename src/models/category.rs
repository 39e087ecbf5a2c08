//! Transaction category model.

use serde::{Deserialize, Serialize};

use super::{CategoryId, TransactionKind};

/// A transaction category label.
///
/// The core treats categories as opaque: it only assumes they exist so
/// transactions can reference one. Category management lives with the
/// collaborators that own the category list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Which transaction kind this category applies to.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_roundtrip() {
        let category = Category {
            id: CategoryId::from("cat_food"),
            name: "Food & Drink".to_owned(),
            kind: TransactionKind::Outcome,
        };
        let json = serde_json::to_string(&category).unwrap();
        assert!(json.contains(r#""type":"outcome""#));
        let deserialized: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, category);
    }
}
