//! Currency code model.

use serde::{Deserialize, Serialize};

/// An opaque currency identifier (e.g. `"USD"`).
///
/// Codes are compared by case-sensitive exact match; no normalization
/// or ISO 4217 validation is performed. The `Ord` implementation
/// exists so codes can key ordered maps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Creates a currency code from the given string.
    #[inline]
    #[must_use]
    pub const fn new(value: String) -> Self {
        Self(value)
    }

    /// Returns the code as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the inner string.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl core::fmt::Display for CurrencyCode {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<String> for CurrencyCode {
    #[inline]
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CurrencyCode {
    #[inline]
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}
