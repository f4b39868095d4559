//! Account identifiers.
//!
//! Ledger accounts are wallet addresses compared case-insensitively.
//! `Account` normalizes to canonical lowercase at construction, so every
//! equality, set, and map-key use in the crate already operates on the
//! canonical form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A case-insensitive account identifier, held in canonical lowercase form.
///
/// # Examples
///
/// ```
/// use trustgraph::Account;
///
/// let a = Account::new("0xABCdef");
/// let b = Account::new("0xabcDEF");
/// assert_eq!(a, b);
/// assert_eq!(a.as_str(), "0xabcdef");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct Account(String);

impl Account {
    /// Creates an account identifier, lowercasing the input.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into().to_ascii_lowercase())
    }

    /// Returns the canonical lowercase form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Account {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for Account {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl AsRef<str> for Account {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_normalizes_to_lowercase() {
        let account = Account::new("0xDeAdBeEf");
        assert_eq!(account.as_str(), "0xdeadbeef");
    }

    #[test]
    fn mixed_case_forms_are_equal_and_hash_alike() {
        use std::collections::HashSet;

        let upper = Account::new("0xABC");
        let lower = Account::new("0xabc");
        assert_eq!(upper, lower);

        let mut set = HashSet::new();
        set.insert(upper);
        assert!(set.contains(&lower));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn deserialization_normalizes() {
        let account: Account = serde_json::from_str("\"0xAbC\"").unwrap();
        assert_eq!(account.as_str(), "0xabc");
    }

    #[test]
    fn empty_identifier_is_allowed_and_self_equal() {
        // Malformed ids get no special handling; they simply match no node.
        let empty = Account::new("");
        assert_eq!(empty, Account::new(""));
    }
}
