//! Typed ID wrappers for domain entities.

use crate::StoreError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// A strongly-typed wrapper for item IDs.
///
/// Item identifiers are database-assigned numbers, so there is no
/// constructor that generates one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub i64);

impl ItemId {
    /// Creates an item ID from its numeric value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Parses an item ID from a string.
    pub fn parse(s: &str) -> Result<Self, StoreError> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|e| StoreError::validation(format!("Invalid item id '{}': {}", s, e)))
    }

    /// Returns the inner numeric value.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<ItemId> for i64 {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_parsing() {
        let id = ItemId::parse("42").unwrap();
        assert_eq!(id, ItemId(42));
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_item_id_parsing_trims_whitespace() {
        let id: ItemId = " 7 ".parse().unwrap();
        assert_eq!(id.into_inner(), 7);
    }

    #[test]
    fn test_item_id_parsing_invalid() {
        let err = ItemId::parse("abc").unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn test_item_id_conversions() {
        let id = ItemId::from(99);
        let raw: i64 = id.into();
        assert_eq!(raw, 99);
    }

    #[test]
    fn test_item_id_serializes_as_number() {
        let json = serde_json::to_string(&ItemId::new(5)).unwrap();
        assert_eq!(json, "5");

        let parsed: ItemId = serde_json::from_str("12").unwrap();
        assert_eq!(parsed, ItemId(12));
    }
}
