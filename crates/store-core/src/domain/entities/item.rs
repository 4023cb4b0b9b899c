//! Item entity.

use crate::ItemId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An item in the store catalog.
///
/// `Item::default()` is the all-empty entity; a value with only `id` set is
/// a reference stub standing in for "the item with this id" and carries none
/// of the stored state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Identifier, absent until the item has been persisted.
    pub id: Option<ItemId>,

    /// Display name.
    pub name: String,

    /// Free-form description.
    pub description: Option<String>,

    /// Unit price in minor currency units.
    pub price_cents: i64,

    /// Units in stock.
    pub quantity: u32,

    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,

    /// Last update timestamp. Entity-side audit state only.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Item {
    /// Creates a new, not yet persisted item.
    #[must_use]
    pub fn new(name: impl Into<String>, price_cents: i64, quantity: u32) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            name: name.into(),
            description: None,
            price_cents,
            quantity,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    /// Creates a reference stub carrying only `id`.
    #[must_use]
    pub fn reference(id: ItemId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the identifier.
    #[must_use]
    pub fn with_id(mut self, id: ItemId) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns true if every field other than `id` is at its default and
    /// `id` is set.
    #[must_use]
    pub fn is_reference(&self) -> bool {
        self.id.is_some()
            && Self {
                id: None,
                ..self.clone()
            } == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item() {
        let item = Item::new("widget", 1250, 3);
        assert!(item.id.is_none());
        assert_eq!(item.name, "widget");
        assert_eq!(item.price_cents, 1250);
        assert_eq!(item.quantity, 3);
        assert!(item.created_at.is_some());
        assert_eq!(item.created_at, item.updated_at);
    }

    #[test]
    fn test_reference_stub() {
        let item = Item::reference(ItemId(42));
        assert_eq!(item.id, Some(ItemId(42)));
        assert!(item.name.is_empty());
        assert!(item.description.is_none());
        assert_eq!(item.price_cents, 0);
        assert_eq!(item.quantity, 0);
        assert!(item.created_at.is_none());
        assert!(item.updated_at.is_none());
        assert!(item.is_reference());
    }

    #[test]
    fn test_hydrated_item_is_not_reference() {
        let item = Item::new("widget", 100, 1).with_id(ItemId(1));
        assert!(item.id.is_some());
        assert!(!item.is_reference());
    }

    #[test]
    fn test_default_item_is_not_reference() {
        assert!(!Item::default().is_reference());
    }

    #[test]
    fn test_with_description() {
        let item = Item::new("widget", 100, 1).with_description("blue");
        assert_eq!(item.description.as_deref(), Some("blue"));
    }
}
