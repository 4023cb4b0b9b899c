//! Item DTO and its conversions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use store_core::{Item, ItemId};
use utoipa::ToSchema;

/// Item transfer object.
///
/// Mirrors [`Item`] field for field, except `updated_at`, which stays on the
/// entity side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<i64>)]
    pub id: Option<ItemId>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub price_cents: i64,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Item> for ItemDto {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            price_cents: item.price_cents,
            quantity: item.quantity,
            created_at: item.created_at,
        }
    }
}

impl From<&Item> for ItemDto {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
            price_cents: item.price_cents,
            quantity: item.quantity,
            created_at: item.created_at,
        }
    }
}

impl From<ItemDto> for Item {
    fn from(dto: ItemDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            description: dto.description,
            price_cents: dto.price_cents,
            quantity: dto.quantity,
            created_at: dto.created_at,
            updated_at: None,
        }
    }
}
