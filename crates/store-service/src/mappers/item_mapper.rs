//! Mapper between [`Item`] and [`ItemDto`].

use crate::dto::ItemDto;
use shaku::Component;
use store_core::{EntityMapper, Interface, Item, ItemId, Page};
use tracing::trace;

/// Interface for the item mapper, resolvable from a shaku module.
pub trait ItemMapperInterface: Interface + EntityMapper<ItemDto, Item> {
    /// Builds a reference stub for `id`, or `None` when no id is given.
    fn from_id(&self, id: Option<ItemId>) -> Option<Item>;

    /// Maps a page of entities, keeping the page metadata.
    fn to_dto_page(&self, page: Page<Item>) -> Page<ItemDto>;
}

/// Stateless item mapper.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemMapper;

impl ItemMapper {
    /// Creates a new item mapper.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Builds an item carrying only `id`.
    ///
    /// The result stands in for "the item with this id" without loading it:
    /// every other field is at its default. No lookup happens here.
    #[must_use]
    pub fn from_id(&self, id: Option<ItemId>) -> Option<Item> {
        let id = id?;
        trace!(item_id = %id, "Building item reference");
        Some(Item::reference(id))
    }

    /// Maps an entity by reference, leaving the caller's value intact.
    #[must_use]
    pub fn to_dto_ref(&self, entity: &Item) -> ItemDto {
        ItemDto::from(entity)
    }

    /// Maps a page of entities, keeping the page metadata.
    #[must_use]
    pub fn to_dto_page(&self, page: Page<Item>) -> Page<ItemDto> {
        trace!(
            page = page.info.page,
            elements = page.len(),
            "Mapping item page"
        );
        page.map(ItemDto::from)
    }
}

impl EntityMapper<ItemDto, Item> for ItemMapper {
    fn to_entity(&self, dto: ItemDto) -> Item {
        Item::from(dto)
    }

    fn to_dto(&self, entity: Item) -> ItemDto {
        ItemDto::from(entity)
    }

    fn to_entities(&self, dtos: Vec<ItemDto>) -> Vec<Item> {
        trace!(count = dtos.len(), "Mapping item DTOs to entities");
        dtos.into_iter().map(Item::from).collect()
    }

    fn to_dtos(&self, entities: Vec<Item>) -> Vec<ItemDto> {
        trace!(count = entities.len(), "Mapping items to DTOs");
        entities.into_iter().map(ItemDto::from).collect()
    }
}

/// Item mapper component for shaku DI.
#[derive(Component)]
#[shaku(interface = ItemMapperInterface)]
pub struct ItemMapperComponent {
    #[shaku(default = ItemMapper)]
    mapper: ItemMapper,
}

impl EntityMapper<ItemDto, Item> for ItemMapperComponent {
    fn to_entity(&self, dto: ItemDto) -> Item {
        self.mapper.to_entity(dto)
    }

    fn to_dto(&self, entity: Item) -> ItemDto {
        self.mapper.to_dto(entity)
    }

    fn to_entities(&self, dtos: Vec<ItemDto>) -> Vec<Item> {
        self.mapper.to_entities(dtos)
    }

    fn to_dtos(&self, entities: Vec<Item>) -> Vec<ItemDto> {
        self.mapper.to_dtos(entities)
    }
}

impl ItemMapperInterface for ItemMapperComponent {
    fn from_id(&self, id: Option<ItemId>) -> Option<Item> {
        self.mapper.from_id(id)
    }

    fn to_dto_page(&self, page: Page<Item>) -> Page<ItemDto> {
        self.mapper.to_dto_page(page)
    }
}

impl std::fmt::Debug for ItemMapperComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemMapperComponent").finish_non_exhaustive()
    }
}
