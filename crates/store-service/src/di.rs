//! Dependency injection module using Shaku.

use crate::mappers::{ItemMapperComponent, ItemMapperInterface};
use std::sync::Arc;
use store_core::{module, HasComponent};
use tracing::debug;

module! {
    pub MapperModule {
        components = [
            ItemMapperComponent,
        ],
        providers = [],
    }
}

/// Builds the mapper module.
#[must_use]
pub fn build_mapper_module() -> Arc<MapperModule> {
    debug!("Building mapper module");
    Arc::new(MapperModule::builder().build())
}

impl MapperModule {
    /// Resolves the item mapper.
    #[must_use]
    pub fn item_mapper(&self) -> Arc<dyn ItemMapperInterface> {
        self.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store_core::ItemId;

    #[test]
    fn test_resolve_item_mapper() {
        let module = build_mapper_module();
        let mapper = module.item_mapper();

        let item = mapper.from_id(Some(ItemId(11))).unwrap();
        assert_eq!(item.id, Some(ItemId(11)));
        assert!(mapper.from_id(None).is_none());

        let dto = mapper.to_dto(item);
        assert_eq!(dto.id, Some(ItemId(11)));
    }

    #[test]
    fn test_resolved_mapper_is_shared() {
        let module = build_mapper_module();
        let first = module.item_mapper();
        let second = module.item_mapper();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
