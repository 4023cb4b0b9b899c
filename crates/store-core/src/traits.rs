//! Core traits shared across layers.

/// Trait for bidirectional mapping between a DTO `D` and an entity `E`.
///
/// Implementors provide the two single-value conversions. The collection
/// and `Option` variants are derived from them: a missing input maps to a
/// missing output and never to a default-constructed value.
pub trait EntityMapper<D, E> {
    /// Maps a DTO to a new entity.
    fn to_entity(&self, dto: D) -> E;

    /// Maps an entity to a new DTO.
    fn to_dto(&self, entity: E) -> D;

    /// Maps a list of DTOs to entities, preserving order.
    fn to_entities(&self, dtos: Vec<D>) -> Vec<E> {
        dtos.into_iter().map(|dto| self.to_entity(dto)).collect()
    }

    /// Maps a list of entities to DTOs, preserving order.
    fn to_dtos(&self, entities: Vec<E>) -> Vec<D> {
        entities.into_iter().map(|entity| self.to_dto(entity)).collect()
    }

    /// Maps an optional DTO.
    fn to_entity_opt(&self, dto: Option<D>) -> Option<E> {
        dto.map(|dto| self.to_entity(dto))
    }

    /// Maps an optional entity.
    fn to_dto_opt(&self, entity: Option<E>) -> Option<D> {
        entity.map(|entity| self.to_dto(entity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Celsius(i32);
    struct Fahrenheit(i32);

    struct TemperatureMapper;

    impl EntityMapper<Fahrenheit, Celsius> for TemperatureMapper {
        fn to_entity(&self, dto: Fahrenheit) -> Celsius {
            Celsius((dto.0 - 32) * 5 / 9)
        }

        fn to_dto(&self, entity: Celsius) -> Fahrenheit {
            Fahrenheit(entity.0 * 9 / 5 + 32)
        }
    }

    #[test]
    fn test_list_defaults_preserve_order() {
        let mapper = TemperatureMapper;
        let dtos = mapper.to_dtos(vec![Celsius(0), Celsius(100), Celsius(-40)]);
        let values: Vec<i32> = dtos.iter().map(|f| f.0).collect();
        assert_eq!(values, vec![32, 212, -40]);

        let entities = mapper.to_entities(dtos);
        let values: Vec<i32> = entities.iter().map(|c| c.0).collect();
        assert_eq!(values, vec![0, 100, -40]);
    }

    #[test]
    fn test_empty_lists() {
        let mapper = TemperatureMapper;
        assert!(mapper.to_dtos(Vec::new()).is_empty());
        assert!(mapper.to_entities(Vec::new()).is_empty());
    }

    #[test]
    fn test_option_defaults() {
        let mapper = TemperatureMapper;
        assert!(mapper.to_dto_opt(None).is_none());
        assert!(mapper.to_entity_opt(None).is_none());
        assert_eq!(mapper.to_dto_opt(Some(Celsius(100))).map(|f| f.0), Some(212));
        assert_eq!(mapper.to_entity_opt(Some(Fahrenheit(32))).map(|c| c.0), Some(0));
    }
}
