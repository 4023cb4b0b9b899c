//! Entity-DTO mappers.
//!
//! Field copies live in `From` impls on the DTOs; the mapper types here
//! expose them through the [`store_core::EntityMapper`] contract and add the
//! helpers that don't fit a plain conversion.

mod item_mapper;

pub use item_mapper::*;
