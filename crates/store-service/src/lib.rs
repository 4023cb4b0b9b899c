//! # Store Service
//!
//! Service-layer types for the store item catalog: transfer objects and
//! the mappers that convert them to and from domain entities.

pub mod di;
pub mod dto;
pub mod mappers;

pub use di::*;
pub use dto::*;
pub use mappers::*;
