//! Domain entities for the store item catalog.

pub mod entities;

pub use entities::*;
