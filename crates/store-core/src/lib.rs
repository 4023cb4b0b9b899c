//! # Store Core
//!
//! Core types, traits, and error definitions for the store item catalog.
//! This crate provides the domain entities and the mapping contract shared
//! by the configuration and service layers.

pub mod domain;
pub mod error;
pub mod id;
pub mod logging;
pub mod pagination;
pub mod result;
pub mod traits;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use logging::*;
pub use pagination::*;
pub use result::*;
pub use traits::*;

// Re-export shaku for dependency injection
pub use shaku::{module, HasComponent, Interface};
