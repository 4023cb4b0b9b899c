//! # Store Config
//!
//! Configuration management for the store item catalog.
//! Supports layered configuration from files and environment variables,
//! with runtime reload.

mod app_config;
mod loader;

pub use app_config::*;
pub use loader::*;
