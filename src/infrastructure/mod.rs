//! Infrastructure layer for external integrations.
//!
//! This layer implements the lookup contract defined by the domain layer.
//!
//! # Modules
//!
//! - [`fetchers`] - Remote (dog.ceo) and in-memory sub-breed sources

pub mod fetchers;
