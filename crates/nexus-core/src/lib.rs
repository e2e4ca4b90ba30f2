//! # nexus-core
//!
//! Core types, traits, and abstractions for the dorknexus workbench.
//!
//! This crate provides the foundational data structures and trait definitions
//! that the other dorknexus crates depend on: the query builder, the static
//! template catalog, the vault item model, and the generation-backend seam.

pub mod builder;
pub mod defaults;
pub mod error;
pub mod models;
pub mod templates;
pub mod traits;

// Re-export commonly used types at crate root
pub use builder::{build, QuerySession};
pub use error::{Error, Result};
pub use models::*;
pub use templates::{catalog, filter};
pub use traits::*;
