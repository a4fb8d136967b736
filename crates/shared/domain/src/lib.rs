//! Domain layer - Core content entities and their response shapes.
//!
//! This crate contains pure domain types with no infrastructure dependencies.
//! Records are owned by the store; every type here is read-only data.

pub mod category;
pub mod post;

pub use category::{Category, CategoryResponse};
pub use post::{Post, PostResponse};
