//! Repository layer for data access.

mod category_repository;
pub mod entities;
mod post_repository;

pub use category_repository::{CategoryRepository, CategoryStore};
pub use post_repository::{PostRepository, PostStore};

#[cfg(any(test, feature = "test-utils"))]
pub use category_repository::MockCategoryRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use post_repository::MockPostRepository;
