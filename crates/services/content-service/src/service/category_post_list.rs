//! Category post listing - resolves a category by key, then lists its posts.
//!
//! An unknown key fails with `NotFound` before the post query is issued, so
//! the post filter never runs against an unresolved category id.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use common::{AppResult, OptionExt};
use domain::{Category, Post};

use crate::repository::{CategoryRepository, PostRepository};

/// Category post listing trait for dependency injection.
#[async_trait]
pub trait CategoryPostList: Send + Sync {
    /// Resolve a category by its key
    async fn get_category(&self, key: &str) -> AppResult<Category>;

    /// List posts filed under the category with this key (store order)
    async fn list_posts_by_category(&self, key: &str) -> AppResult<Vec<Post>>;
}

/// Concrete implementation of CategoryPostList using repositories.
pub struct CategoryPostLister {
    categories: Arc<dyn CategoryRepository>,
    posts: Arc<dyn PostRepository>,
}

impl CategoryPostLister {
    /// Create new listing instance with repositories
    pub fn new(categories: Arc<dyn CategoryRepository>, posts: Arc<dyn PostRepository>) -> Self {
        Self { categories, posts }
    }
}

#[async_trait]
impl CategoryPostList for CategoryPostLister {
    async fn get_category(&self, key: &str) -> AppResult<Category> {
        self.categories
            .find_by_key(key)
            .await?
            .ok_or_not_found("Category")
    }

    async fn list_posts_by_category(&self, key: &str) -> AppResult<Vec<Post>> {
        let category = self.get_category(key).await?;
        let posts = self.posts.list_by_category_id(category.id).await?;

        debug!(
            category_key = key,
            category_id = category.id,
            count = posts.len(),
            "Listed posts by category"
        );
        Ok(posts)
    }
}
