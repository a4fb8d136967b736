//! Post lookup - resolves one post by its identifier.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use common::{AppResult, OptionExt};
use domain::Post;

use crate::repository::PostRepository;

/// Post lookup trait for dependency injection.
#[async_trait]
pub trait PostLookup: Send + Sync {
    /// Get post by ID; `NotFound` when no post has that id
    async fn get_post(&self, id: i64) -> AppResult<Post>;
}

/// Concrete implementation of PostLookup using repository.
pub struct PostFinder {
    repo: Arc<dyn PostRepository>,
}

impl PostFinder {
    /// Create new lookup instance with repository
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl PostLookup for PostFinder {
    async fn get_post(&self, id: i64) -> AppResult<Post> {
        debug!(post_id = id, "Looking up post");
        self.repo.find_by_id(id).await?.ok_or_not_found("Post")
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::predicate::eq;

    use common::AppError;

    use super::*;
    use crate::repository::MockPostRepository;

    fn create_test_post(id: i64) -> Post {
        Post {
            id,
            category_id: Some(1),
            title: "Test Post".to_string(),
            body: "Body".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_get_post_success() {
        let mut repo = MockPostRepository::new();
        repo.expect_find_by_id()
            .with(eq(10))
            .times(1)
            .returning(|id| Ok(Some(create_test_post(id))));

        let lookup = PostFinder::new(Arc::new(repo));
        let post = lookup.get_post(10).await.unwrap();

        assert_eq!(post.id, 10);
    }

    #[tokio::test]
    async fn test_get_post_not_found() {
        let mut repo = MockPostRepository::new();
        repo.expect_find_by_id()
            .with(eq(999))
            .returning(|_| Ok(None));

        let lookup = PostFinder::new(Arc::new(repo));
        let result = lookup.get_post(999).await;

        assert!(matches!(result, Err(AppError::NotFound(ref e)) if e == "Post"));
    }

    #[tokio::test]
    async fn test_get_post_propagates_store_errors() {
        let mut repo = MockPostRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Err(AppError::internal("store offline")));

        let lookup = PostFinder::new(Arc::new(repo));
        let result = lookup.get_post(10).await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
