//! Post repository implementation.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use super::entities::post::{self, Entity as PostEntity};
use common::{AppError, AppResult};
use domain::Post;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Post repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Post>>;

    /// List posts whose category reference equals `category_id` (store order)
    async fn list_by_category_id(&self, category_id: i64) -> AppResult<Vec<Post>>;
}

/// Concrete implementation of PostRepository
pub struct PostStore {
    db: DatabaseConnection,
}

impl PostStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for PostStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Post>> {
        let result = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Post::from))
    }

    async fn list_by_category_id(&self, category_id: i64) -> AppResult<Vec<Post>> {
        let models = PostEntity::find()
            .filter(post::Column::CategoryId.eq(category_id))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Post::from).collect())
    }
}
