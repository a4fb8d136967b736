//! Category repository implementation.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use super::entities::category::{self, Entity as CategoryEntity};
use common::{AppError, AppResult};
use domain::Category;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Category repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Find category by its key (exact, case-sensitive match)
    async fn find_by_key(&self, key: &str) -> AppResult<Option<Category>>;
}

/// Concrete implementation of CategoryRepository
pub struct CategoryStore {
    db: DatabaseConnection,
}

impl CategoryStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for CategoryStore {
    async fn find_by_key(&self, key: &str) -> AppResult<Option<Category>> {
        let result = CategoryEntity::find()
            .filter(category::Column::Key.eq(key))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Category::from))
    }
}
