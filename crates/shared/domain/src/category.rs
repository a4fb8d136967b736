//! Category domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    /// External-facing slug, unique across categories
    pub key: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Category response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CategoryResponse {
    /// Unique category identifier
    pub id: i64,
    /// Category key used in URLs
    pub key: String,
    /// Display name
    pub name: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            key: category.key,
            name: category.name,
            created_at: category.created_at,
        }
    }
}
