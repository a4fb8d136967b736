//! Post domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    /// Owning category (None = uncategorised)
    pub category_id: Option<i64>,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Check if the post is filed under the given category id
    pub fn belongs_to(&self, category_id: i64) -> bool {
        self.category_id == Some(category_id)
    }
}

/// Post response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PostResponse {
    /// Unique post identifier
    pub id: i64,
    /// Identifier of the owning category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    /// Post title
    pub title: String,
    /// Post body
    pub body: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            category_id: post.category_id,
            title: post.title,
            body: post.body,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(category_id: Option<i64>) -> Post {
        Post {
            id: 10,
            category_id,
            title: "Hello".to_string(),
            body: "World".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn belongs_to_matches_only_its_category() {
        assert!(post(Some(1)).belongs_to(1));
        assert!(!post(Some(2)).belongs_to(1));
        assert!(!post(None).belongs_to(1));
    }

    #[test]
    fn response_omits_missing_category() {
        let json = serde_json::to_value(PostResponse::from(post(None))).unwrap();
        assert!(json.get("category_id").is_none());
        assert_eq!(json["id"], 10);
    }
}
