//! gRPC client for content-service.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tonic::transport::{Channel, Endpoint};
use tracing::debug;

use common::{AppError, AppResult, GrpcClientConfig};
use domain::{Category, Post};
use proto::content::{
    content_service_client::ContentServiceClient as ProtoContentServiceClient,
    CategoryResponse, GetCategoryRequest, GetPostRequest, HealthRequest,
    ListPostsByCategoryRequest, PostResponse,
};

/// Content lookups as seen by the HTTP handlers.
#[async_trait]
pub trait ContentApi: Send + Sync {
    /// Get post by ID.
    async fn get_post(&self, id: i64) -> AppResult<Post>;

    /// Get category by key.
    async fn get_category(&self, key: &str) -> AppResult<Category>;

    /// List posts filed under the category with this key.
    async fn list_posts_by_category(&self, key: &str) -> AppResult<Vec<Post>>;

    /// Check that content-service and its store are reachable.
    async fn health(&self) -> AppResult<()>;
}

/// gRPC client wrapper for content-service.
pub struct ContentClient {
    client: ProtoContentServiceClient<Channel>,
}

impl ContentClient {
    /// Build a client for content-service.
    ///
    /// The channel connects on first use, so the gateway starts even when
    /// content-service is down; calls then fail with `Unavailable`.
    pub fn connect(config: &GrpcClientConfig) -> Result<Self, tonic::transport::Error> {
        debug!("Using content-service at {}", config.endpoint);
        let channel = Endpoint::from_shared(config.endpoint.clone())?
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .connect_lazy();

        Ok(Self {
            client: ProtoContentServiceClient::new(channel),
        })
    }
}

#[async_trait]
impl ContentApi for ContentClient {
    async fn get_post(&self, id: i64) -> AppResult<Post> {
        let request = tonic::Request::new(GetPostRequest { id });

        let mut client = self.client.clone();
        let response = client.get_post(request).await.map_err(AppError::from)?;
        proto_to_post(response.into_inner())
    }

    async fn get_category(&self, key: &str) -> AppResult<Category> {
        let request = tonic::Request::new(GetCategoryRequest {
            key: key.to_string(),
        });

        let mut client = self.client.clone();
        let response = client.get_category(request).await.map_err(AppError::from)?;
        proto_to_category(response.into_inner())
    }

    async fn list_posts_by_category(&self, key: &str) -> AppResult<Vec<Post>> {
        let request = tonic::Request::new(ListPostsByCategoryRequest {
            category_key: key.to_string(),
        });

        let mut client = self.client.clone();
        let response = client
            .list_posts_by_category(request)
            .await
            .map_err(AppError::from)?;

        response
            .into_inner()
            .posts
            .into_iter()
            .map(proto_to_post)
            .collect()
    }

    async fn health(&self) -> AppResult<()> {
        let mut client = self.client.clone();
        client
            .health(tonic::Request::new(HealthRequest {}))
            .await
            .map_err(AppError::from)?;
        Ok(())
    }
}

/// Parse an RFC 3339 timestamp sent by content-service.
fn parse_timestamp(value: &str, field: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::internal(format!("Invalid {} from content-service", field)))
}

/// Convert proto PostResponse to domain Post.
fn proto_to_post(proto: PostResponse) -> AppResult<Post> {
    Ok(Post {
        id: proto.id,
        category_id: proto.category_id,
        created_at: parse_timestamp(&proto.created_at, "created_at")?,
        updated_at: parse_timestamp(&proto.updated_at, "updated_at")?,
        title: proto.title,
        body: proto.body,
    })
}

/// Convert proto CategoryResponse to domain Category.
fn proto_to_category(proto: CategoryResponse) -> AppResult<Category> {
    Ok(Category {
        id: proto.id,
        created_at: parse_timestamp(&proto.created_at, "created_at")?,
        updated_at: parse_timestamp(&proto.updated_at, "updated_at")?,
        key: proto.key,
        name: proto.name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proto_post_converts_to_domain() {
        let post = proto_to_post(PostResponse {
            id: 10,
            category_id: Some(1),
            title: "Hello".to_string(),
            body: "World".to_string(),
            created_at: "2024-01-01T12:00:00+00:00".to_string(),
            updated_at: "2024-01-02T08:30:00+02:00".to_string(),
        })
        .unwrap();

        assert_eq!(post.id, 10);
        assert!(post.belongs_to(1));
        assert_eq!(post.updated_at.to_rfc3339(), "2024-01-02T06:30:00+00:00");
    }

    #[test]
    fn malformed_timestamp_is_internal_error() {
        let result = proto_to_category(CategoryResponse {
            id: 1,
            key: "tech".to_string(),
            name: "Technology".to_string(),
            created_at: "yesterday".to_string(),
            updated_at: "2024-01-01T12:00:00+00:00".to_string(),
        });

        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
