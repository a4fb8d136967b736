//! gRPC implementation for ContentService.

use std::sync::Arc;

use tonic::{Request, Response, Status};
use tracing::warn;

use crate::infra::HealthCheck;
use crate::service::{CategoryPostList, PostLookup};
use domain::{Category, Post};
use proto::content::{
    content_service_server::ContentService as ContentServiceProto, CategoryResponse,
    GetCategoryRequest, GetPostRequest, HealthRequest, HealthResponse,
    ListPostsByCategoryRequest, ListPostsResponse, PostResponse,
};

/// gRPC service wrapper for the post and category lookups.
pub struct ContentGrpcService {
    posts: Arc<dyn PostLookup>,
    categories: Arc<dyn CategoryPostList>,
    health: Arc<dyn HealthCheck>,
}

impl ContentGrpcService {
    /// Create a new gRPC service wrapper.
    pub fn new(
        posts: Arc<dyn PostLookup>,
        categories: Arc<dyn CategoryPostList>,
        health: Arc<dyn HealthCheck>,
    ) -> Self {
        Self {
            posts,
            categories,
            health,
        }
    }
}

#[tonic::async_trait]
impl ContentServiceProto for ContentGrpcService {
    async fn get_post(
        &self,
        request: Request<GetPostRequest>,
    ) -> Result<Response<PostResponse>, Status> {
        let req = request.into_inner();

        let post = self.posts.get_post(req.id).await.map_err(Status::from)?;
        Ok(Response::new(post_to_proto(&post)))
    }

    async fn get_category(
        &self,
        request: Request<GetCategoryRequest>,
    ) -> Result<Response<CategoryResponse>, Status> {
        let req = request.into_inner();

        let category = self
            .categories
            .get_category(&req.key)
            .await
            .map_err(Status::from)?;
        Ok(Response::new(category_to_proto(&category)))
    }

    async fn list_posts_by_category(
        &self,
        request: Request<ListPostsByCategoryRequest>,
    ) -> Result<Response<ListPostsResponse>, Status> {
        let req = request.into_inner();

        let posts = self
            .categories
            .list_posts_by_category(&req.category_key)
            .await
            .map_err(Status::from)?;
        Ok(Response::new(ListPostsResponse {
            posts: posts.iter().map(post_to_proto).collect(),
        }))
    }

    async fn health(
        &self,
        _request: Request<HealthRequest>,
    ) -> Result<Response<HealthResponse>, Status> {
        self.health.ping().await.map_err(|e| {
            warn!("Database health check failed: {}", e);
            Status::unavailable("database")
        })?;

        Ok(Response::new(HealthResponse {
            status: "healthy".to_string(),
        }))
    }
}

/// Convert domain Post to proto PostResponse.
fn post_to_proto(post: &Post) -> PostResponse {
    PostResponse {
        id: post.id,
        category_id: post.category_id,
        title: post.title.clone(),
        body: post.body.clone(),
        created_at: post.created_at.to_rfc3339(),
        updated_at: post.updated_at.to_rfc3339(),
    }
}

/// Convert domain Category to proto CategoryResponse.
fn category_to_proto(category: &Category) -> CategoryResponse {
    CategoryResponse {
        id: category.id,
        key: category.key.clone(),
        name: category.name.clone(),
        created_at: category.created_at.to_rfc3339(),
        updated_at: category.updated_at.to_rfc3339(),
    }
}
