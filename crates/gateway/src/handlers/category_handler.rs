//! Category handlers.

use axum::{extract::State, response::Json, routing::get, Router};

use common::AppResult;
use domain::{CategoryResponse, PostResponse};

use crate::extractors::PathParam;
use crate::state::AppState;

/// Create category routes
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/:key", get(get_category))
        .route("/:key/posts", get(list_category_posts))
}

/// Get category by key
#[utoipa::path(
    get,
    path = "/categories/{key}",
    tag = "Categories",
    params(
        ("key" = String, Path, description = "Category key")
    ),
    responses(
        (status = 200, description = "Category found", body = CategoryResponse),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category(
    State(state): State<AppState>,
    PathParam(key): PathParam<String>,
) -> AppResult<Json<CategoryResponse>> {
    let category = state.content.get_category(&key).await?;
    Ok(Json(CategoryResponse::from(category)))
}

/// List posts in a category
#[utoipa::path(
    get,
    path = "/categories/{key}/posts",
    tag = "Categories",
    params(
        ("key" = String, Path, description = "Category key")
    ),
    responses(
        (status = 200, description = "Posts in the category, store order", body = Vec<PostResponse>),
        (status = 404, description = "Category not found")
    )
)]
pub async fn list_category_posts(
    State(state): State<AppState>,
    PathParam(key): PathParam<String>,
) -> AppResult<Json<Vec<PostResponse>>> {
    let posts = state.content.list_posts_by_category(&key).await?;
    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}
