//! Post handlers.

use axum::{extract::State, response::Json, routing::get, Router};

use common::AppResult;
use domain::PostResponse;

use crate::extractors::PathParam;
use crate::state::AppState;

/// Create post routes
pub fn post_routes() -> Router<AppState> {
    Router::new().route("/:id", get(get_post))
}

/// Get post by ID
#[utoipa::path(
    get,
    path = "/posts/{id}",
    tag = "Posts",
    params(
        ("id" = i64, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Post found", body = PostResponse),
        (status = 400, description = "Malformed post ID"),
        (status = 404, description = "Post not found")
    )
)]
pub async fn get_post(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> AppResult<Json<PostResponse>> {
    let post = state.content.get_post(id).await?;
    Ok(Json(PostResponse::from(post)))
}
