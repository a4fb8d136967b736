//! OpenAPI documentation.

use utoipa::OpenApi;

use domain::{CategoryResponse, PostResponse};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::post_handler::get_post,
        crate::handlers::category_handler::get_category,
        crate::handlers::category_handler::list_category_posts,
    ),
    components(
        schemas(
            PostResponse,
            CategoryResponse,
        )
    ),
    tags(
        (name = "Posts", description = "Post lookup endpoints"),
        (name = "Categories", description = "Category lookup and listing endpoints"),
    )
)]
pub struct ApiDoc;
