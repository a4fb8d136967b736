//! gRPC layer tests: generated trait methods over a seeded store.

mod support;

use tonic::{Code, Request};

use content_service_lib::build_grpc_service;
use proto::content::{
    content_service_server::ContentService, GetCategoryRequest, GetPostRequest, HealthRequest,
    ListPostsByCategoryRequest,
};

#[tokio::test]
async fn test_get_post_returns_proto() {
    let db = support::setup_database().await;
    let service = build_grpc_service(&db);

    let response = service
        .get_post(Request::new(GetPostRequest { id: 10 }))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(response.id, 10);
    assert_eq!(response.category_id, Some(1));
    assert!(chrono::DateTime::parse_from_rfc3339(&response.created_at).is_ok());
}

#[tokio::test]
async fn test_uncategorised_post_has_no_category_id() {
    let db = support::setup_database().await;
    let service = build_grpc_service(&db);

    let response = service
        .get_post(Request::new(GetPostRequest { id: 13 }))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(response.category_id, None);
}

#[tokio::test]
async fn test_get_post_not_found_status() {
    let db = support::setup_database().await;
    let service = build_grpc_service(&db);

    let status = service
        .get_post(Request::new(GetPostRequest { id: 999 }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::NotFound);
    assert_eq!(status.message(), "Post not found");
}

#[tokio::test]
async fn test_get_category() {
    let db = support::setup_database().await;
    let service = build_grpc_service(&db);

    let response = service
        .get_category(Request::new(GetCategoryRequest {
            key: "life".to_string(),
        }))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(response.id, 2);
    assert_eq!(response.name, "Life");
}

#[tokio::test]
async fn test_list_posts_by_category() {
    let db = support::setup_database().await;
    let service = build_grpc_service(&db);

    let response = service
        .list_posts_by_category(Request::new(ListPostsByCategoryRequest {
            category_key: "tech".to_string(),
        }))
        .await
        .unwrap()
        .into_inner();

    let mut ids: Vec<i64> = response.posts.iter().map(|p| p.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![10, 11]);
}

#[tokio::test]
async fn test_list_posts_unknown_category_status() {
    let db = support::setup_database().await;
    let service = build_grpc_service(&db);

    let status = service
        .list_posts_by_category(Request::new(ListPostsByCategoryRequest {
            category_key: "missing".to_string(),
        }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::NotFound);
    assert_eq!(status.message(), "Category not found");
}

#[tokio::test]
async fn test_health_reports_healthy() {
    let db = support::setup_database().await;
    let service = build_grpc_service(&db);

    let response = service
        .health(Request::new(HealthRequest {}))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(response.status, "healthy");
}
