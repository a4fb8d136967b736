//! Content Service Library
//!
//! This crate provides read-only post and category lookups via gRPC.
//! It can be run as a standalone service or embedded in the combined binary.

pub mod config;
pub mod grpc;
pub mod infra;
pub mod repository;
pub mod service;

use std::net::SocketAddr;
use std::sync::Arc;

use tonic::transport::Server;
use tracing::info;

use crate::config::ContentServiceConfig;
use crate::grpc::ContentGrpcService;
use crate::infra::Database;
use crate::repository::{CategoryStore, PostStore};
use crate::service::{CategoryPostLister, PostFinder};

/// Run the content service as an embedded component (for combined binary).
pub async fn run_embedded(host: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let config = ContentServiceConfig::from_env();
    run_server_with_config(host, port, config).await
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = ContentServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Wire repositories and lookups over a connected database.
pub fn build_grpc_service(db: &Database) -> ContentGrpcService {
    let post_repo = Arc::new(PostStore::new(db.get_connection()));
    let category_repo = Arc::new(CategoryStore::new(db.get_connection()));

    let post_lookup = Arc::new(PostFinder::new(post_repo.clone()));
    let category_posts = Arc::new(CategoryPostLister::new(category_repo, post_repo));

    ContentGrpcService::new(post_lookup, category_posts, Arc::new(db.clone()))
}

/// Run the gRPC server with the given configuration.
async fn run_server_with_config(
    host: &str,
    port: u16,
    config: ContentServiceConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize database
    let db = Database::connect(&config.database).await?;

    // Create gRPC service
    let grpc_service = build_grpc_service(&db);

    // Build address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Content service listening on {}", addr);

    // Run server
    Server::builder()
        .add_service(proto::ContentServiceServer::new(grpc_service))
        .serve(addr)
        .await?;

    Ok(())
}
