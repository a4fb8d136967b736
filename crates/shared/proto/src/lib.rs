//! gRPC protocol buffer definitions.
//!
//! This crate contains the generated gRPC service definitions for:
//! - ContentService: read-only post and category lookups

/// Content service definitions.
pub mod content {
    tonic::include_proto!("content");
}

// Re-export commonly used items
pub use content::content_service_client::ContentServiceClient;
pub use content::content_service_server::{ContentService, ContentServiceServer};
