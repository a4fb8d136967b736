//! gRPC clients for calling microservices.

mod content_client;

pub use content_client::{ContentApi, ContentClient};
