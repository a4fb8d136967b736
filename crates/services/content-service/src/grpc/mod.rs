//! gRPC transport for the content service.

mod content_grpc;

pub use content_grpc::ContentGrpcService;
