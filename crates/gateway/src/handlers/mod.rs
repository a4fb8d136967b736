//! HTTP handlers.

pub mod category_handler;
pub mod health_handler;
pub mod post_handler;

pub use category_handler::category_routes;
pub use health_handler::health_routes;
pub use post_handler::post_routes;
