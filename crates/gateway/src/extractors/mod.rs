//! Custom request extractors.

mod path_param;

pub use path_param::PathParam;
