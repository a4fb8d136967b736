//! SeaORM entities backing the repositories.

pub mod category;
pub mod post;
