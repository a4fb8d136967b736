//! Service layer - read-only content use cases.

mod category_post_list;
mod post_lookup;

pub use category_post_list::{CategoryPostList, CategoryPostLister};
pub use post_lookup::{PostFinder, PostLookup};
