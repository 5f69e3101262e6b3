//! Domain entities - the core business objects.

mod page;
mod post;

pub use page::{Pagination, PostPage};
pub use post::{DEFAULT_AUTHOR, NewPost, Post, PostChanges, TIMESTAMP_FORMAT};
