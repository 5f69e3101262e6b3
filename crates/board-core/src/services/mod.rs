//! Application services - business rules on top of the ports.

mod post;
mod validation;

pub use post::{DEFAULT_LIMIT, DEFAULT_PAGE, PostService};
pub use validation::{
    AUTHOR_MAX_CHARS, PostInput, TITLE_MAX_CHARS, validate_new_post, validate_post_changes,
};
