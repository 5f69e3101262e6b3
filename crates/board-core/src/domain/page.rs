use serde::{Deserialize, Serialize};

use super::Post;

/// Page metadata for a post listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: usize,
    pub pages: usize,
}

impl Pagination {
    /// Build pagination metadata; `pages` is `ceil(total / limit)`.
    pub fn new(page: u32, limit: u32, total: usize) -> Self {
        let pages = if limit == 0 {
            0
        } else {
            total.div_ceil(limit as usize)
        };

        Self {
            page,
            limit,
            total,
            pages,
        }
    }
}

/// One page of posts, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPage {
    pub posts: Vec<Post>,
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_round_up() {
        assert_eq!(Pagination::new(1, 10, 15).pages, 2);
        assert_eq!(Pagination::new(1, 10, 20).pages, 2);
        assert_eq!(Pagination::new(1, 10, 21).pages, 3);
    }

    #[test]
    fn test_empty_board_has_no_pages() {
        assert_eq!(Pagination::new(1, 10, 0).pages, 0);
    }
}
