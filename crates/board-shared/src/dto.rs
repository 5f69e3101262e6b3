//! Data Transfer Objects - request/response types for the board.

use serde::{Deserialize, Serialize};

/// Form submitted to create or update a post.
///
/// Every field is optional on the wire; the service decides what is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// HTML forms can only POST; this carries the intended method.
    #[serde(
        rename = "_METHOD",
        alias = "_method",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub method: Option<String>,
}

/// Query parameters for the post listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// A post as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Page metadata for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationResponse {
    pub page: u32,
    pub limit: u32,
    pub total: usize,
    pub pages: usize,
}

/// One page of posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListResponse {
    pub posts: Vec<PostResponse>,
    pub pagination: PaginationResponse,
}
