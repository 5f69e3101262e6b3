use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostChanges};
use crate::error::RepoError;

/// Largest page size accepted by [`PostRepository::find_all`].
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Post repository - durable CRUD over posts plus the newest-first ordering index.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persist a new post and index it first in the ordering. Returns its ID.
    async fn create(&self, fields: NewPost) -> Result<String, RepoError>;

    /// Find a post by its ID.
    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError>;

    /// List one page of posts, newest first.
    ///
    /// Fails with [`RepoError::InvalidArgument`] unless `page >= 1` and
    /// `1 <= limit <= MAX_PAGE_LIMIT`. Index entries without a record are skipped.
    async fn find_all(&self, page: u32, limit: u32) -> Result<Vec<Post>, RepoError>;

    /// Merge `changes` into an existing post. Returns `false` if it does not exist.
    async fn update(&self, id: &str, changes: PostChanges) -> Result<bool, RepoError>;

    /// Delete a post and drop it from the ordering. Returns `false` if it does not exist.
    async fn delete(&self, id: &str) -> Result<bool, RepoError>;

    /// Number of entries in the ordering index.
    async fn total(&self) -> Result<usize, RepoError>;
}
