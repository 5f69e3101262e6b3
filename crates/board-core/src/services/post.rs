use std::sync::Arc;

use crate::domain::{Pagination, Post, PostPage};
use crate::error::DomainError;
use crate::ports::PostRepository;

use super::validation::{PostInput, validate_new_post, validate_post_changes};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

/// Post service - validates input and orchestrates the post repository.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// Validate and store a new post, returning it as persisted.
    pub async fn create_post(&self, input: &PostInput) -> Result<Post, DomainError> {
        let fields = validate_new_post(input)?;
        let id = self.repo.create(fields).await?;

        self.repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::Internal("Failed to create post".to_string()))
    }

    pub async fn get_post(&self, id: &str) -> Result<Option<Post>, DomainError> {
        Ok(self.repo.find_by_id(id).await?)
    }

    /// One page of posts, newest first, with pagination metadata.
    pub async fn get_all_posts(&self, page: u32, limit: u32) -> Result<PostPage, DomainError> {
        let posts = self.repo.find_all(page, limit).await?;
        let total = self.repo.total().await?;

        Ok(PostPage {
            posts,
            pagination: Pagination::new(page, limit, total),
        })
    }

    /// Apply a partial update. Returns `None` if the post does not exist.
    pub async fn update_post(
        &self,
        id: &str,
        input: &PostInput,
    ) -> Result<Option<Post>, DomainError> {
        let changes = validate_post_changes(input)?;

        if !self.repo.update(id, changes).await? {
            return Ok(None);
        }

        Ok(self.repo.find_by_id(id).await?)
    }

    pub async fn delete_post(&self, id: &str) -> Result<bool, DomainError> {
        Ok(self.repo.delete(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::domain::{NewPost, PostChanges};
    use crate::error::RepoError;

    /// Accepts writes but never finds anything afterwards.
    #[derive(Default)]
    struct ForgetfulRepository {
        creates: AtomicUsize,
    }

    #[async_trait]
    impl PostRepository for ForgetfulRepository {
        async fn create(&self, _fields: NewPost) -> Result<String, RepoError> {
            self.creates.fetch_add(1, Ordering::SeqCst);
            Ok("post_lost".to_string())
        }

        async fn find_by_id(&self, _id: &str) -> Result<Option<Post>, RepoError> {
            Ok(None)
        }

        async fn find_all(&self, _page: u32, _limit: u32) -> Result<Vec<Post>, RepoError> {
            Ok(Vec::new())
        }

        async fn update(&self, _id: &str, _changes: PostChanges) -> Result<bool, RepoError> {
            Ok(false)
        }

        async fn delete(&self, _id: &str) -> Result<bool, RepoError> {
            Ok(false)
        }

        async fn total(&self) -> Result<usize, RepoError> {
            Ok(0)
        }
    }

    fn input(title: &str, content: &str) -> PostInput {
        PostInput {
            title: Some(title.to_string()),
            content: Some(content.to_string()),
            author: None,
        }
    }

    #[tokio::test]
    async fn test_create_fails_when_refetch_misses() {
        let service = PostService::new(Arc::new(ForgetfulRepository::default()));

        let err = service.create_post(&input("Hi", "Body")).await.unwrap_err();
        assert!(matches!(err, DomainError::Internal(_)));
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_repository() {
        let repo = Arc::new(ForgetfulRepository::default());
        let service = PostService::new(repo.clone());

        let err = service.create_post(&input(" ", "Body")).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(repo.creates.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_update_of_missing_post_is_none() {
        let service = PostService::new(Arc::new(ForgetfulRepository::default()));

        let result = service.update_post("post_missing", &input("Hi", "")).await;
        assert!(matches!(result, Ok(None)));
    }
}
