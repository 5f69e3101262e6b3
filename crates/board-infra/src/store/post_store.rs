//! Post repository over a key-value store.
//!
//! Each post is a record at `post:{id}`; the list `posts` holds IDs newest first.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDateTime;

use board_core::domain::{NewPost, Post, PostChanges, TIMESTAMP_FORMAT};
use board_core::error::RepoError;
use board_core::ports::{KeyValueStore, MAX_PAGE_LIMIT, PostRepository, Record};

const KEY_PREFIX: &str = "post:";
const LIST_KEY: &str = "posts";

/// Post repository backed by any [`KeyValueStore`].
pub struct KvPostStore {
    kv: Arc<dyn KeyValueStore>,
}

impl KvPostStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    fn record_key(id: &str) -> String {
        format!("{}{}", KEY_PREFIX, id)
    }

    async fn write(&self, post: &Post) -> Result<(), RepoError> {
        self.kv
            .hash_set_all(&Self::record_key(&post.id), &to_fields(post))
            .await?;
        Ok(())
    }
}

fn to_fields(post: &Post) -> Vec<(String, String)> {
    vec![
        ("id".to_string(), post.id.clone()),
        ("title".to_string(), post.title.clone()),
        ("content".to_string(), post.content.clone()),
        ("author".to_string(), post.author.clone()),
        (
            "created_at".to_string(),
            post.created_at.format(TIMESTAMP_FORMAT).to_string(),
        ),
        (
            "updated_at".to_string(),
            post.updated_at.format(TIMESTAMP_FORMAT).to_string(),
        ),
    ]
}

fn from_record(key: &str, mut record: Record) -> Result<Post, RepoError> {
    let mut take = |field: &str| {
        record.remove(field).ok_or_else(|| RepoError::Corrupt {
            key: key.to_string(),
            reason: format!("missing field '{}'", field),
        })
    };

    let id = take("id")?;
    let title = take("title")?;
    let content = take("content")?;
    let author = take("author")?;
    let created_at = take("created_at")?;
    let updated_at = take("updated_at")?;

    let parse = |value: &str| {
        NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
            .map(|ts| ts.and_utc())
            .map_err(|e| RepoError::Corrupt {
                key: key.to_string(),
                reason: format!("bad timestamp '{}': {}", value, e),
            })
    };

    Ok(Post {
        id,
        title,
        content,
        author,
        created_at: parse(&created_at)?,
        updated_at: parse(&updated_at)?,
    })
}

#[async_trait]
impl PostRepository for KvPostStore {
    async fn create(&self, fields: NewPost) -> Result<String, RepoError> {
        let post = Post::new(fields);

        self.write(&post).await?;
        self.kv.list_push_front(LIST_KEY, &post.id).await?;

        tracing::debug!(post_id = %post.id, "Post created");
        Ok(post.id)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError> {
        let key = Self::record_key(id);
        let record = self.kv.hash_get_all(&key).await?;

        if record.is_empty() {
            return Ok(None);
        }

        from_record(&key, record).map(Some)
    }

    async fn find_all(&self, page: u32, limit: u32) -> Result<Vec<Post>, RepoError> {
        if page < 1 {
            return Err(RepoError::InvalidArgument(
                "Page must be greater than 0".to_string(),
            ));
        }
        if limit < 1 || limit > MAX_PAGE_LIMIT {
            return Err(RepoError::InvalidArgument(format!(
                "Limit must be between 1 and {}",
                MAX_PAGE_LIMIT
            )));
        }

        let offset = (page as isize - 1) * limit as isize;
        let ids = self
            .kv
            .list_range(LIST_KEY, offset, offset + limit as isize - 1)
            .await?;

        let mut posts = Vec::with_capacity(ids.len());
        for id in ids {
            match self.find_by_id(&id).await? {
                Some(post) => posts.push(post),
                None => tracing::debug!(post_id = %id, "Skipping stale index entry"),
            }
        }

        Ok(posts)
    }

    async fn update(&self, id: &str, changes: PostChanges) -> Result<bool, RepoError> {
        let Some(mut post) = self.find_by_id(id).await? else {
            return Ok(false);
        };

        post.apply(changes);
        self.write(&post).await?;

        tracing::debug!(post_id = %id, "Post updated");
        Ok(true)
    }

    async fn delete(&self, id: &str) -> Result<bool, RepoError> {
        let key = Self::record_key(id);
        if !self.kv.exists(&key).await? {
            return Ok(false);
        }

        self.kv.delete(&key).await?;
        self.kv.list_remove(LIST_KEY, id).await?;

        tracing::debug!(post_id = %id, "Post deleted");
        Ok(true)
    }

    async fn total(&self) -> Result<usize, RepoError> {
        Ok(self.kv.list_len(LIST_KEY).await?)
    }
}
