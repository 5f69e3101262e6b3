use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author recorded when a post is submitted without one.
pub const DEFAULT_AUTHOR: &str = "Anonymous";

/// Format used when a timestamp is rendered as text.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Post entity - a single message on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post with a generated ID and both timestamps set to now.
    ///
    /// Timestamps are truncated to whole seconds, the resolution they are
    /// persisted with.
    pub fn new(fields: NewPost) -> Self {
        let now = Utc::now().trunc_subsecs(0);
        Self {
            id: generate_id(),
            title: fields.title,
            content: fields.content,
            author: fields.author.unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge the non-empty values of `changes` into this post and stamp
    /// `updated_at`. The ID and creation time never change.
    pub fn apply(&mut self, changes: PostChanges) {
        if let Some(title) = changes.title.filter(|v| !v.is_empty()) {
            self.title = title;
        }
        if let Some(content) = changes.content.filter(|v| !v.is_empty()) {
            self.content = content;
        }
        if let Some(author) = changes.author.filter(|v| !v.is_empty()) {
            self.author = author;
        }
        self.updated_at = Utc::now().trunc_subsecs(0).max(self.created_at);
    }
}

/// Validated fields for a post that is about to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: Option<String>,
}

/// A partial set of post fields. `None` means "leave as is".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

fn generate_id() -> String {
    format!("post_{}", Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Post {
        Post::new(NewPost {
            title: "Hello".to_string(),
            content: "World".to_string(),
            author: None,
        })
    }

    #[test]
    fn test_new_post_defaults() {
        let post = sample();
        assert!(post.id.starts_with("post_"));
        assert_eq!(post.id.len(), "post_".len() + 32);
        assert_eq!(post.author, DEFAULT_AUTHOR);
        assert_eq!(post.created_at, post.updated_at);
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(sample().id, sample().id);
    }

    #[test]
    fn test_apply_ignores_empty_values() {
        let mut post = sample();
        let id = post.id.clone();
        post.apply(PostChanges {
            title: Some("New title".to_string()),
            content: Some(String::new()),
            author: None,
        });

        assert_eq!(post.id, id);
        assert_eq!(post.title, "New title");
        assert_eq!(post.content, "World");
        assert_eq!(post.author, DEFAULT_AUTHOR);
        assert!(post.created_at <= post.updated_at);
    }
}
