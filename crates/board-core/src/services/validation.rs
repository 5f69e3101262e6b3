//! Field rules for submitted posts.

use crate::domain::{NewPost, PostChanges};
use crate::error::DomainError;

pub const TITLE_MAX_CHARS: usize = 200;
pub const AUTHOR_MAX_CHARS: usize = 50;

const TITLE_REQUIRED: &str = "Title is required";
const CONTENT_REQUIRED: &str = "Content is required";

/// Raw post fields as submitted by a client. `None` means the field was not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostInput {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

/// Validate the fields of a post about to be created. `title` and `content` are mandatory.
pub fn validate_new_post(input: &PostInput) -> Result<NewPost, DomainError> {
    let fields = normalize(input, true)?;

    // Checked again on the normalized values
    let title = fields
        .title
        .ok_or_else(|| DomainError::validation(TITLE_REQUIRED))?;
    let content = fields
        .content
        .ok_or_else(|| DomainError::validation(CONTENT_REQUIRED))?;

    Ok(NewPost {
        title,
        content,
        author: fields.author,
    })
}

/// Validate a partial update. Absent or blank fields are left out of the changes.
pub fn validate_post_changes(input: &PostInput) -> Result<PostChanges, DomainError> {
    normalize(input, false)
}

/// Every present field is trimmed and length-checked; empty values are dropped.
fn normalize(input: &PostInput, required: bool) -> Result<PostChanges, DomainError> {
    let mut validated = PostChanges::default();

    match input.title.as_deref() {
        Some(raw) => {
            let title = raw.trim();
            if title.is_empty() && required {
                return Err(DomainError::validation(TITLE_REQUIRED));
            }
            if title.chars().count() > TITLE_MAX_CHARS {
                return Err(DomainError::validation(format!(
                    "Title is too long (max {TITLE_MAX_CHARS} characters)"
                )));
            }
            if !title.is_empty() {
                validated.title = Some(title.to_string());
            }
        }
        None if required => return Err(DomainError::validation(TITLE_REQUIRED)),
        None => {}
    }

    match input.content.as_deref() {
        Some(raw) => {
            let content = raw.trim();
            if content.is_empty() && required {
                return Err(DomainError::validation(CONTENT_REQUIRED));
            }
            if !content.is_empty() {
                validated.content = Some(content.to_string());
            }
        }
        None if required => return Err(DomainError::validation(CONTENT_REQUIRED)),
        None => {}
    }

    if let Some(raw) = input.author.as_deref() {
        let author = raw.trim();
        if author.chars().count() > AUTHOR_MAX_CHARS {
            return Err(DomainError::validation(format!(
                "Author name is too long (max {AUTHOR_MAX_CHARS} characters)"
            )));
        }
        if !author.is_empty() {
            validated.author = Some(author.to_string());
        }
    }

    Ok(validated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: Option<&str>, content: Option<&str>, author: Option<&str>) -> PostInput {
        PostInput {
            title: title.map(String::from),
            content: content.map(String::from),
            author: author.map(String::from),
        }
    }

    fn message<T: std::fmt::Debug>(result: Result<T, DomainError>) -> String {
        match result {
            Err(DomainError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_trims_fields() {
        let validated =
            validate_new_post(&input(Some("  Hi  "), Some("\tBody\n"), Some(" Kim "))).unwrap();

        assert_eq!(
            validated,
            NewPost {
                title: "Hi".to_string(),
                content: "Body".to_string(),
                author: Some("Kim".to_string()),
            }
        );
    }

    #[test]
    fn test_required_fields() {
        assert_eq!(
            message(validate_new_post(&input(None, Some("Body"), None))),
            "Title is required"
        );
        assert_eq!(
            message(validate_new_post(&input(Some("   "), Some("Body"), None))),
            "Title is required"
        );
        assert_eq!(
            message(validate_new_post(&input(Some("Hi"), None, None))),
            "Content is required"
        );
        assert_eq!(
            message(validate_new_post(&input(Some("Hi"), Some(" "), None))),
            "Content is required"
        );
    }

    #[test]
    fn test_length_limits_count_characters() {
        let title = "가".repeat(TITLE_MAX_CHARS);
        assert!(validate_new_post(&input(Some(&title), Some("Body"), None)).is_ok());

        let title = "a".repeat(TITLE_MAX_CHARS + 1);
        assert_eq!(
            message(validate_new_post(&input(Some(&title), Some("Body"), None))),
            "Title is too long (max 200 characters)"
        );

        let author = "b".repeat(AUTHOR_MAX_CHARS + 1);
        assert_eq!(
            message(validate_new_post(&input(Some("Hi"), Some("Body"), Some(&author)))),
            "Author name is too long (max 50 characters)"
        );
    }

    #[test]
    fn test_author_at_limit_is_accepted() {
        let author = "b".repeat(AUTHOR_MAX_CHARS);
        let validated = validate_new_post(&input(Some("Hi"), Some("Body"), Some(&author))).unwrap();
        assert_eq!(validated.author, Some(author.clone()));

        let author = format!("  {}  ", "가".repeat(AUTHOR_MAX_CHARS));
        assert!(validate_post_changes(&input(None, None, Some(&author))).is_ok());
    }

    #[test]
    fn test_blank_author_is_dropped() {
        let validated = validate_new_post(&input(Some("Hi"), Some("Body"), Some("   "))).unwrap();
        assert_eq!(validated.author, None);
    }

    #[test]
    fn test_changes_keep_only_present_fields() {
        let validated = validate_post_changes(&input(Some("New"), Some("  "), None)).unwrap();
        assert_eq!(
            validated,
            PostChanges {
                title: Some("New".to_string()),
                content: None,
                author: None,
            }
        );

        assert_eq!(
            validate_post_changes(&PostInput::default()).unwrap(),
            PostChanges::default()
        );
    }

    #[test]
    fn test_changes_still_check_lengths() {
        let title = "a".repeat(TITLE_MAX_CHARS + 1);
        assert!(validate_post_changes(&input(Some(&title), None, None)).is_err());
    }
}
