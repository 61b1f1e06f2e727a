//! Blog (post) domain model.
//!
//! # Responsibility
//! - Hold post content metadata and engagement counters.
//! - Carry the authorship link as a stable ID, not a reference.
//!
//! # Invariants
//! - `author` is set at construction, never nil, never reassigned.
//! - `total_likes` and `total_comments` only ever increase.
//! - `tags` and `comments` preserve insertion order.

use crate::model::user::UserId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a blog entity.
pub type BlogId = Uuid;

/// Opaque reference to a comment entity.
///
/// Comment content is modeled outside this crate; the blog only tracks which
/// comments were posted on it, in order.
pub type CommentId = Uuid;

/// Errors from blog construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlogValidationError {
    /// Caller-provided ID is the nil UUID.
    NilUuid,
    /// Author ID is the nil UUID; every blog needs exactly one real author.
    NilAuthor,
}

impl Display for BlogValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilUuid => write!(f, "blog uuid must not be nil"),
            Self::NilAuthor => write!(f, "blog author must not be nil"),
        }
    }
}

impl Error for BlogValidationError {}

/// Canonical post record.
///
/// `banner_url` and `content_json` are part of the entity shape but are not
/// populated at construction; the content-publishing collaborator fills them
/// in later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    /// Stable global ID.
    pub uuid: BlogId,
    /// Post title, stored verbatim.
    pub title: String,
    /// Short summary, stored verbatim.
    pub description: String,
    /// Banner image location; empty until published with one.
    pub banner_url: String,
    /// Serialized editor document; empty until content is attached.
    pub content_json: String,
    /// Tag strings in insertion order.
    pub tags: Vec<String>,
    /// The single authoring user. Resolved through the registry on demand.
    pub author: UserId,
    /// Posted comment references in insertion order.
    pub comments: Vec<CommentId>,
    /// Like count. Caller-driven, monotonic, no per-reader dedup.
    pub total_likes: u64,
    /// Comment count. Caller-driven, monotonic.
    pub total_comments: u64,
}

impl Blog {
    /// Creates a new blog with a generated stable ID.
    ///
    /// # Errors
    /// - `NilAuthor` when the author ID is nil. Whether the author actually
    ///   exists is checked by the registry on insert, not here.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        author: UserId,
    ) -> Result<Self, BlogValidationError> {
        Self::with_id(Uuid::new_v4(), title, description, author)
    }

    /// Creates a new blog with a caller-provided stable ID.
    pub fn with_id(
        uuid: BlogId,
        title: impl Into<String>,
        description: impl Into<String>,
        author: UserId,
    ) -> Result<Self, BlogValidationError> {
        if uuid.is_nil() {
            return Err(BlogValidationError::NilUuid);
        }
        if author.is_nil() {
            return Err(BlogValidationError::NilAuthor);
        }

        Ok(Self {
            uuid,
            title: title.into(),
            description: description.into(),
            banner_url: String::new(),
            content_json: String::new(),
            tags: Vec::new(),
            author,
            comments: Vec::new(),
            total_likes: 0,
            total_comments: 0,
        })
    }

    /// Returns the post title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the author's stable ID.
    pub fn author_id(&self) -> UserId {
        self.author
    }

    /// Bumps `total_likes` by exactly 1.
    ///
    /// Two calls record two likes; deduplication by reader identity belongs
    /// to an engagement-tracking collaborator outside this crate.
    pub fn add_like(&mut self) {
        self.total_likes += 1;
    }

    /// Appends a tag, preserving order.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        self.tags.push(tag.into());
    }

    /// Sets the banner image location.
    pub fn set_banner_url(&mut self, banner_url: impl Into<String>) {
        self.banner_url = banner_url.into();
    }

    /// Replaces the serialized editor document.
    pub fn set_content_json(&mut self, content_json: impl Into<String>) {
        self.content_json = content_json.into();
    }

    /// Appends a comment reference and bumps `total_comments`.
    ///
    /// The comment entity itself lives outside this crate; only the ordered
    /// linkage and the counter are kept here.
    pub fn record_comment(&mut self, comment_id: CommentId) {
        self.comments.push(comment_id);
        self.total_comments += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::{Blog, BlogValidationError};
    use uuid::Uuid;

    #[test]
    fn new_rejects_nil_author() {
        let err = Blog::new("title", "desc", Uuid::nil()).unwrap_err();
        assert_eq!(err, BlogValidationError::NilAuthor);
    }

    #[test]
    fn with_id_rejects_nil_uuid() {
        let author = Uuid::new_v4();
        let err = Blog::with_id(Uuid::nil(), "title", "desc", author).unwrap_err();
        assert_eq!(err, BlogValidationError::NilUuid);
    }
}
