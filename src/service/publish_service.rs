//! Publishing use-case service.
//!
//! # Responsibility
//! - Provide author registration and blog publication entry points.
//! - Compose the cross-entity updates a publication requires (blog insert,
//!   author blog-list append, post-count bump) as one operation.
//!
//! # Invariants
//! - `publish_blog` keeps `User::blogs` and `User::total_posts` in step;
//!   nothing else in the crate mutates both sides.
//! - Service APIs never bypass registry resolution contracts.
//! - Log lines carry entity IDs only, never emails or credential material.

use crate::auth::password::PasswordHasher;
use crate::model::blog::{Blog, BlogId, BlogValidationError, CommentId};
use crate::model::user::{User, UserCreateError, UserId};
use crate::repo::registry::{EntityRegistry, RegistryError};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for publishing use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishError {
    /// User construction or hashing failed.
    User(UserCreateError),
    /// Blog construction failed.
    Blog(BlogValidationError),
    /// Entity lookup or insert failed.
    Registry(RegistryError),
}

impl Display for PublishError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User(err) => write!(f, "{err}"),
            Self::Blog(err) => write!(f, "{err}"),
            Self::Registry(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PublishError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::User(err) => Some(err),
            Self::Blog(err) => Some(err),
            Self::Registry(err) => Some(err),
        }
    }
}

impl From<UserCreateError> for PublishError {
    fn from(value: UserCreateError) -> Self {
        Self::User(value)
    }
}

impl From<BlogValidationError> for PublishError {
    fn from(value: BlogValidationError) -> Self {
        Self::Blog(value)
    }
}

impl From<RegistryError> for PublishError {
    fn from(value: RegistryError) -> Self {
        Self::Registry(value)
    }
}

/// Publishing service facade over a registry and a hashing backend.
pub struct PublishService<R: EntityRegistry, H: PasswordHasher> {
    registry: R,
    hasher: H,
}

impl<R: EntityRegistry, H: PasswordHasher> PublishService<R, H> {
    /// Creates a service using the provided registry and hashing backend.
    pub fn new(registry: R, hasher: H) -> Self {
        Self { registry, hasher }
    }

    /// Registers a new author account.
    ///
    /// # Contract
    /// - Delegates password hashing to the configured backend; failures
    ///   propagate unchanged.
    /// - Returns the generated stable user ID.
    pub fn register_author(
        &mut self,
        fullname: impl Into<String>,
        email: impl Into<String>,
        raw_password: &str,
    ) -> Result<UserId, PublishError> {
        let user = User::new(fullname, email, raw_password, &self.hasher)?;
        let id = self.registry.insert_user(user)?;
        info!("event=author_registered module=service status=ok user={id}");
        Ok(id)
    }

    /// Publishes a new blog for an existing author.
    ///
    /// # Contract
    /// - Creates the blog, appends it to the author's blog list and bumps
    ///   the author's post count, in that order.
    /// - Returns `UserNotFound` when the author is not registered; nothing
    ///   is recorded in that case.
    pub fn publish_blog(
        &mut self,
        author: UserId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<BlogId, PublishError> {
        let blog = Blog::new(title, description, author)?;
        // insert_blog verifies the author exists before anything is stored.
        let id = self.registry.insert_blog(blog)?;

        let user = self.registry.user_mut(author)?;
        user.attach_blog(id);
        user.increment_post_count();

        info!("event=blog_published module=service status=ok blog={id} author={author}");
        Ok(id)
    }

    /// Records one like on a blog and returns the new total.
    ///
    /// No per-reader deduplication; repeated calls record repeated likes.
    pub fn like_blog(&mut self, blog_id: BlogId) -> Result<u64, PublishError> {
        let blog = self.registry.blog_mut(blog_id)?;
        blog.add_like();
        let total = blog.total_likes;
        debug!("event=blog_liked module=service status=ok blog={blog_id} total_likes={total}");
        Ok(total)
    }

    /// Records a posted comment reference on a blog.
    ///
    /// Entry point for the comment-posting collaborator; comment content is
    /// modeled elsewhere.
    pub fn comment_on_blog(
        &mut self,
        blog_id: BlogId,
        comment_id: CommentId,
    ) -> Result<(), PublishError> {
        let blog = self.registry.blog_mut(blog_id)?;
        blog.record_comment(comment_id);
        debug!("event=blog_commented module=service status=ok blog={blog_id}");
        Ok(())
    }

    /// Appends a tag to a blog.
    pub fn tag_blog(
        &mut self,
        blog_id: BlogId,
        tag: impl Into<String>,
    ) -> Result<(), PublishError> {
        let blog = self.registry.blog_mut(blog_id)?;
        blog.add_tag(tag);
        Ok(())
    }

    /// Records one read against an author's aggregate counter.
    pub fn record_read(&mut self, user_id: UserId) -> Result<(), PublishError> {
        let user = self.registry.user_mut(user_id)?;
        user.record_read();
        Ok(())
    }

    /// Resolves a blog's author and returns the author's username.
    pub fn author_username(&self, blog_id: BlogId) -> Result<String, PublishError> {
        Ok(self.registry.author_username(blog_id)?)
    }

    /// Loads one user by ID.
    pub fn user(&self, id: UserId) -> Result<&User, PublishError> {
        Ok(self.registry.user(id)?)
    }

    /// Loads one blog by ID.
    pub fn blog(&self, id: BlogId) -> Result<&Blog, PublishError> {
        Ok(self.registry.blog(id)?)
    }
}
