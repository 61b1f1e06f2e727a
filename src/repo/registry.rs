//! Registry contract and in-memory implementation.
//!
//! # Responsibility
//! - Own the arena of users and blogs, keyed by generated identifiers.
//! - Provide the one cross-entity read: author-username resolution.
//!
//! # Invariants
//! - IDs are never reused; duplicate inserts are rejected.
//! - `author_username` never dereferences a missing author; it returns
//!   `UserNotFound` when the link cannot be resolved.

use crate::model::blog::{Blog, BlogId};
use crate::model::user::{User, UserId};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type used by registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors from registry lookups and inserts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No user with this ID is registered.
    UserNotFound(UserId),
    /// No blog with this ID is registered.
    BlogNotFound(BlogId),
    /// A user with this ID is already registered.
    DuplicateUser(UserId),
    /// A blog with this ID is already registered.
    DuplicateBlog(BlogId),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UserNotFound(id) => write!(f, "user not found: {id}"),
            Self::BlogNotFound(id) => write!(f, "blog not found: {id}"),
            Self::DuplicateUser(id) => write!(f, "user already registered: {id}"),
            Self::DuplicateBlog(id) => write!(f, "blog already registered: {id}"),
        }
    }
}

impl Error for RegistryError {}

/// Registry interface for entity storage and cross-entity resolution.
///
/// Domain services stay storage-agnostic by depending on this trait rather
/// than on a concrete map layout.
pub trait EntityRegistry {
    /// Registers a user. Rejects duplicate IDs.
    fn insert_user(&mut self, user: User) -> RegistryResult<UserId>;
    /// Loads one user by ID.
    fn user(&self, id: UserId) -> RegistryResult<&User>;
    /// Loads one user mutably by ID.
    fn user_mut(&mut self, id: UserId) -> RegistryResult<&mut User>;
    /// Registers a blog. Rejects duplicate IDs and unknown authors.
    fn insert_blog(&mut self, blog: Blog) -> RegistryResult<BlogId>;
    /// Loads one blog by ID.
    fn blog(&self, id: BlogId) -> RegistryResult<&Blog>;
    /// Loads one blog mutably by ID.
    fn blog_mut(&mut self, id: BlogId) -> RegistryResult<&mut Blog>;
    /// Resolves a blog's author and returns the author's username.
    fn author_username(&self, blog_id: BlogId) -> RegistryResult<String>;
}

/// HashMap-backed registry for single-process, single-threaded use.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    users: HashMap<UserId, User>,
    blogs: HashMap<BlogId, Blog>,
}

impl InMemoryRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of registered users.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Returns the number of registered blogs.
    pub fn blog_count(&self) -> usize {
        self.blogs.len()
    }
}

impl EntityRegistry for InMemoryRegistry {
    fn insert_user(&mut self, user: User) -> RegistryResult<UserId> {
        let id = user.uuid;
        if self.users.contains_key(&id) {
            return Err(RegistryError::DuplicateUser(id));
        }
        self.users.insert(id, user);
        Ok(id)
    }

    fn user(&self, id: UserId) -> RegistryResult<&User> {
        self.users.get(&id).ok_or(RegistryError::UserNotFound(id))
    }

    fn user_mut(&mut self, id: UserId) -> RegistryResult<&mut User> {
        self.users
            .get_mut(&id)
            .ok_or(RegistryError::UserNotFound(id))
    }

    fn insert_blog(&mut self, blog: Blog) -> RegistryResult<BlogId> {
        let id = blog.uuid;
        if self.blogs.contains_key(&id) {
            return Err(RegistryError::DuplicateBlog(id));
        }
        // Authorship must resolve at insert time; a dangling author link is
        // unrepresentable in a populated registry.
        if !self.users.contains_key(&blog.author) {
            return Err(RegistryError::UserNotFound(blog.author));
        }
        self.blogs.insert(id, blog);
        Ok(id)
    }

    fn blog(&self, id: BlogId) -> RegistryResult<&Blog> {
        self.blogs.get(&id).ok_or(RegistryError::BlogNotFound(id))
    }

    fn blog_mut(&mut self, id: BlogId) -> RegistryResult<&mut Blog> {
        self.blogs
            .get_mut(&id)
            .ok_or(RegistryError::BlogNotFound(id))
    }

    fn author_username(&self, blog_id: BlogId) -> RegistryResult<String> {
        let blog = self.blog(blog_id)?;
        let author = self.user(blog.author)?;
        Ok(author.username().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{EntityRegistry, InMemoryRegistry, RegistryError};
    use crate::auth::password::{PasswordHashError, PasswordHasher};
    use crate::model::blog::Blog;
    use crate::model::user::User;
    use uuid::Uuid;

    struct PrefixHasher;

    impl PasswordHasher for PrefixHasher {
        fn hash(&self, raw_password: &str) -> Result<String, PasswordHashError> {
            Ok(format!("hashed_{raw_password}"))
        }
    }

    fn sample_user() -> User {
        User::new("Ada Lovelace", "ada@example.com", "s3cret", &PrefixHasher)
            .expect("valid sample user")
    }

    #[test]
    fn insert_blog_rejects_unknown_author() {
        let mut registry = InMemoryRegistry::new();
        let ghost = Uuid::new_v4();
        let blog = Blog::new("On Engines", "desc", ghost).unwrap();

        let err = registry.insert_blog(blog).unwrap_err();
        assert_eq!(err, RegistryError::UserNotFound(ghost));
        assert_eq!(registry.blog_count(), 0);
    }

    #[test]
    fn duplicate_user_insert_is_rejected() {
        let mut registry = InMemoryRegistry::new();
        let user = sample_user();
        let id = user.uuid;

        registry.insert_user(user.clone()).unwrap();
        let err = registry.insert_user(user).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateUser(id));
        assert_eq!(registry.user_count(), 1);
    }

    #[test]
    fn author_username_reports_missing_blog() {
        let registry = InMemoryRegistry::new();
        let unknown = Uuid::new_v4();
        let err = registry.author_username(unknown).unwrap_err();
        assert_eq!(err, RegistryError::BlogNotFound(unknown));
    }
}
