//! User (author) domain model.
//!
//! # Responsibility
//! - Hold account identity (fullname, email, derived username) and opaque
//!   credential material.
//! - Track account-level counters and the ordered list of authored blogs.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another user.
//! - `username` is always the prefix of `email` before the first `@`; when
//!   the email contains no `@`, the username equals the whole email string.
//! - `total_posts` and `total_reads` only ever increase.
//! - `blogs` preserves insertion order; insertion order is publication order.

use crate::auth::password::{PasswordHashError, PasswordHasher};
use crate::model::blog::BlogId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a user entity.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type UserId = Uuid;

/// Errors from user construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCreateError {
    /// Caller-provided ID is the nil UUID.
    NilUuid,
    /// `fullname` is empty.
    EmptyFullname,
    /// `email` is empty.
    EmptyEmail,
    /// The hashing collaborator failed; propagated verbatim.
    Hashing(PasswordHashError),
}

impl Display for UserCreateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilUuid => write!(f, "user uuid must not be nil"),
            Self::EmptyFullname => write!(f, "user fullname must not be empty"),
            Self::EmptyEmail => write!(f, "user email must not be empty"),
            Self::Hashing(err) => write!(f, "{err}"),
        }
    }
}

impl Error for UserCreateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Hashing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PasswordHashError> for UserCreateError {
    fn from(value: PasswordHashError) -> Self {
        Self::Hashing(value)
    }
}

/// Derives the username for an email address.
///
/// The username is everything before the first `@`. An email without `@`
/// degrades to the whole string; callers that want stricter email policy
/// must enforce it before construction.
pub fn derive_username(email: &str) -> &str {
    match email.find('@') {
        Some(at) => &email[..at],
        None => email,
    }
}

/// Canonical author/account record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable global ID used for authorship linking.
    pub uuid: UserId,
    /// Display name, set at creation.
    pub fullname: String,
    /// Unique identity source; the username is derived from it.
    pub email: String,
    /// Derived from `email`; see module invariants.
    pub username: String,
    /// Opaque output of the hashing collaborator. Never plaintext.
    pub password_hash: String,
    /// Optional free-text profile blurb.
    pub bio: Option<String>,
    /// Count of published posts. Caller-driven, monotonic.
    pub total_posts: u64,
    /// Count of recorded reads across all posts. Caller-driven, monotonic.
    pub total_reads: u64,
    /// Authored blog IDs in publication order.
    pub blogs: Vec<BlogId>,
}

impl User {
    /// Creates a new user with a generated stable ID.
    ///
    /// Delegates `raw_password` to the hashing collaborator and stores only
    /// the resulting hash. Hashing failures are returned unchanged.
    ///
    /// # Errors
    /// - `EmptyFullname` / `EmptyEmail` when the respective input is empty.
    /// - `Hashing` when the collaborator fails.
    pub fn new(
        fullname: impl Into<String>,
        email: impl Into<String>,
        raw_password: &str,
        hasher: &dyn PasswordHasher,
    ) -> Result<Self, UserCreateError> {
        Self::with_id(Uuid::new_v4(), fullname, email, raw_password, hasher)
    }

    /// Creates a new user with a caller-provided stable ID.
    ///
    /// Used by import paths where identity already exists externally.
    ///
    /// # Invariants
    /// - The provided `uuid` must remain stable for this user's lifetime.
    pub fn with_id(
        uuid: UserId,
        fullname: impl Into<String>,
        email: impl Into<String>,
        raw_password: &str,
        hasher: &dyn PasswordHasher,
    ) -> Result<Self, UserCreateError> {
        if uuid.is_nil() {
            return Err(UserCreateError::NilUuid);
        }
        let fullname = fullname.into();
        if fullname.is_empty() {
            return Err(UserCreateError::EmptyFullname);
        }
        let email = email.into();
        if email.is_empty() {
            return Err(UserCreateError::EmptyEmail);
        }

        let username = derive_username(&email).to_string();
        let password_hash = hasher.hash(raw_password)?;

        Ok(Self {
            uuid,
            fullname,
            email,
            username,
            password_hash,
            bio: None,
            total_posts: 0,
            total_reads: 0,
            blogs: Vec::new(),
        })
    }

    /// Returns the derived username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the stored display name.
    pub fn fullname(&self) -> &str {
        &self.fullname
    }

    /// Returns the stored email verbatim.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Bumps `total_posts` by exactly 1.
    ///
    /// No bounds check; the counter is monotonic and practically bounded by
    /// `u64`. Composition with blog construction is the caller's job.
    pub fn increment_post_count(&mut self) {
        self.total_posts += 1;
    }

    /// Bumps `total_reads` by exactly 1.
    ///
    /// Entry point for the read-tracking collaborator.
    pub fn record_read(&mut self) {
        self.total_reads += 1;
    }

    /// Replaces the profile bio.
    pub fn set_bio(&mut self, bio: impl Into<String>) {
        self.bio = Some(bio.into());
    }

    /// Appends a blog ID to the authored list, preserving order.
    ///
    /// Does not touch `total_posts`; the two updates are composed by the
    /// publish service, not by the entity.
    pub fn attach_blog(&mut self, blog_id: BlogId) {
        self.blogs.push(blog_id);
    }
}

#[cfg(test)]
mod tests {
    use super::derive_username;

    #[test]
    fn derive_username_stops_at_first_at_sign() {
        assert_eq!(derive_username("ada@example.com"), "ada");
        assert_eq!(derive_username("a@b@c"), "a");
    }

    #[test]
    fn derive_username_degrades_to_whole_string_without_at_sign() {
        assert_eq!(derive_username("not-an-email"), "not-an-email");
        assert_eq!(derive_username(""), "");
    }

    #[test]
    fn derive_username_handles_leading_at_sign() {
        assert_eq!(derive_username("@example.com"), "");
    }
}
