//! Password hashing collaborator contract.
//!
//! # Responsibility
//! - Define the seam through which user creation obtains credential hashes.
//!
//! # Invariants
//! - The core never stores or compares plaintext passwords.
//! - Hash output is opaque; the core performs no validation of its format.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure reported by a hashing backend.
///
/// The core neither interprets nor retries these; they propagate to the
/// caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHashError {
    /// Backend-supplied failure description.
    pub reason: String,
}

impl PasswordHashError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Display for PasswordHashError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "password hashing failed: {}", self.reason)
    }
}

impl Error for PasswordHashError {}

/// Hashing backend consumed as a black box during user creation.
///
/// Invoked exactly once per created user.
pub trait PasswordHasher {
    /// Hashes a raw password into opaque credential material.
    fn hash(&self, raw_password: &str) -> Result<String, PasswordHashError>;
}
