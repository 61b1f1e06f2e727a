//! Core domain logic for Quillpad, a blogging platform.
//! This crate is the single source of truth for author/post invariants.

pub mod auth;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use auth::password::{PasswordHashError, PasswordHasher};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::blog::{Blog, BlogId, BlogValidationError, CommentId};
pub use model::user::{derive_username, User, UserCreateError, UserId};
pub use repo::registry::{EntityRegistry, InMemoryRegistry, RegistryError, RegistryResult};
pub use service::publish_service::{PublishError, PublishService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
