//! Entity storage abstractions and the in-memory registry.
//!
//! # Responsibility
//! - Define the registry contract domain services depend on.
//! - Resolve cross-entity links (blog -> author) through stable IDs.
//!
//! # Invariants
//! - Registry APIs return semantic errors (`UserNotFound`, `BlogNotFound`)
//!   instead of dereferencing dangling links.
//! - A blog can only be inserted when its author already exists.

pub mod registry;
