//! Domain model for authors and their published posts.
//!
//! # Responsibility
//! - Define the canonical `User` and `Blog` entity shapes.
//! - Keep entity-local invariants (derived username, monotonic counters)
//!   inside the entities themselves.
//!
//! # Invariants
//! - Every entity is identified by a stable, generated `Uuid`-based ID.
//! - Entities never reach across to other entities; cross-entity resolution
//!   lives in the registry layer.

pub mod blog;
pub mod user;
