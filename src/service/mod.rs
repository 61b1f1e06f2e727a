//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate registry calls into use-case level APIs.
//! - Keep outer layers decoupled from entity storage details.

pub mod publish_service;
