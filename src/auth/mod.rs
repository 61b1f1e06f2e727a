//! Credential-handling collaborator contracts.

pub mod password;
