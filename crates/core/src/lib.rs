//! Shared domain primitives for the campus session toolkit.
//!
//! - [`roles`] -- the four login roles and their route / storage-key names.
//! - [`identity`] -- role-specific profile records embedded in tokens.
//! - [`error`] -- the session failure taxonomy shared across crates.
//! - [`types`] -- common type aliases.

pub mod error;
pub mod identity;
pub mod roles;
pub mod types;
