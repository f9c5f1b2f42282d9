//! REST client for the campus backend's auth surface.
//!
//! Covers the two endpoints the session layer consumes: role login
//! (`POST /api/<role>/login`) and who-am-i (`GET /api/<role>/me`). Wire
//! shapes are modeled explicitly and collapsed into real `Result`s --
//! never optimistic field access on a duck-typed body.

pub mod auth;
pub mod config;
pub mod error;
