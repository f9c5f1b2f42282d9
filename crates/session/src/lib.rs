//! Client-side session handling for the campus platform.
//!
//! The backend issues compact three-segment tokens at login. This crate
//! decodes their payload ([`token`]), evaluates expiry ([`expiry`]),
//! persists session state behind the [`store::SessionStore`] trait, and
//! gates protected views through [`guard::SessionGuard`] -- once on view
//! entry and again on a recurring, cancellable timer
//! ([`watch::SessionWatcher`]).
//!
//! Validity here means "structurally parseable and not expired", nothing
//! more: the signature segment is never inspected client-side. The server
//! must verify every request on its own; this crate only decides when the
//! client should stop treating itself as logged in.

pub mod expiry;
pub mod guard;
pub mod store;
pub mod token;
pub mod watch;
