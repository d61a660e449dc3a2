//! Authentication subsystem.
//!
//! A single shared secret unlocks the dashboard. A successful login issues a
//! bearer token, and only the most recently issued token is accepted.

pub mod handler;
pub mod middleware;
pub mod session;

pub use session::SessionManager;

// vim: ts=4
