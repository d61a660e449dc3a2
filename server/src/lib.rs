//! Homedash is a small, self-hosted dashboard backend.
//!
//! # Features
//!
//! - Single shared-secret login with one active bearer token
//! - Groups and services (your personal homepage of links)
//! - Favicon fetching for any site, returned as a data URI
//! - Uploaded image normalization into 128px PNG icons
//! - Host CPU, memory and disk usage
//! - Static front-end serving from a dist directory

#![forbid(unsafe_code)]

// Re-export shared types and adapter traits from homedash-types
pub use homedash_types::error;
pub use homedash_types::meta_adapter;
pub use homedash_types::utils;
pub use homedash_types::worker;

pub mod app;
pub mod auth;
pub mod dashboard;
pub mod extract;
pub mod icon;
pub mod prelude;
pub mod routes;
pub mod settings;
pub mod system;
pub mod types;

pub use crate::app::{App, AppBuilder, AppState};

// vim: ts=4
