//! Icon utilities: favicon discovery and uploaded image normalization.

pub mod favicon;
pub mod handler;
pub mod normalize;

pub use favicon::{FaviconOutcome, FaviconResolver};

// vim: ts=4
