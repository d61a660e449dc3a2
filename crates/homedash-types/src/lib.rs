//! Shared types, adapter traits, and core utilities for Homedash.
//!
//! This crate holds what the server crate and the storage adapters both need:
//! the error type, the `MetaAdapter` storage trait, the worker pool, and a few
//! helpers for tokens and data URIs.

pub mod error;
pub mod meta_adapter;
pub mod prelude;
pub mod utils;
pub mod worker;

// vim: ts=4
