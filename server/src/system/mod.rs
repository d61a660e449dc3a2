//! Host metrics: CPU, memory and root disk usage.

pub mod handler;
pub mod info;

// vim: ts=4
