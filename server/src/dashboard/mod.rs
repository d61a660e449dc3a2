//! Groups and services of the dashboard.

pub mod handler;

// vim: ts=4
