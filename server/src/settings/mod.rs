//! Feature settings exposed to the front-end.

pub mod handler;

/// Network mode override. Free-form, the front-end knows the values.
pub const FORCE_NETWORK_MODE_KEY: &str = "force_network_mode";
pub const DEFAULT_NETWORK_MODE: &str = "auto";

// vim: ts=4
