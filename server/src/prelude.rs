pub use crate::app::App;
pub use homedash_types::prelude::*;

// vim: ts=4
