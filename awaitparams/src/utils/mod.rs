//! Utilities module for awaitparams.

mod paths;

pub use paths::{normalize_display_path, resolve_target};
