//! Commands module - CLI command implementations.

mod migrate;

pub use migrate::{migrate_file, run_migrate, FileReport, FileStatus, MigrateOptions};
