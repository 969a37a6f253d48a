//! Shared constants: the built-in target list, config file name and status markers.

/// Name of the configuration file looked up from the working directory upwards.
pub const CONFIG_FILENAME: &str = ".awaitparams.toml";

/// Route handlers migrated when no paths are given on the command line or in config.
///
/// Order matters: files are processed and reported in exactly this sequence.
pub const DEFAULT_TARGETS: &[&str] = &[
    "src/app/api/series/[id]/route.ts",
    "src/app/api/warehouses/[id]/route.ts",
    "src/app/api/warehouses/[id]/deactivate/route.ts",
    "src/app/api/warehouses/[id]/activate/route.ts",
    "src/app/api/admin/users/[id]/route.ts",
    "src/app/api/admin/users/[id]/roles/route.ts",
    "src/app/api/admin/users/[id]/roles/[roleId]/route.ts",
    "src/app/api/titles/[id]/stock-threshold/route.ts",
    "src/app/api/audit/users/[id]/route.ts",
    "src/app/api/inventory/[id]/route.ts",
    "src/app/api/inventory/[id]/adjust/route.ts",
];

/// Marker printed before `Fixed:`.
pub const MARK_FIXED: &str = "✅";
/// Marker printed before `No changes:`. Two spaces follow it in the status line.
pub const MARK_SKIPPED: &str = "⏭️";
/// Marker printed before `Not found:` and `Error processing`.
pub const MARK_FAILED: &str = "❌";
/// Marker printed before `Would fix:` in dry-run mode.
pub const MARK_DRY_RUN: &str = "🔍";

/// Final line of a text transcript.
pub const DONE_LINE: &str = "Done!";
