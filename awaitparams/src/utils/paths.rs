//! Path utilities for awaitparams.
//!
//! - Cross-platform path normalization for status lines
//! - Resolving targets against a root without escaping it

use crate::error::MigrateError;
use std::path::{Component, Path, PathBuf};

/// Normalizes a path for CLI display.
///
/// - Converts backslashes to forward slashes (for cross-platform consistency)
/// - Strips leading "./" or ".\" prefix (for cleaner output)
///
/// # Examples
/// ```
/// use std::path::Path;
/// use awaitparams::utils::normalize_display_path;
///
/// assert_eq!(normalize_display_path(Path::new(".\\src\\app\\route.ts")), "src/app/route.ts");
/// assert_eq!(normalize_display_path(Path::new("./src/app/api/[id]/route.ts")), "src/app/api/[id]/route.ts");
/// ```
#[must_use]
pub fn normalize_display_path(path: &Path) -> String {
    let s = path.to_string_lossy();
    // Strip Windows extended path prefix if present
    let clean = s.trim_start_matches(r"\\?\");
    let normalized = clean.replace('\\', "/");
    normalized
        .strip_prefix("./")
        .unwrap_or(&normalized)
        .to_owned()
}

/// Resolves a listed target against `root`.
///
/// Without a root the path is used exactly as listed. With a root, relative
/// paths are joined onto it and the result must stay inside it; the target
/// itself does not need to exist.
///
/// # Errors
///
/// Returns `MigrateError::OutsideRoot` if the path escapes the root, or
/// `MigrateError::Read` if the root or an ancestor cannot be resolved.
pub fn resolve_target(path: &Path, root: Option<&Path>) -> Result<PathBuf, MigrateError> {
    let Some(root) = root else {
        return Ok(path.to_path_buf());
    };

    let read_err = |source| MigrateError::Read {
        path: path.to_path_buf(),
        source,
    };
    let outside = || MigrateError::OutsideRoot {
        path: path.to_path_buf(),
        root: root.to_path_buf(),
    };

    let canonical_root = root.canonicalize().map_err(read_err)?;
    let absolute_path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        canonical_root.join(path)
    };

    // Longest existing ancestor, canonicalized to see through symlinks and `..`.
    let mut ancestor = absolute_path.as_path();
    while !ancestor.exists() {
        match ancestor.parent() {
            Some(p) => ancestor = p,
            None => break,
        }
    }
    let canonical_ancestor = ancestor.canonicalize().map_err(read_err)?;
    if !canonical_ancestor.starts_with(&canonical_root) {
        return Err(outside());
    }

    // The part that does not exist yet cannot be canonicalized.
    if let Ok(remainder) = absolute_path.strip_prefix(ancestor) {
        if remainder
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return Err(outside());
        }
    }

    Ok(absolute_path)
}
