//! Per-file failures of a migration run.

use crate::fix::RewriteError;
use std::path::PathBuf;

/// Why a single target could not be migrated.
///
/// Every variant is caught at the file boundary and reported as a status
/// line; none of them stops the run.
#[derive(Debug, thiserror::Error)]
pub enum MigrateError {
    /// The target does not exist.
    #[error("{}", .path.display())]
    NotFound {
        /// Path as listed.
        path: PathBuf,
    },
    /// Reading the target failed for a reason other than absence.
    #[error("{source}")]
    Read {
        /// Path as listed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Writing the rewritten text back failed.
    #[error("{source}")]
    Write {
        /// Path as listed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The target resolves outside the configured root.
    #[error("path escapes root {}", .root.display())]
    OutsideRoot {
        /// Path as listed.
        path: PathBuf,
        /// The root it escapes.
        root: PathBuf,
    },
    /// A rule produced edits the rewriter rejected.
    #[error("{source}")]
    Rewrite {
        /// Path as listed.
        path: PathBuf,
        /// Rewriter error.
        source: RewriteError,
    },
}

impl MigrateError {
    /// Classifies a read failure, splitting out `NotFound`.
    pub(crate) fn from_read(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Read { path, source }
        }
    }

    /// The target path the error belongs to.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound { path }
            | Self::Read { path, .. }
            | Self::Write { path, .. }
            | Self::OutsideRoot { path, .. }
            | Self::Rewrite { path, .. } => path,
        }
    }
}
