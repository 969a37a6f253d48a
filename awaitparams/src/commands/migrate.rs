//! Migrate command: rewrite each target file in place.

use crate::error::MigrateError;
use crate::output;
use crate::rules::{apply_rules, Rule, RuleHit};
use crate::utils::{normalize_display_path, resolve_target};

use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Options for a migration run
#[derive(Default)]
pub struct MigrateOptions<'a> {
    /// Rules to apply, in order
    pub rules: Vec<&'a dyn Rule>,
    /// Report what would change without writing
    pub dry_run: bool,
    /// Print per-rule hit counts on stderr
    pub verbose: bool,
    /// Emit a JSON array instead of status lines
    pub json: bool,
    /// Directory relative targets resolve against
    pub root: Option<PathBuf>,
}

/// Outcome for one target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    /// Rewritten and written back
    Fixed,
    /// Would be rewritten (dry run)
    WouldFix,
    /// No rule matched
    NoChanges,
    /// Target does not exist
    NotFound,
    /// Read, write or path failure
    Error,
}

/// Result for one target
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Path as listed, normalized for display
    pub path: String,
    /// What happened
    pub status: FileStatus,
    /// Error detail for `FileStatus::Error`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Rules that changed the text
    pub rules: Vec<RuleHit>,
}

impl FileReport {
    fn new(path: &Path, status: FileStatus) -> Self {
        Self {
            path: normalize_display_path(path),
            status,
            detail: None,
            rules: Vec::new(),
        }
    }

    fn from_error(err: &MigrateError) -> Self {
        match err {
            MigrateError::NotFound { path } => Self::new(path, FileStatus::NotFound),
            other => Self {
                detail: Some(other.to_string()),
                ..Self::new(other.path(), FileStatus::Error)
            },
        }
    }
}

/// Migrate every target in order, one status line each, then `Done!`.
///
/// Per-file failures become status lines and never stop the run. Only a
/// failure to write to `writer` is returned as an error.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn run_migrate<W: Write>(
    targets: &[PathBuf],
    options: &MigrateOptions<'_>,
    mut writer: W,
) -> Result<Vec<FileReport>> {
    let mut reports = Vec::with_capacity(targets.len());

    for target in targets {
        let report = match migrate_file(target, options) {
            Ok(report) => report,
            Err(err) => FileReport::from_error(&err),
        };

        if options.verbose {
            output::print_verbose_hits(&report);
        }
        if !options.json {
            output::print_status_line(&mut writer, &report)?;
        }
        reports.push(report);
    }

    if options.json {
        output::print_json(&mut writer, &reports)?;
    } else {
        output::print_done(&mut writer)?;
    }

    Ok(reports)
}

/// Read, rewrite and (if changed) write back a single target.
///
/// # Errors
///
/// Returns the per-file failure; the caller turns it into a status line.
pub fn migrate_file(
    target: &Path,
    options: &MigrateOptions<'_>,
) -> Result<FileReport, MigrateError> {
    let file_path = resolve_target(target, options.root.as_deref())?;

    let content = fs::read_to_string(&file_path)
        .map_err(|e| MigrateError::from_read(target.to_path_buf(), e))?;

    let rewritten = apply_rules(&content, &options.rules).map_err(|source| {
        MigrateError::Rewrite {
            path: target.to_path_buf(),
            source,
        }
    })?;

    if rewritten.text == content {
        return Ok(FileReport::new(target, FileStatus::NoChanges));
    }

    let status = if options.dry_run {
        FileStatus::WouldFix
    } else {
        fs::write(&file_path, &rewritten.text).map_err(|source| MigrateError::Write {
            path: target.to_path_buf(),
            source,
        })?;
        FileStatus::Fixed
    };

    Ok(FileReport {
        rules: rewritten.hits,
        ..FileReport::new(target, status)
    })
}
