use crate::commands::{FileReport, FileStatus};
use crate::constants::{DONE_LINE, MARK_DRY_RUN, MARK_FAILED, MARK_FIXED, MARK_SKIPPED};
use crate::rules::Rule;
use colored::Colorize;
use std::io::Write;

/// Print the status line for one processed file.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_status_line(writer: &mut impl Write, report: &FileReport) -> std::io::Result<()> {
    let path = &report.path;
    match report.status {
        FileStatus::Fixed => writeln!(writer, "{MARK_FIXED} {} {path}", "Fixed:".green()),
        FileStatus::WouldFix => {
            writeln!(writer, "{MARK_DRY_RUN} {} {path}", "Would fix:".yellow())
        }
        FileStatus::NoChanges => {
            writeln!(writer, "{MARK_SKIPPED}  {} {path}", "No changes:".dimmed())
        }
        FileStatus::NotFound => writeln!(writer, "{MARK_FAILED} {} {path}", "Not found:".red()),
        FileStatus::Error => writeln!(
            writer,
            "{MARK_FAILED} {} {path}: {}",
            "Error processing".red(),
            report.detail.as_deref().unwrap_or_default()
        ),
    }
}

/// Print the blank line and `Done!` that close a text transcript.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_done(writer: &mut impl Write) -> std::io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{DONE_LINE}")
}

/// Print all reports as a pretty JSON array.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn print_json(writer: &mut impl Write, reports: &[FileReport]) -> anyhow::Result<()> {
    writeln!(writer, "{}", serde_json::to_string_pretty(reports)?)?;
    Ok(())
}

/// Print one line per rule: ID, category and name.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_rule_list(writer: &mut impl Write, rules: &[&dyn Rule]) -> std::io::Result<()> {
    for rule in rules {
        writeln!(
            writer,
            "{}  {:<9}  {}",
            rule.code().bold(),
            rule.category(),
            rule.name()
        )?;
    }
    Ok(())
}

/// Print per-rule hit counts for a file on stderr.
pub fn print_verbose_hits(report: &FileReport) {
    for hit in &report.rules {
        eprintln!("[VERBOSE] {}: {} x{}", report.path, hit.id, hit.matches);
    }
}
