use crate::cli::Cli;
use crate::commands::{run_migrate, MigrateOptions};
use crate::config::Config;
use crate::constants::DEFAULT_TARGETS;
use crate::rules::{all_rules, select_rules};
use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};

/// Runs awaitparams with the given arguments, writing to stdout.
///
/// # Errors
///
/// Returns an error if writing the output fails.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Run awaitparams with the given arguments, writing output to the specified writer.
///
/// This is the testable version of `run_with_args` that allows output capture.
/// Returns the process exit code: 0 after a completed run (even when some
/// files failed), 1 for unusable arguments.
///
/// # Errors
///
/// Returns an error if writing the output fails.
pub fn run_with_args_to<W: std::io::Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["awaitparams".to_owned()];
    program_args.extend(args);
    let cli_var = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                write!(writer, "{e}")?;
                writer.flush()?;
                return Ok(0);
            }
            _ => {
                eprint!("{e}");
                return Ok(1);
            }
        },
    };

    if cli_var.list_rules {
        crate::output::print_rule_list(writer, &all_rules())?;
        return Ok(0);
    }

    let config_start = cli_var.root.as_deref().unwrap_or(Path::new("."));
    let config = Config::load_from_path(config_start);

    let root = cli_var.root.clone().or_else(|| config_root(&config));
    if let Some(root) = &root {
        if !root.is_dir() {
            eprintln!(
                "Error: The root directory '{}' does not exist.",
                root.display()
            );
            return Ok(1);
        }
    }

    let targets = select_targets(&cli_var, &config);

    let mut ignore: FxHashSet<String> = config
        .awaitparams
        .ignore
        .clone()
        .unwrap_or_default()
        .into_iter()
        .collect();
    ignore.extend(cli_var.ignore.iter().cloned());
    warn_unknown_rules(&ignore);

    let dry_run = cli_var.dry_run || config.awaitparams.dry_run.unwrap_or(false);
    let verbose = cli_var.output.verbose;

    if verbose {
        eprintln!("[VERBOSE] awaitparams v{}", env!("CARGO_PKG_VERSION"));
        if let Some(path) = &config.config_file_path {
            eprintln!("[VERBOSE] Config: {}", path.display());
        }
        eprintln!("[VERBOSE] Targets: {}", targets.len());
        if !ignore.is_empty() {
            let mut ids: Vec<_> = ignore.iter().map(String::as_str).collect();
            ids.sort_unstable();
            eprintln!("[VERBOSE] Ignored rules: {}", ids.join(", "));
        }
        if dry_run {
            eprintln!("[VERBOSE] Dry run: no files will be written");
        }
        eprintln!();
    }

    let options = MigrateOptions {
        rules: select_rules(&ignore),
        dry_run,
        verbose,
        json: cli_var.output.json,
        root,
    };
    run_migrate(&targets, &options, writer)?;

    Ok(0)
}

/// CLI paths win over config `files`, which win over the built-in list.
fn select_targets(cli_var: &Cli, config: &Config) -> Vec<PathBuf> {
    if !cli_var.paths.is_empty() {
        return cli_var.paths.clone();
    }
    if let Some(files) = &config.awaitparams.files {
        return files.clone();
    }
    DEFAULT_TARGETS.iter().map(PathBuf::from).collect()
}

/// A relative `root` in the config file is taken relative to that file.
fn config_root(config: &Config) -> Option<PathBuf> {
    let root = config.awaitparams.root.as_ref()?;
    if root.is_absolute() {
        return Some(root.clone());
    }
    let base = config
        .config_file_path
        .as_deref()
        .and_then(Path::parent)
        .unwrap_or(Path::new("."));
    Some(base.join(root))
}

fn warn_unknown_rules<S: std::hash::BuildHasher>(ignore: &std::collections::HashSet<String, S>) {
    let known: FxHashSet<&str> = all_rules().iter().map(|r| r.code()).collect();
    let mut unknown: Vec<_> = ignore
        .iter()
        .filter(|id| !known.contains(id.as_str()))
        .collect();
    unknown.sort_unstable();
    for id in unknown {
        eprintln!("{} unknown rule ID '{id}' ignored", "Warning:".yellow());
    }
}
