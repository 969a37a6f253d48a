use clap::{Args, Parser};
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.awaitparams.toml):
  Looked up from the working directory (or --root) upwards.

  [awaitparams]
  files = [\"src/app/api/series/[id]/route.ts\"]  # Replace the built-in list
  ignore = [\"AWP-R002\"]                         # Skip rules by ID
  root = \".\"                                    # Resolve relative files here
  dry_run = false                               # Never write

With no paths and no config file, the built-in list of route handlers is migrated.
";

/// Options for output formatting and verbosity.
#[derive(Args, Debug, Default, Clone)]
pub struct OutputOptions {
    /// Output a JSON array of per-file results instead of status lines.
    #[arg(long)]
    pub json: bool,

    /// Print which rules fired on each file (stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

/// Command line interface configuration using `clap`.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "awaitparams - migrate route handlers to an awaited `params` argument",
    long_about = None,
    after_help = CONFIG_HELP
)]
pub struct Cli {
    /// Files to migrate, in order. Replaces the built-in list when given.
    pub paths: Vec<PathBuf>,

    /// Directory relative paths are resolved against.
    /// Files resolving outside it are reported as errors and never read.
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Show which files would change without writing them.
    #[arg(long)]
    pub dry_run: bool,

    /// Rule ID to skip (repeatable), e.g. `--ignore AWP-R002`.
    #[arg(long, value_name = "RULE_ID")]
    pub ignore: Vec<String>,

    /// List the rules in application order and exit.
    #[arg(long)]
    pub list_rules: bool,

    /// Output formatting options.
    #[command(flatten)]
    pub output: OutputOptions,
}
