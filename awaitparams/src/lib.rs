//! Core library for the awaitparams migration tool.
//!
//! Rewrites route handler files so their `params` argument is typed as a
//! `Promise` and every field read awaits it first. Files are treated as
//! plain text: an ordered list of regex rules is applied and the file is
//! written back only when something changed.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

/// Module defining the command-line interface arguments.
pub mod cli;

/// Module for handling CLI commands and their execution logic.
pub mod commands;

/// Module for loading configuration.
pub mod config;

/// Module containing shared constants, including the built-in target list.
pub mod constants;

/// Module defining the entry point logic shared by both binaries.
pub mod entry_point;

/// Module defining per-file error types.
pub mod error;

/// Module providing the byte-range rewriter used to apply rule matches.
pub mod fix;

/// Module for status line and JSON output.
pub mod output;

/// Module containing the substitution rules and the rule pipeline.
pub mod rules;

/// Module containing utility functions.
pub mod utils;
