//! Common git utilities and shared helpers
//!
//! This module contains the subprocess plumbing shared by the git
//! workflows, plus the per-module logger used for all user-facing
//! output.

use crate::registry::Submodule;
use anyhow::{Context, Result};
use colored::*;
use std::path::Path;
use std::process::{Command, Output};
use std::sync::atomic::{AtomicBool, Ordering};

/// Process-wide verbosity switch for subprocess echoing
///
/// Set once at startup from `--verbose`; read before every subprocess
/// spawn so the executed command lines land on stderr.
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Enable or disable echoing of executed subprocess command lines
pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

/// Echo a subprocess invocation to stderr when verbose output is enabled
pub(crate) fn debug_exec(program: &str, args: &[&str]) {
    if VERBOSE.load(Ordering::Relaxed) {
        eprintln!(
            "{} Executing: {} {}",
            "[submods]".dimmed(),
            program,
            args.join(" ")
        );
    }
}

/// Logger for git operations with consistent formatting
///
/// Each message is prefixed with the submodule name in cyan/bold so the
/// per-module loops stay readable. Debug lines go to stderr and are
/// only emitted when the user asked for `--verbose`.
#[derive(Default, Clone, Copy)]
pub struct Logger {
    verbose: bool,
}

impl Logger {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn info(&self, module: &Submodule, msg: &str) {
        println!("{} | {}", module.name.cyan().bold(), msg);
    }

    pub fn success(&self, module: &Submodule, msg: &str) {
        println!("{} | {}", module.name.cyan().bold(), msg.green());
    }

    pub fn warn(&self, module: &Submodule, msg: &str) {
        println!("{} | {}", module.name.cyan().bold(), msg.yellow());
    }

    pub fn error(&self, module: &Submodule, msg: &str) {
        eprintln!("{} | {}", module.name.cyan().bold(), msg.red());
    }

    /// Emit a diagnostic line to stderr when verbose output is enabled
    pub fn debug(&self, msg: &str) {
        if self.verbose {
            eprintln!("{} {}", "[submods]".dimmed(), msg);
        }
    }
}

/// Run a git command inside `path` and return the raw output
///
/// Only the spawn itself is checked; callers inspect the exit status.
pub(crate) fn git_output(path: &Path, args: &[&str]) -> Result<Output> {
    debug_exec("git", args);
    Command::new("git")
        .args(args)
        .current_dir(path)
        .output()
        .with_context(|| format!("Failed to execute git {}", args.join(" ")))
}

/// Run a git command inside `path`, failing on a non-zero exit
///
/// The error message carries git's own stderr, which is what the user
/// needs to see for checkout/push/staging failures.
pub(crate) fn git_checked(path: &Path, args: &[&str]) -> Result<Output> {
    let output = git_output(path, args)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        let detail = if stderr.trim().is_empty() {
            stdout.trim().to_string()
        } else {
            stderr.trim().to_string()
        };
        anyhow::bail!("git {} failed: {}", args.join(" "), detail);
    }

    Ok(output)
}

/// Run a git command on a best-effort basis, reporting only whether it
/// succeeded
///
/// Used for the base-branch bootstrap steps whose failure is an
/// accepted outcome; callers are free to discard the flag.
pub(crate) fn try_git(path: &Path, args: &[&str]) -> bool {
    match git_output(path, args) {
        Ok(output) => output.status.success(),
        Err(_) => false,
    }
}
