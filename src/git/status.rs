//! Working-tree inspection for submodules
//!
//! Status queries favor forward progress across a heterogeneous module
//! set: a path that is not a usable git checkout reports as clean
//! rather than failing the run.

use super::common::git_output;
use crate::constants;
use crate::registry::Submodule;
use std::path::Path;

/// Return the porcelain status lines for the working tree at `path`
///
/// Failures (missing directory, not a checkout) are swallowed and
/// reported as "no output".
pub fn status_lines(path: &Path) -> Vec<String> {
    let Ok(output) = git_output(path, &["status", "--porcelain"]) else {
        return Vec::new();
    };
    if !output.status.success() {
        return Vec::new();
    }

    String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.to_string())
        .collect()
}

/// Check whether the working tree at `path` has uncommitted changes
pub fn has_changes(path: &Path) -> bool {
    !status_lines(path).is_empty()
}

/// Return the current branch at `path`, or `None` when HEAD is detached
/// or cannot be resolved at all
///
/// The two empty cases are deliberately conflated; callers that require
/// a branch (push, mr) treat them identically.
pub fn current_branch(path: &Path) -> Option<String> {
    let output = git_output(path, &["rev-parse", "--abbrev-ref", "HEAD"]).ok()?;
    if !output.status.success() {
        return None;
    }

    let branch = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if branch.is_empty() || branch == constants::git::DETACHED_SENTINEL {
        None
    } else {
        Some(branch)
    }
}

/// Return the subset of `modules` with local modifications, preserving
/// registry order
pub fn changed_submodules(modules: &[Submodule]) -> Vec<Submodule> {
    modules
        .iter()
        .filter(|module| has_changes(&module.path))
        .cloned()
        .collect()
}
