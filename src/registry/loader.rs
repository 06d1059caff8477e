//! Submodule registry loading
//!
//! The registry is the parent repository's `.gitmodules` file. It is
//! read through git's configuration-query interface rather than parsed
//! by hand, so quoting and section-name edge cases stay git's problem.
//! The result is an in-memory ordered list built once per invocation.

use super::Submodule;
use crate::constants;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Sanity check the repository root and return it as an absolute path
///
/// The root must contain a `.gitmodules` file; anything else is a user
/// error, reported before any submodule is touched.
pub fn ensure_repo(path: &Path) -> Result<PathBuf> {
    let root = path
        .canonicalize()
        .with_context(|| format!("Cannot resolve repository root {}", path.display()))?;

    if !root.join(constants::git::GITMODULES_FILE).exists() {
        anyhow::bail!(
            "Expected to find a {} file in {}; is this the parent repository?",
            constants::git::GITMODULES_FILE,
            root.display()
        );
    }

    Ok(root)
}

/// Load the registered submodules from `.gitmodules`, in registry order
///
/// Entries whose directory is missing on disk still produce a record,
/// with the absolute path falling back to a naive join against the
/// root. A single absent module must never abort the load.
pub fn load_submodules(root: &Path) -> Result<Vec<Submodule>> {
    let args = [
        "config",
        "--file",
        constants::git::GITMODULES_FILE,
        "--get-regexp",
        r"^submodule\..*\.path$",
    ];
    crate::git::common::debug_exec("git", &args);
    let output = Command::new("git")
        .args(args)
        .current_dir(root)
        .output()
        .context("Failed to execute git config command")?;

    // git config exits non-zero when the file has no matching keys;
    // an empty registry is not an error.
    if !output.status.success() {
        return Ok(Vec::new());
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut submodules: Vec<Submodule> = Vec::new();

    for (name, rel) in parse_registry_entries(&stdout) {
        if submodules.iter().any(|m| m.name == name) {
            continue;
        }
        let rel_path = PathBuf::from(&rel);
        let path = resolve_module_path(root, &rel_path);
        submodules.push(Submodule::new(name, path, rel_path));
    }

    Ok(submodules)
}

/// Parse `git config --get-regexp` output into (name, relative path) pairs
///
/// Each line reads `submodule.<name>.path <value>`; names may themselves
/// contain dots, so only the outer prefix and suffix are stripped.
fn parse_registry_entries(output: &str) -> Vec<(String, String)> {
    let mut entries = Vec::new();

    for line in output.lines() {
        let Some((key, value)) = line.split_once(' ') else {
            continue;
        };
        let Some(name) = key
            .strip_prefix("submodule.")
            .and_then(|k| k.strip_suffix(".path"))
        else {
            continue;
        };
        if name.is_empty() || value.trim().is_empty() {
            continue;
        }
        entries.push((name.to_string(), value.trim().to_string()));
    }

    entries
}

/// Resolve a declared relative path to an absolute module path
fn resolve_module_path(root: &Path, rel_path: &Path) -> PathBuf {
    root.join(rel_path)
        .canonicalize()
        .unwrap_or_else(|_| root.join(rel_path))
}
