//! Common test support utilities and fixtures
//!
//! This module provides shared functionality to reduce code duplication
//! across the integration tests. Everything runs against real throwaway
//! git repositories in a temporary directory; no network access is
//! involved. Included via `mod support;` from the individual test
//! targets; not every target uses every helper.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Result of running a CLI command
#[derive(Debug)]
pub struct CliOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

/// A test workspace: a parent git repository with a `.gitmodules`
/// registry and nested module repositories
pub struct Workspace {
    pub root: TempDir,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    /// Create a parent repository with an empty submodule registry
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory");
        init_git_repo(root.path()).expect("Failed to init parent repo");
        fs::write(root.path().join(".gitmodules"), "").expect("Failed to write .gitmodules");
        Self { root }
    }

    /// Get the workspace root path
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Register and create a module: a nested git repository with one
    /// commit, declared in `.gitmodules` under `name` at path `name`
    pub fn add_module(&self, name: &str) -> PathBuf {
        self.register_module(name);
        let module_path = self.path().join(name);
        init_git_repo(&module_path).expect("Failed to init module repo");
        commit_all(&module_path, "Initial commit").expect("Failed to commit");
        module_path
    }

    /// Declare a module in `.gitmodules` without creating its directory
    pub fn register_module(&self, name: &str) {
        let gitmodules = self.path().join(".gitmodules");
        let mut content = fs::read_to_string(&gitmodules).unwrap_or_default();
        content.push_str(&format!(
            "[submodule \"{name}\"]\n\tpath = {name}\n\turl = ./{name}\n"
        ));
        fs::write(&gitmodules, content).expect("Failed to write .gitmodules");
    }
}

/// Initialize a git repository with basic configuration and a `main`
/// default branch
pub fn init_git_repo(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)?;

    Command::new("git")
        .args(["init", "-b", "main"])
        .current_dir(path)
        .output()?;
    Command::new("git")
        .args(["config", "user.name", "Test User"])
        .current_dir(path)
        .output()?;
    Command::new("git")
        .args(["config", "user.email", "test@example.com"])
        .current_dir(path)
        .output()?;

    Ok(())
}

/// Stage everything and commit
pub fn commit_all(path: &Path, message: &str) -> std::io::Result<()> {
    fs::write(path.join("README.md"), format!("# {message}"))?;
    Command::new("git")
        .args(["add", "."])
        .current_dir(path)
        .output()?;
    Command::new("git")
        .args(["commit", "-m", message])
        .current_dir(path)
        .output()?;
    Ok(())
}

/// Leave an uncommitted file behind so the working tree reads dirty
pub fn make_dirty(path: &Path) {
    fs::write(path.join("scratch.txt"), "work in progress").expect("Failed to dirty repo");
}

/// Detach HEAD at the current commit
pub fn detach_head(path: &Path) {
    Command::new("git")
        .args(["checkout", "--detach"])
        .current_dir(path)
        .output()
        .expect("Failed to detach HEAD");
}

/// Register `url` as the module's origin remote without creating it
pub fn set_origin_url(path: &Path, url: &str) {
    Command::new("git")
        .args(["remote", "add", "origin", url])
        .current_dir(path)
        .output()
        .expect("Failed to add origin");
}

/// Restricts PATH to a directory containing only git, hiding any
/// hosting CLIs; the previous PATH is restored on drop
pub struct PathGuard {
    original: std::ffi::OsString,
}

impl PathGuard {
    pub fn git_only(bin_dir: &Path) -> Self {
        let git = which::which("git").expect("git not found on PATH");
        std::os::unix::fs::symlink(git, bin_dir.join("git")).expect("Failed to link git");

        let original = std::env::var_os("PATH").unwrap_or_default();
        // PATH is process-global; tests using this guard are #[serial].
        unsafe { std::env::set_var("PATH", bin_dir) };
        Self { original }
    }
}

impl Drop for PathGuard {
    fn drop(&mut self) {
        unsafe { std::env::set_var("PATH", &self.original) };
    }
}

/// Create a bare repository and register it as `origin` of `path`
pub fn add_bare_origin(path: &Path, bare_root: &Path) {
    Command::new("git")
        .args(["init", "--bare"])
        .current_dir(bare_root)
        .output()
        .expect("Failed to init bare repo");
    Command::new("git")
        .args(["remote", "add", "origin", bare_root.to_str().unwrap()])
        .current_dir(path)
        .output()
        .expect("Failed to add origin");
}

/// Current branch as reported by git itself, for assertions
pub fn git_current_branch(path: &Path) -> String {
    let output = Command::new("git")
        .args(["rev-parse", "--abbrev-ref", "HEAD"])
        .current_dir(path)
        .output()
        .expect("Failed to run git rev-parse");
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Number of HEAD reflog entries, used to assert zero-mutation paths
pub fn reflog_len(path: &Path) -> usize {
    let output = Command::new("git")
        .args(["reflog"])
        .current_dir(path)
        .output()
        .expect("Failed to run git reflog");
    String::from_utf8_lossy(&output.stdout).lines().count()
}

/// Paths currently recorded in the index at `path`
pub fn staged_paths(path: &Path) -> Vec<String> {
    let output = Command::new("git")
        .args(["ls-files", "--cached"])
        .current_dir(path)
        .output()
        .expect("Failed to run git ls-files");
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

/// Run the submods CLI with given arguments via cargo
pub fn run_cli(args: &[&str]) -> CliOutput {
    let mut cmd = Command::new("cargo");
    cmd.args(["run", "--quiet", "--"]);
    cmd.args(args);

    let output = cmd.output().expect("Failed to execute cargo run");

    CliOutput {
        status: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
