//! Feature-branch reconciliation and publishing

use super::common::{git_checked, git_output, try_git};
use super::status::{current_branch, status_lines};
use anyhow::Result;
use std::path::Path;

/// Check whether `branch` resolves to an existing ref at `path`
fn branch_ref_exists(path: &Path, branch: &str) -> bool {
    match git_output(path, &["rev-parse", "--verify", "--quiet", branch]) {
        Ok(output) => output.status.success(),
        Err(_) => false,
    }
}

/// Ensure `branch` exists and is checked out in the repository at `path`
///
/// Idempotent: a module already on `branch` is left untouched. An
/// existing ref of that name is checked out as-is, without any base
/// bootstrapping. Otherwise, when a `base` branch was supplied and the
/// working tree is clean, the base is fetched, checked out and pulled
/// on a best-effort basis before the new branch is created; none of
/// those three steps can fail the operation, since no uncommitted work
/// is at risk on a clean tree.
///
/// On success HEAD resolves to `branch`.
pub fn ensure_branch(
    path: &Path,
    branch: &str,
    base: Option<&str>,
    remote: &str,
    force: bool,
) -> Result<String> {
    if current_branch(path).as_deref() == Some(branch) {
        return Ok(branch.to_string());
    }

    if branch_ref_exists(path, branch) {
        git_checked(path, &["checkout", branch])?;
        return Ok(branch.to_string());
    }

    if let Some(base) = base
        && status_lines(path).is_empty()
    {
        let _ = try_git(path, &["fetch", remote, base]);
        let _ = try_git(path, &["checkout", base]);
        let _ = try_git(path, &["pull", remote, base]);
    }

    let create_flag = if force { "-B" } else { "-b" };
    git_checked(path, &["checkout", create_flag, branch])?;

    Ok(branch.to_string())
}

/// Push `branch` to `remote`, optionally establishing upstream tracking
pub fn push_branch(path: &Path, branch: &str, remote: &str, set_upstream: bool) -> Result<()> {
    if set_upstream {
        git_checked(path, &["push", "-u", remote, branch])?;
    } else {
        git_checked(path, &["push", remote, branch])?;
    }
    Ok(())
}
