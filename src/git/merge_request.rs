//! Merge/pull request dispatch through an installed hosting CLI
//!
//! The tool choice is a pure function of the module's origin URL and
//! which CLIs are present on PATH. Hosting-CLI flakiness must never
//! abort an otherwise-successful branch/push workflow, so a failed or
//! impossible invocation is reported as a skip instead of an error.

use super::common::{debug_exec, git_checked};
use crate::constants;
use anyhow::Result;
use std::path::Path;
use std::process::Command;

/// A supported hosting CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MrTool {
    /// The GitLab CLI (`glab`)
    Glab,
    /// The GitHub CLI (`gh`)
    Gh,
}

impl MrTool {
    pub fn binary(self) -> &'static str {
        match self {
            MrTool::Glab => constants::mr::GITLAB_CLI,
            MrTool::Gh => constants::mr::GITHUB_CLI,
        }
    }
}

/// Result of one merge-request dispatch attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MrOutcome {
    /// The hosting CLI was invoked and exited successfully
    Created,
    /// No tool available or the tool failed; the module was skipped
    Skipped,
}

/// User-supplied options for merge-request creation
#[derive(Debug, Clone)]
pub struct MrOptions {
    pub target: String,
    pub title: Option<String>,
    pub draft: bool,
}

/// Determine which hosting CLI to use for `remote_url`
///
/// GitLab-looking URLs prefer `glab`, GitHub-looking ones (including
/// the generic `.git` transport suffix) prefer `gh`; with no match,
/// whichever tool is installed wins, `glab` first.
pub fn detect_mr_tool(remote_url: &str) -> Option<MrTool> {
    detect_mr_tool_with(
        remote_url,
        which::which(constants::mr::GITLAB_CLI).is_ok(),
        which::which(constants::mr::GITHUB_CLI).is_ok(),
    )
}

/// Detection logic, split out so the URL rules are testable without
/// touching PATH
fn detect_mr_tool_with(remote_url: &str, glab_installed: bool, gh_installed: bool) -> Option<MrTool> {
    let url = remote_url.to_lowercase();

    if url.contains("gitlab") && glab_installed {
        return Some(MrTool::Glab);
    }
    if (url.contains("github") || url.ends_with(".git")) && gh_installed {
        return Some(MrTool::Gh);
    }
    if glab_installed {
        return Some(MrTool::Glab);
    }
    if gh_installed {
        return Some(MrTool::Gh);
    }
    None
}

/// Read the module's registered origin URL
fn origin_url(path: &Path) -> Result<String> {
    let output = git_checked(path, &["remote", "get-url", "origin"])?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// The suggestion printed when no hosting CLI is available, falling
/// back to the branch name as title
fn manual_suggestion(title: Option<&str>, branch: &str) -> String {
    format!("Suggested title: {}", title.unwrap_or(branch))
}

/// Open a merge/pull request for `branch` in the module at `path`
///
/// The hosting CLI runs with inherited stdio so it can print its own
/// progress and links. When no tool is available, a manual-creation
/// suggestion (falling back to the branch name as title) is printed
/// and the module is skipped.
pub fn create_merge_request(path: &Path, branch: &str, options: &MrOptions) -> Result<MrOutcome> {
    let remote_url = origin_url(path)?;

    let Some(tool) = detect_mr_tool(&remote_url) else {
        eprintln!("No supported CLI (glab or gh) detected. Please create the merge request manually.");
        println!("{}", manual_suggestion(options.title.as_deref(), branch));
        return Ok(MrOutcome::Skipped);
    };

    let mut args: Vec<&str> = match tool {
        MrTool::Glab => vec![
            "mr",
            "create",
            "--source-branch",
            branch,
            "--target-branch",
            &options.target,
        ],
        MrTool::Gh => vec!["pr", "create", "--head", branch, "--base", &options.target],
    };
    if let Some(title) = &options.title {
        args.push("--title");
        args.push(title);
    }
    if options.draft {
        args.push("--draft");
    }

    debug_exec(tool.binary(), &args);
    let status = Command::new(tool.binary())
        .args(&args)
        .current_dir(path)
        .status();
    match status {
        Ok(status) if status.success() => Ok(MrOutcome::Created),
        Ok(status) => {
            eprintln!(
                "{} exited with status {}; skipping this module.",
                tool.binary(),
                status.code().unwrap_or(-1)
            );
            Ok(MrOutcome::Skipped)
        }
        Err(err) => {
            eprintln!("Failed to launch {}: {}; skipping this module.", tool.binary(), err);
            Ok(MrOutcome::Skipped)
        }
    }
}
