//! Central constants for the submods application

/// Default values for Git operations
pub mod git {
    /// Name of the submodule registry file in the parent repository root
    pub const GITMODULES_FILE: &str = ".gitmodules";

    /// Default remote used for fetch/push operations
    pub const DEFAULT_REMOTE: &str = "origin";

    /// Sentinel printed by `git rev-parse --abbrev-ref HEAD` when detached
    pub const DETACHED_SENTINEL: &str = "HEAD";
}

/// Default values for merge/pull request creation
pub mod mr {
    /// Default target branch for merge requests
    pub const DEFAULT_TARGET: &str = "main";

    /// GitLab CLI binary name
    pub const GITLAB_CLI: &str = "glab";

    /// GitHub CLI binary name
    pub const GITHUB_CLI: &str = "gh";
}
