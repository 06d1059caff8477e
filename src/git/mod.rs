//! Git operations using system git commands for maximum compatibility
//!
//! This module is organized into sub-modules for the different workflow
//! steps:
//!
//! - [`status`]: working-tree inspection
//!   - `status_lines()` - porcelain status of one module
//!   - `current_branch()` - branch name, `None` when detached
//!   - `changed_submodules()` - dirty subset of a selection
//!
//! - [`branch`]: feature-branch reconciliation
//!   - `ensure_branch()` - idempotent create-or-checkout
//!   - `push_branch()` - publish a branch to a remote
//!
//! - [`merge_request`]: hosting-CLI dispatch (`glab`/`gh`)
//!
//! - [`stage`]: submodule pointer staging in the parent index
//!
//! - [`common`]: shared subprocess helpers and the `Logger`

pub mod branch;
pub mod common;
pub mod merge_request;
pub mod stage;
pub mod status;

pub use branch::{ensure_branch, push_branch};
pub use common::{Logger, set_verbose};
pub use merge_request::{MrOptions, MrOutcome, MrTool, create_merge_request, detect_mr_tool};
pub use stage::stage_submodule;
pub use status::{changed_submodules, current_branch, has_changes, status_lines};
