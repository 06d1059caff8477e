//! Submodule pointer staging in the parent repository

use super::common::git_checked;
use crate::registry::Submodule;
use anyhow::{Context, Result};
use std::path::Path;

/// Stage `module`'s declared path in the parent index at `root`
///
/// This records the submodule's current commit pointer. The commit is
/// valid even on a detached HEAD, so no branch check is performed. A
/// staging failure is a real index problem and must surface.
pub fn stage_submodule(root: &Path, module: &Submodule) -> Result<()> {
    let rel = module
        .rel_path()
        .to_str()
        .with_context(|| format!("Submodule path for {} is not valid UTF-8", module.name))?;

    git_checked(root, &["add", rel])
        .with_context(|| format!("Failed to stage submodule {}", module.name))?;

    Ok(())
}
