//! The submodule record type

use std::path::{Path, PathBuf};

/// A single registered submodule of the parent repository
///
/// Records are created once per invocation from the `.gitmodules`
/// snapshot and never mutated afterwards. The collection ordering
/// follows registry read order and is observable in status output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submodule {
    /// Unique name derived from the registry section key
    pub name: String,
    /// Absolute path to the submodule working tree
    pub path: PathBuf,
    /// Path relative to the parent repository root, as declared
    pub rel_path: PathBuf,
}

impl Submodule {
    pub fn new(name: String, path: PathBuf, rel_path: PathBuf) -> Self {
        Self {
            name,
            path,
            rel_path,
        }
    }

    /// Absolute working tree path as a displayable string
    pub fn path_display(&self) -> std::path::Display<'_> {
        self.path.display()
    }

    /// Whether the submodule directory exists on disk
    pub fn exists(&self) -> bool {
        self.path.is_dir()
    }

    /// Relative path as declared in the registry
    pub fn rel_path(&self) -> &Path {
        &self.rel_path
    }
}
