//! Base types and traits for the command pattern

use crate::git::Logger;
use crate::registry::Submodule;
use crate::utils::filters;
use anyhow::Result;
use std::path::PathBuf;

/// Context passed to all commands containing shared configuration and
/// the registry snapshot
///
/// Built once at startup and read-only thereafter.
#[derive(Clone)]
pub struct CommandContext {
    /// Absolute path to the parent repository root
    pub root: PathBuf,
    /// The registered submodules, in registry order
    pub submodules: Vec<Submodule>,
    /// Optional explicit submodule name selection (validated at startup)
    pub modules: Option<Vec<String>>,
    /// Include clean submodules in status output
    pub include_clean: bool,
    /// Enable debug logging
    pub verbose: bool,
}

impl CommandContext {
    /// The selected working set, in registry order
    pub fn selected_modules(&self) -> Vec<Submodule> {
        filters::select_modules(&self.submodules, self.modules.as_deref())
    }

    /// A logger honoring the context's verbosity flag
    pub fn logger(&self) -> Logger {
        Logger::new(self.verbose)
    }
}

/// Trait that all commands must implement
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command with the given context
    async fn execute(&self, context: &CommandContext) -> Result<()>;
}
