//! Branch command implementation

use super::{Command, CommandContext};
use crate::git::{changed_submodules, ensure_branch};
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

/// Branch command for creating or checking out a shared feature branch
/// inside dirty submodules
pub struct BranchCommand {
    /// Name of the feature branch to ensure
    pub name: String,
    /// Optional base branch to update before creating the feature branch
    pub base: Option<String>,
    /// Remote used when fetching the base branch
    pub remote: String,
    /// Force recreate the branch if it already exists
    pub force: bool,
}

#[async_trait]
impl Command for BranchCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let logger = context.logger();
        let modules = changed_submodules(&context.selected_modules());

        if modules.is_empty() {
            println!("{}", "No dirty submodules detected; nothing to branch.".yellow());
            return Ok(());
        }

        for module in &modules {
            logger.debug(&format!(
                "Ensuring branch {} in {} ({})",
                self.name,
                module.name,
                module.path_display()
            ));
            let branch = ensure_branch(
                &module.path,
                &self.name,
                self.base.as_deref(),
                &self.remote,
                self.force,
            )?;
            logger.success(module, &format!("Checked out {branch}"));
        }

        Ok(())
    }
}
