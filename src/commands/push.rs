//! Push command implementation

use super::{Command, CommandContext};
use crate::git::{changed_submodules, current_branch, push_branch};
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

/// Push command for publishing feature branches in dirty submodules
pub struct PushCommand {
    /// Remote to push to
    pub remote: String,
    /// Set upstream tracking when pushing (`git push -u`)
    pub set_upstream: bool,
}

#[async_trait]
impl Command for PushCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let logger = context.logger();
        let modules = changed_submodules(&context.selected_modules());

        if modules.is_empty() {
            println!("{}", "No dirty submodules detected; nothing to push.".yellow());
            return Ok(());
        }

        for module in &modules {
            // Pushing a detached module is undefined; fail the whole
            // run before the push subprocess is ever invoked.
            let Some(branch) = current_branch(&module.path) else {
                anyhow::bail!(
                    "Submodule {} is in a detached HEAD state; cannot push without a branch.",
                    module.name
                );
            };

            logger.debug(&format!(
                "Pushing {branch} from {} to {}",
                module.name, self.remote
            ));
            push_branch(&module.path, &branch, &self.remote, self.set_upstream)?;
            logger.success(module, &format!("Pushed to {}/{}", self.remote, branch));
        }

        Ok(())
    }
}
