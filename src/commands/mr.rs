//! Merge request command implementation

use super::{Command, CommandContext};
use crate::git::{MrOptions, MrOutcome, changed_submodules, create_merge_request, current_branch};
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

/// Merge request command for opening MRs/PRs for feature branches in
/// dirty submodules
pub struct MrCommand {
    /// Target branch for the merge request
    pub target: String,
    /// Optional title for the merge request
    pub title: Option<String>,
    /// Mark the merge request as a draft when supported
    pub draft: bool,
}

#[async_trait]
impl Command for MrCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let logger = context.logger();
        let modules = changed_submodules(&context.selected_modules());

        if modules.is_empty() {
            println!(
                "{}",
                "No dirty submodules detected; no merge requests created.".yellow()
            );
            return Ok(());
        }

        let options = MrOptions {
            target: self.target.clone(),
            title: self.title.clone(),
            draft: self.draft,
        };

        for module in &modules {
            let Some(branch) = current_branch(&module.path) else {
                anyhow::bail!(
                    "Submodule {} does not have an active branch; create one before opening an MR.",
                    module.name
                );
            };

            logger.debug(&format!(
                "Dispatching merge request for {} ({branch} -> {})",
                module.name, self.target
            ));
            match create_merge_request(&module.path, &branch, &options)? {
                MrOutcome::Created => logger.success(
                    module,
                    &format!("Triggered merge request creation ({branch} -> {})", self.target),
                ),
                MrOutcome::Skipped => {
                    logger.warn(module, "Merge request skipped");
                }
            }
        }

        Ok(())
    }
}
