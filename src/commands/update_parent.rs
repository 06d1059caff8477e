//! Update-parent command implementation

use super::{Command, CommandContext};
use crate::git::{changed_submodules, stage_submodule};
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

/// Update-parent command for staging updated submodule commit pointers
/// in the parent repository's index
pub struct UpdateParentCommand;

#[async_trait]
impl Command for UpdateParentCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let logger = context.logger();
        let modules = changed_submodules(&context.selected_modules());

        if modules.is_empty() {
            println!(
                "{}",
                "No dirty submodules detected; nothing to stage in the parent.".yellow()
            );
            return Ok(());
        }

        for module in &modules {
            logger.debug(&format!(
                "Staging {} in parent {}",
                module.rel_path().display(),
                context.root.display()
            ));
            stage_submodule(&context.root, module)?;
            logger.success(
                module,
                &format!("Staged updated hash ({})", module.rel_path().display()),
            );
        }

        Ok(())
    }
}
