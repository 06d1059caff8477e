//! Status command implementation

use super::{Command, CommandContext};
use crate::git::{changed_submodules, status_lines};
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

/// Status command for showing which submodules have local changes
pub struct StatusCommand;

#[async_trait]
impl Command for StatusCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let logger = context.logger();
        let selected = context.selected_modules();
        logger.debug(&format!(
            "Checking {} submodule(s) for local changes",
            selected.len()
        ));

        let modules = if context.include_clean {
            selected
        } else {
            changed_submodules(&selected)
        };

        if modules.is_empty() {
            println!("{}", "No dirty submodules detected.".yellow());
            return Ok(());
        }

        for module in &modules {
            let lines = status_lines(&module.path);
            println!("{} ({}):", module.name.cyan().bold(), module.path_display());
            if lines.is_empty() {
                println!("  {}", "clean".green());
            } else {
                for line in &lines {
                    println!("  {line}");
                }
            }
        }

        Ok(())
    }
}
