//! Command implementations using the command pattern

pub mod base;
pub mod branch;
pub mod mr;
pub mod push;
pub mod status;
pub mod update_parent;
pub mod validators;

pub use base::{Command, CommandContext};
pub use branch::BranchCommand;
pub use mr::MrCommand;
pub use push::PushCommand;
pub use status::StatusCommand;
pub use update_parent::UpdateParentCommand;
