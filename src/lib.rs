//! Submods - A CLI tool for coordinating feature work across git submodules

pub mod commands;
pub mod constants;
pub mod git;
pub mod registry;
pub mod utils;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Command, CommandContext};
pub use registry::Submodule;
