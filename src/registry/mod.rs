//! Submodule registry management module

pub mod loader;
pub mod submodule;

pub use loader::{ensure_repo, load_submodules};
pub use submodule::Submodule;
