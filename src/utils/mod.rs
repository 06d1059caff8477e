//! Utility modules

pub mod filters;

pub use filters::select_modules;
