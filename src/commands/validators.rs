//! Command argument validation utilities
//!
//! Validation runs once at startup, before any module subprocess, so
//! an invocation that was doomed to fail leaves no partial side
//! effects behind.

use crate::registry::Submodule;
use anyhow::Result;

/// Normalize raw `--modules` input into a token list
///
/// Accepts comma- or colon-delimited names; empty tokens are dropped.
/// Multiple occurrences of the flag are merged by the caller before
/// this runs on the joined input.
pub fn parse_module_list(raw: &str) -> Vec<String> {
    raw.split([',', ':'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Ensure every explicitly named submodule exists in the registry
///
/// Fails with a descriptive error naming the offending token(s).
pub fn validate_selection(submodules: &[Submodule], names: &[String]) -> Result<()> {
    let missing: Vec<&str> = names
        .iter()
        .filter(|name| !submodules.iter().any(|m| &m.name == *name))
        .map(String::as_str)
        .collect();

    if !missing.is_empty() {
        anyhow::bail!("Unknown submodule(s): {}", missing.join(", "));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn module(name: &str) -> Submodule {
        Submodule::new(
            name.to_string(),
            PathBuf::from(format!("/repo/{name}")),
            PathBuf::from(name),
        )
    }

    #[test]
    fn test_parse_module_list_commas() {
        assert_eq!(parse_module_list("web,api"), vec!["web", "api"]);
    }

    #[test]
    fn test_parse_module_list_colons() {
        assert_eq!(parse_module_list("web:api:docs"), vec!["web", "api", "docs"]);
    }

    #[test]
    fn test_parse_module_list_mixed_and_messy() {
        assert_eq!(parse_module_list(" web ,,api: ,docs"), vec!["web", "api", "docs"]);
    }

    #[test]
    fn test_parse_module_list_empty_input() {
        assert!(parse_module_list("").is_empty());
        assert!(parse_module_list(",,::").is_empty());
    }

    #[test]
    fn test_validate_selection_accepts_known_names() {
        let registry = vec![module("web"), module("api")];
        let names = vec!["api".to_string()];

        assert!(validate_selection(&registry, &names).is_ok());
    }

    #[test]
    fn test_validate_selection_names_offending_tokens() {
        let registry = vec![module("web")];
        let names = vec!["web".to_string(), "z".to_string()];

        let err = validate_selection(&registry, &names).unwrap_err();
        assert!(err.to_string().contains("Unknown submodule(s): z"));
    }

    #[test]
    fn test_validate_selection_lists_all_missing() {
        let registry = vec![module("web")];
        let names = vec!["a".to_string(), "b".to_string()];

        let err = validate_selection(&registry, &names).unwrap_err();
        assert!(err.to_string().contains("a, b"));
    }
}
