//! Submodule selection filtering

use crate::registry::Submodule;

/// Narrow the registry to the modules named in `names`
///
/// Registry order is authoritative: the order of the explicit name
/// list never affects iteration order. `None` or an empty list selects
/// everything. Unknown names are expected to have been rejected by the
/// command validators before this runs.
pub fn select_modules(submodules: &[Submodule], names: Option<&[String]>) -> Vec<Submodule> {
    match names {
        Some(names) if !names.is_empty() => submodules
            .iter()
            .filter(|module| names.contains(&module.name))
            .cloned()
            .collect(),
        _ => submodules.to_vec(),
    }
}
