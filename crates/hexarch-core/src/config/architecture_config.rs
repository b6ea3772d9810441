//! Layering configuration: module root, layer aliases, composition roots.

use serde::{Deserialize, Serialize};

use crate::types::{ArchRole, BTreeMap};

/// Configuration for role classification and violation detection.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ArchitectureConfig {
    /// Module import-path prefix. Overrides the root reported by the extractor.
    pub module_root: Option<String>,
    /// Directory name → role name, extending or overriding the built-in hints.
    #[serde(default)]
    pub layer_aliases: BTreeMap<String, String>,
    /// Packages (exact or path prefix) allowed to wire adapters together.
    #[serde(default)]
    pub composition_roots: Vec<String>,
}

impl ArchitectureConfig {
    /// Resolve the alias table into roles, skipping entries that do not parse.
    ///
    /// Validation rejects bad entries up front, so skipping only matters for
    /// configs built in code without going through [`crate::HexarchConfig::validate`].
    pub fn resolved_aliases(&self) -> BTreeMap<String, ArchRole> {
        self.layer_aliases
            .iter()
            .filter_map(|(dir, role)| {
                let role = role.parse::<ArchRole>().ok()?;
                role.is_classified()
                    .then(|| (dir.trim().to_ascii_lowercase(), role))
            })
            .collect()
    }

    /// Returns true when `package` (full import path) is a composition root.
    ///
    /// Entries may be full import paths or paths relative to `module_root`;
    /// both match exactly or as a `/`-delimited prefix.
    pub fn is_composition_root(&self, package: &str, module_root: &str) -> bool {
        let relative = relative_to_root(package, module_root);
        self.composition_roots.iter().any(|root| {
            let root = root.trim().trim_end_matches('/');
            !root.is_empty()
                && (path_has_prefix(package, root)
                    || relative.is_some_and(|rel| path_has_prefix(rel, root)))
        })
    }
}

/// `path == prefix` or `path` starts with `prefix/`.
fn path_has_prefix(path: &str, prefix: &str) -> bool {
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}

fn relative_to_root<'a>(package: &'a str, module_root: &str) -> Option<&'a str> {
    if module_root.is_empty() {
        return None;
    }
    package.strip_prefix(module_root)?.strip_prefix('/')
}
