//! Per-package role classification.

use hexarch_core::config::ArchitectureConfig;
use hexarch_core::constants::{ENTRY_POINT_OVERRIDE_CONFIDENCE, PORTS_OVERRIDE_CONFIDENCE};
use hexarch_core::types::collections::SmallVec3;
use hexarch_core::ArchRole;

use super::fusion::fuse_signals;
use super::naming::NamingTable;
use super::signals::{import_shape_signal, structural_signal};
use super::types::{RoleAssignment, RoleSignal};
use crate::structural::coupling::PackageNode;

/// Classifies packages against a fixed naming table.
#[derive(Debug, Clone, Default)]
pub struct RoleClassifier {
    naming: NamingTable,
}

impl RoleClassifier {
    pub fn new(config: &ArchitectureConfig) -> Self {
        Self {
            naming: NamingTable::from_config(config),
        }
    }

    /// Resolve the role of `package` under `module_root`.
    ///
    /// `cmd` packages and the module root itself are entry points, `ports`
    /// packages are ports. Everything else goes through signal fusion.
    pub fn classify(&self, package: &str, module_root: &str, node: &PackageNode) -> RoleAssignment {
        if let Some(assignment) = path_override(package, module_root) {
            return assignment;
        }

        let relative = relative_path(package, module_root);
        let signals: SmallVec3<RoleSignal> = [
            self.naming.signal(relative),
            import_shape_signal(node),
            structural_signal(node),
        ]
        .into_iter()
        .flatten()
        .collect();

        fuse_signals(&signals)
    }
}

fn path_override(package: &str, module_root: &str) -> Option<RoleAssignment> {
    if !module_root.is_empty() && package == module_root {
        return Some(RoleAssignment::new(ArchRole::EntryPoint, ENTRY_POINT_OVERRIDE_CONFIDENCE));
    }
    let relative = relative_path(package, module_root);
    if relative.split('/').any(|segment| segment == "cmd") {
        return Some(RoleAssignment::new(ArchRole::EntryPoint, ENTRY_POINT_OVERRIDE_CONFIDENCE));
    }
    if relative.split('/').any(|segment| segment == "ports") {
        return Some(RoleAssignment::new(ArchRole::Ports, PORTS_OVERRIDE_CONFIDENCE));
    }
    None
}

/// `package` with the module root stripped; unchanged if it lives elsewhere.
fn relative_path<'a>(package: &'a str, module_root: &str) -> &'a str {
    if module_root.is_empty() {
        return package;
    }
    package
        .strip_prefix(module_root)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(package)
}
