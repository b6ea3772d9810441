//! Graph-derived role signals. Each function yields at most one signal; the
//! first matching rule wins.

use hexarch_core::ArchRole;

use super::types::RoleSignal;
use crate::structural::coupling::PackageNode;

/// Evidence from what the package imports and declares.
pub fn import_shape_signal(node: &PackageNode) -> Option<RoleSignal> {
    if node.uses_io() {
        return Some(RoleSignal::new(ArchRole::Adapter, 0.70));
    }
    if node.interface_count() > 0 {
        let confidence = if node.imports_internal().is_empty() { 0.65 } else { 0.55 };
        return Some(RoleSignal::new(ArchRole::Core, confidence));
    }
    if !node.has_io_param() && node.type_count() > 0 && !node.imported_by().is_empty() {
        return Some(RoleSignal::new(ArchRole::Core, 0.55));
    }
    None
}

/// Evidence from entry points, function signatures and type mix.
pub fn structural_signal(node: &PackageNode) -> Option<RoleSignal> {
    if node.has_entry_point() {
        return Some(RoleSignal::new(ArchRole::EntryPoint, 0.95));
    }
    if node.has_io_param() {
        return Some(RoleSignal::new(ArchRole::Adapter, 0.75));
    }
    let types = node.type_count();
    if types > 0 && node.interface_count() * 2 > types {
        return Some(RoleSignal::new(ArchRole::Ports, 0.70));
    }
    if node.imported_by().len() >= 2 && types > 0 && !node.uses_io() {
        return Some(RoleSignal::new(ArchRole::Core, 0.60));
    }
    None
}
