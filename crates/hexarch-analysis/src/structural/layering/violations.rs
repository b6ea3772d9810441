//! Violation detection over the classified graph.

use hexarch_core::config::ArchitectureConfig;
use hexarch_core::types::collections::{BTreeMap, BTreeSet};
use hexarch_core::ArchRole;
use tracing::debug;

use super::adapter_layout::{adapter_direction, adapter_subtree, AdapterDirection};
use super::types::{AnnotatedPackage, PackageViolation, ViolationKind};
use crate::structural::coupling::{detect_cycles, ImportGraph};
use crate::structural::roles::{RoleAssignment, RoleClassifier};

/// Classify every package and attach its violations.
///
/// Roles are resolved for all packages first, then each internal edge is
/// checked against the layering rules. Cycle members get one extra
/// violation each.
pub fn classify_packages(
    graph: &ImportGraph,
    config: &ArchitectureConfig,
) -> BTreeMap<String, AnnotatedPackage> {
    let module_root = graph.module_root();
    let classifier = RoleClassifier::new(config);

    let roles: BTreeMap<&str, RoleAssignment> = graph
        .packages()
        .map(|node| (node.path(), classifier.classify(node.path(), module_root, node)))
        .collect();

    let in_cycle: BTreeSet<String> = detect_cycles(graph).into_iter().flatten().collect();

    let mut annotated = BTreeMap::new();
    for node in graph.packages() {
        let source = node.path();
        let assignment = roles
            .get(source)
            .copied()
            .unwrap_or_else(RoleAssignment::unclassified);

        let mut violations: Vec<PackageViolation> = node
            .imports_internal()
            .iter()
            .filter_map(|target| {
                let target_role = roles.get(target.as_str())?.role;
                edge_violation(source, assignment.role, target, target_role, module_root, config)
            })
            .collect();
        if in_cycle.contains(source) {
            violations.push(PackageViolation::in_cycle());
        }

        annotated.insert(
            source.to_string(),
            AnnotatedPackage {
                node: node.clone(),
                role: assignment.role,
                confidence: assignment.confidence,
                violations,
            },
        );
    }

    debug!(
        packages = annotated.len(),
        cycle_members = in_cycle.len(),
        violations = total_violations(&annotated),
        "packages classified"
    );
    annotated
}

/// Check a single `source → target` import. Unclassified endpoints never
/// produce a violation.
pub fn edge_violation(
    source: &str,
    source_role: ArchRole,
    target: &str,
    target_role: ArchRole,
    module_root: &str,
    config: &ArchitectureConfig,
) -> Option<PackageViolation> {
    match (source_role, target_role) {
        (ArchRole::Core | ArchRole::Ports, ArchRole::Adapter)
        | (ArchRole::Orchestrator, ArchRole::Adapter) => Some(PackageViolation::new(
            ViolationKind::ImportsAdapter,
            Some(target),
            "imports adapter",
        )),
        (ArchRole::Core | ArchRole::Ports, ArchRole::Orchestrator) => Some(PackageViolation::new(
            ViolationKind::ImportsApplication,
            Some(target),
            "imports application",
        )),
        (ArchRole::Adapter, ArchRole::Adapter) => {
            cross_adapter_violation(source, target, module_root, config)
        }
        _ => None,
    }
}

fn cross_adapter_violation(
    source: &str,
    target: &str,
    module_root: &str,
    config: &ArchitectureConfig,
) -> Option<PackageViolation> {
    if source == target {
        return None;
    }
    let source_rel = strip_root(source, module_root);
    let target_rel = strip_root(target, module_root);
    if adapter_subtree(source_rel) == adapter_subtree(target_rel) {
        return None;
    }
    if adapter_direction(source_rel) == Some(AdapterDirection::Inbound)
        && adapter_direction(target_rel) == Some(AdapterDirection::Outbound)
    {
        return None;
    }
    if config.is_composition_root(source, module_root) {
        return None;
    }

    let short_name = target.rsplit('/').next().unwrap_or(target);
    Some(PackageViolation::new(
        ViolationKind::CrossAdapter,
        Some(target),
        format!("imports {short_name}"),
    ))
}

fn strip_root<'a>(package: &'a str, module_root: &str) -> &'a str {
    if module_root.is_empty() {
        return package;
    }
    package
        .strip_prefix(module_root)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(package)
}

/// Sum of all violation lists.
pub fn total_violations(packages: &BTreeMap<String, AnnotatedPackage>) -> usize {
    packages.values().map(|p| p.violations.len()).sum()
}
