//! Layering types.

use hexarch_core::ArchRole;
use serde::Serialize;

use crate::structural::coupling::PackageNode;

/// Which rule an import broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Core, ports or the application layer importing an adapter.
    ImportsAdapter,
    /// Core or ports importing the application layer.
    ImportsApplication,
    /// One adapter importing an unrelated adapter.
    CrossAdapter,
    /// The package sits on an import cycle.
    ImportCycle,
}

impl ViolationKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ImportsAdapter => "imports_adapter",
            Self::ImportsApplication => "imports_application",
            Self::CrossAdapter => "cross_adapter",
            Self::ImportCycle => "import_cycle",
        }
    }
}

/// One rule violation attributed to a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageViolation {
    pub kind: ViolationKind,
    /// Offending import target. `None` for cycle membership.
    pub target: Option<String>,
    /// Short human-readable reason, e.g. "imports adapter".
    pub reason: String,
}

impl PackageViolation {
    pub fn new(kind: ViolationKind, target: Option<&str>, reason: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.map(str::to_string),
            reason: reason.into(),
        }
    }

    pub fn in_cycle() -> Self {
        Self::new(ViolationKind::ImportCycle, None, "in import cycle")
    }
}

/// A package node with its resolved role and any violations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedPackage {
    pub node: PackageNode,
    pub role: ArchRole,
    pub confidence: f64,
    pub violations: Vec<PackageViolation>,
}

impl AnnotatedPackage {
    pub fn path(&self) -> &str {
        self.node.path()
    }

    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }
}
