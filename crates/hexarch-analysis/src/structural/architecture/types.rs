//! Architecture report types.

use hexarch_core::types::collections::BTreeMap;
use serde::Serialize;

use crate::structural::coupling::{CouplingMetrics, CouplingOutlier, CycleInfo};
use crate::structural::layering::AnnotatedPackage;

/// Everything one analysis run produces. All collections are ordered by
/// package identifier, so identical input serializes identically.
#[derive(Debug, Clone, Serialize)]
pub struct ArchitectureReport {
    pub module_root: String,
    pub package_count: usize,
    /// Simple cycles, each rotated to start at its smallest member.
    pub cycles: Vec<Vec<String>>,
    pub cycle_groups: Vec<CycleInfo>,
    pub metrics: Vec<CouplingMetrics>,
    /// Mean distance from the main sequence over packages declaring types.
    pub average_distance: f64,
    pub outliers: Vec<CouplingOutlier>,
    pub packages: BTreeMap<String, AnnotatedPackage>,
    pub total_violations: usize,
}

impl ArchitectureReport {
    pub fn is_empty(&self) -> bool {
        self.package_count == 0
    }

    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    /// Packages with at least one violation.
    pub fn violating_packages(&self) -> impl Iterator<Item = &AnnotatedPackage> {
        self.packages.values().filter(|p| p.has_violations())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
