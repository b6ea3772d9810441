//! The analysis pipeline.

use hexarch_core::HexarchConfig;
use tracing::{info, instrument};

use super::types::ArchitectureReport;
use crate::facts::FactSnapshot;
use crate::structural::coupling::{
    average_distance, compute_martin_metrics, coupling_outliers, cycle_groups, detect_cycles,
    ImportGraph,
};
use crate::structural::layering::{classify_packages, total_violations};

/// Runs the full import-graph analysis for one snapshot.
#[derive(Debug, Clone, Default)]
pub struct ArchitectureAnalyzer {
    config: HexarchConfig,
}

impl ArchitectureAnalyzer {
    pub fn new(config: HexarchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HexarchConfig {
        &self.config
    }

    /// Build the graph once and run every query against it.
    ///
    /// A configured module root takes precedence over the snapshot's.
    #[instrument(skip(self, snapshot), fields(files = snapshot.files.len()))]
    pub fn analyze(&self, snapshot: &FactSnapshot) -> ArchitectureReport {
        let module_root = self.config.effective_module_root(&snapshot.module_root);
        let graph = ImportGraph::build(module_root, &snapshot.files);
        self.analyze_graph(&graph)
    }

    /// Run every query against a prebuilt graph.
    pub fn analyze_graph(&self, graph: &ImportGraph) -> ArchitectureReport {
        let cycles = detect_cycles(graph);
        let cycle_groups = cycle_groups(graph);
        let metrics = compute_martin_metrics(graph);
        let average_distance = average_distance(graph);
        let outliers =
            coupling_outliers(graph, self.config.coupling.effective_outlier_multiplier());
        let packages = classify_packages(graph, &self.config.architecture);
        let total_violations = total_violations(&packages);

        info!(
            module_root = graph.module_root(),
            packages = graph.node_count(),
            edges = graph.edge_count(),
            cycles = cycles.len(),
            outliers = outliers.len(),
            violations = total_violations,
            "architecture analysis complete"
        );

        ArchitectureReport {
            module_root: graph.module_root().to_string(),
            package_count: graph.node_count(),
            cycles,
            cycle_groups,
            metrics,
            average_distance,
            outliers,
            packages,
            total_violations,
        }
    }
}
