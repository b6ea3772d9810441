//! Coupling analysis types: import graph, package nodes, metrics, zones, cycles.

use hexarch_core::types::collections::{BTreeMap, BTreeSet};
use serde::{Deserialize, Serialize};

/// One package (source directory) in the import graph.
///
/// Stub nodes exist only because another package imports them: they have no
/// files and zero counts, but still take part in edges and coupling math.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PackageNode {
    pub(crate) path: String,
    pub(crate) files: BTreeSet<String>,
    pub(crate) imports_internal: BTreeSet<String>,
    pub(crate) imported_by: BTreeSet<String>,
    pub(crate) interface_count: u32,
    pub(crate) struct_count: u32,
    pub(crate) uses_std_io: bool,
    pub(crate) uses_external_io: bool,
    pub(crate) has_entry_point: bool,
    pub(crate) has_io_param: bool,
}

impl PackageNode {
    pub(crate) fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Package import path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Contributing source files. Empty for stub nodes.
    pub fn files(&self) -> &BTreeSet<String> {
        &self.files
    }

    /// Internal packages this package imports (efferent edges).
    pub fn imports_internal(&self) -> &BTreeSet<String> {
        &self.imports_internal
    }

    /// Internal packages importing this package (afferent edges).
    pub fn imported_by(&self) -> &BTreeSet<String> {
        &self.imported_by
    }

    pub fn interface_count(&self) -> u32 {
        self.interface_count
    }

    pub fn struct_count(&self) -> u32 {
        self.struct_count
    }

    /// Interfaces plus structs.
    pub fn type_count(&self) -> u32 {
        self.interface_count + self.struct_count
    }

    /// Imports a standard-library I/O package (`net/http`, `database/sql`, ...).
    pub fn uses_std_io(&self) -> bool {
        self.uses_std_io
    }

    /// Imports a known third-party I/O dependency (web framework, DB driver, RPC).
    pub fn uses_external_io(&self) -> bool {
        self.uses_external_io
    }

    /// Either kind of I/O import.
    pub fn uses_io(&self) -> bool {
        self.uses_std_io || self.uses_external_io
    }

    /// Declares a free `main` function.
    pub fn has_entry_point(&self) -> bool {
        self.has_entry_point
    }

    /// Declares a function taking an I/O-carrying parameter.
    pub fn has_io_param(&self) -> bool {
        self.has_io_param
    }

    /// Referenced only as an import target, never analyzed directly.
    pub fn is_stub(&self) -> bool {
        self.files.is_empty()
    }
}

/// The package import graph. Built once by [`super::ImportGraphBuilder`],
/// read-only afterward.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportGraph {
    pub(crate) module_root: String,
    pub(crate) nodes: BTreeMap<String, PackageNode>,
}

impl ImportGraph {
    /// Module import-path prefix the graph was built against.
    pub fn module_root(&self) -> &str {
        &self.module_root
    }

    pub fn get(&self, package: &str) -> Option<&PackageNode> {
        self.nodes.get(package)
    }

    pub fn contains(&self, package: &str) -> bool {
        self.nodes.contains_key(package)
    }

    /// Nodes in lexicographic package order.
    pub fn packages(&self) -> impl Iterator<Item = &PackageNode> {
        self.nodes.values()
    }

    /// Package identifiers in lexicographic order.
    pub fn package_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// All internal edges `(from, to)`, ordered by source then target.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.nodes.values().flat_map(|node| {
            node.imports_internal
                .iter()
                .map(move |target| (node.path.as_str(), target.as_str()))
        })
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|n| n.imports_internal.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Robert C. Martin coupling metrics for a single package.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouplingMetrics {
    /// Package import path.
    pub module: String,
    /// Efferent coupling: number of packages this package depends on.
    pub ce: u32,
    /// Afferent coupling: number of packages that depend on this package.
    pub ca: u32,
    /// Instability: Ce / (Ce + Ca). Range [0, 1]. 1 = maximally unstable.
    pub instability: f64,
    /// Abstractness: interfaces / (interfaces + structs). Range [0, 1].
    pub abstractness: f64,
    /// Distance from main sequence: |A + I - 1|. Range [0, 1]. 0 = ideal.
    pub distance: f64,
    /// Zone classification based on (I, A) coordinates.
    pub zone: ZoneClassification,
}

/// Zone classification on the (I, A) plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneClassification {
    /// Low I, low A. Concrete and heavily depended upon. Hard to change.
    ZoneOfPain,
    /// High I, high A. Abstract but nobody uses it.
    ZoneOfUselessness,
    /// Near the main sequence line (A + I ≈ 1). Balanced.
    MainSequence,
}

impl ZoneClassification {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ZoneOfPain => "zone_of_pain",
            Self::ZoneOfUselessness => "zone_of_uselessness",
            Self::MainSequence => "main_sequence",
        }
    }
}

impl std::fmt::Display for ZoneClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A package whose efferent coupling stands out against the graph median.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouplingOutlier {
    pub package: String,
    /// The package's Ce.
    pub efferent: u32,
    /// Graph-wide median Ce used as the baseline.
    pub median: f64,
}

/// A strongly connected component of more than one package.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleInfo {
    /// Packages in the component, sorted.
    pub members: Vec<String>,
    /// Intra-component edges, cheapest to break first.
    pub break_suggestions: Vec<CycleBreakSuggestion>,
}

/// A suggestion for breaking a dependency cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleBreakSuggestion {
    /// Source package of the edge to remove.
    pub from: String,
    /// Target package of the edge to remove.
    pub to: String,
    /// Estimated impact of removing this edge (lower = easier to break).
    pub impact_score: f64,
}
