//! Coupling Analysis: package import graph, Robert C. Martin metrics, cycles.
//!
//! Computes Ce (efferent), Ca (afferent), I (instability), A (abstractness),
//! D (distance from main sequence) per package. Detects simple import cycles
//! with a deterministic DFS, groups them into strongly connected components
//! via Tarjan's SCC, and flags packages with outlying efferent coupling.

pub mod types;
pub mod import_graph;
pub mod io_signals;
pub mod martin_metrics;
pub mod outliers;
pub mod cycle_detection;
pub mod scc;
pub mod zones;

pub use types::*;
pub use import_graph::ImportGraphBuilder;
pub use martin_metrics::{
    abstractness, afferent_coupling, average_distance, compute_martin_metrics,
    distance_from_main_sequence, efferent_coupling, instability, main_sequence_distance,
};
pub use outliers::coupling_outliers;
pub use cycle_detection::{detect_cycles, detect_cycles_bounded};
pub use scc::cycle_groups;
pub use zones::classify_zone;
