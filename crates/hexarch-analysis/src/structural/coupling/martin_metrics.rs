//! Robert C. Martin coupling metrics computation.
//!
//! Ce (efferent), Ca (afferent), I (instability), A (abstractness),
//! D (distance from main sequence). Every query is total: unknown packages
//! and degenerate denominators yield 0.

use super::types::{CouplingMetrics, ImportGraph};
use super::zones::classify_zone;

/// Ce: number of distinct internal packages `package` imports.
pub fn efferent_coupling(graph: &ImportGraph, package: &str) -> u32 {
    graph
        .get(package)
        .map_or(0, |node| node.imports_internal().len() as u32)
}

/// Ca: number of distinct internal packages importing `package`.
pub fn afferent_coupling(graph: &ImportGraph, package: &str) -> u32 {
    graph
        .get(package)
        .map_or(0, |node| node.imported_by().len() as u32)
}

/// I = Ce / (Ce + Ca). Isolated and unknown packages are maximally stable (0).
pub fn instability(graph: &ImportGraph, package: &str) -> f64 {
    let ce = efferent_coupling(graph, package);
    let ca = afferent_coupling(graph, package);
    if ce + ca == 0 {
        0.0
    } else {
        ce as f64 / (ce + ca) as f64
    }
}

/// A = interfaces / (interfaces + structs), 0 if the package declares no types.
pub fn abstractness(graph: &ImportGraph, package: &str) -> f64 {
    let Some(node) = graph.get(package) else {
        return 0.0;
    };
    let total = node.type_count();
    if total == 0 {
        0.0
    } else {
        node.interface_count() as f64 / total as f64
    }
}

/// D = |A + I - 1| for a point on the (I, A) plane.
pub fn main_sequence_distance(instability: f64, abstractness: f64) -> f64 {
    (abstractness + instability - 1.0).abs()
}

/// D for a package.
pub fn distance_from_main_sequence(graph: &ImportGraph, package: &str) -> f64 {
    main_sequence_distance(instability(graph, package), abstractness(graph, package))
}

/// Mean D over packages declaring at least one type; 0 when there are none.
pub fn average_distance(graph: &ImportGraph) -> f64 {
    let distances: Vec<f64> = graph
        .packages()
        .filter(|node| node.type_count() > 0)
        .map(|node| distance_from_main_sequence(graph, node.path()))
        .collect();
    if distances.is_empty() {
        0.0
    } else {
        distances.iter().sum::<f64>() / distances.len() as f64
    }
}

/// Compute Martin metrics for every package, in package order.
pub fn compute_martin_metrics(graph: &ImportGraph) -> Vec<CouplingMetrics> {
    graph
        .package_ids()
        .map(|module| {
            let instability = instability(graph, module);
            let abstractness = abstractness(graph, module);
            CouplingMetrics {
                module: module.to_string(),
                ce: efferent_coupling(graph, module),
                ca: afferent_coupling(graph, module),
                instability,
                abstractness,
                distance: main_sequence_distance(instability, abstractness),
                zone: classify_zone(instability, abstractness),
            }
        })
        .collect()
}
