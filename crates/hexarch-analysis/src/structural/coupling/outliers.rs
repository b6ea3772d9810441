//! Efferent-coupling outliers against the graph-wide median.
//!
//! Only penalizes certainties: when the median Ce is below 1 most of the
//! repository imports little or nothing internally, so there is no baseline
//! to compare against and no outliers are reported.

use hexarch_core::constants::MIN_OUTLIER_BASELINE;
use tracing::debug;

use super::types::{CouplingOutlier, ImportGraph};

/// Packages whose Ce strictly exceeds `multiplier × median Ce`, sorted by
/// package identifier. The median covers every package, zero-Ce ones included.
pub fn coupling_outliers(graph: &ImportGraph, multiplier: f64) -> Vec<CouplingOutlier> {
    if graph.is_empty() {
        return Vec::new();
    }

    let mut ce_values: Vec<u32> = graph
        .packages()
        .map(|node| node.imports_internal().len() as u32)
        .collect();
    ce_values.sort_unstable();
    let median = median_of_sorted(&ce_values);

    if median < MIN_OUTLIER_BASELINE {
        debug!(median, "no reliable coupling baseline, skipping outliers");
        return Vec::new();
    }

    let threshold = multiplier * median;
    graph
        .packages()
        .filter_map(|node| {
            let efferent = node.imports_internal().len() as u32;
            (efferent as f64 > threshold).then(|| CouplingOutlier {
                package: node.path().to_string(),
                efferent,
                median,
            })
        })
        .collect()
}

/// Median of a sorted, non-empty slice; mean of the two middle values for even lengths.
fn median_of_sorted(sorted: &[u32]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0
    } else {
        sorted[mid] as f64
    }
}
