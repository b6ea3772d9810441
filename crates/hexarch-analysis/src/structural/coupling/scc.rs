//! Strongly connected components of the import graph.
//!
//! Every multi-package SCC contains at least one cycle; grouping them this
//! way gives one entry per tangle instead of one per simple cycle.

use hexarch_core::types::collections::FxHashMap;
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};

use super::martin_metrics::instability;
use super::types::{CycleBreakSuggestion, CycleInfo, ImportGraph};

/// Tarjan SCC over the import graph. Components of one package are dropped
/// (self-edges never exist). Members and groups are sorted.
pub fn cycle_groups(graph: &ImportGraph) -> Vec<CycleInfo> {
    let mut digraph: DiGraph<&str, ()> = DiGraph::new();
    let mut index: FxHashMap<&str, NodeIndex> = FxHashMap::default();

    for id in graph.package_ids() {
        index.insert(id, digraph.add_node(id));
    }
    for (from, to) in graph.edges() {
        if let (Some(&a), Some(&b)) = (index.get(from), index.get(to)) {
            digraph.add_edge(a, b, ());
        }
    }

    let mut groups: Vec<CycleInfo> = tarjan_scc(&digraph)
        .into_iter()
        .filter(|component| component.len() > 1)
        .map(|component| {
            let mut members: Vec<String> = component
                .iter()
                .map(|&idx| digraph[idx].to_string())
                .collect();
            members.sort();
            let break_suggestions = suggest_breaks(graph, &members);
            CycleInfo {
                members,
                break_suggestions,
            }
        })
        .collect();

    groups.sort_by(|a, b| a.members.cmp(&b.members));
    groups
}

/// Every edge inside the component, scored by `1 - I(from)`. Edges leaving a
/// stable package cost the most to cut.
fn suggest_breaks(graph: &ImportGraph, members: &[String]) -> Vec<CycleBreakSuggestion> {
    let mut suggestions = Vec::new();
    for from in members {
        let Some(node) = graph.get(from) else {
            continue;
        };
        let impact_score = 1.0 - instability(graph, from);
        for to in node.imports_internal() {
            if members.binary_search(to).is_ok() {
                suggestions.push(CycleBreakSuggestion {
                    from: from.clone(),
                    to: to.clone(),
                    impact_score,
                });
            }
        }
    }

    suggestions.sort_by(|a, b| {
        a.impact_score
            .total_cmp(&b.impact_score)
            .then_with(|| a.from.cmp(&b.from))
            .then_with(|| a.to.cmp(&b.to))
    });
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::FileFacts;
    use crate::structural::coupling::ImportGraphBuilder;

    fn graph_from(edges: &[(&str, &[&str])]) -> ImportGraph {
        let mut builder = ImportGraphBuilder::new("m");
        for (pkg, targets) in edges {
            builder.add_file(
                &format!("{pkg}/x.go"),
                &FileFacts {
                    imports: targets.iter().map(|t| format!("m/{t}")).collect(),
                    ..Default::default()
                },
            );
        }
        builder.build()
    }

    #[test]
    fn test_acyclic_graph_has_no_groups() {
        let graph = graph_from(&[("a", &["b"]), ("b", &["c"])]);
        assert!(cycle_groups(&graph).is_empty());
    }

    #[test]
    fn test_overlapping_cycles_form_one_group() {
        let graph = graph_from(&[
            ("a", &["b", "c"]),
            ("b", &["a"]),
            ("c", &["a"]),
            ("d", &["a"]),
        ]);
        let groups = cycle_groups(&graph);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].members, vec!["m/a", "m/b", "m/c"]);
        assert_eq!(groups[0].break_suggestions.len(), 4);
    }

    #[test]
    fn test_disjoint_groups_sorted() {
        let graph = graph_from(&[("y", &["z"]), ("z", &["y"]), ("a", &["b"]), ("b", &["a"])]);
        let groups = cycle_groups(&graph);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].members, vec!["m/a", "m/b"]);
        assert_eq!(groups[1].members, vec!["m/y", "m/z"]);
    }

    #[test]
    fn test_break_suggestions_ordered_by_impact() {
        // m/a: Ce=1 Ca=2 → I=1/3, impact 2/3. m/b: Ce=1 Ca=1 → I=1/2, impact 1/2.
        let graph = graph_from(&[("a", &["b"]), ("b", &["a"]), ("c", &["a"])]);
        let groups = cycle_groups(&graph);
        let suggestions = &groups[0].break_suggestions;
        assert_eq!(suggestions[0].from, "m/b");
        assert_eq!(suggestions[0].to, "m/a");
        assert!((suggestions[0].impact_score - 0.5).abs() < 1e-9);
        assert_eq!(suggestions[1].from, "m/a");
        assert!((suggestions[1].impact_score - 2.0 / 3.0).abs() < 1e-9);
    }
}
