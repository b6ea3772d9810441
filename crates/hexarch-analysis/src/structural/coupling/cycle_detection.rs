//! Simple import-cycle detection.
//!
//! Depth-first search over packages in lexicographic order with white/grey/
//! black coloring and sorted neighbor lists. A back edge to a grey package
//! closes a cycle, which is rebuilt from parent pointers, rotated so its
//! smallest member comes first, and deduplicated on that canonical form.
//!
//! The traversal keeps its own frame stack instead of recursing, so deep
//! import chains cannot overflow the call stack. A full pass takes at most
//! `nodes + edges` steps, so [`detect_cycles`] never hits its limit; callers
//! that need a hard ceiling on large graphs use [`detect_cycles_bounded`].

use hexarch_core::types::collections::{FxHashMap, FxHashSet};
use tracing::{debug, warn};

use super::types::ImportGraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Grey,
    Black,
}

struct Frame<'g> {
    node: &'g str,
    neighbors: Vec<&'g str>,
    next: usize,
}

impl<'g> Frame<'g> {
    fn enter(graph: &'g ImportGraph, node: &'g str) -> Self {
        // A package missing from the graph has no outgoing edges.
        let neighbors = graph
            .get(node)
            .map(|n| n.imports_internal().iter().map(String::as_str).collect())
            .unwrap_or_default();
        Self {
            node,
            neighbors,
            next: 0,
        }
    }
}

/// Find every simple cycle reachable by the DFS, one entry per cycle in
/// forward traversal order, canonically rotated and deduplicated.
pub fn detect_cycles(graph: &ImportGraph) -> Vec<Vec<String>> {
    detect_cycles_bounded(graph, graph.node_count() + graph.edge_count())
}

/// Like [`detect_cycles`], but stops after `max_steps` traversal steps and
/// returns the cycles found so far.
pub fn detect_cycles_bounded(graph: &ImportGraph, max_steps: usize) -> Vec<Vec<String>> {
    let mut color: FxHashMap<&str, Color> = FxHashMap::default();
    let mut parent: FxHashMap<&str, &str> = FxHashMap::default();
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut cycles: Vec<Vec<String>> = Vec::new();

    let mut steps = 0usize;

    for start in graph.package_ids() {
        if color.get(start).copied().unwrap_or(Color::White) != Color::White {
            continue;
        }
        color.insert(start, Color::Grey);
        let mut stack = vec![Frame::enter(graph, start)];

        while let Some(frame) = stack.last_mut() {
            steps += 1;
            if steps > max_steps {
                warn!(max_steps, found = cycles.len(), "cycle detection step limit reached");
                return cycles;
            }

            if frame.next == frame.neighbors.len() {
                color.insert(frame.node, Color::Black);
                stack.pop();
                continue;
            }

            let current = frame.node;
            let next = frame.neighbors[frame.next];
            frame.next += 1;

            match color.get(next).copied().unwrap_or(Color::White) {
                Color::White => {
                    color.insert(next, Color::Grey);
                    parent.insert(next, current);
                    stack.push(Frame::enter(graph, next));
                }
                Color::Grey => {
                    if let Some(cycle) = extract_cycle(&parent, current, next) {
                        let cycle = normalize_cycle(cycle);
                        if seen.insert(cycle.join(" -> ")) {
                            cycles.push(cycle);
                        }
                    }
                }
                Color::Black => {}
            }
        }
    }

    debug!(cycles = cycles.len(), steps, "cycle detection complete");
    cycles
}

/// Walk parent pointers from `current` back to `target` and return the path
/// in forward order `[target, ..., current]`.
fn extract_cycle<'g>(
    parent: &FxHashMap<&'g str, &'g str>,
    current: &'g str,
    target: &str,
) -> Option<Vec<String>> {
    let mut path = vec![current.to_string()];
    let mut node = current;
    while node != target {
        node = *parent.get(node)?;
        path.push(node.to_string());
        if path.len() > parent.len() + 1 {
            return None;
        }
    }
    path.reverse();
    Some(path)
}

/// Rotate so the lexicographically smallest member comes first.
fn normalize_cycle(mut cycle: Vec<String>) -> Vec<String> {
    if let Some(min_idx) = cycle
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.cmp(b))
        .map(|(i, _)| i)
    {
        cycle.rotate_left(min_idx);
    }
    cycle
}
