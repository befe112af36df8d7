//! Effective priority propagation.
//!
//! A plugin's effective priority is the maximum of its own declared
//! priority and the effective priorities of everything it must follow
//! via requirement or load-after edges. Master and class edges carry no
//! priority semantics. Memoization makes the result independent of the
//! order plugins or metadata were registered in.

use crate::graph::ConstraintGraph;

/// Computes every node's effective priority.
///
/// The inheritance subgraph must be acyclic; run the graph's cycle
/// check first.
#[must_use]
pub fn effective_priorities(graph: &ConstraintGraph<'_>) -> Vec<i32> {
    let mut memo: Vec<Option<i32>> = vec![None; graph.node_count()];
    for node in 0..graph.node_count() {
        resolve(graph, node, &mut memo);
    }
    memo.into_iter().map(Option::unwrap_or_default).collect()
}

fn resolve(graph: &ConstraintGraph<'_>, node: usize, memo: &mut Vec<Option<i32>>) -> i32 {
    if let Some(effective) = memo[node] {
        return effective;
    }
    let mut effective = graph.plugin(node).priority();
    for &(predecessor, kind) in graph.incoming(node) {
        if kind.inherits_priority() {
            effective = effective.max(resolve(graph, predecessor, memo));
        }
    }
    memo[node] = Some(effective);
    effective
}
