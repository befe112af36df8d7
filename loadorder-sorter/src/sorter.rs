//! The sort operation: stability-biased topological ordering with
//! transactional message-log semantics.
//!
//! Selection among ready nodes is, in order: lowest effective priority
//! (honored only within a class, or across the master/non-master
//! boundary when either side's priority is global), earliest pre-sort
//! position, then case-insensitive name. The position rule is what
//! keeps an already-valid load order byte-identical across sorts.

use crate::graph::ConstraintGraph;
use crate::priority::effective_priorities;
use crate::session::{GameSession, PluginRegistry};
use crate::{SortError, SortResult};
use loadorder_types::{Language, Plugin, PluginName};
use std::cmp::Ordering;
use tracing::{debug, warn};

/// Sorts a session's plugins into a deterministic total load order.
#[derive(Debug, Clone, Copy, Default)]
pub struct PluginSorter;

impl PluginSorter {
    /// Creates a sorter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Computes the load order for the session's plugins.
    ///
    /// The session's userlist is merged over the loaded plugins, the
    /// constraint graph is rebuilt from scratch, and a total order is
    /// produced. On success the session's message log is cleared and
    /// the full order is returned. On a cyclic interaction no order is
    /// returned and the message log is left untouched.
    ///
    /// The language only tags diagnostics; it never affects ordering.
    pub fn sort(
        &self,
        session: &mut GameSession,
        language: Language,
    ) -> SortResult<Vec<PluginName>> {
        let registry = PluginRegistry::from_session(session);
        debug!(
            plugins = registry.len(),
            language = %language,
            "sorting load order"
        );

        if registry.is_empty() {
            session.clear_messages();
            return Ok(Vec::new());
        }

        let mut graph = ConstraintGraph::build(&registry);

        // Priority propagation assumes an acyclic inheritance subgraph,
        // so cycles among masters/requirements/load-afters fail here.
        if let Some(cycle) = graph.find_cycle() {
            return Err(cycle_error(&registry, &cycle));
        }

        let effective = effective_priorities(&graph);
        graph.add_class_edges(&effective);

        let order = emit_order(&graph, &effective)?;
        let names = order
            .iter()
            .map(|&node| registry.plugin(node).name().clone())
            .collect();

        // The single commit point: messages survive any failure above.
        session.clear_messages();
        Ok(names)
    }
}

/// Kahn's algorithm over the annotated graph.
fn emit_order(graph: &ConstraintGraph<'_>, effective: &[i32]) -> SortResult<Vec<usize>> {
    let total = graph.node_count();
    let mut unresolved = graph.in_degrees();
    let mut ready: Vec<usize> = (0..total).filter(|&node| unresolved[node] == 0).collect();
    let mut order = Vec::with_capacity(total);

    while let Some(slot) = pick_next(graph, effective, &ready) {
        let node = ready.swap_remove(slot);
        order.push(node);
        for &(successor, _) in graph.outgoing(node) {
            unresolved[successor] -= 1;
            if unresolved[successor] == 0 {
                ready.push(successor);
            }
        }
    }

    if order.len() == total {
        Ok(order)
    } else {
        // Nothing is ready but nodes remain: they sit on or behind a
        // cycle. Discard the partial order.
        let cycle = graph.find_cycle().unwrap_or_default();
        Err(cycle_error(graph.registry(), &cycle))
    }
}

/// Picks the slot of the next ready node, or `None` when drained.
fn pick_next(graph: &ConstraintGraph<'_>, effective: &[i32], ready: &[usize]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for slot in 0..ready.len() {
        best = match best {
            Some(current) if !precedes(graph, effective, ready[slot], ready[current]) => {
                Some(current)
            }
            _ => Some(slot),
        };
    }
    best
}

/// Returns true if `a` should be emitted before `b`.
fn precedes(graph: &ConstraintGraph<'_>, effective: &[i32], a: usize, b: usize) -> bool {
    let plugin_a = graph.plugin(a);
    let plugin_b = graph.plugin(b);

    if priority_applies(plugin_a, plugin_b) {
        match effective[a].cmp(&effective[b]) {
            Ordering::Less => return true,
            Ordering::Greater => return false,
            Ordering::Equal => {}
        }
    }

    // Pre-sort position, then case-insensitive name as the final
    // deterministic fallback.
    match a.cmp(&b) {
        Ordering::Equal => plugin_a.name() < plugin_b.name(),
        ordering => ordering == Ordering::Less,
    }
}

/// Same-class comparisons always honor priority; cross-class ones only
/// when either side's priority is global.
fn priority_applies(a: &Plugin, b: &Plugin) -> bool {
    a.is_master() == b.is_master() || a.is_priority_global() || b.is_priority_global()
}

fn cycle_error(registry: &PluginRegistry, cycle: &[usize]) -> SortError {
    let plugins: Vec<PluginName> = cycle
        .iter()
        .map(|&node| registry.plugin(node).name().clone())
        .collect();
    warn!(
        cycle = %plugins
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" -> "),
        "cyclic interaction detected, aborting sort"
    );
    SortError::CyclicInteraction { plugins }
}
