//! Constraint graph construction and cycle detection.
//!
//! Nodes are registry positions; an edge `A -> B` means "A must load
//! before B". The graph is an arena of adjacency lists over stable
//! integer indices, so cyclic constraint sets are representable without
//! any ownership cycles — a cycle is a property of the index graph and
//! is reported rather than followed.
//!
//! The graph is rebuilt from scratch for every sort. Within one pass
//! edges are only ever added, never removed.

use crate::session::PluginRegistry;
use loadorder_types::Plugin;
use std::collections::HashSet;
use tracing::debug;

/// Why an edge exists. Only requirement and load-after edges carry
/// priority inheritance; master edges are purely structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Target lists the source as a master in its file header.
    Master,
    /// Source is a master-type plugin, target is not.
    MasterClass,
    /// Target declares the source as a requirement.
    Requirement,
    /// Target declares it loads after the source.
    LoadAfter,
}

impl EdgeKind {
    /// Returns true if effective priority propagates along this edge.
    #[must_use]
    pub fn inherits_priority(self) -> bool {
        matches!(self, EdgeKind::Requirement | EdgeKind::LoadAfter)
    }
}

/// Directed "must load before" graph over a registry snapshot.
#[derive(Debug)]
pub struct ConstraintGraph<'r> {
    registry: &'r PluginRegistry,
    outgoing: Vec<Vec<(usize, EdgeKind)>>,
    incoming: Vec<Vec<(usize, EdgeKind)>>,
    /// Ordered pairs with at least one edge, for the class-edge rule.
    pairs: HashSet<(usize, usize)>,
    /// Exact edges present, for duplicate suppression.
    edges: HashSet<(usize, usize, EdgeKind)>,
}

impl<'r> ConstraintGraph<'r> {
    /// Builds the graph from master, requirement, and load-after
    /// references.
    ///
    /// References to plugins that are not loaded are skipped silently;
    /// the dependency is simply absent. Class edges are added
    /// separately (see [`add_class_edges`](Self::add_class_edges)) once
    /// effective priorities are known.
    #[must_use]
    pub fn build(registry: &'r PluginRegistry) -> Self {
        let len = registry.len();
        let mut graph = Self {
            registry,
            outgoing: vec![Vec::new(); len],
            incoming: vec![Vec::new(); len],
            pairs: HashSet::new(),
            edges: HashSet::new(),
        };

        for (position, plugin) in registry.iter() {
            for master in plugin.masters() {
                if let Some(source) = registry.position_of(master) {
                    graph.add_edge(source, position, EdgeKind::Master);
                }
            }
            for requirement in plugin.requirements() {
                if let Some(source) = registry.position_of(requirement) {
                    graph.add_edge(source, position, EdgeKind::Requirement);
                }
            }
            for after in plugin.load_after() {
                if let Some(source) = registry.position_of(after) {
                    graph.add_edge(source, position, EdgeKind::LoadAfter);
                }
            }
        }

        debug!(
            nodes = len,
            edges = graph.edges.len(),
            "built constraint graph"
        );
        graph
    }

    /// Adds the master-class edges: every master-type plugin precedes
    /// every non-master-type plugin.
    ///
    /// A class edge is skipped for a pair that is already ordered, and
    /// for a pair whose cross-class priority comparison is honored (the
    /// global flag is set on either side) and places the non-master
    /// earlier — that omission is what lets a globally-prioritized
    /// plugin cross the boundary during tie-breaking.
    pub fn add_class_edges(&mut self, effective: &[i32]) {
        let before = self.edges.len();
        let registry = self.registry;
        for (master_pos, master) in registry.iter() {
            if !master.is_master() {
                continue;
            }
            for (plugin_pos, plugin) in registry.iter() {
                if plugin.is_master() || self.pairs.contains(&(master_pos, plugin_pos)) {
                    continue;
                }
                let cross_honored =
                    master.is_priority_global() || plugin.is_priority_global();
                if cross_honored && effective[plugin_pos] < effective[master_pos] {
                    continue;
                }
                self.add_edge(master_pos, plugin_pos, EdgeKind::MasterClass);
            }
        }
        debug!(
            class_edges = self.edges.len() - before,
            "added master-class edges"
        );
    }

    fn add_edge(&mut self, from: usize, to: usize, kind: EdgeKind) {
        // A plugin referencing itself is a degenerate dangling reference.
        if from == to || !self.edges.insert((from, to, kind)) {
            return;
        }
        self.pairs.insert((from, to));
        self.outgoing[from].push((to, kind));
        self.incoming[to].push((from, kind));
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.outgoing.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the successors of a node.
    #[must_use]
    pub fn outgoing(&self, node: usize) -> &[(usize, EdgeKind)] {
        &self.outgoing[node]
    }

    /// Returns the predecessors of a node.
    #[must_use]
    pub fn incoming(&self, node: usize) -> &[(usize, EdgeKind)] {
        &self.incoming[node]
    }

    /// Returns true if an edge of any kind exists from `from` to `to`.
    #[must_use]
    pub fn is_ordered(&self, from: usize, to: usize) -> bool {
        self.pairs.contains(&(from, to))
    }

    /// Returns the registry snapshot this graph was built over.
    #[must_use]
    pub fn registry(&self) -> &PluginRegistry {
        self.registry
    }

    /// Returns the plugin at a node.
    #[must_use]
    pub fn plugin(&self, node: usize) -> &Plugin {
        self.registry.plugin(node)
    }

    /// Returns the number of unresolved incoming edges per node.
    #[must_use]
    pub fn in_degrees(&self) -> Vec<usize> {
        self.incoming.iter().map(Vec::len).collect()
    }

    /// Searches for a cycle, returning the nodes along one in edge
    /// order if found.
    #[must_use]
    pub fn find_cycle(&self) -> Option<Vec<usize>> {
        let mut marks = vec![Mark::Unvisited; self.node_count()];
        let mut path = Vec::new();
        for node in 0..self.node_count() {
            if marks[node] == Mark::Unvisited {
                if let Some(cycle) = self.visit(node, &mut marks, &mut path) {
                    return Some(cycle);
                }
            }
        }
        None
    }

    fn visit(
        &self,
        node: usize,
        marks: &mut Vec<Mark>,
        path: &mut Vec<usize>,
    ) -> Option<Vec<usize>> {
        marks[node] = Mark::InProgress;
        path.push(node);
        for &(successor, _) in &self.outgoing[node] {
            match marks[successor] {
                Mark::InProgress => {
                    // The cycle is the tail of the current path starting
                    // at the revisited node.
                    let start = path
                        .iter()
                        .position(|&n| n == successor)
                        .unwrap_or_default();
                    return Some(path[start..].to_vec());
                }
                Mark::Unvisited => {
                    if let Some(cycle) = self.visit(successor, marks, path) {
                        return Some(cycle);
                    }
                }
                Mark::Done => {}
            }
        }
        path.pop();
        marks[node] = Mark::Done;
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}
