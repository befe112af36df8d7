//! Deterministic load order sorting.
//!
//! This crate turns a loaded game session (plugins plus userlist
//! overrides) into a total load order:
//!
//! - [`GameSession`] — loaded plugins, userlist overlay, message log
//! - [`PluginRegistry`] — merged snapshot taken at sort entry
//! - [`ConstraintGraph`] — "must load before" edges from masters,
//!   requirements, load-after references, and the master-class rule
//! - [`effective_priorities`] — transitive priority inheritance
//! - [`PluginSorter`] — stability-biased topological sort with cycle
//!   detection
//!
//! Sorting is pure in-memory computation over a snapshot: no I/O, no
//! internal locking, and exactly one side effect — the session's
//! message log is cleared when, and only when, the sort succeeds.

mod graph;
mod priority;
mod session;
mod sorter;

pub use graph::{ConstraintGraph, EdgeKind};
pub use priority::effective_priorities;
pub use session::{GameSession, PluginRegistry};
pub use sorter::PluginSorter;

use loadorder_types::PluginName;

/// Result type for sort operations.
pub type SortResult<T> = Result<T, SortError>;

/// Errors that can occur while sorting.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SortError {
    /// The constraint graph contains a cycle, so no total order exists.
    /// `plugins` lists one full cycle, in edge order.
    #[error("cyclic interaction detected: {}", format_cycle(.plugins))]
    CyclicInteraction {
        /// Plugins forming the detected cycle.
        plugins: Vec<PluginName>,
    },
}

fn format_cycle(plugins: &[PluginName]) -> String {
    let mut names: Vec<String> = plugins.iter().map(ToString::to_string).collect();
    if let Some(first) = names.first().cloned() {
        names.push(first);
    }
    names.join(" -> ")
}
