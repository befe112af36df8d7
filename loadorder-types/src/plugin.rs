//! Plugin names and plugin records.
//!
//! A `Plugin` carries the structural attributes read from a plugin file
//! header (name, master flag, master list) together with the ordering
//! metadata that the userlist overlay may replace (requirements,
//! load-after references, priority). Plugin names compare
//! case-insensitively everywhere, matching how game engines resolve
//! plugin files on disk.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A plugin file name.
///
/// Equality, hashing, and ordering are case-insensitive; the original
/// spelling is preserved for display and for the sorted output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginName(String);

impl PluginName {
    /// Creates a plugin name from any string-like value.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as originally spelled.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn folded_chars(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars().flat_map(char::to_lowercase)
    }
}

impl PartialEq for PluginName {
    fn eq(&self, other: &Self) -> bool {
        self.folded_chars().eq(other.folded_chars())
    }
}

impl Eq for PluginName {}

impl Hash for PluginName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in self.folded_chars() {
            c.hash(state);
        }
    }
}

impl PartialOrd for PluginName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PluginName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded_chars().cmp(other.folded_chars())
    }
}

impl fmt::Display for PluginName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PluginName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for PluginName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// One loadable content module.
///
/// The master list comes from the plugin file header and is never
/// user-editable; requirements, load-after references, and priority can
/// be replaced by a userlist override (see
/// [`Plugin::with_metadata`](Self::with_metadata)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plugin {
    name: PluginName,
    is_master: bool,
    masters: Vec<PluginName>,
    #[serde(default)]
    requirements: Vec<PluginName>,
    #[serde(default)]
    load_after: Vec<PluginName>,
    #[serde(default)]
    priority: i32,
    #[serde(default)]
    priority_global: bool,
}

impl Plugin {
    /// Creates a plugin with no masters and default metadata.
    #[must_use]
    pub fn new(name: impl Into<PluginName>, is_master: bool) -> Self {
        Self {
            name: name.into(),
            is_master,
            masters: Vec::new(),
            requirements: Vec::new(),
            load_after: Vec::new(),
            priority: 0,
            priority_global: false,
        }
    }

    /// Sets the master list read from the plugin file header.
    #[must_use]
    pub fn with_masters(mut self, masters: impl IntoIterator<Item = impl Into<PluginName>>) -> Self {
        self.masters = masters.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the plugin's name.
    #[must_use]
    pub fn name(&self) -> &PluginName {
        &self.name
    }

    /// Returns true if this plugin is flagged as a master file.
    #[must_use]
    pub fn is_master(&self) -> bool {
        self.is_master
    }

    /// Returns the structural master dependencies.
    #[must_use]
    pub fn masters(&self) -> &[PluginName] {
        &self.masters
    }

    /// Returns the plugins this one requires to be loaded before it.
    #[must_use]
    pub fn requirements(&self) -> &[PluginName] {
        &self.requirements
    }

    /// Returns the plugins this one must load after, without a hard
    /// "requires" semantic.
    #[must_use]
    pub fn load_after(&self) -> &[PluginName] {
        &self.load_after
    }

    /// Returns the declared priority. Higher values load later among
    /// otherwise-unconstrained plugins.
    #[must_use]
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Returns true if the priority is honored across the
    /// master/non-master class boundary.
    #[must_use]
    pub fn is_priority_global(&self) -> bool {
        self.priority_global
    }

    /// Replaces the requirement list.
    pub fn set_requirements(&mut self, reqs: impl IntoIterator<Item = impl Into<PluginName>>) {
        self.requirements = reqs.into_iter().map(Into::into).collect();
    }

    /// Replaces the load-after list.
    pub fn set_load_after(&mut self, after: impl IntoIterator<Item = impl Into<PluginName>>) {
        self.load_after = after.into_iter().map(Into::into).collect();
    }

    /// Sets the declared priority.
    pub fn set_priority(&mut self, priority: i32) {
        self.priority = priority;
    }

    /// Sets whether the priority crosses the master/non-master boundary.
    pub fn set_priority_global(&mut self, global: bool) {
        self.priority_global = global;
    }
}
