//! Userlist metadata overrides.
//!
//! A `PluginMetadata` record is a partial override keyed by plugin name:
//! each field independently replaces the plugin's structural value when
//! present and leaves it untouched otherwise. Records for plugins that
//! are not loaded are inert. The `MetadataStore` keeps at most one
//! record per name, last write wins.

use crate::plugin::{Plugin, PluginName};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A partial userlist override for one plugin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginMetadata {
    name: PluginName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    priority: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    priority_global: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    requirements: Option<Vec<PluginName>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    load_after: Option<Vec<PluginName>>,
}

impl PluginMetadata {
    /// Creates an empty override for the named plugin.
    #[must_use]
    pub fn new(name: impl Into<PluginName>) -> Self {
        Self {
            name: name.into(),
            priority: None,
            priority_global: None,
            requirements: None,
            load_after: None,
        }
    }

    /// Returns the name of the plugin this record targets.
    #[must_use]
    pub fn name(&self) -> &PluginName {
        &self.name
    }

    /// Overrides the plugin's priority.
    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Overrides whether the priority crosses the master/non-master
    /// class boundary.
    #[must_use]
    pub fn with_priority_global(mut self, global: bool) -> Self {
        self.priority_global = Some(global);
        self
    }

    /// Overrides the plugin's requirement list.
    #[must_use]
    pub fn with_requirements(
        mut self,
        reqs: impl IntoIterator<Item = impl Into<PluginName>>,
    ) -> Self {
        self.requirements = Some(reqs.into_iter().map(Into::into).collect());
        self
    }

    /// Overrides the plugin's load-after list.
    #[must_use]
    pub fn with_load_after(
        mut self,
        after: impl IntoIterator<Item = impl Into<PluginName>>,
    ) -> Self {
        self.load_after = Some(after.into_iter().map(Into::into).collect());
        self
    }

    /// Returns the priority override, if any.
    #[must_use]
    pub fn priority(&self) -> Option<i32> {
        self.priority
    }

    /// Returns the global-priority override, if any.
    #[must_use]
    pub fn priority_global(&self) -> Option<bool> {
        self.priority_global
    }

    /// Returns the requirement override, if any.
    #[must_use]
    pub fn requirements(&self) -> Option<&[PluginName]> {
        self.requirements.as_deref()
    }

    /// Returns the load-after override, if any.
    #[must_use]
    pub fn load_after(&self) -> Option<&[PluginName]> {
        self.load_after.as_deref()
    }

    /// Returns true if no field is overridden.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.priority.is_none()
            && self.priority_global.is_none()
            && self.requirements.is_none()
            && self.load_after.is_none()
    }
}

impl Plugin {
    /// Returns a copy of this plugin with the override applied.
    ///
    /// Each overridden field replaces the structural value wholesale;
    /// absent fields are left as-is. Name, master flag, and master list
    /// are never touched by metadata.
    #[must_use]
    pub fn with_metadata(&self, metadata: &PluginMetadata) -> Plugin {
        let mut merged = self.clone();
        if let Some(priority) = metadata.priority() {
            merged.set_priority(priority);
        }
        if let Some(global) = metadata.priority_global() {
            merged.set_priority_global(global);
        }
        if let Some(reqs) = metadata.requirements() {
            merged.set_requirements(reqs.iter().cloned());
        }
        if let Some(after) = metadata.load_after() {
            merged.set_load_after(after.iter().cloned());
        }
        merged
    }
}

/// The userlist overlay: at most one override record per plugin name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataStore {
    records: HashMap<PluginName, PluginMetadata>,
}

impl MetadataStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an override record, replacing any existing record for the
    /// same (case-insensitive) name.
    pub fn add(&mut self, metadata: PluginMetadata) {
        self.records.insert(metadata.name().clone(), metadata);
    }

    /// Looks up the override for a plugin name.
    #[must_use]
    pub fn get(&self, name: &PluginName) -> Option<&PluginMetadata> {
        self.records.get(name)
    }

    /// Removes the override for a plugin name, returning it if present.
    pub fn remove(&mut self, name: &PluginName) -> Option<PluginMetadata> {
        self.records.remove(name)
    }

    /// Returns the number of override records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over all override records.
    pub fn iter(&self) -> impl Iterator<Item = &PluginMetadata> {
        self.records.values()
    }
}
