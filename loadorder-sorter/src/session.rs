//! Game session state and the registry snapshot the sorter works from.
//!
//! `GameSession` is the mutable per-game state handed in by the hosting
//! application: the current load order, the userlist overlay, and the
//! message log. `PluginRegistry` is the immutable snapshot the engine
//! takes at sort entry — every plugin with its override merged, indexed
//! by case-insensitive name, positioned by its pre-sort index.

use loadorder_types::{Message, MessageLog, MetadataStore, Plugin, PluginName};
use std::collections::HashMap;

/// Mutable state for one loaded game.
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    plugins: Vec<Plugin>,
    userlist: MetadataStore,
    messages: MessageLog,
}

impl GameSession {
    /// Creates an empty session with no loaded plugins.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a plugin to the end of the current load order.
    pub fn add_plugin(&mut self, plugin: Plugin) {
        self.plugins.push(plugin);
    }

    /// Replaces the current load order wholesale.
    pub fn set_load_order(&mut self, plugins: impl IntoIterator<Item = Plugin>) {
        self.plugins = plugins.into_iter().collect();
    }

    /// Returns the currently loaded plugins, in load order.
    #[must_use]
    pub fn plugins(&self) -> &[Plugin] {
        &self.plugins
    }

    /// Returns the current load order as a list of names.
    #[must_use]
    pub fn load_order(&self) -> Vec<PluginName> {
        self.plugins.iter().map(|p| p.name().clone()).collect()
    }

    /// Returns the userlist overlay.
    #[must_use]
    pub fn userlist(&self) -> &MetadataStore {
        &self.userlist
    }

    /// Returns the userlist overlay for editing.
    pub fn userlist_mut(&mut self) -> &mut MetadataStore {
        &mut self.userlist
    }

    /// Appends a diagnostic message to the session log.
    pub fn append_message(&mut self, message: Message) {
        self.messages.append(message);
    }

    /// Returns the session's diagnostic messages.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        self.messages.messages()
    }

    /// Clears the session's diagnostic messages.
    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }
}

/// Immutable snapshot of the loaded plugins with userlist metadata
/// merged in, taken at the start of a sort.
///
/// A plugin's index in the registry is its pre-sort position, used only
/// for tie-breaking.
#[derive(Debug)]
pub struct PluginRegistry {
    plugins: Vec<Plugin>,
    index: HashMap<PluginName, usize>,
}

impl PluginRegistry {
    /// Builds a snapshot from the session's load order and userlist.
    ///
    /// Overrides targeting plugins that are not loaded are ignored.
    #[must_use]
    pub fn from_session(session: &GameSession) -> Self {
        let plugins: Vec<Plugin> = session
            .plugins()
            .iter()
            .map(|plugin| match session.userlist().get(plugin.name()) {
                Some(metadata) => plugin.with_metadata(metadata),
                None => plugin.clone(),
            })
            .collect();

        let mut index = HashMap::with_capacity(plugins.len());
        for (position, plugin) in plugins.iter().enumerate() {
            index.entry(plugin.name().clone()).or_insert(position);
        }

        Self { plugins, index }
    }

    /// Returns the number of loaded plugins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Returns true if no plugins are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Returns the plugin at a pre-sort position.
    #[must_use]
    pub fn plugin(&self, position: usize) -> &Plugin {
        &self.plugins[position]
    }

    /// Returns the pre-sort position of a named plugin, if loaded.
    #[must_use]
    pub fn position_of(&self, name: &PluginName) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Iterates over plugins with their pre-sort positions.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Plugin)> {
        self.plugins.iter().enumerate()
    }
}
