//! Core type definitions for the load order engine.
//!
//! This crate defines the fundamental, game-agnostic types used by the
//! sort engine:
//! - Plugin names (case-insensitive) and plugin records
//! - Userlist metadata overrides and their merge semantics
//! - Session message log types
//! - Language codes for message rendering
//!
//! Everything that touches the filesystem (plugin header parsing,
//! userlist loading, game discovery) belongs to the hosting application,
//! not here.

mod language;
mod message;
mod metadata;
mod plugin;

pub use language::Language;
pub use message::{Message, MessageKind, MessageLog};
pub use metadata::{MetadataStore, PluginMetadata};
pub use plugin::{Plugin, PluginName};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown language code: {0}")]
    UnknownLanguage(String),
}
