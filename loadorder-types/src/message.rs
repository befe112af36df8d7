//! Session message log.
//!
//! Diagnostic messages accumulate over a game session and are shown to
//! the user alongside the load order. The log's lifecycle is owned by
//! the sort operation's commit point: it is cleared exactly once,
//! atomically with a successful sort, and left fully intact when a sort
//! fails.

use crate::Language;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The severity of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKind {
    /// Informational note.
    Say,
    /// Something the user should look at.
    Warn,
    /// Something that prevents correct operation.
    Error,
}

/// One diagnostic message, tagged with the language its text was
/// rendered in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    kind: MessageKind,
    text: String,
    language: Language,
}

impl Message {
    /// Creates a message.
    #[must_use]
    pub fn new(kind: MessageKind, text: impl Into<String>, language: Language) -> Self {
        Self {
            kind,
            text: text.into(),
            language,
        }
    }

    /// Creates an informational message.
    #[must_use]
    pub fn say(text: impl Into<String>, language: Language) -> Self {
        Self::new(MessageKind::Say, text, language)
    }

    /// Creates a warning message.
    #[must_use]
    pub fn warn(text: impl Into<String>, language: Language) -> Self {
        Self::new(MessageKind::Warn, text, language)
    }

    /// Creates an error message.
    #[must_use]
    pub fn error(text: impl Into<String>, language: Language) -> Self {
        Self::new(MessageKind::Error, text, language)
    }

    /// Returns the message's severity.
    #[must_use]
    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    /// Returns the rendered text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the language the text was rendered in.
    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            MessageKind::Say => "note",
            MessageKind::Warn => "warning",
            MessageKind::Error => "error",
        };
        write!(f, "[{kind}] {}", self.text)
    }
}

/// An ordered, appendable sequence of diagnostic messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageLog {
    messages: Vec<Message>,
}

impl MessageLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message to the log.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Returns all messages in append order.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns the number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if the log holds no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Removes all messages.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
