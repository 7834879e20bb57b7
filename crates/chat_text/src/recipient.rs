//! Delivery of laid-out chat lines.
//!
//! Everything in this crate ends in a [`Message`] handed to a [`Recipient`].
//! A recipient receives finished lines in order and never re-flows them.

use crate::component::TextComponent;

/// One chat message, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A line of text using formatting codes.
    Legacy(String),
    /// Components shown together on one line.
    Components(Vec<TextComponent>),
}

impl Message {
    /// The message as text with formatting codes.
    pub fn to_legacy_text(&self) -> String {
        match self {
            Self::Legacy(text) => text.clone(),
            Self::Components(components) => components
                .iter()
                .map(TextComponent::to_legacy_text)
                .collect(),
        }
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self::Legacy(text)
    }
}

impl From<TextComponent> for Message {
    fn from(component: TextComponent) -> Self {
        Self::Components(vec![component])
    }
}

/// Anything that can display chat messages: a player connection, a console,
/// a log.
pub trait Recipient {
    fn deliver(&mut self, message: Message);
}

impl Recipient for Vec<Message> {
    fn deliver(&mut self, message: Message) {
        self.push(message);
    }
}

/// A recipient that records what it was sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Every message rendered with formatting codes.
    pub fn lines(&self) -> Vec<String> {
        self.messages.iter().map(Message::to_legacy_text).collect()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

impl Recipient for Transcript {
    fn deliver(&mut self, message: Message) {
        self.messages.push(message);
    }
}
