//! Click and hover actions attached to a piece of text.
//!
//! Both serialize to the shape the chat protocol expects:
//!
//! ```rust
//! use chat_text::ClickEvent;
//!
//! let event = ClickEvent::run_command("/spawn");
//! let json = serde_json::to_string(&event).unwrap();
//! assert_eq!(json, r#"{"action":"run_command","value":"/spawn"}"#);
//! ```

use serde::{Deserialize, Serialize};

/// What happens when the text is clicked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum ClickEvent {
    OpenUrl(String),
    RunCommand(String),
    SuggestCommand(String),
    /// Turn to a page of the open book.
    ChangePage(u32),
    CopyToClipboard(String),
}

impl ClickEvent {
    pub fn open_url(url: impl Into<String>) -> Self {
        Self::OpenUrl(url.into())
    }

    pub fn run_command(command: impl Into<String>) -> Self {
        Self::RunCommand(command.into())
    }

    pub fn suggest_command(command: impl Into<String>) -> Self {
        Self::SuggestCommand(command.into())
    }

    pub fn copy_to_clipboard(text: impl Into<String>) -> Self {
        Self::CopyToClipboard(text.into())
    }
}

/// What is shown while the pointer rests on the text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum HoverEvent {
    /// A tooltip; may itself contain formatting codes.
    ShowText(String),
}

impl HoverEvent {
    pub fn show_text(text: impl Into<String>) -> Self {
        Self::ShowText(text.into())
    }
}
