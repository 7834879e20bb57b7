//! A single run of text with one color, a set of styles and optional events.

use std::fmt::Write as _;

use chat_layout::{FormatCode, SECTION_SIGN};
use serde::{Deserialize, Serialize};

use crate::color::TextColor;
use crate::event::{ClickEvent, HoverEvent};

/// A run of text as the chat protocol models it.
///
/// Serializes to the protocol's JSON component:
///
/// ```rust
/// use chat_text::{TextColor, TextComponent};
///
/// let mut component = TextComponent::new("Hi");
/// component.color = Some(TextColor::Red);
/// component.bold = true;
/// assert_eq!(component.to_json().unwrap(), r#"{"text":"Hi","color":"red","bold":true}"#);
/// assert_eq!(component.to_legacy_text(), "§c§lHi");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextComponent {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<TextColor>,
    #[serde(skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub underlined: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub strikethrough: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub obfuscated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub click_event: Option<ClickEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_event: Option<HoverEvent>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}

impl TextComponent {
    /// Plain text: no color, styles or events.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// The color the client renders, white when none is set.
    pub fn effective_color(&self) -> TextColor {
        self.color.unwrap_or_default()
    }

    /// Returns true if any style flag is set.
    pub fn has_styles(&self) -> bool {
        self.bold || self.italic || self.underlined || self.strikethrough || self.obfuscated
    }

    /// Clear every style flag, keeping color and events.
    pub fn clear_styles(&mut self) {
        self.bold = false;
        self.italic = false;
        self.underlined = false;
        self.strikethrough = false;
        self.obfuscated = false;
    }

    /// A copy with different text and the same events, but no color or
    /// styles. Used for lines whose formatting is already spelled out as
    /// codes inside the text.
    pub fn with_legacy_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            click_event: self.click_event.clone(),
            hover_event: self.hover_event.clone(),
            ..Self::default()
        }
    }

    /// The text prefixed with its formatting codes: the color, then
    /// `§l §o §n §m §k` for each style that is set.
    ///
    /// With no color set, the default white is left out when the text
    /// opens with a code of its own.
    pub fn to_legacy_text(&self) -> String {
        let mut out = String::with_capacity(self.text.len() + 12);
        if self.color.is_some() || !self.text.starts_with(SECTION_SIGN) {
            let _ = write!(out, "{}", self.effective_color());
        }

        let flags = [
            (self.bold, FormatCode::Bold),
            (self.italic, FormatCode::Italic),
            (self.underlined, FormatCode::Underline),
            (self.strikethrough, FormatCode::Strikethrough),
            (self.obfuscated, FormatCode::Obfuscated),
        ];
        for (set, code) in flags {
            if set {
                let _ = write!(out, "{code}");
            }
        }

        out.push_str(&self.text);
        out
    }

    /// Serialize to the protocol's JSON form.
    ///
    /// # Errors
    /// Returns `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse the protocol's JSON form.
    ///
    /// # Errors
    /// Returns `serde_json::Error` if the JSON is not a text component.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl From<&str> for TextComponent {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for TextComponent {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
