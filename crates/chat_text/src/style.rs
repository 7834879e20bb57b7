//! Text styles.

use std::fmt;

use chat_layout::FormatCode;
use serde::{Deserialize, Serialize};

use crate::component::TextComponent;

/// A style that can be applied to a [`TextComponent`].
///
/// `None` is the odd one out: rather than adding a style it removes all of
/// them, and its code is the reset code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextStyle {
    Obfuscated,
    Bold,
    Strikethrough,
    Underline,
    Italic,
    None,
}

impl TextStyle {
    pub const ALL: [Self; 6] = [
        Self::Obfuscated,
        Self::Bold,
        Self::Strikethrough,
        Self::Underline,
        Self::Italic,
        Self::None,
    ];

    /// Apply this style to `component`.
    pub fn apply(self, component: &mut TextComponent) {
        match self {
            Self::Obfuscated => component.obfuscated = true,
            Self::Bold => component.bold = true,
            Self::Strikethrough => component.strikethrough = true,
            Self::Underline => component.underlined = true,
            Self::Italic => component.italic = true,
            Self::None => component.clear_styles(),
        }
    }

    /// The formatting code for this style.
    pub const fn format_code(self) -> FormatCode {
        match self {
            Self::Obfuscated => FormatCode::Obfuscated,
            Self::Bold => FormatCode::Bold,
            Self::Strikethrough => FormatCode::Strikethrough,
            Self::Underline => FormatCode::Underline,
            Self::Italic => FormatCode::Italic,
            Self::None => FormatCode::Reset,
        }
    }

    /// Returns true if `component` carries this style. `None` is present
    /// when no other style is.
    pub fn is_set(self, component: &TextComponent) -> bool {
        match self {
            Self::Obfuscated => component.obfuscated,
            Self::Bold => component.bold,
            Self::Strikethrough => component.strikethrough,
            Self::Underline => component.underlined,
            Self::Italic => component.italic,
            Self::None => !component.has_styles(),
        }
    }
}

impl From<TextStyle> for FormatCode {
    fn from(style: TextStyle) -> Self {
        style.format_code()
    }
}

impl fmt::Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_code())
    }
}
