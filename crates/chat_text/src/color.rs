//! The sixteen chat colors.

use std::fmt;

use chat_layout::FormatCode;
use serde::{Deserialize, Serialize};

/// A chat color.
///
/// Serializes to the lowercase name the chat protocol uses (`"dark_blue"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    #[default]
    White,
}

impl TextColor {
    /// All colors in code order.
    pub const ALL: [Self; 16] = [
        Self::Black,
        Self::DarkBlue,
        Self::DarkGreen,
        Self::DarkAqua,
        Self::DarkRed,
        Self::DarkPurple,
        Self::Gold,
        Self::Gray,
        Self::DarkGray,
        Self::Blue,
        Self::Green,
        Self::Aqua,
        Self::Red,
        Self::LightPurple,
        Self::Yellow,
        Self::White,
    ];

    /// The formatting code that switches to this color.
    pub const fn format_code(self) -> FormatCode {
        use TextColor::*;
        match self {
            Black => FormatCode::Black,
            DarkBlue => FormatCode::DarkBlue,
            DarkGreen => FormatCode::DarkGreen,
            DarkAqua => FormatCode::DarkAqua,
            DarkRed => FormatCode::DarkRed,
            DarkPurple => FormatCode::DarkPurple,
            Gold => FormatCode::Gold,
            Gray => FormatCode::Gray,
            DarkGray => FormatCode::DarkGray,
            Blue => FormatCode::Blue,
            Green => FormatCode::Green,
            Aqua => FormatCode::Aqua,
            Red => FormatCode::Red,
            LightPurple => FormatCode::LightPurple,
            Yellow => FormatCode::Yellow,
            White => FormatCode::White,
        }
    }

    /// The color a formatting code selects, if it is a color code.
    pub fn from_format_code(code: FormatCode) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.format_code() == code)
    }

    /// The protocol name of this color.
    pub const fn name(self) -> &'static str {
        use TextColor::*;
        match self {
            Black => "black",
            DarkBlue => "dark_blue",
            DarkGreen => "dark_green",
            DarkAqua => "dark_aqua",
            DarkRed => "dark_red",
            DarkPurple => "dark_purple",
            Gold => "gold",
            Gray => "gray",
            DarkGray => "dark_gray",
            Blue => "blue",
            Green => "green",
            Aqua => "aqua",
            Red => "red",
            LightPurple => "light_purple",
            Yellow => "yellow",
            White => "white",
        }
    }
}

impl From<TextColor> for FormatCode {
    fn from(color: TextColor) -> Self {
        color.format_code()
    }
}

/// Displays the formatting code (`§c`), ready to splice into text.
impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_code())
    }
}
