//! Legacy formatting codes.
//!
//! A formatting code is the two-character sequence `§x`: the [`SECTION_SIGN`]
//! marker followed by one code character. Codes never occupy any width on
//! screen; they switch the color or style of everything after them.
//!
//! # Example
//!
//! ```rust
//! use chat_layout::{FormatCode, last_colors, strip_codes};
//!
//! assert_eq!(FormatCode::from_char('L'), Some(FormatCode::Bold));
//! assert_eq!(FormatCode::Red.to_string(), "§c");
//! assert_eq!(last_colors("§aGreen §cRed§lBold"), "§c§l");
//! assert_eq!(strip_codes("§aGreen"), "Green");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scan::{ScanEvent, Scanner};

/// The marker that introduces a formatting code.
pub const SECTION_SIGN: char = '§';

/// The reset code, rendered.
pub const RESET: &str = "§r";

/// Every code the chat client understands.
///
/// The first sixteen variants are colors, `Obfuscated` through `Italic` are
/// formats, and `Reset` clears both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatCode {
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
    White,
    Obfuscated,
    Bold,
    Strikethrough,
    Underline,
    Italic,
    Reset,
}

impl FormatCode {
    /// All codes in code-character order.
    pub const ALL: [Self; 22] = [
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
        Self::Obfuscated,
        Self::Bold,
        Self::Strikethrough,
        Self::Underline,
        Self::Italic,
        Self::Reset,
    ];

    /// Look up a code by its code character, ignoring ASCII case.
    pub fn from_char(c: char) -> Option<Self> {
        use FormatCode::*;
        let code = match c.to_ascii_lowercase() {
            '0' => Black,
            '1' => DarkBlue,
            '2' => DarkGreen,
            '3' => DarkAqua,
            '4' => DarkRed,
            '5' => DarkPurple,
            '6' => Gold,
            '7' => Gray,
            '8' => DarkGray,
            '9' => Blue,
            'a' => Green,
            'b' => Aqua,
            'c' => Red,
            'd' => LightPurple,
            'e' => Yellow,
            'f' => White,
            'k' => Obfuscated,
            'l' => Bold,
            'm' => Strikethrough,
            'n' => Underline,
            'o' => Italic,
            'r' => Reset,
            _ => return None,
        };
        Some(code)
    }

    /// The (lowercase) code character.
    pub const fn as_char(self) -> char {
        use FormatCode::*;
        match self {
            Black => '0',
            DarkBlue => '1',
            DarkGreen => '2',
            DarkAqua => '3',
            DarkRed => '4',
            DarkPurple => '5',
            Gold => '6',
            Gray => '7',
            DarkGray => '8',
            Blue => '9',
            Green => 'a',
            Aqua => 'b',
            Red => 'c',
            LightPurple => 'd',
            Yellow => 'e',
            White => 'f',
            Obfuscated => 'k',
            Bold => 'l',
            Strikethrough => 'm',
            Underline => 'n',
            Italic => 'o',
            Reset => 'r',
        }
    }

    /// Returns true for the sixteen color codes.
    pub const fn is_color(self) -> bool {
        !self.is_format() && !matches!(self, Self::Reset)
    }

    /// Returns true for the style codes `k` through `o`.
    pub const fn is_format(self) -> bool {
        matches!(
            self,
            Self::Obfuscated | Self::Bold | Self::Strikethrough | Self::Underline | Self::Italic
        )
    }
}

impl fmt::Display for FormatCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SECTION_SIGN}{}", self.as_char())
    }
}

/// The last recognised code in `segment`, in scanning order.
///
/// A marker followed by an unknown character is skipped, as is a trailing
/// marker with nothing after it.
pub fn last_active_code(segment: &str) -> Option<FormatCode> {
    Scanner::new(segment)
        .filter_map(|event| match event {
            ScanEvent::Code { code, .. } => FormatCode::from_char(code),
            ScanEvent::Glyph(_) => None,
        })
        .last()
}

/// The formatting still in effect at the end of `input`, rendered as codes.
///
/// Walks backwards collecting codes until it reaches a color or a reset, so
/// the result is the last color followed by every format applied after it.
/// Codes are rendered lowercase.
pub fn last_colors(input: &str) -> String {
    let mut codes = Vec::new();
    let mut next: Option<char> = None;

    for c in input.chars().rev() {
        if c == SECTION_SIGN {
            if let Some(code) = next.and_then(FormatCode::from_char) {
                codes.push(code);
                if code.is_color() || code == FormatCode::Reset {
                    break;
                }
            }
        }
        next = Some(c);
    }

    codes.iter().rev().map(ToString::to_string).collect()
}

/// Remove every recognised `§x` code from `text`.
pub fn strip_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == SECTION_SIGN {
            if let Some(&code) = chars.peek() {
                if FormatCode::from_char(code).is_some() {
                    chars.next();
                    continue;
                }
            }
        }
        result.push(c);
    }

    result
}

/// Replace `alt` with [`SECTION_SIGN`] wherever it precedes a known code.
///
/// The code character is lowercased. Occurrences of `alt` that are not
/// followed by a code are left alone, so `"Tom & Jerry"` survives intact.
pub fn translate_alternate_codes(alt: char, text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == alt {
            if let Some(code) = chars.peek().copied().and_then(FormatCode::from_char) {
                chars.next();
                result.push(SECTION_SIGN);
                result.push(code.as_char());
                continue;
            }
        }
        result.push(c);
    }

    result
}
