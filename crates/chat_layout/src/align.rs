//! Center and right alignment by left padding.
//!
//! The chat box cannot align text itself, so alignment is faked by putting
//! spaces in front of a line. Centering pads by a sixth of the slack and right
//! alignment by a third; both values are in space-sized padding units of the
//! client, not in pixels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::{DEFAULT_DISPLAY_WIDTH, Layout};
use crate::wrap::assemble;

const CENTER_DIVISOR: u32 = 6;
const RIGHT_DIVISOR: u32 = 3;

/// Horizontal placement of a line in the chat box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Spaces needed to place text of `width` inside `display_width`.
    pub const fn reserve(self, width: u32, display_width: u32) -> u32 {
        match self {
            Self::Left => 0,
            Self::Center => reserve(width, display_width, CENTER_DIVISOR),
            Self::Right => reserve(width, display_width, RIGHT_DIVISOR),
        }
    }

    /// Divisor applied to the slack, `None` for left alignment.
    pub const fn divisor(self) -> Option<u32> {
        match self {
            Self::Left => None,
            Self::Center => Some(CENTER_DIVISOR),
            Self::Right => Some(RIGHT_DIVISOR),
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an [`Alignment`] from a string fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid alignment: {input:?} (expected left, center or right)")]
pub struct ParseAlignmentError {
    input: String,
}

impl ParseAlignmentError {
    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Alignment {
    type Err = ParseAlignmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "center" | "centre" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            _ => Err(ParseAlignmentError {
                input: s.to_string(),
            }),
        }
    }
}

const fn reserve(width: u32, display_width: u32, divisor: u32) -> u32 {
    let slack = display_width.saturating_sub(width);
    if slack > divisor { slack / divisor } else { 0 }
}

/// Spaces needed to center text of `width` in the default chat box.
pub const fn reserve_for_center(width: u32) -> u32 {
    reserve(width, DEFAULT_DISPLAY_WIDTH, CENTER_DIVISOR)
}

/// Spaces needed to right-align text of `width` in the default chat box.
pub const fn reserve_for_right(width: u32) -> u32 {
    reserve(width, DEFAULT_DISPLAY_WIDTH, RIGHT_DIVISOR)
}

/// A string of `count` spaces.
pub fn spaces(count: u32) -> String {
    " ".repeat(count as usize)
}

impl Layout {
    /// Spaces needed to center text of `width` in this layout.
    pub const fn reserve_for_center(&self, width: u32) -> u32 {
        Alignment::Center.reserve(width, self.display_width())
    }

    /// Spaces needed to right-align text of `width` in this layout.
    pub const fn reserve_for_right(&self, width: u32) -> u32 {
        Alignment::Right.reserve(width, self.display_width())
    }

    /// Prefix `text` with the spaces that center it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chat_layout::Layout;
    ///
    /// let layout = Layout::default();
    /// // "§laaa" measures 20, so (320 - 20) / 6 = 50 spaces.
    /// assert_eq!(layout.align_center("§laaa"), format!("{}§laaa", " ".repeat(50)));
    /// ```
    pub fn align_center(&self, text: &str) -> String {
        self.align(text, Alignment::Center)
    }

    /// Prefix `text` with the spaces that right-align it.
    pub fn align_right(&self, text: &str) -> String {
        self.align(text, Alignment::Right)
    }

    /// Prefix `text` with the padding `alignment` asks for.
    ///
    /// Text wider than the display width gets no padding at all.
    pub fn align(&self, text: &str, alignment: Alignment) -> String {
        let pad = alignment.reserve(self.measure(text), self.display_width());
        let mut result = spaces(pad);
        result.push_str(text);
        result
    }

    /// Wrap `text` and align the result.
    ///
    /// Every line but the last fills the chat box, so only the last one is
    /// padded. Text that fits on one line gives the same result as
    /// [`Layout::align`]; left alignment returns `text` untouched. When the
    /// text wraps, the last line is padded by its full slack divided by the
    /// alignment divisor, with no minimum slack.
    pub fn align_lines(&self, text: &str, alignment: Alignment) -> Vec<String> {
        let Some(divisor) = alignment.divisor() else {
            return vec![text.to_string()];
        };

        let segments = self.segments(text, 0);
        if segments.pieces.len() == 1 {
            return vec![self.align(text, alignment)];
        }

        let pad = self.display_width().saturating_sub(segments.tail_width) / divisor;
        assemble(&segments.pieces, 0, pad)
    }
}
