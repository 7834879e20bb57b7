//! The formatting-code scanner shared by measuring, wrapping and aligning.
//!
//! [`Scanner`] walks a string once, left to right, separating formatting
//! codes from glyphs and tracking whether glyphs are drawn bold. The bold
//! flag follows the chat client: the bold code `l` turns it on, and *any*
//! other code after a marker turns it off again, colors included. So
//! `"§l§cX"` draws `X` normal weight.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::code::SECTION_SIGN;
use crate::table::WidthTable;

/// Letter spacing added after every glyph except spaces and the final one.
pub const KERNING: u32 = 1;

/// One step of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanEvent {
    /// The character right after a marker. Takes no width.
    Code {
        /// Byte offset of the code character.
        offset: usize,
        /// The raw code character, recognised or not.
        code: char,
    },
    /// A visible character.
    Glyph(Glyph),
}

/// A visible character and the state it is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    /// Byte offset into the scanned string.
    pub offset: usize,
    pub ch: char,
    pub bold: bool,
    /// True for the final character of the whole string.
    pub last: bool,
}

impl Glyph {
    /// Width this glyph adds to a line, kerning included.
    pub fn advance(&self, table: &WidthTable) -> u32 {
        let width = u32::from(table.width(self.ch, self.bold));
        if self.ch == ' ' || self.last {
            width
        } else {
            width + KERNING
        }
    }
}

/// Iterator over the [`ScanEvent`]s of a string.
///
/// A marker immediately following another marker re-arms the escape instead
/// of being consumed as a code, and a marker at the very end of the string
/// produces nothing.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    chars: Peekable<CharIndices<'a>>,
    escape_next: bool,
    bold: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            chars: text.char_indices().peekable(),
            escape_next: false,
            bold: false,
        }
    }

    /// Whether the next glyph would be drawn bold.
    pub const fn is_bold(&self) -> bool {
        self.bold
    }

    /// Only the glyphs, codes skipped.
    pub fn glyphs(self) -> impl Iterator<Item = Glyph> + 'a {
        self.filter_map(|event| match event {
            ScanEvent::Glyph(glyph) => Some(glyph),
            ScanEvent::Code { .. } => None,
        })
    }
}

impl Iterator for Scanner<'_> {
    type Item = ScanEvent;

    fn next(&mut self) -> Option<ScanEvent> {
        loop {
            let (offset, ch) = self.chars.next()?;

            if ch == SECTION_SIGN {
                self.escape_next = true;
                continue;
            }

            if self.escape_next {
                self.escape_next = false;
                self.bold = matches!(ch, 'l' | 'L');
                return Some(ScanEvent::Code { offset, code: ch });
            }

            let last = self.chars.peek().is_none();
            return Some(ScanEvent::Glyph(Glyph {
                offset,
                ch,
                bold: self.bold,
                last,
            }));
        }
    }
}
