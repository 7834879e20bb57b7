//! Greedy line wrapping.
//!
//! Chat lines are sent one by one, and the client starts every line with
//! plain white text. A wrapped continuation therefore begins with a reset,
//! then the indent, then the formatting that was active where the previous
//! line stopped, so colors and styles survive the break.

use tracing::trace;

use crate::align::spaces;
use crate::code::{RESET, last_colors};
use crate::layout::{INDENT_UNIT, Layout};
use crate::scan::Scanner;

/// Pieces of a string cut at the points where a line would overflow.
pub(crate) struct Segments<'a> {
    pub(crate) pieces: Vec<&'a str>,
    /// Running width at the end of the text, reservation included. When the
    /// final piece opened with an overflowing glyph, that glyph is not counted.
    pub(crate) tail_width: u32,
}

impl Layout {
    /// Split `text` into lines at the display width.
    ///
    /// Same as [`Layout::wrap_indented`] with no indent. Text that already
    /// fits comes back as a single, unchanged line. The glyph that overflows
    /// a line opens the next one without being counted there, so a
    /// continuation line can run one glyph past the display width.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chat_layout::Layout;
    ///
    /// let layout = Layout::default();
    /// assert_eq!(layout.wrap("short"), vec!["short".to_string()]);
    ///
    /// let long = format!("§c{}", "word ".repeat(40));
    /// let lines = layout.wrap(&long);
    /// assert!(lines.len() > 1);
    /// assert!(lines[1].starts_with("§r§c"));
    /// ```
    pub fn wrap(&self, text: &str) -> Vec<String> {
        self.wrap_indented(text, 0)
    }

    /// Split `text` into lines, each starting with `indent` spaces.
    ///
    /// The indent counts against the display width on every line, and is
    /// capped at the number of spaces the display width can hold. The result
    /// always holds at least one line, even for empty input.
    pub fn wrap_indented(&self, text: &str, indent: u32) -> Vec<String> {
        let indent = self.max_indent(indent);
        let segments = self.segments(text, indent * INDENT_UNIT);
        let lines = assemble(&segments.pieces, indent, 0);
        trace!(layout.indent = indent, layout.lines = lines.len(), "Wrapped text");
        lines
    }

    pub(crate) const fn max_indent(&self, indent: u32) -> u32 {
        let cap = self.display_width() / INDENT_UNIT;
        if indent < cap { indent } else { cap }
    }

    /// Cut `text` wherever the next glyph would push the running width past
    /// the display width. The running width starts at `reserved`.
    ///
    /// The glyph that overflows opens the next piece, and the running width
    /// goes back to `reserved` without it. A piece with no glyph yet is never
    /// cut, so an oversized glyph cannot produce empty lines.
    pub(crate) fn segments<'a>(&self, text: &'a str, reserved: u32) -> Segments<'a> {
        let mut pieces = Vec::new();
        let mut width = reserved;
        let mut start = 0;
        let mut has_glyph = false;

        for glyph in Scanner::new(text).glyphs() {
            let advance = glyph.advance(self.table());
            if width.saturating_add(advance) <= self.display_width() || !has_glyph {
                width = width.saturating_add(advance);
                has_glyph = true;
                continue;
            }

            trace!(layout.offset = glyph.offset, layout.width = width, "Line break");
            pieces.push(&text[start..glyph.offset]);
            start = glyph.offset;
            width = reserved;
        }

        pieces.push(&text[start..]);
        Segments {
            pieces,
            tail_width: width,
        }
    }
}

/// Build display lines from wrapped pieces.
///
/// The first line gets the indent; every later line gets a reset, the indent
/// and the formatting carried over from the line before. `tail_pad` extra
/// spaces go in front of the final line.
pub(crate) fn assemble(pieces: &[&str], indent: u32, tail_pad: u32) -> Vec<String> {
    let mut lines: Vec<String> = Vec::with_capacity(pieces.len());
    let last = pieces.len().saturating_sub(1);

    for (i, piece) in pieces.iter().enumerate() {
        let lead = if i == last {
            spaces(indent.saturating_add(tail_pad))
        } else {
            spaces(indent)
        };

        let line = match lines.last() {
            None => format!("{lead}{piece}"),
            Some(previous) => {
                let carried = last_colors(previous);
                let carried = carried.strip_prefix(RESET).unwrap_or(&carried);
                format!("{RESET}{lead}{carried}{piece}")
            }
        };
        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_yields_one_line() {
        let layout = Layout::default();
        assert_eq!(layout.wrap(""), vec![String::new()]);
        assert_eq!(layout.wrap_indented("", 2), vec!["  ".to_string()]);
    }

    #[test]
    fn test_fitting_text_is_unchanged() {
        let layout = Layout::default();
        let text = "§aHello §lthere";
        assert_eq!(layout.wrap(text), vec![text.to_string()]);
    }

    #[test]
    fn test_four_hundred_units_make_two_lines() {
        let layout = Layout::default();
        // 66 × (5 + 1) + f(4) = 400
        let text = format!("{}f", "a".repeat(66));
        assert_eq!(layout.measure(&text), 400);

        let lines = layout.wrap(&text);
        assert_eq!(lines.len(), 2);
        // 53 × 6 = 318 fits, the 54th glyph would reach 324.
        assert_eq!(lines[0], "a".repeat(53));
        assert_eq!(lines[1], format!("§r{}f", "a".repeat(13)));
    }

    #[test]
    fn test_colors_carry_across_break() {
        // a: 5 × 6 = 30, then bold b: 4 × 7 + 6 = 34
        let layout = Layout::default().with_display_width(34);
        let lines = layout.wrap("§caaaaa§lbbbbb");
        assert_eq!(lines, vec!["§caaaaa§l".to_string(), "§r§c§lbbbbb".to_string()]);
    }

    #[test]
    fn test_carry_reaches_third_line() {
        // The third a overflows 12 and opens line two uncounted, so line two
        // takes three a's before the last one overflows again.
        let layout = Layout::default().with_display_width(12);
        let lines = layout.wrap("§9aaaaaa");
        assert_eq!(
            lines,
            vec![
                "§9aa".to_string(),
                "§r§9aaa".to_string(),
                "§r§9a".to_string(),
            ]
        );
    }

    #[test]
    fn test_plain_continuation_has_single_reset() {
        let layout = Layout::default().with_display_width(12);
        let lines = layout.wrap("aaaaaa");
        assert_eq!(lines, vec!["aa", "§raaa", "§ra"]);
    }

    #[test]
    fn test_overflowing_glyph_not_counted_on_new_line() {
        let layout = Layout::default();
        let lines = layout.wrap(&"a".repeat(160));
        let lengths: Vec<usize> = lines
            .iter()
            .map(|line| line.trim_start_matches(RESET).len())
            .collect();
        assert_eq!(lengths, vec![53, 54, 53]);
    }

    #[test]
    fn test_tail_width_skips_overflowing_glyph() {
        let layout = Layout::default().with_display_width(12);
        // Pieces "aa" | "aaa" | "a": the last a opens its piece uncounted.
        let segments = layout.segments("aaaaaa", 0);
        assert_eq!(segments.pieces, vec!["aa", "aaa", "a"]);
        assert_eq!(segments.tail_width, 0);

        let segments = layout.segments("aaaaa", 0);
        assert_eq!(segments.pieces, vec!["aa", "aaa"]);
        assert_eq!(segments.tail_width, 11);
    }

    #[test]
    fn test_indent_reserves_width() {
        let layout = Layout::default().with_display_width(30);
        // 2 spaces reserve 6 units, leaving room for 4 glyphs (24).
        let lines = layout.wrap_indented("aaaaaaaa", 2);
        assert_eq!(lines, vec!["  aaaa", "§r  aaaa"]);
    }

    #[test]
    fn test_oversized_glyph_gets_own_line() {
        let layout = Layout::default().with_display_width(10);
        assert!(layout.table().register('✦', 40, 40));
        let lines = layout.wrap("a✦a");
        assert_eq!(lines, vec!["a", "§r✦a"]);
        assert_eq!(layout.wrap("✦"), vec!["✦"]);
    }

    #[test]
    fn test_huge_indent_still_progresses() {
        let layout = Layout::default();
        let lines = layout.wrap_indented("ab", 200);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with('a'));
        assert!(lines[1].ends_with('b'));
    }

    #[test]
    fn test_huge_indent_is_capped() {
        let layout = Layout::default();
        // 320 / 3 = 106 spaces at most.
        assert_eq!(layout.max_indent(u32::MAX), 106);
        assert_eq!(layout.max_indent(4), 4);

        let lines = layout.wrap_indented(&"a".repeat(50), u32::MAX);
        assert_eq!(lines.len(), 50);
        assert_eq!(lines[0], format!("{}a", " ".repeat(106)));
        for line in &lines[1..] {
            assert_eq!(line.len(), RESET.len() + 106 + 1);
        }
    }
}
