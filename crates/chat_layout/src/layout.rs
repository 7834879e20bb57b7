//! The [`Layout`] handle: a width table plus a display width.

use std::sync::Arc;

use crate::scan::Scanner;
use crate::table::WidthTable;

/// Pixel width of the chat box.
pub const DEFAULT_DISPLAY_WIDTH: u32 = 320;

/// Width of one indentation step; indents are counted in spaces.
pub(crate) const INDENT_UNIT: u32 = 3;

/// Measures, wraps and aligns formatted text against a display width.
///
/// Cloning is cheap: clones share the same [`WidthTable`], so a glyph
/// registered through one is visible to all of them.
///
/// # Example
///
/// ```rust
/// use chat_layout::Layout;
///
/// let layout = Layout::default();
/// assert_eq!(layout.measure(""), 0);
/// assert_eq!(layout.measure(" "), 3);
/// assert_eq!(layout.measure("§lhi"), 9);
/// ```
#[derive(Debug, Clone)]
pub struct Layout {
    table: Arc<WidthTable>,
    display_width: u32,
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(Arc::new(WidthTable::new()))
    }
}

impl Layout {
    /// Create a layout over `table` with the default display width.
    pub fn new(table: Arc<WidthTable>) -> Self {
        Self {
            table,
            display_width: DEFAULT_DISPLAY_WIDTH,
        }
    }

    /// Set the display width lines must fit in.
    pub fn with_display_width(mut self, width: u32) -> Self {
        self.display_width = width;
        self
    }

    /// The display width lines must fit in.
    pub const fn display_width(&self) -> u32 {
        self.display_width
    }

    /// The width table this layout measures with.
    pub fn table(&self) -> &Arc<WidthTable> {
        &self.table
    }

    /// Rendered width of `text`, formatting codes excluded.
    pub fn measure(&self, text: &str) -> u32 {
        measure(&self.table, text)
    }
}

/// Rendered width of `text` using `table`.
///
/// Every glyph contributes its width plus one kerning unit, except spaces and
/// the final character. Formatting codes contribute nothing.
pub fn measure(table: &WidthTable, text: &str) -> u32 {
    Scanner::new(text)
        .glyphs()
        .map(|glyph| glyph.advance(table))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_empty_and_space() {
        let layout = Layout::default();
        assert_eq!(layout.measure(""), 0);
        assert_eq!(layout.measure(" "), 3);
        assert_eq!(layout.measure("   "), 9);
    }

    #[test]
    fn test_measure_kerning() {
        let layout = Layout::default();
        // h(5) + 1 + i(1)
        assert_eq!(layout.measure("hi"), 7);
        // a(5) + 1 + space(3) + b(5)
        assert_eq!(layout.measure("a b"), 14);
    }

    #[test]
    fn test_measure_ignores_codes() {
        let layout = Layout::default();
        assert_eq!(layout.measure("§ahi"), layout.measure("hi"));
        assert_eq!(layout.measure("§a"), 0);
        assert_eq!(layout.measure("§"), 0);
    }

    #[test]
    fn test_measure_bold() {
        let layout = Layout::default();
        // (6 + 1) + (6 + 1) + 6
        assert_eq!(layout.measure("§laaa"), 20);
        assert_eq!(layout.measure("§l§caaa"), 17);
    }

    #[test]
    fn test_trailing_code_keeps_kerning() {
        let layout = Layout::default();
        assert_eq!(layout.measure("a§r"), 6);
    }

    #[test]
    fn test_clones_share_table() {
        let layout = Layout::default();
        let other = layout.clone().with_display_width(100);
        assert!(other.table().register('✦', 9, 10));
        assert_eq!(layout.measure("✦"), 9);
        assert_eq!(other.display_width(), 100);
        assert_eq!(layout.display_width(), DEFAULT_DISPLAY_WIDTH);
    }
}
