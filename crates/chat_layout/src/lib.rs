#![forbid(unsafe_code)]
// Allow these clippy lints for API ergonomics
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::enum_glob_use)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_const_for_fn)]

//! # Chat Layout
//!
//! Pixel-width text layout for the chat box of a block-game client.
//!
//! The chat font is proportional: an `i` is one pixel wide, a `W` five, a
//! bold glyph one more, and letters are kept apart by one pixel of spacing.
//! Text also carries inline formatting codes (`§c` for red, `§l` for bold,
//! ...) that take no room at all. This crate measures such text and uses the
//! measurement to:
//! - **Wrap** text at the edge of the 320-pixel chat box, carrying the
//!   active colors and styles onto every continuation line
//! - **Align** text to the center or right by padding it with spaces
//!
//! ## Quick Start
//!
//! ```rust
//! use chat_layout::{Alignment, Layout};
//!
//! let layout = Layout::default();
//!
//! let width = layout.measure("§aWelcome!");
//! assert!(width < layout.display_width());
//!
//! let centered = layout.align("§aWelcome!", Alignment::Center);
//! assert!(centered.ends_with("§aWelcome!"));
//!
//! let lines = layout.wrap(&"§6Lorem ipsum dolor sit amet. ".repeat(8));
//! assert!(lines.len() > 1);
//! ```
//!
//! ## Custom glyphs
//!
//! Characters the default font does not know are measured with a fallback
//! width of 5. Register the real widths before measuring:
//!
//! ```rust
//! use std::sync::Arc;
//! use chat_layout::{Layout, WidthTable};
//!
//! let table = Arc::new(WidthTable::new());
//! table.register('✦', 7, 8);
//!
//! let layout = Layout::new(table);
//! assert_eq!(layout.measure("✦"), 7);
//! ```

pub mod align;
pub mod code;
pub mod config;
mod font;
pub mod layout;
pub mod scan;
pub mod table;
mod wrap;

// Re-exports
pub use align::{Alignment, ParseAlignmentError, reserve_for_center, reserve_for_right, spaces};
pub use code::{
    FormatCode, RESET, SECTION_SIGN, last_active_code, last_colors, strip_codes,
    translate_alternate_codes,
};
pub use config::{ConfigLoadError, GlyphConfig, GlyphEntry};
pub use layout::{DEFAULT_DISPLAY_WIDTH, Layout, measure};
pub use scan::{Glyph, KERNING, ScanEvent, Scanner};
pub use table::{FALLBACK_WIDTH, GlyphWidth, RegistrationError, SPACE_WIDTH, WidthTable};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::align::Alignment;
    pub use crate::code::{FormatCode, last_colors, strip_codes};
    pub use crate::config::GlyphConfig;
    pub use crate::layout::{DEFAULT_DISPLAY_WIDTH, Layout};
    pub use crate::table::WidthTable;
}
