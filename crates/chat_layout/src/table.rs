//! Glyph width lookup.
//!
//! A [`WidthTable`] answers "how many pixel units does this character take?"
//! Built-in metrics come from the default chat font and never change. Hosts
//! can register widths for characters the font does not know about, which is
//! the only mutation the table supports; registrations are never removed.
//!
//! # Example
//!
//! ```rust
//! use chat_layout::WidthTable;
//!
//! let table = WidthTable::new();
//! assert_eq!(table.width(' ', true), 3);
//! assert_eq!(table.width('a', false), 5);
//! assert_eq!(table.width('a', true), 6);
//!
//! assert!(table.register('✦', 7, 8));
//! assert_eq!(table.width('✦', true), 8);
//! assert!(!table.register('a', 9, 9));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::font;

/// Width of the space character, bold or not.
pub const SPACE_WIDTH: u16 = 3;

/// Width of any character without a built-in or registered metric.
pub const FALLBACK_WIDTH: u16 = 5;

/// Normal and bold width of one glyph, in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GlyphWidth {
    normal: u16,
    bold: u16,
}

impl GlyphWidth {
    /// Create a glyph width. Returns `None` if either width is zero.
    pub const fn new(normal: u16, bold: u16) -> Option<Self> {
        if normal == 0 || bold == 0 {
            return None;
        }
        Some(Self { normal, bold })
    }

    /// Metric for a font sprite: bold is one unit wider.
    pub(crate) const fn from_sprite(normal: u16) -> Self {
        Self {
            normal,
            bold: normal + 1,
        }
    }

    /// Width when drawn normally.
    pub const fn normal(&self) -> u16 {
        self.normal
    }

    /// Width when drawn bold.
    pub const fn bold(&self) -> u16 {
        self.bold
    }

    /// Width for the given weight.
    pub const fn get(&self, bold: bool) -> u16 {
        if bold { self.bold } else { self.normal }
    }
}

/// Error registering a custom glyph width.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Widths for {ch:?} must be positive (normal {normal}, bold {bold})")]
    NonPositiveWidth { ch: char, normal: u16, bold: u16 },
    #[error("Glyph {ch:?} already has a built-in width")]
    BuiltinConflict { ch: char },
}

/// Character widths: the built-in font plus runtime registrations.
///
/// Lookups take a shared lock on the registrations, registrations take an
/// exclusive one, so a lookup never sees a half-written entry. Share a table
/// between threads with `Arc<WidthTable>`.
#[derive(Default)]
pub struct WidthTable {
    custom: RwLock<HashMap<char, GlyphWidth>>,
}

impl fmt::Debug for WidthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidthTable")
            .field("custom", &format!("{} glyphs", self.custom_len()))
            .finish()
    }
}

impl WidthTable {
    /// Create a table holding only the built-in font metrics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in metric for `ch`, if the default font has one.
    pub const fn builtin(ch: char) -> Option<GlyphWidth> {
        match font::builtin_width(ch) {
            Some(_) if ch == ' ' => Some(GlyphWidth {
                normal: SPACE_WIDTH,
                bold: SPACE_WIDTH,
            }),
            Some(width) => Some(GlyphWidth::from_sprite(width)),
            None => None,
        }
    }

    /// Returns true if the default font already covers `ch`.
    pub const fn has_builtin(ch: char) -> bool {
        font::builtin_width(ch).is_some()
    }

    /// Registered metric for `ch`, if any.
    pub fn custom(&self, ch: char) -> Option<GlyphWidth> {
        self.read().get(&ch).copied()
    }

    /// Number of registered glyphs.
    pub fn custom_len(&self) -> usize {
        self.read().len()
    }

    /// Width of `ch` in pixel units.
    ///
    /// Space is always [`SPACE_WIDTH`]. Characters without any metric get
    /// [`FALLBACK_WIDTH`].
    pub fn width(&self, ch: char, bold: bool) -> u16 {
        if ch == ' ' {
            return SPACE_WIDTH;
        }
        if let Some(glyph) = Self::builtin(ch) {
            return glyph.get(bold);
        }
        self.custom(ch)
            .map_or(FALLBACK_WIDTH, |glyph| glyph.get(bold))
    }

    /// Register widths for a character the font does not cover.
    ///
    /// Registering the same custom character again overwrites it.
    ///
    /// # Errors
    /// Returns [`RegistrationError::NonPositiveWidth`] if either width is zero
    /// and [`RegistrationError::BuiltinConflict`] if the font already has
    /// `ch`. The table is unchanged in both cases.
    pub fn try_register(&self, ch: char, normal: u16, bold: u16) -> Result<(), RegistrationError> {
        let Some(glyph) = GlyphWidth::new(normal, bold) else {
            debug!(glyph.ch = %ch, glyph.normal = normal, glyph.bold = bold, "Glyph registration rejected: non-positive width");
            return Err(RegistrationError::NonPositiveWidth { ch, normal, bold });
        };
        if Self::has_builtin(ch) {
            debug!(glyph.ch = %ch, "Glyph registration rejected: built-in glyph");
            return Err(RegistrationError::BuiltinConflict { ch });
        }

        let previous = self
            .custom
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(ch, glyph);
        debug!(
            glyph.ch = %ch,
            glyph.normal = normal,
            glyph.bold = bold,
            glyph.replaced = previous.is_some(),
            "Glyph registered"
        );
        Ok(())
    }

    /// Register widths for a character, returning whether it took effect.
    ///
    /// See [`WidthTable::try_register`] for the rules.
    pub fn register(&self, ch: char, normal: u16, bold: u16) -> bool {
        self.try_register(ch, normal, bold).is_ok()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<char, GlyphWidth>> {
        self.custom.read().unwrap_or_else(PoisonError::into_inner)
    }
}
