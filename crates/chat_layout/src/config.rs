//! Glyph configuration files.
//!
//! Hosts that print characters outside the default font (icons, symbols,
//! other scripts) describe their widths in a configuration file and apply it
//! to a [`WidthTable`] before measuring anything.
//!
//! ```toml
//! display_width = 320
//!
//! [[glyph]]
//! char = "✦"
//! normal = 7
//! bold = 8
//! ```
//!
//! # Example
//!
//! ```rust
//! use chat_layout::GlyphConfig;
//!
//! let config = GlyphConfig::from_toml(r#"
//! [[glyph]]
//! char = "✦"
//! normal = 7
//! bold = 8
//! "#).unwrap();
//!
//! let layout = config.into_layout().unwrap();
//! assert_eq!(layout.measure("✦"), 7);
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::layout::{DEFAULT_DISPLAY_WIDTH, Layout};
use crate::table::{RegistrationError, WidthTable};

/// Widths for one custom glyph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphEntry {
    /// The character, as a one-character string.
    #[serde(rename = "char")]
    pub ch: String,
    pub normal: u16,
    pub bold: u16,
}

impl GlyphEntry {
    pub fn new(ch: char, normal: u16, bold: u16) -> Self {
        Self {
            ch: ch.to_string(),
            normal,
            bold,
        }
    }

    /// The configured character, if `ch` holds exactly one.
    pub fn char(&self) -> Option<char> {
        let mut chars = self.ch.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

/// Layout settings and custom glyphs loaded from a file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphConfig {
    /// Overrides the default display width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_width: Option<u32>,

    #[serde(rename = "glyph", skip_serializing_if = "Vec::is_empty")]
    pub glyphs: Vec<GlyphEntry>,
}

impl GlyphConfig {
    /// Load a configuration from TOML text.
    ///
    /// # Errors
    /// Returns `ConfigLoadError` if TOML parsing or validation fails.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self = toml::from_str(toml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from JSON text.
    ///
    /// # Errors
    /// Returns `ConfigLoadError` if JSON parsing or validation fails.
    pub fn from_json(json: &str) -> Result<Self, ConfigLoadError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a file (format inferred by extension).
    ///
    /// # Errors
    /// Returns `ConfigLoadError` if reading, parsing, or validation fails.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml(&content),
            Some("json") => Self::from_json(&content),
            Some(ext) => Err(ConfigLoadError::UnsupportedFormat(ext.into())),
            None => Err(ConfigLoadError::UnsupportedFormat("unknown".into())),
        }
    }

    /// Serialize this configuration to TOML.
    ///
    /// # Errors
    /// Returns `toml::ser::Error` if serialization fails.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Check every entry without touching any table.
    ///
    /// # Errors
    /// Returns `ConfigLoadError::InvalidGlyph` for an entry that is not a
    /// single character, has a zero width or names a built-in glyph, and
    /// `ConfigLoadError::InvalidDisplayWidth` for a zero display width.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.display_width == Some(0) {
            return Err(ConfigLoadError::InvalidDisplayWidth);
        }

        for (index, entry) in self.glyphs.iter().enumerate() {
            let Some(ch) = entry.char() else {
                return Err(ConfigLoadError::InvalidGlyph {
                    index,
                    reason: format!("expected exactly one character, got {:?}", entry.ch),
                });
            };
            if entry.normal == 0 || entry.bold == 0 {
                return Err(ConfigLoadError::InvalidGlyph {
                    index,
                    reason: format!("widths for {ch:?} must be positive"),
                });
            }
            if WidthTable::has_builtin(ch) {
                return Err(ConfigLoadError::InvalidGlyph {
                    index,
                    reason: format!("{ch:?} already has a built-in width"),
                });
            }
        }

        Ok(())
    }

    /// Register every glyph in `table`, returning how many were registered.
    ///
    /// The configuration is validated first, so either all entries are
    /// registered or none are.
    ///
    /// # Errors
    /// Returns `ConfigLoadError` if validation or registration fails.
    pub fn apply(&self, table: &WidthTable) -> Result<usize, ConfigLoadError> {
        self.validate()?;

        for entry in &self.glyphs {
            if let Some(ch) = entry.char() {
                table.try_register(ch, entry.normal, entry.bold)?;
            }
        }

        info!(config.glyphs = self.glyphs.len(), "Glyph configuration applied");
        Ok(self.glyphs.len())
    }

    /// Build a [`Layout`] with a fresh table holding these glyphs.
    ///
    /// # Errors
    /// Returns `ConfigLoadError` if validation fails.
    pub fn into_layout(&self) -> Result<Layout, ConfigLoadError> {
        let table = WidthTable::new();
        self.apply(&table)?;
        Ok(Layout::new(Arc::new(table))
            .with_display_width(self.display_width.unwrap_or(DEFAULT_DISPLAY_WIDTH)))
    }
}

/// Error loading a glyph configuration.
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("Invalid glyph entry #{index}: {reason}")]
    InvalidGlyph { index: usize, reason: String },
    #[error("Display width must be positive")]
    InvalidDisplayWidth,
    #[error("Registration error: {0}")]
    Registration(#[from] RegistrationError),
}
