#![forbid(unsafe_code)]
// Allow these clippy lints for API ergonomics
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::enum_glob_use)]

//! # Chat Text
//!
//! The message model for chat output: colored and styled text, clickable
//! and hoverable parts, lines built from several parts, and multi-line
//! sections laid out with [`chat_layout`].
//!
//! Output goes to a [`Recipient`], which receives finished lines in order.
//!
//! ## Example
//!
//! ```rust
//! use chat_layout::{Alignment, Layout};
//! use chat_text::prelude::*;
//!
//! let mut line = ChatTextBuilder::new();
//! line.append_styled("[!] ", TextColor::Red, &[TextStyle::Bold])
//!     .append_text("Server restarting soon");
//!
//! let mut section = ChatTextSection::new();
//! section
//!     .push_text("§e§lNotice", Alignment::Center)
//!     .push(line.build(), Alignment::Left);
//!
//! let mut transcript = Transcript::new();
//! section.send(&Layout::default(), &mut transcript);
//! assert_eq!(transcript.len(), 2);
//! ```

pub mod builder;
pub mod color;
pub mod component;
pub mod event;
pub mod recipient;
pub mod section;
pub mod style;
pub mod text;

pub use builder::{BuilderError, ChatTextBuilder};
pub use color::TextColor;
pub use component::TextComponent;
pub use event::{ClickEvent, HoverEvent};
pub use recipient::{Message, Recipient, Transcript};
pub use section::{ChatTextSection, Placement, SectionLine, TextAlignment};
pub use style::TextStyle;
pub use text::ChatText;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::builder::ChatTextBuilder;
    pub use crate::color::TextColor;
    pub use crate::event::{ClickEvent, HoverEvent};
    pub use crate::recipient::{Recipient, Transcript};
    pub use crate::section::{ChatTextSection, TextAlignment};
    pub use crate::style::TextStyle;
    pub use crate::text::ChatText;
}
