//! Combining several pieces of chat text into one line.

use chat_layout::strip_codes;
use thiserror::Error;

use crate::color::TextColor;
use crate::component::TextComponent;
use crate::recipient::{Message, Recipient};
use crate::style::TextStyle;
use crate::text::ChatText;

/// Error from selecting or editing a part of a [`ChatTextBuilder`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderError {
    #[error("part index {index} is out of range (builder has {len} parts)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("no part is selected")]
    NoSelection,
}

/// Builds a line out of several [`ChatText`] parts.
///
/// Appending a part selects it; [`select`](Self::select) moves the selection
/// to an earlier part, and [`color`](Self::color) and [`style`](Self::style)
/// modify the selected part.
///
/// # Example
///
/// ```rust
/// use chat_text::{ChatTextBuilder, TextColor, TextStyle};
///
/// let mut builder = ChatTextBuilder::new();
/// builder.append_text("Hello, ").append_text("world");
/// builder.color(TextColor::Gold)?.style(&[TextStyle::Bold])?;
///
/// assert_eq!(builder.raw_text(), "Hello, world");
/// assert_eq!(builder.text_with_formatting(), "§fHello, §6§lworld");
/// # Ok::<(), chat_text::BuilderError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatTextBuilder {
    parts: Vec<ChatText>,
    pointer: Option<usize>,
}

impl ChatTextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a part and select it.
    pub fn append(&mut self, text: impl Into<ChatText>) -> &mut Self {
        self.parts.push(text.into());
        self.pointer = Some(self.parts.len() - 1);
        self
    }

    /// Append every part, selecting the last one.
    pub fn append_all<I, T>(&mut self, texts: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ChatText>,
    {
        for text in texts {
            self.append(text);
        }
        self
    }

    /// Append plain text and select it.
    pub fn append_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.append(ChatText::new(text))
    }

    /// Append text with a color and styles and select it.
    pub fn append_styled(
        &mut self,
        text: impl Into<String>,
        color: TextColor,
        styles: &[TextStyle],
    ) -> &mut Self {
        self.append(ChatText::styled(text, color, styles))
    }

    /// Select the part at `index`.
    ///
    /// # Errors
    /// Returns `BuilderError::IndexOutOfRange` if there is no such part.
    pub fn select(&mut self, index: usize) -> Result<&mut Self, BuilderError> {
        if index >= self.parts.len() {
            return Err(BuilderError::IndexOutOfRange {
                index,
                len: self.parts.len(),
            });
        }
        self.pointer = Some(index);
        Ok(self)
    }

    /// The index of the selected part.
    pub fn selected(&self) -> Option<usize> {
        self.pointer
    }

    /// Color the selected part.
    ///
    /// # Errors
    /// Returns `BuilderError::NoSelection` if nothing has been appended.
    pub fn color(&mut self, color: TextColor) -> Result<&mut Self, BuilderError> {
        self.selected_part()?.set_color(color);
        Ok(self)
    }

    /// Apply styles to the selected part.
    ///
    /// # Errors
    /// Returns `BuilderError::NoSelection` if nothing has been appended.
    pub fn style(&mut self, styles: &[TextStyle]) -> Result<&mut Self, BuilderError> {
        self.selected_part()?.apply_styles(styles);
        Ok(self)
    }

    fn selected_part(&mut self) -> Result<&mut ChatText, BuilderError> {
        self.pointer
            .and_then(|index| self.parts.get_mut(index))
            .ok_or(BuilderError::NoSelection)
    }

    pub fn parts(&self) -> &[ChatText] {
        &self.parts
    }

    pub fn get(&self, index: usize) -> Option<&ChatText> {
        self.parts.get(index)
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Every part with its formatting codes, concatenated.
    pub fn text_with_formatting(&self) -> String {
        self.parts.iter().map(ChatText::text_with_formatting).collect()
    }

    /// The combined text with formatting codes removed.
    pub fn raw_text(&self) -> String {
        strip_codes(&self.text_with_formatting())
    }

    /// One component per part.
    pub fn to_components(&self) -> Vec<TextComponent> {
        self.parts
            .iter()
            .map(|part| part.component().clone())
            .collect()
    }

    /// Deliver every part together as one message.
    pub fn send(&self, recipient: &mut impl Recipient) {
        recipient.deliver(Message::Components(self.to_components()));
    }

    /// Combine the parts into a single [`ChatText`] whose text carries the
    /// formatting of each part as codes.
    pub fn build(&self) -> ChatText {
        ChatText::new(self.text_with_formatting())
    }
}

impl<T: Into<ChatText>> FromIterator<T> for ChatTextBuilder {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut builder = Self::new();
        builder.append_all(iter);
        builder
    }
}
