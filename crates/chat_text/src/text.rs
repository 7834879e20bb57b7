//! A single piece of chat text.

use std::fmt;

use crate::color::TextColor;
use crate::component::TextComponent;
use crate::event::{ClickEvent, HoverEvent};
use crate::recipient::{Message, Recipient};
use crate::style::TextStyle;

/// Text with a color, styles and optional click and hover events.
///
/// # Example
///
/// ```rust
/// use chat_text::{ChatText, ClickEvent, TextColor, TextStyle};
///
/// let text = ChatText::new("[Spawn]")
///     .with_color(TextColor::Green)
///     .with_style(TextStyle::Bold)
///     .on_click(ClickEvent::run_command("/spawn"));
///
/// assert_eq!(text.text_with_formatting(), "§a§l[Spawn]");
/// assert_eq!(text.styles(), vec![TextStyle::Bold]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ChatText {
    component: TextComponent,
}

impl ChatText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            component: TextComponent::new(text),
        }
    }

    /// Text with a color and any number of styles.
    pub fn styled(text: impl Into<String>, color: TextColor, styles: &[TextStyle]) -> Self {
        Self::new(text).with_color(color).with_styles(styles)
    }

    pub fn with_color(mut self, color: TextColor) -> Self {
        self.set_color(color);
        self
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        style.apply(&mut self.component);
        self
    }

    pub fn with_styles(mut self, styles: &[TextStyle]) -> Self {
        self.apply_styles(styles);
        self
    }

    pub fn on_click(mut self, event: ClickEvent) -> Self {
        self.component.click_event = Some(event);
        self
    }

    pub fn on_hover(mut self, event: HoverEvent) -> Self {
        self.component.hover_event = Some(event);
        self
    }

    pub fn set_color(&mut self, color: TextColor) -> &mut Self {
        self.component.color = Some(color);
        self
    }

    /// Apply `styles` in order; a [`TextStyle::None`] clears everything
    /// applied before it.
    pub fn apply_styles(&mut self, styles: &[TextStyle]) -> &mut Self {
        for style in styles {
            style.apply(&mut self.component);
        }
        self
    }

    pub fn set_click_event(&mut self, event: Option<ClickEvent>) -> &mut Self {
        self.component.click_event = event;
        self
    }

    pub fn set_hover_event(&mut self, event: Option<HoverEvent>) -> &mut Self {
        self.component.hover_event = event;
        self
    }

    /// The text without formatting.
    pub fn text(&self) -> &str {
        &self.component.text
    }

    /// The color, white when none was set.
    pub fn color(&self) -> TextColor {
        self.component.effective_color()
    }

    /// The styles in effect, in the order bold, italic, underline,
    /// obfuscated, strikethrough.
    pub fn styles(&self) -> Vec<TextStyle> {
        [
            TextStyle::Bold,
            TextStyle::Italic,
            TextStyle::Underline,
            TextStyle::Obfuscated,
            TextStyle::Strikethrough,
        ]
        .into_iter()
        .filter(|style| style.is_set(&self.component))
        .collect()
    }

    pub fn click_event(&self) -> Option<&ClickEvent> {
        self.component.click_event.as_ref()
    }

    pub fn hover_event(&self) -> Option<&HoverEvent> {
        self.component.hover_event.as_ref()
    }

    /// The text prefixed with the codes for its color and styles.
    pub fn text_with_formatting(&self) -> String {
        self.component.to_legacy_text()
    }

    pub fn component(&self) -> &TextComponent {
        &self.component
    }

    pub fn into_component(self) -> TextComponent {
        self.component
    }

    /// Deliver this text as a single message.
    pub fn send(&self, recipient: &mut impl Recipient) {
        recipient.deliver(Message::Components(vec![self.component.clone()]));
    }
}

impl From<TextComponent> for ChatText {
    fn from(component: TextComponent) -> Self {
        Self { component }
    }
}

impl From<&str> for ChatText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for ChatText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for ChatText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text_with_formatting())
    }
}
