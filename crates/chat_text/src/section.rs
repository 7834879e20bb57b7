//! Multi-line sections.
//!
//! A section is an ordered list of lines, each aligned or indented on its
//! own. Rendering lays every line out against a [`Layout`] and yields the
//! resulting messages in order; a long line may become several messages.

use chat_layout::Layout;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::component::TextComponent;
use crate::recipient::{Message, Recipient};
use crate::text::ChatText;

/// The alignment of a section line.
pub type TextAlignment = chat_layout::Alignment;

/// How a section line is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Placement {
    /// Left lines are sent as they are; centered and right lines are wrapped
    /// and the last line padded.
    Aligned(TextAlignment),
    /// Wrapped, with every line indented by this many spaces.
    Indented(u32),
}

impl Default for Placement {
    fn default() -> Self {
        Self::Aligned(TextAlignment::Left)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum LineContent {
    Legacy(String),
    Component(TextComponent),
}

/// One line of a section, before layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionLine {
    content: LineContent,
    placement: Placement,
}

impl SectionLine {
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// The line's text with formatting codes.
    pub fn legacy_text(&self) -> String {
        match &self.content {
            LineContent::Legacy(text) => text.clone(),
            LineContent::Component(component) => component.to_legacy_text(),
        }
    }

    fn layout_lines(&self, layout: &Layout) -> Vec<String> {
        let text = self.legacy_text();
        match self.placement {
            Placement::Aligned(TextAlignment::Left) => vec![text],
            Placement::Aligned(alignment) => layout.align_lines(&text, alignment),
            Placement::Indented(spaces) => layout.wrap_indented(&text, spaces),
        }
    }

    fn render_into(&self, layout: &Layout, out: &mut Vec<Message>) {
        let lines = self.layout_lines(layout);
        match &self.content {
            LineContent::Legacy(_) => out.extend(lines.into_iter().map(Message::Legacy)),
            LineContent::Component(component) => out.extend(
                lines
                    .into_iter()
                    .map(|line| Message::Components(vec![component.with_legacy_text(line)])),
            ),
        }
    }
}

/// An ordered collection of lines.
///
/// # Example
///
/// ```rust
/// use chat_layout::{Alignment, Layout};
/// use chat_text::{ChatText, ChatTextSection, TextColor, Transcript};
///
/// let mut section = ChatTextSection::new();
/// section
///     .push_text("§6§lServer News", Alignment::Center)
///     .push(ChatText::new("Maintenance at noon").with_color(TextColor::Gray), Alignment::Left)
///     .push_text_indented("§7Expect a short outage.", 2);
///
/// let mut transcript = Transcript::new();
/// section.send(&Layout::default(), &mut transcript);
/// assert_eq!(transcript.len(), 3);
/// assert!(transcript.lines()[0].starts_with(' '));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatTextSection {
    lines: Vec<SectionLine>,
}

impl ChatTextSection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text that already carries its formatting codes.
    pub fn push_text(&mut self, text: impl Into<String>, alignment: TextAlignment) -> &mut Self {
        self.push_line(LineContent::Legacy(text.into()), Placement::Aligned(alignment))
    }

    /// Append code-formatted text, wrapped and indented by `spaces`.
    pub fn push_text_indented(&mut self, text: impl Into<String>, spaces: u32) -> &mut Self {
        self.push_line(LineContent::Legacy(text.into()), Placement::Indented(spaces))
    }

    /// Append a chat text. Its click and hover events stay on every line it
    /// is laid out into.
    pub fn push(&mut self, text: impl Into<ChatText>, alignment: TextAlignment) -> &mut Self {
        self.push_line(
            LineContent::Component(text.into().into_component()),
            Placement::Aligned(alignment),
        )
    }

    /// Append a chat text, wrapped and indented by `spaces`.
    pub fn push_indented(&mut self, text: impl Into<ChatText>, spaces: u32) -> &mut Self {
        self.push_line(
            LineContent::Component(text.into().into_component()),
            Placement::Indented(spaces),
        )
    }

    fn push_line(&mut self, content: LineContent, placement: Placement) -> &mut Self {
        self.lines.push(SectionLine { content, placement });
        self
    }

    pub fn lines(&self) -> &[SectionLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lay out every line, in order.
    pub fn render(&self, layout: &Layout) -> Vec<Message> {
        let mut out = Vec::with_capacity(self.lines.len());
        for line in &self.lines {
            line.render_into(layout, &mut out);
        }
        debug!(
            section.lines = self.lines.len(),
            section.messages = out.len(),
            "Section rendered"
        );
        out
    }

    /// Lay out every line and deliver the results in order.
    pub fn send(&self, layout: &Layout, recipient: &mut impl Recipient) {
        for message in self.render(layout) {
            recipient.deliver(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::TextColor;
    use crate::event::ClickEvent;
    use crate::recipient::Transcript;

    #[test]
    fn test_left_line_is_untouched() {
        let long = "word ".repeat(100);
        let mut section = ChatTextSection::new();
        section.push_text(long.clone(), TextAlignment::Left);
        assert_eq!(
            section.render(&Layout::default()),
            vec![Message::Legacy(long)]
        );
    }

    #[test]
    fn test_centered_line_matches_align_center() {
        let layout = Layout::default();
        let mut section = ChatTextSection::new();
        section.push_text("§aTitle", TextAlignment::Center);
        assert_eq!(
            section.render(&layout),
            vec![Message::Legacy(layout.align_center("§aTitle"))]
        );
    }

    #[test]
    fn test_right_line_matches_align_right() {
        let layout = Layout::default();
        let mut section = ChatTextSection::new();
        section.push_text("page 1/3", TextAlignment::Right);
        assert_eq!(
            section.render(&layout),
            vec![Message::Legacy(layout.align_right("page 1/3"))]
        );
    }

    #[test]
    fn test_indented_line_wraps() {
        let layout = Layout::default();
        let text = "lorem ipsum ".repeat(12);
        let mut section = ChatTextSection::new();
        section.push_text_indented(text.clone(), 2);

        let rendered = section.render(&layout);
        let expected: Vec<Message> = layout
            .wrap_indented(&text, 2)
            .into_iter()
            .map(Message::Legacy)
            .collect();
        assert!(rendered.len() > 1);
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_component_lines_keep_events() {
        let layout = Layout::default();
        let text = ChatText::new("click ".repeat(40))
            .with_color(TextColor::Aqua)
            .on_click(ClickEvent::run_command("/go"));

        let mut section = ChatTextSection::new();
        section.push_indented(text, 0);

        let rendered = section.render(&layout);
        assert!(rendered.len() > 1);
        for message in &rendered {
            let Message::Components(components) = message else {
                panic!("expected a component message, got {message:?}");
            };
            assert_eq!(components.len(), 1);
            assert_eq!(
                components[0].click_event,
                Some(ClickEvent::run_command("/go"))
            );
        }
        assert!(rendered[0].to_legacy_text().starts_with("§bclick"));
        assert!(rendered[1].to_legacy_text().starts_with("§r§b"));
    }

    #[test]
    fn test_order_is_preserved() {
        let layout = Layout::default();
        let mut section = ChatTextSection::new();
        section
            .push_text("one", TextAlignment::Left)
            .push(ChatText::new("two"), TextAlignment::Left)
            .push_text("three", TextAlignment::Left);

        let mut transcript = Transcript::new();
        section.send(&layout, &mut transcript);
        assert_eq!(
            transcript.lines(),
            vec!["one".to_string(), "§ftwo".to_string(), "three".to_string()]
        );
    }

    #[test]
    fn test_placement_default_is_left() {
        assert_eq!(
            Placement::default(),
            Placement::Aligned(TextAlignment::Left)
        );
    }
}
