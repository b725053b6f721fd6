//! Colored chat-style messages surfaced to operators and players.
//!
//! Hosts render these however their client protocol expects; [`Message`]
//! itself is just an ordered list of colored text segments. `Display`
//! produces the plain-text form for logs and tests.

use serde::{Deserialize, Serialize};

/// Text colors understood by host chat rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Green,
    Red,
    Yellow,
    White,
    Gray,
}

/// One colored run of text within a [`Message`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub color: Option<Color>,
}

/// A chat-style message built from colored segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Message {
    segments: Vec<Segment>,
}

impl Message {
    /// Creates a single-segment message with no color assigned.
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment {
                text: text.into(),
                color: None,
            }],
        }
    }

    /// Assigns a color to every segment of this message.
    ///
    /// In practice this is called on freshly-built single-segment messages,
    /// `Message::raw("...").color(Color::Green)`.
    pub fn color(mut self, color: Color) -> Self {
        for segment in &mut self.segments {
            segment.color = Some(color);
        }
        self
    }

    /// Concatenates several messages into one, preserving segment colors.
    pub fn join(parts: impl IntoIterator<Item = Message>) -> Self {
        Self {
            segments: parts.into_iter().flat_map(|m| m.segments).collect(),
        }
    }

    /// The segments in render order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The plain text of the message with colors discarded.
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.plain_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_message_has_no_color() {
        let message = Message::raw("hello");
        assert_eq!(message.segments().len(), 1);
        assert_eq!(message.segments()[0].color, None);
        assert_eq!(message.plain_text(), "hello");
    }

    #[test]
    fn test_color_applies_to_segments() {
        let message = Message::raw("ok").color(Color::Green);
        assert_eq!(message.segments()[0].color, Some(Color::Green));
    }

    #[test]
    fn test_join_preserves_order_and_colors() {
        let message = Message::join([
            Message::raw("a").color(Color::Yellow),
            Message::raw("b"),
            Message::raw("c").color(Color::Gray),
        ]);
        assert_eq!(message.plain_text(), "abc");
        assert_eq!(message.segments().len(), 3);
        assert_eq!(message.segments()[0].color, Some(Color::Yellow));
        assert_eq!(message.segments()[1].color, None);
        assert_eq!(message.segments()[2].color, Some(Color::Gray));
    }

    #[test]
    fn test_display_renders_plain_text() {
        let message = Message::join([Message::raw("x "), Message::raw("y")]);
        assert_eq!(message.to_string(), "x y");
    }
}
