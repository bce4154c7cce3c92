//! # Rendering
//!
//! Parsing has no opinion on presentation. Renderers implement
//! [`SegmentVisitor`] and are driven by [`walk_segments`] / [`walk_bullet`].
//!
//! - **`html`**: `HtmlRenderer`, an escaped HTML fragment writer

pub mod html;

use crate::parsing::{ParsedBullet, inline::TextSegment};

/// Receives segments in source order.
pub trait SegmentVisitor {
    fn plain(&mut self, text: &str);
    fn inline_code(&mut self, text: &str);
    fn bold(&mut self, text: &str);

    /// A whole-bullet code sample. Defaults to emitting the body as plain text.
    fn code_block(&mut self, language: &str, content: &str) {
        let _ = language;
        self.plain(content);
    }
}

/// Feeds each segment to the matching visitor method.
pub fn walk_segments<V: SegmentVisitor + ?Sized>(segments: &[TextSegment], visitor: &mut V) {
    for segment in segments {
        match segment {
            TextSegment::PlainText { text } => visitor.plain(text),
            TextSegment::InlineCode { text } => visitor.inline_code(text),
            TextSegment::BoldText { text } => visitor.bold(text),
        }
    }
}

/// Feeds a parsed bullet to the visitor.
pub fn walk_bullet<V: SegmentVisitor + ?Sized>(bullet: &ParsedBullet, visitor: &mut V) {
    match bullet {
        ParsedBullet::Code { language, content } => visitor.code_block(language, content),
        ParsedBullet::Inline(segments) => walk_segments(segments, visitor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_bullet;
    use pretty_assertions::assert_eq;

    /// Records visitor calls as tagged strings.
    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl SegmentVisitor for Recorder {
        fn plain(&mut self, text: &str) {
            self.0.push(format!("plain:{text}"));
        }
        fn inline_code(&mut self, text: &str) {
            self.0.push(format!("code:{text}"));
        }
        fn bold(&mut self, text: &str) {
            self.0.push(format!("bold:{text}"));
        }
    }

    #[test]
    fn walks_segments_in_order() {
        let mut rec = Recorder::default();
        walk_bullet(&parse_bullet("a `b` **c**"), &mut rec);
        assert_eq!(rec.0, ["plain:a ", "code:b", "plain: ", "bold:c"]);
    }

    #[test]
    fn default_code_block_falls_back_to_plain() {
        let mut rec = Recorder::default();
        walk_bullet(&parse_bullet("CODE:sh:\nls -la\n"), &mut rec);
        assert_eq!(rec.0, ["plain:ls -la"]);
    }
}
