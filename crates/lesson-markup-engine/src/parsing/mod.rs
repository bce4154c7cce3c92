//! # Lesson Markup Parsing
//!
//! Two stateless passes over a single lesson bullet.
//!
//! ## Phases
//!
//! 1. **Bullet classification** (`bullet`): a bullet is either a fenced code
//!    sample (`CODE:<language>:<content>`) or plain text
//! 2. **Inline scanning** (`inline`): plain text is split into plain, inline
//!    code and bold segments
//!
//! Code bullets are never inline-scanned; their body is a raw zone.
//!
//! ## Modules
//!
//! - **`kinds`**: delimiter constants (`CodeBullet`, `CodeSpan`, `Bold`)
//! - **`cursor`**: `Cursor` for byte-wise scanning
//! - **`bullet`**: `classify()` and `ClassifiedBullet`
//! - **`inline`**: `scan()` and `TextSegment`

pub mod bullet;
pub mod cursor;
pub mod inline;
pub mod kinds;

use serde::Serialize;

use bullet::{ClassifiedBullet, classify};
use inline::{TextSegment, scan};

/// A bullet after both parsing phases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ParsedBullet {
    /// A fenced code sample, rendered verbatim.
    Code { language: String, content: String },
    /// Prose split into inline segments.
    Inline(Vec<TextSegment>),
}

/// Classifies `bullet` and inline-scans it when it is not a code sample.
pub fn parse_bullet(bullet: &str) -> ParsedBullet {
    match classify(bullet) {
        ClassifiedBullet::CodeBullet { language, content } => {
            ParsedBullet::Code { language, content }
        }
        ClassifiedBullet::PlainBullet { content } => ParsedBullet::Inline(scan(&content)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn code_bullet_is_not_scanned() {
        let parsed = parse_bullet("CODE:sh:echo `date` **now**");
        assert_eq!(
            parsed,
            ParsedBullet::Code {
                language: "sh".to_string(),
                content: "echo `date` **now**".to_string(),
            }
        );
    }

    #[test]
    fn plain_bullet_is_scanned() {
        let parsed = parse_bullet("Run `npm run dev`");
        assert_eq!(
            parsed,
            ParsedBullet::Inline(vec![
                TextSegment::PlainText {
                    text: "Run ".to_string()
                },
                TextSegment::InlineCode {
                    text: "npm run dev".to_string()
                },
            ])
        );
    }

    #[test]
    fn malformed_code_prefix_is_scanned_as_prose() {
        // Falls back to plain text, so the literal prefix is kept and scanned.
        let parsed = parse_bullet("CODE: `x`");
        assert_eq!(
            parsed,
            ParsedBullet::Inline(vec![
                TextSegment::PlainText {
                    text: "CODE: ".to_string()
                },
                TextSegment::InlineCode {
                    text: "x".to_string()
                },
            ])
        );
    }

    #[test]
    fn empty_bullet_has_no_segments() {
        assert_eq!(parse_bullet(""), ParsedBullet::Inline(vec![]));
    }
}
