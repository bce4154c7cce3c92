//! # Inline Scanning
//!
//! Cursor-based scanning of lesson prose into typed segments.
//!
//! At every position code spans are tried before bold spans, so the earliest
//! match wins and a tie goes to the code span. Matched content is never
//! re-scanned: `` `**x**` `` is a single code span and `**`x`**` is a single
//! bold span.
//!
//! Both constructs are non-greedy and require at least one content byte.
//! An opener without a matching closer is ordinary text.

use serde::Serialize;

use super::{
    cursor::Cursor,
    kinds::{Bold, CodeSpan},
};

/// One run of text with a single rendering treatment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TextSegment {
    /// Text outside any construct, verbatim.
    PlainText { text: String },
    /// Content that was wrapped in single backticks.
    InlineCode { text: String },
    /// Content that was wrapped in double asterisks.
    BoldText { text: String },
}

impl TextSegment {
    /// The segment content without delimiters.
    pub fn text(&self) -> &str {
        match self {
            Self::PlainText { text } | Self::InlineCode { text } | Self::BoldText { text } => text,
        }
    }

    /// The segment as it appeared in the source, delimiters included.
    pub fn to_markup(&self) -> String {
        match self {
            Self::PlainText { text } => text.clone(),
            Self::InlineCode { text } => CodeSpan::wrap(text),
            Self::BoldText { text } => Bold::wrap(text),
        }
    }
}

/// Scans `text` into an ordered sequence of [`TextSegment`]s.
///
/// The empty string yields no segments. Non-empty input without markup
/// yields a single [`TextSegment::PlainText`] equal to the input.
pub fn scan(text: &str) -> Vec<TextSegment> {
    let mut cur = Cursor::new(text);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<TextSegment>, s: &str, start: usize, end: usize) {
        if end > start {
            out.push(TextSegment::PlainText {
                text: s[start..end].to_string(),
            });
        }
    }

    while !cur.eof() {
        let start = cur.pos();
        // Precedence order: code spans first
        let matched = try_parse_code_span(&mut cur).or_else(|| try_parse_bold(&mut cur));
        if let Some(segment) = matched {
            flush_text(&mut out, text, text_start, start);
            out.push(segment);
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, text, text_start, cur.pos());
    out
}

/// Concatenates the source markup of every segment.
///
/// For any input `s`, `to_markup(&scan(s)) == s`.
pub fn to_markup(segments: &[TextSegment]) -> String {
    segments.iter().map(TextSegment::to_markup).collect()
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns `None` if not at a backtick, if the span is empty, or if it isn't
/// closed. On failure, cursor position is restored.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<TextSegment> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // `
    let inner_start = cur.pos();

    if cur.eat_until(CodeSpan::TICK) == 0 || cur.peek() != Some(CodeSpan::TICK) {
        *cur = saved;
        return None;
    }
    let inner = cur.slice_from(inner_start);
    cur.bump(); // closing `

    Some(TextSegment::InlineCode {
        text: inner.to_string(),
    })
}

/// Attempts to parse a bold span starting at the current position.
///
/// Content runs up to the first `*`; the span only matches if that `*`
/// begins the closing `**`. On failure, cursor position is restored.
fn try_parse_bold(cur: &mut Cursor<'_>) -> Option<TextSegment> {
    let delim = Bold::DELIM.as_bytes();
    if !cur.starts_with(delim) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(delim.len());
    let inner_start = cur.pos();

    if cur.eat_until(Bold::STAR) == 0 || !cur.starts_with(delim) {
        *cur = saved;
        return None;
    }
    let inner = cur.slice_from(inner_start);
    cur.bump_n(delim.len());

    Some(TextSegment::BoldText {
        text: inner.to_string(),
    })
}
