use lesson_markup_engine::{ClassifiedBullet, TextSegment};

/// Text output for `classify`.
pub fn describe_classified(classified: &ClassifiedBullet) -> String {
    match classified {
        ClassifiedBullet::CodeBullet { language, content } => format!("code {language}\n{content}"),
        ClassifiedBullet::PlainBullet { .. } => "plain".to_string(),
    }
}

/// Text output for `scan`: one `kind<TAB>"text"` line per segment.
pub fn describe_segments(segments: &[TextSegment]) -> String {
    segments
        .iter()
        .map(|segment| {
            let kind = match segment {
                TextSegment::PlainText { .. } => "plain",
                TextSegment::InlineCode { .. } => "code",
                TextSegment::BoldText { .. } => "bold",
            };
            format!("{kind}\t{:?}", segment.text())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use lesson_markup_engine::{classify, scan};
    use pretty_assertions::assert_eq;

    #[test]
    fn describes_code_bullet() {
        assert_eq!(
            describe_classified(&classify("CODE:tsx:const x = 1;")),
            "code tsx\nconst x = 1;"
        );
    }

    #[test]
    fn describes_plain_bullet() {
        assert_eq!(describe_classified(&classify("CODE:")), "plain");
    }

    #[test]
    fn describes_segments() {
        assert_eq!(
            describe_segments(&scan("Use `npm install` and **save**")),
            "plain\t\"Use \"\ncode\t\"npm install\"\nplain\t\" and \"\nbold\t\"save\""
        );
    }

    #[test]
    fn empty_scan_prints_nothing() {
        assert_eq!(describe_segments(&scan("")), "");
    }
}
