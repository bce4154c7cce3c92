use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use super::kinds::CodeBullet;

/// A bullet after phase 1: either prose or a fenced code sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ClassifiedBullet {
    /// Prose, kept verbatim (no trimming).
    PlainBullet { content: String },
    /// A code sample with its language tag and whitespace-trimmed body.
    CodeBullet { language: String, content: String },
}

impl ClassifiedBullet {
    /// Returns true for code samples.
    pub fn is_code(&self) -> bool {
        matches!(self, Self::CodeBullet { .. })
    }

    /// The bullet body: prose as written, or the trimmed code.
    pub fn content(&self) -> &str {
        match self {
            Self::PlainBullet { content } | Self::CodeBullet { content, .. } => content,
        }
    }
}

fn code_bullet_regex() -> &'static Regex {
    static CODE_BULLET_REGEX: OnceLock<Regex> = OnceLock::new();
    CODE_BULLET_REGEX
        .get_or_init(|| Regex::new(&CodeBullet::pattern()).expect("Invalid code bullet regex"))
}

/// Classifies a single lesson bullet.
///
/// A bullet is a code sample when it starts with `CODE:`, followed by a
/// non-empty ASCII word run (the language), a `:`, and the body. The body
/// may span several lines and is trimmed on both ends.
///
/// Anything else, including a `CODE:` prefix that does not match the full
/// form, is returned as [`ClassifiedBullet::PlainBullet`] unchanged.
pub fn classify(bullet: &str) -> ClassifiedBullet {
    if !bullet.starts_with(CodeBullet::PREFIX) {
        return plain(bullet);
    }

    let Some(caps) = code_bullet_regex().captures(bullet) else {
        log::debug!("malformed code bullet, rendering as text: {bullet:?}");
        return plain(bullet);
    };

    ClassifiedBullet::CodeBullet {
        language: caps[1].to_string(),
        content: trim_body(&caps[2]).to_string(),
    }
}

/// Trims Unicode whitespace and byte order marks from both ends.
fn trim_body(body: &str) -> &str {
    body.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

fn plain(bullet: &str) -> ClassifiedBullet {
    ClassifiedBullet::PlainBullet {
        content: bullet.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn code(language: &str, content: &str) -> ClassifiedBullet {
        ClassifiedBullet::CodeBullet {
            language: language.to_string(),
            content: content.to_string(),
        }
    }

    #[rstest]
    #[case("CODE:tsx:const x = 1;", "tsx", "const x = 1;")]
    #[case("CODE:tsx:\n  const x = 1;\n", "tsx", "const x = 1;")]
    #[case("CODE:bash:npm install", "bash", "npm install")]
    #[case("CODE:c_99:int x;", "c_99", "int x;")]
    #[case("CODE:ts:a:b:c", "ts", "a:b:c")]
    #[case("CODE:sh:", "sh", "")]
    #[case("CODE:sh:   \n\t ", "sh", "")]
    #[case("CODE:py:\r\nprint(1)\r\n", "py", "print(1)")]
    #[case("CODE:tsx:\u{FEFF}x\u{FEFF}", "tsx", "x")]
    #[case("CODE:tsx:\u{00A0}\u{3000}x\u{2028}", "tsx", "x")]
    #[case("CODE:tsx:a\u{FEFF}b", "tsx", "a\u{FEFF}b")]
    fn code_bullets(#[case] input: &str, #[case] language: &str, #[case] content: &str) {
        assert_eq!(classify(input), code(language, content));
    }

    #[test]
    fn multiline_body_keeps_inner_lines() {
        let input = "CODE:tsx:const App = () => (\n  <main>\n    <h1>Hi</h1>\n  </main>\n);\n";
        let classified = classify(input);
        assert!(classified.is_code());
        assert_eq!(
            classified.content(),
            "const App = () => (\n  <main>\n    <h1>Hi</h1>\n  </main>\n);"
        );
    }

    #[rstest]
    #[case("CODE:")]
    #[case("CODE::body")]
    #[case("CODE:tsx")]
    #[case("CODE:ts x:body")]
    #[case("CODE:c++:int x;")]
    #[case("CODE:日本:body")]
    #[case("CODE: tsx:body")]
    fn malformed_prefix_falls_back_to_plain(#[case] input: &str) {
        assert_eq!(
            classify(input),
            ClassifiedBullet::PlainBullet {
                content: input.to_string()
            }
        );
    }

    #[rstest]
    #[case("")]
    #[case("plain sentence")]
    #[case("  leading and trailing  ")]
    #[case("code:tsx:lowercase prefix")]
    #[case(" CODE:tsx:indented prefix")]
    #[case("Use `CODE:tsx:x` inline")]
    fn plain_bullets_are_verbatim(#[case] input: &str) {
        let classified = classify(input);
        assert!(!classified.is_code());
        assert_eq!(classified.content(), input);
    }
}
