use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use super::{SegmentVisitor, walk_bullet};
use crate::models::lesson::Lesson;
use crate::parsing::parse_bullet;

/// Writes bullets as an escaped HTML fragment.
///
/// No classes or styles are emitted apart from the `language-*` class on
/// code blocks.
#[derive(Debug, Default)]
pub struct HtmlRenderer {
    out: String,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the fragment written so far.
    pub fn finish(self) -> String {
        self.out
    }

    /// Parses and writes one bullet.
    pub fn render_bullet(&mut self, bullet: &str) {
        walk_bullet(&parse_bullet(bullet), self);
    }

    /// Writes a whole lesson: title, sections, practice tasks and resources.
    pub fn render_lesson(&mut self, lesson: &Lesson) {
        self.out.push_str("<article>\n");
        self.line("h1", &lesson.title);
        if let Some(summary) = &lesson.summary {
            self.line("p", summary);
        }

        for section in &lesson.sections {
            self.out.push_str("<section>\n");
            self.line("h2", &section.title);
            if !section.description.is_empty() {
                self.line("p", &section.description);
            }
            self.list("ul", &section.bullets);
            self.out.push_str("</section>\n");
        }

        for task in &lesson.practice {
            self.out.push_str("<section class=\"practice\">\n");
            self.line("h2", &task.title);
            if !task.description.is_empty() {
                self.line("p", &task.description);
            }
            self.list("ol", &task.steps);
            self.out.push_str("</section>\n");
        }

        if !lesson.resources.is_empty() {
            self.out.push_str("<ul class=\"resources\">\n");
            for resource in &lesson.resources {
                self.out.push_str("<li>");
                match &resource.url {
                    Some(url) => {
                        let _ = write!(
                            self.out,
                            "<a href=\"{}\">{}</a>",
                            encode_double_quoted_attribute(url),
                            encode_text(&resource.label)
                        );
                    }
                    None => self.out.push_str(&encode_text(&resource.label)),
                }
                if !resource.description.is_empty() {
                    let _ = write!(self.out, " {}", encode_text(&resource.description));
                }
                self.out.push_str("</li>\n");
            }
            self.out.push_str("</ul>\n");
        }

        self.out.push_str("</article>\n");
    }

    fn line(&mut self, tag: &str, text: &str) {
        let _ = writeln!(self.out, "<{tag}>{}</{tag}>", encode_text(text));
    }

    fn list(&mut self, tag: &str, bullets: &[String]) {
        if bullets.is_empty() {
            return;
        }
        let _ = writeln!(self.out, "<{tag}>");
        for bullet in bullets {
            self.out.push_str("<li>");
            self.render_bullet(bullet);
            self.out.push_str("</li>\n");
        }
        let _ = writeln!(self.out, "</{tag}>");
    }
}

impl SegmentVisitor for HtmlRenderer {
    fn plain(&mut self, text: &str) {
        self.out.push_str(&encode_text(text));
    }

    fn inline_code(&mut self, text: &str) {
        let _ = write!(self.out, "<code>{}</code>", encode_text(text));
    }

    fn bold(&mut self, text: &str) {
        let _ = write!(self.out, "<strong>{}</strong>", encode_text(text));
    }

    fn code_block(&mut self, language: &str, content: &str) {
        // language is an ASCII word run, safe inside the attribute
        let _ = write!(
            self.out,
            "<pre><code class=\"language-{language}\">{}</code></pre>",
            encode_text(content)
        );
    }
}

/// Renders a single bullet to an HTML fragment.
pub fn render_bullet_html(bullet: &str) -> String {
    let mut renderer = HtmlRenderer::new();
    renderer.render_bullet(bullet);
    renderer.finish()
}

/// Renders a lesson to an HTML fragment.
pub fn render_lesson_html(lesson: &Lesson) -> String {
    let mut renderer = HtmlRenderer::new();
    renderer.render_lesson(lesson);
    renderer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("plain sentence", "plain sentence")]
    #[case(
        "Use `npm install` and **save** the file",
        "Use <code>npm install</code> and <strong>save</strong> the file"
    )]
    #[case("`<Sushi />` & more", "<code>&lt;Sushi /&gt;</code> &amp; more")]
    #[case("CODE:", "CODE:")]
    #[case("", "")]
    fn inline_bullets(#[case] bullet: &str, #[case] expected: &str) {
        assert_eq!(render_bullet_html(bullet), expected);
    }

    #[test]
    fn code_bullet_becomes_pre_block() {
        assert_eq!(
            render_bullet_html("CODE:tsx:\n<h1>{title}</h1>\n"),
            "<pre><code class=\"language-tsx\">&lt;h1&gt;{title}&lt;/h1&gt;</code></pre>"
        );
    }

    #[test]
    fn renders_lesson_fragment() {
        let lesson = Lesson::from_toml_str(
            r#"
title = "Hooks & State"

[[sections]]
title = "useState"
bullets = ["Call `useState`", "CODE:ts:const [n, setN] = useState(0);"]

[[practice]]
title = "Counter"
steps = ["Add **reset**"]

[[resources]]
label = "React docs"
description = "Official"
url = "https://react.dev/?a=1&b=2"

[[resources]]
label = "Notes"
"#,
        )
        .unwrap();

        let expected = "\
<article>
<h1>Hooks &amp; State</h1>
<section>
<h2>useState</h2>
<ul>
<li>Call <code>useState</code></li>
<li><pre><code class=\"language-ts\">const [n, setN] = useState(0);</code></pre></li>
</ul>
</section>
<section class=\"practice\">
<h2>Counter</h2>
<ol>
<li>Add <strong>reset</strong></li>
</ol>
</section>
<ul class=\"resources\">
<li><a href=\"https://react.dev/?a=1&amp;b=2\">React docs</a> Official</li>
<li>Notes</li>
</ul>
</article>
";
        assert_eq!(render_lesson_html(&lesson), expected);
    }
}
