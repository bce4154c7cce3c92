use lesson_markup_engine::{
    parse_bullet,
    render::{SegmentVisitor, walk_bullet},
};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Builds terminal lines from bullet segments.
pub struct LineBuilder {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
}

impl LineBuilder {
    pub fn new(marker: &str) -> Self {
        Self {
            lines: Vec::new(),
            current: vec![Span::raw(marker.to_string())],
        }
    }

    pub fn finish(mut self) -> Vec<Line<'static>> {
        self.flush();
        self.lines
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.lines.push(Line::from(std::mem::take(&mut self.current)));
        }
    }

    /// Pushes `text`, starting a new line at every `\n`.
    fn push(&mut self, text: &str, style: Style) {
        for (i, part) in text.split('\n').enumerate() {
            if i > 0 {
                self.flush();
                self.current.push(Span::raw("  "));
            }
            if !part.is_empty() {
                self.current.push(Span::styled(part.to_string(), style));
            }
        }
    }
}

pub fn code_style() -> Style {
    Style::default().fg(Color::Yellow).bg(Color::DarkGray)
}

pub fn bold_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

impl SegmentVisitor for LineBuilder {
    fn plain(&mut self, text: &str) {
        self.push(text, Style::default());
    }

    fn inline_code(&mut self, text: &str) {
        self.push(text, code_style());
    }

    fn bold(&mut self, text: &str) {
        self.push(text, bold_style());
    }

    fn code_block(&mut self, language: &str, content: &str) {
        self.current.push(Span::styled(
            format!("[{language}]"),
            Style::default().fg(Color::DarkGray),
        ));
        self.flush();
        for line in content.lines() {
            self.lines.push(Line::from(Span::styled(
                format!("    {line}"),
                Style::default().fg(Color::Cyan),
            )));
        }
    }
}

/// Renders one bullet as terminal lines, prefixed with `marker`.
pub fn bullet_lines(bullet: &str, marker: &str) -> Vec<Line<'static>> {
    let mut builder = LineBuilder::new(marker);
    walk_bullet(&parse_bullet(bullet), &mut builder);
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn contents(line: &Line<'_>) -> Vec<String> {
        line.spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn inline_segments_become_styled_spans() {
        let lines = bullet_lines("Run `npm install` **now**", "• ");
        assert_eq!(lines.len(), 1);
        assert_eq!(contents(&lines[0]), ["• ", "Run ", "npm install", " ", "now"]);
        assert_eq!(lines[0].spans[2].style, code_style());
        assert_eq!(lines[0].spans[4].style, bold_style());
    }

    #[test]
    fn code_bullet_becomes_indented_block() {
        let lines = bullet_lines("CODE:tsx:\nconst a = 1;\nconst b = 2;\n", "• ");
        assert_eq!(lines.len(), 3);
        assert_eq!(contents(&lines[0]), ["• ", "[tsx]"]);
        assert_eq!(contents(&lines[1]), ["    const a = 1;"]);
        assert_eq!(contents(&lines[2]), ["    const b = 2;"]);
    }

    #[test]
    fn newlines_in_prose_start_new_lines() {
        let lines = bullet_lines("first\nsecond", "1. ");
        assert_eq!(lines.len(), 2);
        assert_eq!(contents(&lines[0]), ["1. ", "first"]);
        assert_eq!(contents(&lines[1]), ["  ", "second"]);
    }

    #[test]
    fn empty_bullet_keeps_marker() {
        let lines = bullet_lines("", "• ");
        assert_eq!(lines.len(), 1);
        assert_eq!(contents(&lines[0]), ["• "]);
    }
}
