/// Inline code span with owned delimiter constant.
///
/// Code spans are raw zones: bold markers inside them are kept as text.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Wraps `text` in backticks.
    pub fn wrap(text: &str) -> String {
        let tick = Self::TICK as char;
        format!("{tick}{text}{tick}")
    }
}
