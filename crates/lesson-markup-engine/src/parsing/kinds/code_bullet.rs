/// Whole-bullet code sample: `CODE:<language>:<content>`.
pub struct CodeBullet;

impl CodeBullet {
    /// Literal prefix every code bullet starts with.
    pub const PREFIX: &'static str = "CODE:";
    /// Separator between the language tag and the body.
    pub const SEP: char = ':';

    /// Regex source for a full code bullet: prefix, an ASCII word run
    /// captured as the language, separator, then everything (newlines
    /// included) captured as the body.
    pub fn pattern() -> String {
        format!(
            r"(?s)\A{}([A-Za-z0-9_]+){}(.*)\z",
            regex::escape(Self::PREFIX),
            regex::escape(&Self::SEP.to_string()),
        )
    }

    /// Builds the bullet source for a code sample.
    pub fn wrap(language: &str, content: &str) -> String {
        format!("{}{language}{}{content}", Self::PREFIX, Self::SEP)
    }
}
