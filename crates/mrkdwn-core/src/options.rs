//! Configuration options for mrkdwn rendering

/// Options for mrkdwn rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Bullet list marker, followed by a space in the item prefix
    pub bullet_list_marker: char,

    /// Spaces of indentation per list nesting level
    pub indent_width: usize,

    /// Fence string for preformatted blocks
    pub fence: String,

    /// Escape `&`, `<` and `>` in text and preformatted content
    pub escape_text: bool,
}

impl Options {
    /// Item prefix for a bullet list, e.g. `"* "`
    pub fn bullet_prefix(&self) -> String {
        let mut prefix = String::with_capacity(2);
        prefix.push(self.bullet_list_marker);
        prefix.push(' ');
        prefix
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            bullet_list_marker: '*',
            indent_width: 4,
            fence: "```".to_string(),
            escape_text: false,
        }
    }
}
