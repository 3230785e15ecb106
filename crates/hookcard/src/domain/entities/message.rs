//! Message Entity
//!
//! Provider-neutral notification built by an event formatter before it is
//! wrapped into a provider's wire schema.

use serde::{Deserialize, Serialize};

/// Render `text` as an inline markdown link to `url`
///
/// Neither argument is escaped.
pub fn markdown_link(url: &str, text: &str) -> String {
    format!("[{}]({})", text, url)
}

/// Uppercase the first character of a wire word (`branch` -> `Branch`)
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The single call-to-action attached to a notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub text: String,
    pub url: String,
}

impl Link {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
        }
    }
}

/// Title, ordered detail lines and a primary link
///
/// Lines are append-only. Providers decide how the title is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub title: String,
    pub lines: Vec<String>,
    pub link: Link,
}

impl Message {
    pub fn new(title: impl Into<String>, link: Link) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
            link,
        }
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.push_line(line);
        self
    }

    /// `# title` followed by every line, newline separated
    pub fn markdown_body(&self) -> String {
        std::iter::once(format!("# {}", self.title))
            .chain(self.lines.iter().cloned())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
