//! Documentation and trailing comments

use serde::{Deserialize, Serialize};

/// A single comment as written in the source, delimiters included
/// (`// text` or `/* text */`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub text: String,
}

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Comment body without the `//` or `/* */` markers
    pub fn body(&self) -> &str {
        let text = self.text.as_str();
        if let Some(rest) = text.strip_prefix("//") {
            rest.strip_prefix(' ').unwrap_or(rest)
        } else if let Some(rest) = text.strip_prefix("/*") {
            rest.strip_suffix("*/").unwrap_or(rest).trim()
        } else {
            text
        }
    }
}

/// Contiguous block of comments.
///
/// Absence is modeled as an empty group, never as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentGroup {
    pub comments: Vec<Comment>,
}

impl CommentGroup {
    pub fn new(comments: Vec<Comment>) -> Self {
        Self { comments }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    /// Comment bodies joined by newlines
    pub fn text(&self) -> String {
        self.comments
            .iter()
            .map(Comment::body)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.comments.iter().map(|c| c.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_body_strips_markers() {
        assert_eq!(Comment::new("// Person is a human").body(), "Person is a human");
        assert_eq!(Comment::new("//nolint").body(), "nolint");
        assert_eq!(Comment::new("/* block */").body(), "block");
    }

    #[test]
    fn test_group_text_joins_lines() {
        let group = CommentGroup::new(vec![Comment::new("// one"), Comment::new("// two")]);
        assert_eq!(group.text(), "one\ntwo");
        assert_eq!(group.len(), 2);
        assert!(CommentGroup::empty().is_empty());
    }
}
