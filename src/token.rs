#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Position, Span};

/// The value carried by a token.
///
/// Tokens carry the matched text unless the pattern interprets it or a custom consumer replaces
/// it, e.g. an integer pattern yields [Content::Integer].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Content {
    /// Plain text.
    Text(String),
    /// An integer value.
    Integer(i64),
    /// A floating point value.
    Float(f64),
    /// A boolean value.
    Bool(bool),
}

impl Content {
    /// The text if the content is [Content::Text].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The integer if the content is [Content::Integer].
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Content::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// The float if the content is [Content::Float].
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Content::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl std::fmt::Display for Content {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Content::Text(text) => write!(f, "{}", text),
            Content::Integer(i) => write!(f, "{}", i),
            Content::Float(x) => write!(f, "{}", x),
            Content::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<i64> for Content {
    fn from(i: i64) -> Self {
        Content::Integer(i)
    }
}

impl From<f64> for Content {
    fn from(x: f64) -> Self {
        Content::Float(x)
    }
}

impl From<bool> for Content {
    fn from(b: bool) -> Self {
        Content::Bool(b)
    }
}

/// A token produced by the [crate::Tokenizer].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    /// The matched text or the interpreted value.
    content: Content,
    /// The name of the pattern that matched.
    token_type: String,
    /// The line of the first character of the token.
    line: usize,
    /// The character of the first character of the token.
    character: usize,
    /// The bytes of the input consumed for this token.
    span: Span,
}

impl Token {
    /// Create a new token.
    pub fn new(
        content: impl Into<Content>,
        token_type: impl Into<String>,
        position: Position,
        span: Span,
    ) -> Self {
        Self {
            content: content.into(),
            token_type: token_type.into(),
            line: position.line,
            character: position.character,
            span,
        }
    }

    /// Get the content of the token.
    #[inline]
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Get the name of the pattern that produced the token.
    #[inline]
    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    /// Get the line of the token.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Get the character of the token within its line.
    #[inline]
    pub fn character(&self) -> usize {
        self.character
    }

    /// Get the position of the token.
    #[inline]
    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            character: self.character,
        }
    }

    /// Get the span of the consumed input.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// The length of the content rendered as text, in characters. Used to underline the token
    /// in diagnostics.
    pub fn text_len(&self) -> usize {
        match &self.content {
            Content::Text(text) => text.chars().count(),
            other => other.to_string().chars().count(),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({}) at {}.{}",
            self.token_type,
            self.content,
            self.line,
            self.character
        )
    }
}
