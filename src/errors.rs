use thiserror::Error;

use crate::Position;

/// The result type for the `lxr` crate.
pub type Result<T> = std::result::Result<T, LxrError>;

/// The error type for the `lxr` crate.
#[derive(Error, Debug)]
pub struct LxrError {
    /// The source of the error.
    pub source: Box<LxrErrorKind>,
}

impl LxrError {
    /// Create a new `LxrError`.
    pub fn new(kind: LxrErrorKind) -> Self {
        LxrError {
            source: Box::new(kind),
        }
    }

    /// Get the kind of the error.
    #[inline]
    pub fn kind(&self) -> &LxrErrorKind {
        &self.source
    }

    /// Errors raised while registering pattern definitions. These are caller misconfigurations
    /// and never occur during tokenizing.
    pub fn is_pattern_definition_error(&self) -> bool {
        matches!(
            *self.source,
            LxrErrorKind::PatternDefinition(_)
                | LxrErrorKind::RegexSyntax(..)
                | LxrErrorKind::RegexBuild(..)
        )
    }

    /// Runtime lexing errors, including unmatched input.
    pub fn is_tokenizer_error(&self) -> bool {
        matches!(
            *self.source,
            LxrErrorKind::Tokenizer(_) | LxrErrorKind::UnmatchedCharacter { .. }
        )
    }

    /// Runtime errors of the token cursor and the operator shunter.
    pub fn is_parser_error(&self) -> bool {
        matches!(
            *self.source,
            LxrErrorKind::Parser(_)
                | LxrErrorKind::UnexpectedEof { .. }
                | LxrErrorKind::UnexpectedToken { .. }
        )
    }

    /// Whether the error carries enough context to be shown to the end user as is.
    pub fn is_displayable(&self) -> bool {
        matches!(
            *self.source,
            LxrErrorKind::UnmatchedCharacter { .. } | LxrErrorKind::UnexpectedToken { .. }
        )
    }

    /// The position in the input the error refers to, if any.
    pub fn position(&self) -> Option<Position> {
        match *self.source {
            LxrErrorKind::UnmatchedCharacter {
                line, character, ..
            }
            | LxrErrorKind::UnexpectedToken {
                line, character, ..
            } => Some(Position::new(line, character)),
            _ => None,
        }
    }
}

impl std::fmt::Display for LxrError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// The error kind type.
#[derive(Error, Debug)]
pub enum LxrErrorKind {
    /// A pattern definition is incomplete or malformed.
    #[error("{0}")]
    PatternDefinition(String),

    /// The regular expression of a pattern definition could not be parsed.
    /// The second member is the name of the pattern.
    #[error("Token type '{1}': {0}")]
    RegexSyntax(regex_syntax::Error, String),

    /// The regular expression of a pattern definition could not be compiled.
    #[error("Token type '{1}': {0}")]
    RegexBuild(String, String),

    /// Tokenizing could not be started or was aborted.
    #[error("{0}")]
    Tokenizer(String),

    /// No registered pattern matched at the current position.
    #[error("No viable match at {line}.{character}: '{preview}...'")]
    UnmatchedCharacter {
        /// The beginning of the unconsumed input with control characters escaped.
        preview: String,
        /// The line of the first unmatched character.
        line: usize,
        /// The character of the first unmatched character.
        character: usize,
    },

    /// The token cursor or the operator shunter was used incorrectly.
    #[error("{0}")]
    Parser(String),

    /// A token was required but the token stream is exhausted.
    #[error("Expected {expected} but found EOF")]
    UnexpectedEof {
        /// What was expected instead.
        expected: String,
    },

    /// The token found does not fit.
    #[error("Expected {expected} but found {found} at {line}.{character}")]
    UnexpectedToken {
        /// What was expected instead.
        expected: String,
        /// The token type found.
        found: String,
        /// The line of the offending token.
        line: usize,
        /// The character of the offending token.
        character: usize,
        /// The length of the offending token's content in characters.
        length: usize,
    },
}

impl From<LxrErrorKind> for LxrError {
    fn from(kind: LxrErrorKind) -> Self {
        LxrError::new(kind)
    }
}
