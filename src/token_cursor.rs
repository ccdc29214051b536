use log::{debug, trace};

use crate::{LxrError, LxrErrorKind, Position, Result, Token};

/// A cursor over a token sequence for hand-written recursive descent parsers.
///
/// Tokens are consumed strictly from the front. The cursor never modifies the underlying slice,
/// it only advances an index.
#[derive(Debug, Clone)]
pub struct TokenCursor<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> TokenCursor<'t> {
    /// Creates a cursor positioned at the first token.
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Checks if the front token is of the given type without consuming it.
    ///
    /// # Errors
    /// No tokens are left.
    pub fn looking_at(&self, token_type: &str) -> Result<bool> {
        Ok(self.peek()?.token_type() == token_type)
    }

    /// Returns the front token without consuming it.
    ///
    /// # Errors
    /// No tokens are left.
    pub fn peek(&self) -> Result<&'t Token> {
        self.front()
            .ok_or_else(|| LxrError::new(LxrErrorKind::Parser("No tokens available".to_string())))
    }

    /// Consumes the front token if it is of the given type.
    ///
    /// # Errors
    /// No tokens are left or the front token is of another type.
    pub fn match_token(&mut self, token_type: &str) -> Result<&'t Token> {
        let Some(token) = self.front() else {
            return Err(LxrError::new(LxrErrorKind::UnexpectedEof {
                expected: token_type.to_string(),
            }));
        };
        if token.token_type() != token_type {
            return Err(unexpected(token_type, token));
        }
        self.pos += 1;
        trace!("Matched {}", token);
        Ok(token)
    }

    /// Consumes the front token whatever its type is.
    ///
    /// # Errors
    /// No tokens are left.
    pub fn advance(&mut self) -> Result<&'t Token> {
        let token = self.front().ok_or_else(|| {
            LxrError::new(LxrErrorKind::UnexpectedEof {
                expected: "token".to_string(),
            })
        })?;
        self.pos += 1;
        Ok(token)
    }

    /// Checks if all tokens are consumed.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Makes sure that all tokens are consumed.
    ///
    /// # Errors
    /// Tokens are left.
    pub fn expect_end(&self) -> Result<()> {
        match self.front() {
            Some(token) => Err(unexpected("EOF", token)),
            None => Ok(()),
        }
    }

    /// Discards tokens up to and including the next token of the given type. If there is no
    /// such token, all tokens are discarded.
    ///
    /// Use this to recover from a syntax error, e.g. skip to the next statement terminator.
    pub fn resynchronize(&mut self, token_type: &str) {
        let start = self.pos;
        self.pos = self.tokens[self.pos.min(self.tokens.len())..]
            .iter()
            .position(|t| t.token_type() == token_type)
            .map_or(self.tokens.len(), |i| start + i + 1);
        debug!(
            "Resynchronized on {}: skipped {} tokens",
            token_type,
            self.pos - start
        );
    }

    /// The position of the front token, if there is one.
    pub fn position(&self) -> Option<Position> {
        self.front().map(Token::position)
    }

    /// The number of tokens not yet consumed.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.pos)
    }

    #[inline]
    fn front(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }
}

impl<'t> From<&'t [Token]> for TokenCursor<'t> {
    fn from(tokens: &'t [Token]) -> Self {
        Self::new(tokens)
    }
}

impl<'t> From<&'t Vec<Token>> for TokenCursor<'t> {
    fn from(tokens: &'t Vec<Token>) -> Self {
        Self::new(tokens)
    }
}

fn unexpected(expected: &str, token: &Token) -> LxrError {
    LxrError::new(LxrErrorKind::UnexpectedToken {
        expected: expected.to_string(),
        found: token.token_type().to_string(),
        line: token.line(),
        character: token.character(),
        length: token.text_len(),
    })
}
