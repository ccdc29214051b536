use log::{debug, trace};

use crate::{
    internal::CompiledPattern, ConsumeResult, Content, LxrError, LxrErrorKind, PatternDefinition,
    PositionTracker, Result, Span, Token,
};

/// The number of characters of unmatched input shown in diagnostics.
const PREVIEW_LEN: usize = 15;

/// The language name used when none is configured.
pub(crate) const DEFAULT_LANGUAGE_NAME: &str = "unnamedlanguage";

/// A Tokenizer.
/// It holds an ordered list of pattern definitions and splits input text into tokens.
///
/// The patterns are tried in the order of their registration at each position of the input and
/// the first pattern that matches wins. There is no longest-match rule. Register more specific
/// patterns, e.g. keywords, before more general ones, e.g. identifiers.
///
/// To create a tokenizer, you can use the [crate::TokenizerBuilder] or register the patterns one
/// by one with [Tokenizer::register_pattern].
#[derive(Debug)]
pub struct Tokenizer {
    pub(crate) language_name: String,
    pub(crate) patterns: Vec<CompiledPattern>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Creates a tokenizer without any patterns.
    pub fn new() -> Self {
        Self {
            language_name: DEFAULT_LANGUAGE_NAME.to_string(),
            patterns: Vec::new(),
        }
    }

    /// The name of the language this tokenizer is used for.
    #[inline]
    pub fn language_name(&self) -> &str {
        &self.language_name
    }

    /// The number of registered patterns.
    #[inline]
    pub fn patterns_len(&self) -> usize {
        self.patterns.len()
    }

    /// Validates the pattern definition and appends it to the patterns.
    /// It has a lower priority than all patterns registered before.
    ///
    /// # Errors
    /// The definition is rejected if its name is empty, its regular expression doesn't parse or
    /// its regular expression can match the empty string.
    pub fn register_pattern(&mut self, definition: PatternDefinition) -> Result<()> {
        let pattern = CompiledPattern::try_from_definition(definition)?;
        debug!(
            "{}: registered pattern #{} '{}'",
            self.language_name,
            self.patterns.len(),
            pattern.name
        );
        self.patterns.push(pattern);
        Ok(())
    }

    /// Splits the input into tokens.
    ///
    /// Tokens of ignored patterns are not part of the result but the position tracking takes
    /// their text into account.
    ///
    /// # Errors
    /// * No patterns are registered.
    /// * No pattern matches at some position of the input. The error holds the position and the
    ///   beginning of the unmatched input.
    /// * A custom consumer reports a consumed text that is not a non-empty prefix of the
    ///   remaining input.
    /// * An interpreter fails.
    pub fn tokenize(&self, input: &str) -> Result<Vec<Token>> {
        if self.patterns.is_empty() {
            return Err(LxrError::new(LxrErrorKind::Tokenizer(
                "No token types defined".to_string(),
            )));
        }
        debug!(
            "{}: tokenizing {} bytes with {} patterns",
            self.language_name,
            input.len(),
            self.patterns.len()
        );

        let mut tokens = Vec::new();
        let mut tracker = PositionTracker::new();
        let mut offset = 0;

        while offset < input.len() {
            let remaining = &input[offset..];
            let Some((pattern, consumed, replacement)) = self.first_match(remaining, &tracker)?
            else {
                return Err(LxrError::new(LxrErrorKind::UnmatchedCharacter {
                    preview: preview(remaining),
                    line: tracker.line(),
                    character: tracker.character(),
                }));
            };

            let content = match (&pattern.interpret, replacement) {
                (Some(interpret), _) => interpret(consumed).map_err(|reason| {
                    LxrError::new(LxrErrorKind::Tokenizer(format!(
                        "The interpret function for {} failed at {}.{} on '{}': {}",
                        pattern.name,
                        tracker.line(),
                        tracker.character(),
                        consumed.escape_default(),
                        reason
                    )))
                })?,
                (None, Some(replacement)) => replacement,
                (None, None) => Content::Text(consumed.to_string()),
            };

            let span = Span::new(offset, offset + consumed.len());
            if pattern.ignore {
                trace!("Ignored {} at {}", pattern.name, tracker.position());
            } else {
                let token = Token::new(content, pattern.name.as_str(), tracker.position(), span);
                trace!("Token {}", token);
                tokens.push(token);
            }

            tracker.consume(consumed);
            offset = span.end;
        }

        debug!("{}: produced {} tokens", self.language_name, tokens.len());
        Ok(tokens)
    }

    /// Walks the patterns in registration order and returns the first one that matches at the
    /// start of `remaining`, together with the consumed text and the replacement content of a
    /// custom consumer.
    fn first_match<'h>(
        &self,
        remaining: &'h str,
        tracker: &PositionTracker,
    ) -> Result<Option<(&CompiledPattern, &'h str, Option<Content>)>> {
        for pattern in &self.patterns {
            match pattern.match_start(remaining) {
                ConsumeResult::NoMatch => continue,
                ConsumeResult::Matched { consumed, content } => {
                    // Only custom consumers can get this wrong, anchored regexes can't.
                    if consumed.is_empty() || !remaining.starts_with(consumed) {
                        return Err(LxrError::new(LxrErrorKind::Tokenizer(format!(
                            "The consume function for {} failed to return the start of the \
                             remaining content at {}.{} and instead returned {}",
                            pattern.name,
                            tracker.line(),
                            tracker.character(),
                            consumed
                        ))));
                    }
                    // The consumer may have returned an equal text that isn't part of the input.
                    let consumed = &remaining[..consumed.len()];
                    return Ok(Some((pattern, consumed, content)));
                }
            }
        }
        Ok(None)
    }
}

/// The beginning of the remaining input with control characters made visible.
fn preview(remaining: &str) -> String {
    remaining
        .chars()
        .take(PREVIEW_LEN)
        .fold(String::new(), |mut acc, c| {
            if c.is_control() {
                acc.extend(c.escape_default());
            } else {
                acc.push(c);
            }
            acc
        })
}
