//! Module with the pattern definition types and their methods.
use crate::Content;

/// The result of a custom consumer.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsumeResult<'h> {
    /// The consumer recognized a token at the start of the remaining input.
    Matched {
        /// The exact prefix of the remaining input that was consumed.
        consumed: &'h str,
        /// An optional value that replaces the consumed text as the token's content.
        content: Option<Content>,
    },
    /// The consumer did not recognize a token at the start of the remaining input.
    NoMatch,
}

impl<'h> ConsumeResult<'h> {
    /// A match whose content is the consumed text.
    pub fn matched(consumed: &'h str) -> Self {
        ConsumeResult::Matched {
            consumed,
            content: None,
        }
    }

    /// A match whose content replaces the consumed text.
    pub fn matched_with_content(consumed: &'h str, content: impl Into<Content>) -> Self {
        ConsumeResult::Matched {
            consumed,
            content: Some(content.into()),
        }
    }
}

/// The function type of custom consumers.
/// It receives the remaining input and reports what it consumed from its start.
pub type ConsumeFn = dyn for<'h> Fn(&'h str) -> ConsumeResult<'h> + 'static + Send + Sync;

/// The function type of interpreters.
/// It maps the matched text to the token's content or explains why it can't.
pub type InterpretFn = dyn Fn(&str) -> Result<Content, String> + 'static + Send + Sync;

/// The way a pattern definition recognizes its tokens.
pub enum Matcher {
    /// A regular expression that only matches at the start of the remaining input.
    Regex(String),
    /// A function that inspects the remaining input.
    Consumer(Box<ConsumeFn>),
}

impl std::fmt::Debug for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Matcher::Regex(pattern) => f.debug_tuple("Regex").field(pattern).finish(),
            Matcher::Consumer(_) => f.write_str("Consumer"),
        }
    }
}

/// A pattern definition describes one kind of token the tokenizer can recognize.
///
/// The priority of a pattern definition is given by the order of registration at the
/// [crate::Tokenizer]. The first pattern that matches the remaining input wins, regardless of
/// the length of the match.
pub struct PatternDefinition {
    name: String,
    matcher: Matcher,
    ignore: bool,
    interpret: Option<Box<InterpretFn>>,
}

impl PatternDefinition {
    /// Create a pattern definition from a regular expression.
    /// The expression is validated when the definition is registered.
    pub fn regex(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            matcher: Matcher::Regex(pattern.into()),
            ignore: false,
            interpret: None,
        }
    }

    /// Create a pattern definition from a custom consumer.
    pub fn consumer<F>(name: impl Into<String>, consume: F) -> Self
    where
        F: for<'h> Fn(&'h str) -> ConsumeResult<'h> + 'static + Send + Sync,
    {
        Self {
            name: name.into(),
            matcher: Matcher::Consumer(Box::new(consume)),
            ignore: false,
            interpret: None,
        }
    }

    /// Don't emit tokens for this pattern. Matched text still advances the position.
    pub fn ignored(mut self) -> Self {
        self.ignore = true;
        self
    }

    /// Set whether tokens of this pattern are dropped from the output.
    pub fn set_ignore(&mut self, ignore: bool) {
        self.ignore = ignore;
    }

    /// Map the matched text to a different content.
    pub fn with_interpret<F>(mut self, interpret: F) -> Self
    where
        F: Fn(&str) -> Result<Content, String> + 'static + Send + Sync,
    {
        self.interpret = Some(Box::new(interpret));
        self
    }

    /// Get the name of the pattern.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the matcher.
    #[inline]
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Check if matches are dropped from the output.
    #[inline]
    pub fn is_ignored(&self) -> bool {
        self.ignore
    }

    /// Check if the pattern has an interpreter.
    #[inline]
    pub fn has_interpret(&self) -> bool {
        self.interpret.is_some()
    }

    pub(crate) fn into_parts(self) -> (String, Matcher, bool, Option<Box<InterpretFn>>) {
        (self.name, self.matcher, self.ignore, self.interpret)
    }
}

impl std::fmt::Debug for PatternDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternDefinition")
            .field("name", &self.name)
            .field("matcher", &self.matcher)
            .field("ignore", &self.ignore)
            .field("interpret", &self.interpret.is_some())
            .finish()
    }
}

impl std::fmt::Display for PatternDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.matcher {
            Matcher::Regex(pattern) => write!(f, "{}: {}", self.name, pattern.escape_default()),
            Matcher::Consumer(_) => write!(f, "{}: <consumer>", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_definition() {
        let def = PatternDefinition::regex("word", r"[a-z]+").ignored();
        assert_eq!(def.name(), "word");
        assert!(def.is_ignored());
        assert!(!def.has_interpret());
        assert_eq!(def.to_string(), "word: [a-z]+");

        let def = PatternDefinition::consumer("three", |remaining| {
            ConsumeResult::matched(remaining.get(..3).unwrap_or(remaining))
        })
        .with_interpret(|text| Ok(Content::Integer(text.len() as i64)));
        assert!(def.has_interpret());
        assert!(matches!(def.matcher(), Matcher::Consumer(_)));
        assert_eq!(def.to_string(), "three: <consumer>");
    }
}
