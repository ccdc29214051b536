use crate::{tokenizer::DEFAULT_LANGUAGE_NAME, PatternDefinition, Result, Tokenizer};

/// A builder for creating a tokenizer.
#[derive(Debug, Default)]
pub struct TokenizerBuilder {
    language_name: Option<String>,
    patterns: Vec<PatternDefinition>,
}

impl TokenizerBuilder {
    /// Creates a new tokenizer builder.
    pub fn new() -> Self {
        Self {
            language_name: None,
            patterns: Vec::new(),
        }
    }

    /// Sets the name of the language the tokenizer is used for. It shows up in log messages.
    pub fn language_name(mut self, name: impl Into<String>) -> Self {
        self.language_name = Some(name.into());
        self
    }

    /// Adds a pattern definition with a lower priority than all patterns added before.
    pub fn add_pattern(mut self, pattern: PatternDefinition) -> Self {
        self.patterns.push(pattern);
        self
    }

    /// Adds multiple pattern definitions in the order of iteration.
    pub fn add_patterns(mut self, patterns: impl IntoIterator<Item = PatternDefinition>) -> Self {
        self.patterns.extend(patterns);
        self
    }

    /// Builds the tokenizer from the tokenizer builder.
    /// The pattern definitions are registered in the order they were added. The first
    /// registration error is returned.
    pub fn build(self) -> Result<Tokenizer> {
        let mut tokenizer = Tokenizer::new();
        tokenizer.language_name = self
            .language_name
            .unwrap_or_else(|| DEFAULT_LANGUAGE_NAME.to_string());
        for pattern in self.patterns {
            tokenizer.register_pattern(pattern)?;
        }
        Ok(tokenizer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LxrErrorKind;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_tokenizer_builder() {
        init();
        let tokenizer = TokenizerBuilder::new()
            .language_name("calc")
            .add_patterns([
                PatternDefinition::regex("newline", r"\r\n|\r|\n"),
                PatternDefinition::regex("line comment", r"//.*"),
            ])
            .build()
            .unwrap();
        assert_eq!(tokenizer.language_name(), "calc");
        assert_eq!(tokenizer.patterns_len(), 2);
        assert_eq!(tokenizer.patterns[1].name, "line comment");
    }

    #[test]
    fn test_default_language_name() {
        init();
        let tokenizer = TokenizerBuilder::new()
            .add_pattern(PatternDefinition::regex("a", "a"))
            .build()
            .unwrap();
        assert_eq!(tokenizer.language_name(), "unnamedlanguage");
    }

    #[test]
    fn test_first_registration_error_is_reported() {
        init();
        let err = TokenizerBuilder::new()
            .add_pattern(PatternDefinition::regex("a", "a"))
            .add_pattern(PatternDefinition::regex("", "b"))
            .add_pattern(PatternDefinition::regex("c", "("))
            .build()
            .unwrap_err();
        assert!(matches!(*err.source, LxrErrorKind::PatternDefinition(_)));
    }
}
