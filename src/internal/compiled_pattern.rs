use log::trace;
use regex_automata::{meta, Anchored, Input};

use crate::{
    pattern::{ConsumeFn, InterpretFn},
    ConsumeResult, LxrError, LxrErrorKind, Matcher, PatternDefinition, Result,
};

use super::parse_regex_syntax;

/// The matcher of a registered pattern.
pub(crate) enum CompiledMatcher {
    /// A regex that is always searched anchored at the start of the remaining input.
    Regex(meta::Regex),
    Consumer(Box<ConsumeFn>),
}

/// A validated pattern definition as it is held by the tokenizer.
pub(crate) struct CompiledPattern {
    pub(crate) name: String,
    pub(crate) matcher: CompiledMatcher,
    pub(crate) ignore: bool,
    pub(crate) interpret: Option<Box<InterpretFn>>,
}

impl CompiledPattern {
    /// Validate the pattern definition and compile its regex, if any.
    pub(crate) fn try_from_definition(definition: PatternDefinition) -> Result<Self> {
        let (name, matcher, ignore, interpret) = definition.into_parts();
        if name.is_empty() {
            return Err(LxrError::new(LxrErrorKind::PatternDefinition(
                "Token types must have a 'name' property".to_string(),
            )));
        }
        let matcher = match matcher {
            Matcher::Regex(pattern) => CompiledMatcher::Regex(Self::compile_regex(&pattern, &name)?),
            Matcher::Consumer(consume) => CompiledMatcher::Consumer(consume),
        };
        Ok(Self {
            name,
            matcher,
            ignore,
            interpret,
        })
    }

    fn compile_regex(pattern: &str, name: &str) -> Result<meta::Regex> {
        let hir = parse_regex_syntax(pattern, name)?;
        // An empty match never advances the input and the tokenizer would loop forever.
        if hir.properties().minimum_len() == Some(0) {
            return Err(LxrError::new(LxrErrorKind::PatternDefinition(format!(
                "Token type '{}' has a 'regexp' that can match the empty string: {}",
                name,
                pattern.escape_default()
            ))));
        }
        meta::Regex::builder()
            .build_from_hir(&hir)
            .map_err(|e| LxrError::new(LxrErrorKind::RegexBuild(e.to_string(), name.to_string())))
    }

    /// Try to match the pattern at the very start of `remaining`.
    ///
    /// The consumed text reported by custom consumers is returned unchecked; the caller has to
    /// verify that it is a prefix of `remaining`.
    pub(crate) fn match_start<'h>(&self, remaining: &'h str) -> ConsumeResult<'h> {
        match &self.matcher {
            CompiledMatcher::Regex(regex) => {
                match regex.find(Input::new(remaining).anchored(Anchored::Yes)) {
                    Some(m) => {
                        trace!("Pattern '{}' matched {:?}", self.name, m.range());
                        ConsumeResult::matched(&remaining[m.range()])
                    }
                    None => ConsumeResult::NoMatch,
                }
            }
            CompiledMatcher::Consumer(consume) => consume(remaining),
        }
    }
}

impl std::fmt::Debug for CompiledPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let matcher = match self.matcher {
            CompiledMatcher::Regex(_) => "Regex",
            CompiledMatcher::Consumer(_) => "Consumer",
        };
        f.debug_struct("CompiledPattern")
            .field("name", &self.name)
            .field("matcher", &matcher)
            .field("ignore", &self.ignore)
            .finish()
    }
}
