/// Module that provides the validated and compiled form of pattern definitions.
pub(crate) mod compiled_pattern;
pub(crate) use compiled_pattern::CompiledPattern;

/// The parser module contains the regex syntax parser.
mod parser;
pub(crate) use parser::parse_regex_syntax;
