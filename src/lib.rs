#![forbid(missing_docs)]
//! # `lxr`
//! The `lxr` crate is a small front-end toolkit for lexers and parsers of textual languages.
//!
//! It consists of three parts:
//! * The [Tokenizer] splits text into [Token]s with the help of an ordered list of
//!   [PatternDefinition]s. At each position the first registered pattern that matches wins, so
//!   register more specific patterns, like keywords, before more general ones, like identifiers.
//!   Patterns are either regular expressions anchored at the current position or custom consumer
//!   functions for token shapes regular expressions can't express well, like strings with escape
//!   sequences.
//! * The [TokenCursor] provides lookahead, match and error recovery primitives for hand-written
//!   recursive descent parsers.
//! * The [OperatorShunter] builds expression trees of binary infix operators from a
//!   [PrecedenceTable] with the shunting-yard algorithm.
//!
//! To parse the regular expressions, the crate uses the `regex-syntax` crate.
//!
//! # Example
//! ```rust
//! use lxr::{standard_patterns, OperatorShunter, PatternDefinition, PrecedenceTable,
//!     TokenCursor, TokenizerBuilder};
//!
//! let tokenizer = TokenizerBuilder::new()
//!     .add_pattern(standard_patterns::whitespace())
//!     .add_pattern(standard_patterns::integer())
//!     .add_pattern(PatternDefinition::regex("operator", r"[-+*/]"))
//!     .build()
//!     .expect("TokenizerBuilder error");
//!
//! let tokens = tokenizer.tokenize("1 + 2 * 3").expect("Tokenizer error");
//! let precedences: PrecedenceTable = [("+", 1), ("-", 1), ("*", 2), ("/", 2)]
//!     .into_iter()
//!     .collect();
//!
//! let mut cursor = TokenCursor::new(&tokens);
//! let mut shunter = OperatorShunter::with_builder(&precedences, |op: lxr::Token, l: i64, r: i64| {
//!     match op.content().to_string().as_str() {
//!         "+" => l + r,
//!         "-" => l - r,
//!         "*" => l * r,
//!         _ => l / r,
//!     }
//! });
//! loop {
//!     let operand = cursor.match_token("integer").expect("operand");
//!     shunter.push_operand(operand.content().as_integer().unwrap());
//!     if cursor.at_end() {
//!         break;
//!     }
//!     shunter.push_operator(cursor.match_token("operator").unwrap().clone()).unwrap();
//! }
//! assert_eq!(shunter.finish().unwrap(), 7);
//! ```
//!
//! # Crate features
//! - `serde`: Enabled by default. Tokens, their contents, positions and spans can be serialized
//!   and deserialized with `serde`.

/// Module with error definitions
mod errors;
pub use errors::{LxrError, LxrErrorKind, Result};

/// The module with internal implementation details.
mod internal;

/// Module that provides the pattern definition types
mod pattern;
pub use pattern::{ConsumeFn, ConsumeResult, InterpretFn, Matcher, PatternDefinition};

/// Module that provides a position type and the position tracker
mod position;
pub use position::{Position, PositionTracker};

/// The module with the operator precedence shunter.
mod shunter;
pub use shunter::{AstBuilder, BinaryBuilder, BinaryNode, OperatorShunter, PrecedenceTable};

/// Module that provides a Span type
mod span;
pub use span::Span;

/// Ready-made pattern definitions.
pub mod standard_patterns;

/// Module that provides the Token type
mod token;
pub use token::{Content, Token};

/// The module with the token cursor.
mod token_cursor;
pub use token_cursor::TokenCursor;

/// The module with the tokenizer.
mod tokenizer;
pub use tokenizer::Tokenizer;

/// The module with the tokenizer builder.
mod tokenizer_builder;
pub use tokenizer_builder::TokenizerBuilder;
