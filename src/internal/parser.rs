//! This module contains the parser for the regex syntax of pattern definitions.
//! We use the `regex_syntax` crate to parse the regex syntax into its high-level intermediate
//! representation, which is then compiled into an anchored matcher.

use crate::{LxrError, LxrErrorKind, Result};
use log::trace;
use std::time::Instant;

/// Parse the regex syntax of the pattern definition `name` into its high-level intermediate
/// representation (HIR).
/// # Errors
/// An error is returned if the regex syntax is invalid.
pub(crate) fn parse_regex_syntax(input: &str, name: &str) -> Result<regex_syntax::hir::Hir> {
    let now = Instant::now();
    match regex_syntax::parse(input) {
        Ok(hir) => {
            let elapsed_time = now.elapsed();
            trace!(
                "Parsing of '{}' took {} microseconds.",
                input.escape_default(),
                elapsed_time.as_micros()
            );
            Ok(hir)
        }
        Err(e) => Err(LxrError::new(LxrErrorKind::RegexSyntax(e, name.to_string()))),
    }
}
