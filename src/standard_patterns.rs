//! Ready-made pattern definitions for common token kinds.
//!
//! These are ordinary [PatternDefinition]s. Mind the registration order when combining them,
//! e.g. register [floating_point] before [integer], otherwise `1.5` is split into `1` and `.5`.

use crate::{ConsumeResult, Content, PatternDefinition};

/// A pattern that matches the given literal text.
pub fn constant(literal: &str, name: &str) -> PatternDefinition {
    PatternDefinition::regex(name, regex_syntax::escape(literal))
}

/// Floating point numbers with a mandatory fraction, like `-1.5` or `.5`, interpreted as
/// [Content::Float].
pub fn floating_point() -> PatternDefinition {
    PatternDefinition::regex("floating point", r"-?\d*\.\d+").with_interpret(|text| {
        text.parse::<f64>()
            .map(Content::Float)
            .map_err(|e| e.to_string())
    })
}

/// Integers like `-123`, interpreted as [Content::Integer].
pub fn integer() -> PatternDefinition {
    PatternDefinition::regex("integer", r"-?\d+").with_interpret(|text| {
        text.parse::<i64>()
            .map(Content::Integer)
            .map_err(|e| e.to_string())
    })
}

/// Spaces and tabs. Ignored.
pub fn whitespace() -> PatternDefinition {
    PatternDefinition::regex("whitespace", r"[ \t]+").ignored()
}

/// Spaces, tabs and line breaks. Ignored.
pub fn whitespace_with_newlines() -> PatternDefinition {
    PatternDefinition::regex("whitespace", r"[ \t\r\n]+").ignored()
}

/// `,`
pub fn comma() -> PatternDefinition {
    constant(",", "comma")
}

/// `.`
pub fn period() -> PatternDefinition {
    constant(".", "period")
}

/// `*`
pub fn star() -> PatternDefinition {
    constant("*", "star")
}

/// `:`
pub fn colon() -> PatternDefinition {
    constant(":", "colon")
}

/// `(`
pub fn open_paren() -> PatternDefinition {
    constant("(", "open paren")
}

/// `)`
pub fn close_paren() -> PatternDefinition {
    constant(")", "close paren")
}

/// `{`
pub fn open_bracket() -> PatternDefinition {
    constant("{", "open bracket")
}

/// `}`
pub fn close_bracket() -> PatternDefinition {
    constant("}", "close bracket")
}

/// `[`
pub fn open_square_bracket() -> PatternDefinition {
    constant("[", "open square bracket")
}

/// `]`
pub fn close_square_bracket() -> PatternDefinition {
    constant("]", "close square bracket")
}

/// Double quoted strings with escape sequences. The token content is the unescaped text
/// without the quotes.
///
/// Supported escapes are `\t`, `\r`, `\n` and `\u` followed by exactly four *decimal* digits
/// giving the code point. A `\u` that is not followed by four digits is kept literally.
/// Any other escape, including `\"`, makes the string unrecognizable, as does a missing closing
/// quote. The tokenizer then reports the unmatched input at the opening quote.
pub fn json_string() -> PatternDefinition {
    PatternDefinition::consumer("string", consume_json_string)
}

fn consume_json_string(remaining: &str) -> ConsumeResult<'_> {
    let mut chars = remaining.char_indices();
    if !matches!(chars.next(), Some((_, '"'))) {
        return ConsumeResult::NoMatch;
    }

    let mut content = String::new();
    while let Some((i, c)) = chars.next() {
        match c {
            '"' => return ConsumeResult::matched_with_content(&remaining[..=i], content),
            '\\' => match chars.next() {
                Some((_, 't')) => content.push('\t'),
                Some((_, 'r')) => content.push('\r'),
                Some((_, 'n')) => content.push('\n'),
                Some((u, 'u')) => match decimal_code_point(&remaining[u + 1..]) {
                    Some(code_point) => {
                        content.push(code_point);
                        chars.nth(3);
                    }
                    None => content.push_str("\\u"),
                },
                _ => return ConsumeResult::NoMatch,
            },
            _ => content.push(c),
        }
    }
    // Unterminated
    ConsumeResult::NoMatch
}

/// The character given by the first four bytes of `text` if they are decimal digits.
fn decimal_code_point(text: &str) -> Option<char> {
    let digits = text.get(..4)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    char::from_u32(digits.parse().ok()?)
}
