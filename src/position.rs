//! Module with the position type and the position tracker.
//! A position is a struct that contains a line and character number.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A position in the input.
/// The position is represented by a line and character number.
/// The line and character numbers are 1-based.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// The line number of the position.
    pub line: usize,
    /// The character number of the position within its line.
    pub character: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(line: usize, character: usize) -> Self {
        debug_assert!(line > 0, "line number must be greater than 0");
        debug_assert!(character > 0, "character number must be greater than 0");
        Self { line, character }
    }

    /// Get the line number of the position.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Get the character number of the position.
    #[inline]
    pub fn character(&self) -> usize {
        self.character
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.line, self.character)
    }
}

/// Tracks the line and character of the next unconsumed character while text is consumed.
///
/// `\r`, `\n` and `\r\n` each count as exactly one line break. The tracker remembers a trailing
/// `\r` across calls to [PositionTracker::consume], so a `\r\n` split over two calls is still
/// counted once.
#[derive(Clone, Debug, Default)]
pub struct PositionTracker {
    position: Position,
    after_carriage_return: bool,
}

impl PositionTracker {
    /// Create a new tracker positioned at line 1, character 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the tracker over the given text.
    pub fn consume(&mut self, text: &str) {
        for c in text.chars() {
            match c {
                '\r' => {
                    self.position.line += 1;
                    self.position.character = 1;
                    self.after_carriage_return = true;
                }
                '\n' => {
                    if !self.after_carriage_return {
                        self.position.line += 1;
                    }
                    self.position.character = 1;
                    self.after_carriage_return = false;
                }
                _ => {
                    self.position.character += 1;
                    self.after_carriage_return = false;
                }
            }
        }
    }

    /// The position of the next character to be consumed.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// The current line.
    #[inline]
    pub fn line(&self) -> usize {
        self.position.line
    }

    /// The current character within the line.
    #[inline]
    pub fn character(&self) -> usize {
        self.position.character
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracked(text: &str) -> (usize, usize) {
        let mut tracker = PositionTracker::new();
        tracker.consume(text);
        (tracker.line(), tracker.character())
    }

    #[test]
    fn test_position() {
        let pos = Position::new(1, 1);
        assert_eq!(pos.line(), 1);
        assert_eq!(pos.character(), 1);
        assert_eq!(format!("{}", pos), "1.1");
        assert_eq!(Position::default(), pos);
    }

    #[test]
    fn test_initial_position() {
        assert_eq!(tracked(""), (1, 1));
    }

    #[test]
    fn test_first_line() {
        assert_eq!(tracked("1234567890"), (1, 11));
        assert_eq!(tracked("foo"), (1, 4));
    }

    #[test]
    fn test_line_breaks() {
        assert_eq!(tracked("\r"), (2, 1));
        assert_eq!(tracked("\n"), (2, 1));
        assert_eq!(tracked("\r\n"), (2, 1));
        assert_eq!(tracked("foo\rbar"), (2, 4));
        assert_eq!(tracked("foo\nbar"), (2, 4));
        assert_eq!(tracked("foo\r\nbar"), (2, 4));
        assert_eq!(tracked("\n\r"), (3, 1));
        assert_eq!(tracked("\r\r\n\n"), (4, 1));
    }

    #[test]
    fn test_carriage_return_over_several_calls() {
        let mut tracker = PositionTracker::new();
        tracker.consume("\r");
        assert_eq!(tracker.position(), Position::new(2, 1));
        // The preceding \r already counted this line break.
        tracker.consume("\n");
        assert_eq!(tracker.position(), Position::new(2, 1));
        tracker.consume("foo");
        assert_eq!(tracker.position(), Position::new(2, 4));
    }

    #[test]
    fn test_multibyte_characters() {
        assert_eq!(tracked("äöü€"), (1, 5));
    }
}
