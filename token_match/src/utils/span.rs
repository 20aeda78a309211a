//! Source location tracking
//!
//! Tokens carry the span of the text they were produced from so that the
//! chain layer can point diagnostics at the offending token.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in source text with line, column, and byte offset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Position {
    /// Byte offset from start of input (0-based)
    pub offset: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Position {
    pub fn new(offset: usize, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// The starting position (offset 0, line 1, column 1)
    pub fn start() -> Self {
        Self::new(0, 1, 1)
    }

    /// Advance position by one character
    pub fn advance(self, ch: char) -> Self {
        match ch {
            '\n' => Self {
                offset: self.offset + 1,
                line: self.line + 1,
                column: 1,
            },
            _ => Self {
                offset: self.offset + ch.len_utf8(),
                line: self.line,
                column: self.column + 1,
            },
        }
    }

    /// Advance position by a string
    pub fn advance_str(self, s: &str) -> Self {
        s.chars().fold(self, |pos, ch| pos.advance(ch))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A span of source text from start to end position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start position (inclusive)
    pub start: Position,
    /// End position (exclusive)
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(
            start.offset <= end.offset,
            "Span start must not be after end"
        );
        Self { start, end }
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    /// Create a span from byte offsets on line 1 (useful for testing)
    pub fn from_offsets(start: usize, end: usize) -> Self {
        Self {
            start: Position::new(start, 1, start as u32 + 1),
            end: Position::new(end, 1, end as u32 + 1),
        }
    }

    /// Create an unknown/dummy span (useful for generated nodes)
    pub fn dummy() -> Self {
        Self {
            start: Position::start(),
            end: Position::start(),
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.line == self.end.line {
            write!(
                f,
                "{}:{}-{}",
                self.start.line, self.start.column, self.end.column
            )
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_str_tracks_lines() {
        let pos = Position::start().advance_str("ab\ncd");
        assert_eq!(pos, Position::new(5, 2, 3));
    }

    #[test]
    fn test_multiline_display() {
        let start = Position::start();
        let span = Span::new(start, start.advance_str("a\nbc"));
        assert_eq!(span.to_string(), "1:1-2:3");
    }

    #[test]
    fn test_display() {
        assert_eq!(Span::from_offsets(0, 3).to_string(), "1:1-4");
    }
}
