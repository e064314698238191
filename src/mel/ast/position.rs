//! Source location utilities for converting byte offsets to line/column positions
//!
//! Lexer and parser work in byte offsets; error reports want lines and columns.
//! Both lines and columns are zero-based here and shifted by one only when
//! displayed.

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// Represents a position in source code (line and column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Provides fast conversion from byte offsets to line/column positions
pub struct SourceLocation {
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl SourceLocation {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self { line_starts }
    }

    /// Convert a byte offset to a line/column position
    pub fn byte_to_position(&self, byte_offset: usize) -> Position {
        let line = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1);

        let column = byte_offset - self.line_starts[line];

        Position::new(line, column)
    }

    /// Position of the start of a byte range
    pub fn range_start(&self, range: &Range<usize>) -> Position {
        self.byte_to_position(range.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_to_position_single_line() {
        let loc = SourceLocation::new("int a;");
        assert_eq!(loc.byte_to_position(0), Position::new(0, 0));
        assert_eq!(loc.byte_to_position(4), Position::new(0, 4));
    }

    #[test]
    fn test_byte_to_position_multiline() {
        let loc = SourceLocation::new("int a;\na = 1;\n");
        assert_eq!(loc.byte_to_position(7), Position::new(1, 0));
        assert_eq!(loc.byte_to_position(11), Position::new(1, 4));
        assert_eq!(loc.byte_to_position(14), Position::new(2, 0));
    }

    #[test]
    fn test_display_is_one_based() {
        assert_eq!(Position::new(0, 0).to_string(), "1:1");
        assert_eq!(Position::new(2, 7).to_string(), "3:8");
    }
}
