use crate::cursor::{ByteCursor, Source};
use std::error::Error;
use std::fmt;

/// Error value produced by a failed parse.
///
/// An error records where parsing stopped (filename, 1-based line and
/// column, byte offset), the byte found there (`None` at end of input) and
/// the set of token descriptions that would have allowed parsing to
/// proceed. The set is deduplicated and keeps insertion order so messages
/// are deterministic.
///
/// Errors from alternative branches are combined with [`ParseError::merge`]:
/// the error that progressed furthest into the input supersedes, and at
/// equal offsets the expected sets are unioned. This is what turns a pile
/// of branch failures into a single "expected A, B or C" message.
#[derive(Debug, Clone)]
pub struct ParseError {
    filename: String,
    line: usize,
    column: usize,
    offset: usize,
    unexpected: Option<u8>,
    expected: Vec<String>,
}

impl ParseError {
    /// Build an error at the cursor position with the given expected set.
    pub fn expecting(cursor: &ByteCursor, expected: Vec<String>) -> Self {
        let mut err = ParseError {
            filename: cursor.source().name().to_string(),
            line: cursor.line(),
            column: cursor.column(),
            offset: cursor.position(),
            unexpected: cursor.current(),
            expected: Vec::new(),
        };
        for e in expected {
            err.push_expected(e);
        }
        err
    }

    /// Build an error at a raw byte offset into a source.
    ///
    /// The line and column are recovered by scanning the bytes up to the
    /// offset. Used where no cursor is at hand, such as repositioning a
    /// regex compile error inside the grammar string that contained it.
    pub fn at_offset(src: Source, offset: usize, expected: Vec<String>) -> Self {
        let mut line = 1;
        let mut column = 1;
        for &b in &src.bytes()[..offset.min(src.bytes().len())] {
            if b == b'\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        let mut err = ParseError {
            filename: src.name().to_string(),
            line,
            column,
            offset,
            unexpected: src.bytes().get(offset).copied(),
            expected: Vec::new(),
        };
        for e in expected {
            err.push_expected(e);
        }
        err
    }

    /// Combine this error with the error of an alternative branch.
    ///
    /// The error at the greater offset wins outright. At equal offsets the
    /// expected sets are unioned; position and unexpected byte agree by
    /// construction.
    pub fn merge(mut self, other: ParseError) -> ParseError {
        if other.offset > self.offset {
            return other;
        }
        if self.offset > other.offset {
            return self;
        }
        for e in other.expected {
            self.push_expected(e);
        }
        self
    }

    /// Replace the expected set with a single description, keeping the
    /// position. Used by `expect` to improve messages.
    pub fn with_expected(mut self, label: impl Into<String>) -> ParseError {
        self.expected.clear();
        self.expected.push(label.into());
        self
    }

    fn push_expected(&mut self, e: String) {
        if !self.expected.contains(&e) {
            self.expected.push(e);
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The byte found at the failure position, or `None` at end of input.
    pub fn unexpected(&self) -> Option<u8> {
        self.unexpected
    }

    pub fn expected(&self) -> &[String] {
        &self.expected
    }

    /// The formatted message, identical to the `Display` rendering.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Printable rendering of the byte at a failure position.
fn render_unexpected(b: Option<u8>) -> String {
    match b {
        None => "end of input".to_string(),
        Some(b'\n') => "'\\n'".to_string(),
        Some(b'\t') => "'\\t'".to_string(),
        Some(b'\r') => "'\\r'".to_string(),
        Some(0) => "'\\0'".to_string(),
        Some(b) if (0x20..0x7f).contains(&b) => format!("'{}'", b as char),
        Some(b) => format!("'\\x{:02x}'", b),
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}: error: ", self.filename, self.line, self.column)?;
        if self.expected.is_empty() {
            return write!(f, "unexpected {}", render_unexpected(self.unexpected));
        }
        write!(f, "expected ")?;
        for (i, e) in self.expected.iter().enumerate() {
            if i > 0 {
                if i + 1 == self.expected.len() {
                    write!(f, " or ")?;
                } else {
                    write!(f, ", ")?;
                }
            }
            write!(f, "{}", e)?;
        }
        write!(f, " at {}", render_unexpected(self.unexpected))
    }
}

impl Error for ParseError {}
