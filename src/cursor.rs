use crate::error::ParseError;

/// Borrowed input for a parse: the raw bytes plus a filename label that is
/// carried into error messages. The label is opaque to the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Source<'src> {
    name: &'src str,
    bytes: &'src [u8],
}

impl<'src> Source<'src> {
    pub fn new(name: &'src str, bytes: &'src [u8]) -> Self {
        Source { name, bytes }
    }

    pub fn name(&self) -> &'src str {
        self.name
    }

    pub fn bytes(&self) -> &'src [u8] {
        self.bytes
    }
}

/// A cursor over a byte `Source`.
///
/// The cursor is `Copy`: saving a backtrack point is copying the cursor and
/// restoring is using the copy, both O(1). Line and column are maintained
/// incrementally as the cursor advances, so error values can be stamped with
/// a position without rescanning the input. Lines and columns are 1-based;
/// `\n` starts a new line, `\r` is not line-significant.
#[derive(Debug, Clone, Copy)]
pub enum ByteCursor<'src> {
    Valid {
        src: Source<'src>,
        offset: usize,
        line: usize,
        column: usize,
    },
    EndOfInput {
        src: Source<'src>,
        line: usize,
        column: usize,
    },
}

impl<'src> ByteCursor<'src> {
    pub fn new(src: Source<'src>) -> Self {
        if src.bytes().is_empty() {
            return ByteCursor::EndOfInput {
                src,
                line: 1,
                column: 1,
            };
        }
        ByteCursor::Valid {
            src,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// The byte at the cursor, or `None` at end of input.
    pub fn current(&self) -> Option<u8> {
        match self {
            ByteCursor::Valid { src, offset, .. } => Some(src.bytes()[*offset]),
            ByteCursor::EndOfInput { .. } => None,
        }
    }

    /// Get the byte at the current cursor position.
    ///
    /// Returns an error at end of input.
    pub fn value(&self) -> Result<u8, ParseError> {
        self.current()
            .ok_or_else(|| ParseError::expecting(self, vec!["any character".to_string()]))
    }

    /// Advance the cursor past the current byte.
    ///
    /// At end of input the cursor stays at end of input.
    pub fn next(self) -> Self {
        match self {
            ByteCursor::Valid {
                src,
                offset,
                line,
                column,
            } => {
                let (line, column) = if src.bytes()[offset] == b'\n' {
                    (line + 1, 1)
                } else {
                    (line, column + 1)
                };
                if offset + 1 >= src.bytes().len() {
                    ByteCursor::EndOfInput { src, line, column }
                } else {
                    ByteCursor::Valid {
                        src,
                        offset: offset + 1,
                        line,
                        column,
                    }
                }
            }
            ByteCursor::EndOfInput { .. } => self,
        }
    }

    /// Byte offset of the cursor; the input length at end of input.
    pub fn position(&self) -> usize {
        match self {
            ByteCursor::Valid { offset, .. } => *offset,
            ByteCursor::EndOfInput { src, .. } => src.bytes().len(),
        }
    }

    pub fn line(&self) -> usize {
        match self {
            ByteCursor::Valid { line, .. } | ByteCursor::EndOfInput { line, .. } => *line,
        }
    }

    pub fn column(&self) -> usize {
        match self {
            ByteCursor::Valid { column, .. } | ByteCursor::EndOfInput { column, .. } => *column,
        }
    }

    pub fn source(&self) -> Source<'src> {
        match self {
            ByteCursor::Valid { src, .. } | ByteCursor::EndOfInput { src, .. } => *src,
        }
    }

    pub fn at_end(&self) -> bool {
        matches!(self, ByteCursor::EndOfInput { .. })
    }
}
