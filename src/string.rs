use crate::cursor::ByteCursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser that matches an exact string byte by byte.
///
/// On success the output is an owned copy of the matched text. On failure
/// the error sits at the entry position and names the whole string, so a
/// half-matched literal does not commit an enclosing alternation.
pub struct IsStringParser {
    expected: String,
}

impl IsStringParser {
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

/// Convenience function to create an IsStringParser.
pub fn is_string(expected: impl Into<String>) -> IsStringParser {
    IsStringParser::new(expected)
}

impl Parser for IsStringParser {
    type Output = String;

    fn parse<'src>(
        &self,
        cursor: ByteCursor<'src>,
    ) -> Result<(String, ByteCursor<'src>), ParseError> {
        let mut current = cursor;
        for expected_byte in self.expected.bytes() {
            match current.value() {
                Ok(b) if b == expected_byte => current = current.next(),
                _ => {
                    return Err(ParseError::expecting(
                        &cursor,
                        vec![format!("\"{}\"", self.expected)],
                    ));
                }
            }
        }
        Ok((self.expected.clone(), current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Source;

    fn cursor(bytes: &[u8]) -> ByteCursor<'_> {
        ByteCursor::new(Source::new("test", bytes))
    }

    #[test]
    fn test_is_string_success() {
        let (s, cursor) = is_string("hello").parse(cursor(b"hello world")).unwrap();
        assert_eq!(s, "hello");
        assert_eq!(cursor.value().unwrap(), b' ');
    }

    #[test]
    fn test_is_string_empty_matches_anywhere() {
        let (s, cursor) = is_string("").parse(cursor(b"abc")).unwrap();
        assert_eq!(s, "");
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_is_string_failure_at_first_byte() {
        let err = is_string("hello").parse(cursor(b"world")).unwrap_err();
        assert_eq!(err.offset(), 0);
        assert_eq!(err.expected(), &["\"hello\"".to_string()]);
    }

    #[test]
    fn test_is_string_partial_match_reports_entry_position() {
        // The mismatch is at the third byte but the error names the whole
        // string at the entry position, so alternation can try elsewhere.
        let err = is_string("hello").parse(cursor(b"heXlo")).unwrap_err();
        assert_eq!(err.offset(), 0);
        assert_eq!(err.unexpected(), Some(b'h'));
    }

    #[test]
    fn test_is_string_truncated_input() {
        let err = is_string("hello").parse(cursor(b"hel")).unwrap_err();
        assert_eq!(err.offset(), 0);
    }
}
