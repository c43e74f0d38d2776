use crate::cursor::ByteCursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that performs negative lookahead.
///
/// Succeeds with () if the given parser fails at the current position.
/// Fails if the given parser succeeds. Never consumes any input regardless
/// of outcome; a successful inner result is dropped.
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    pub fn new(parser: P) -> Self {
        Not { parser }
    }
}

impl<P> Parser for Not<P>
where
    P: Parser,
{
    type Output = ();

    fn parse<'src>(
        &self,
        cursor: ByteCursor<'src>,
    ) -> Result<((), ByteCursor<'src>), ParseError> {
        match self.parser.parse(cursor) {
            Ok(_) => Err(ParseError::expecting(&cursor, vec![])),
            Err(_) => Ok(((), cursor)),
        }
    }
}

/// Convenience function to create a Not parser for negative lookahead.
pub fn not<P>(parser: P) -> Not<P>
where
    P: Parser,
{
    Not::new(parser)
}

/// Extension trait to add .not() method support for parsers.
pub trait NotExt: Parser + Sized {
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

/// Implement NotExt for all parsers.
impl<P> NotExt for P where P: Parser {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::byte::{byte, is_byte};
    use crate::cursor::Source;

    fn cursor(bytes: &[u8]) -> ByteCursor<'_> {
        ByteCursor::new(Source::new("test", bytes))
    }

    #[test]
    fn test_not_fails_on_match() {
        let err = not(is_byte(b'h')).parse(cursor(b"hello")).unwrap_err();
        assert_eq!(err.offset(), 0);
        assert_eq!(err.unexpected(), Some(b'h'));
        assert_eq!(err.to_string(), "test:1:1: error: unexpected 'h'");
    }

    #[test]
    fn test_not_succeeds_on_mismatch_without_consuming() {
        let ((), cursor) = not(is_byte(b'x')).parse(cursor(b"hello")).unwrap();
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.value().unwrap(), b'h');
    }

    #[test]
    fn test_not_restores_after_inner_consumption() {
        use crate::string::is_string;

        // The inner parser would have consumed five bytes; not() discards
        // the attempt entirely.
        let err = not(is_string("hello")).parse(cursor(b"hello")).unwrap_err();
        assert_eq!(err.offset(), 0);
    }

    #[test]
    fn test_not_any_at_eof() {
        let c = cursor(b"x").next();
        assert!(not(byte()).parse(c).is_ok());
    }

    #[test]
    fn test_not_method_syntax() {
        use crate::and::AndExt;
        use crate::ascii::char_class::alphanum;
        use crate::map::MapExt;
        use crate::string::is_string;

        // A keyword must not run into a longer identifier.
        let keyword = is_string("if").and(alphanum().not()).map(|(kw, _)| kw);

        let (kw, rest) = keyword.parse(cursor(b"if(x)")).unwrap();
        assert_eq!(kw, "if");
        assert_eq!(rest.position(), 2);

        assert!(keyword.parse(cursor(b"iffy")).is_err());
    }
}
