use crate::cursor::ByteCursor;
use crate::error::ParseError;
use crate::map::MapExt;
use crate::parser::Parser;

/// Parser combinator that matches zero or more occurrences of the given
/// parser.
///
/// The repetition stops cleanly when an attempt fails without consuming
/// input. An attempt that fails after consuming input fails the whole
/// repetition: the element parser committed to a match and could not
/// complete it, which is an input error, not the end of the list. Wrap the
/// element in `maybe` to opt out.
///
/// An element that succeeds without consuming input stops the repetition
/// after that round instead of looping forever.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<P> Parser for Many<P>
where
    P: Parser,
{
    type Output = Vec<P::Output>;

    fn parse<'src>(
        &self,
        mut cursor: ByteCursor<'src>,
    ) -> Result<(Vec<P::Output>, ByteCursor<'src>), ParseError> {
        let mut results = Vec::new();

        loop {
            let entry = cursor.position();
            match self.parser.parse(cursor) {
                Ok((value, next)) => {
                    results.push(value);
                    let stalled = next.position() == entry;
                    cursor = next;
                    if stalled {
                        break;
                    }
                }
                Err(e) if e.offset() > entry => return Err(e),
                Err(_) => break,
            }
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a Many parser.
pub fn many<P>(parser: P) -> Many<P>
where
    P: Parser,
{
    Many::new(parser)
}

/// Zero-or-more repetition that discards the element values.
pub fn skip_many<P>(parser: P) -> impl Parser<Output = ()>
where
    P: Parser,
{
    many(parser).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::byte::{byte, is_byte};
    use crate::cursor::Source;
    use crate::value::pass;
    use proptest::prelude::*;

    fn cursor(bytes: &[u8]) -> ByteCursor<'_> {
        ByteCursor::new(Source::new("test", bytes))
    }

    #[test]
    fn test_many_zero_matches() {
        let (results, cursor) = many(is_byte(b'a')).parse(cursor(b"xyz")).unwrap();
        assert_eq!(results, vec![]);
        assert_eq!(cursor.value().unwrap(), b'x');
    }

    #[test]
    fn test_many_multiple_matches() {
        let (results, cursor) = many(is_byte(b'a')).parse(cursor(b"aaabcd")).unwrap();
        assert_eq!(results, vec![b'a', b'a', b'a']);
        assert_eq!(cursor.value().unwrap(), b'b');
    }

    #[test]
    fn test_many_runs_to_eof() {
        let (results, cursor) = many(byte()).parse(cursor(b"hello")).unwrap();
        assert_eq!(results, vec![b'h', b'e', b'l', b'l', b'o']);
        assert!(cursor.at_end());
    }

    #[test]
    fn test_many_empty_input() {
        let (results, _) = many(is_byte(b'a')).parse(cursor(b"")).unwrap();
        assert_eq!(results, vec![]);
    }

    #[test]
    fn test_many_propagates_consuming_failure() {
        use crate::and::AndExt;
        use crate::map::MapExt;

        // Elements are "ab" pairs; the trailing lone 'a' commits and fails.
        let parser = many(is_byte(b'a').and(is_byte(b'b')).map(|_| ()));

        let err = parser.parse(cursor(b"ababax")).unwrap_err();
        assert_eq!(err.offset(), 5);
    }

    #[test]
    fn test_many_stops_on_non_consuming_element() {
        let (results, cursor) = many(pass()).parse(cursor(b"abc")).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_skip_many_discards() {
        let parser = skip_many(is_byte(b' '));
        let ((), cursor) = parser.parse(cursor(b"   x")).unwrap();
        assert_eq!(cursor.value().unwrap(), b'x');
    }

    proptest! {
        // many() of a simple matcher succeeds on every input.
        #[test]
        fn prop_many_never_fails(input in proptest::collection::vec(any::<u8>(), 0..64)) {
            let src = Source::new("prop", &input);
            let result = many(is_byte(b'a')).parse(ByteCursor::new(src));
            prop_assert!(result.is_ok());
        }
    }
}
