use crate::cursor::ByteCursor;
use crate::error::ParseError;
use crate::parser::{BoxedParser, Parser};

// # Or Combinator - Dynamic Dispatch for Compile Time Performance
//
// This combinator stores its branches as `Box<dyn Parser>`. Without boxing,
// chaining `.or()` calls creates nested types:
//
// ```ignore
// // Or<Or<Or<P1, P2>, P3>, P4>
// let parser = a.or(b).or(c).or(d).or(e); // Gets progressively worse
// ```
//
// Deep generic nesting causes exponential compile times and unreadable
// error messages, and a runtime-built tree (the regex and grammar
// front-ends assemble alternations from parsed input) cannot name such a
// type at all. Boxing flattens every chain to `Or<O>`.
//
// ## Committed choice
//
// The second branch is tried only when the first branch failed without
// consuming input, which the error reveals: a failure offset beyond the
// entry offset means the branch matched a prefix and then stopped. Such a
// failure is propagated instead of masked, so errors point at the real
// problem instead of the start of the alternation. Grammars with ambiguous
// prefixes are left-factored, or the prefix is wrapped in `maybe`.

/// Parser combinator that tries the first parser, and if it fails without
/// consuming input, tries the second parser. The errors of failed branches
/// are merged under the rightmost-failure rule.
pub struct Or<O> {
    first: BoxedParser<O>,
    second: BoxedParser<O>,
}

impl<O> Or<O> {
    pub fn new<P1, P2>(first: P1, second: P2) -> Self
    where
        P1: Parser<Output = O> + 'static,
        P2: Parser<Output = O> + 'static,
    {
        Or {
            first: Box::new(first),
            second: Box::new(second),
        }
    }
}

impl<O> Parser for Or<O> {
    type Output = O;

    fn parse<'src>(
        &self,
        cursor: ByteCursor<'src>,
    ) -> Result<(O, ByteCursor<'src>), ParseError> {
        let entry = cursor.position();
        match self.first.parse(cursor) {
            Ok(result) => Ok(result),
            Err(first_error) if first_error.offset() > entry => Err(first_error),
            Err(first_error) => match self.second.parse(cursor) {
                Ok(result) => Ok(result),
                Err(second_error) => Err(first_error.merge(second_error)),
            },
        }
    }
}

/// Extension trait to add .or() method support for parsers.
pub trait OrExt: Parser + Sized {
    fn or<P>(self, other: P) -> Or<Self::Output>
    where
        P: Parser<Output = Self::Output> + 'static,
        Self: 'static,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers.
impl<P> OrExt for P where P: Parser {}

/// Convenience function to create an Or parser.
pub fn or<P1, P2>(first: P1, second: P2) -> Or<P1::Output>
where
    P1: Parser + 'static,
    P2: Parser<Output = P1::Output> + 'static,
{
    Or::new(first, second)
}

/// N-ary alternation over a runtime list of parsers.
///
/// Equivalent to left-associating `or` over the list, including the
/// committed-choice rule and error merging.
pub struct Choice<O> {
    parsers: Vec<BoxedParser<O>>,
}

impl<O> Choice<O> {
    pub fn new(parsers: Vec<BoxedParser<O>>) -> Self {
        assert!(!parsers.is_empty(), "choice of zero parsers");
        Choice { parsers }
    }
}

/// Convenience function to create a Choice parser.
pub fn choice<O>(parsers: Vec<BoxedParser<O>>) -> Choice<O> {
    Choice::new(parsers)
}

impl<O> Parser for Choice<O> {
    type Output = O;

    fn parse<'src>(
        &self,
        cursor: ByteCursor<'src>,
    ) -> Result<(O, ByteCursor<'src>), ParseError> {
        let entry = cursor.position();
        let mut merged: Option<ParseError> = None;

        for parser in &self.parsers {
            match parser.parse(cursor) {
                Ok(result) => return Ok(result),
                Err(e) => {
                    let committed = e.offset() > entry;
                    merged = Some(match merged {
                        None => e,
                        Some(m) => m.merge(e),
                    });
                    if committed {
                        break;
                    }
                }
            }
        }

        Err(merged.unwrap_or_else(|| ParseError::expecting(&cursor, vec![])))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::byte::is_byte;
    use crate::cursor::Source;
    use crate::map::MapExt;
    use crate::parser::boxed;
    use crate::value::fail;

    fn cursor(bytes: &[u8]) -> ByteCursor<'_> {
        ByteCursor::new(Source::new("test", bytes))
    }

    #[test]
    fn test_or_first_succeeds() {
        let parser = or(is_byte(b'a'), is_byte(b'b'));

        let (byte, cursor) = parser.parse(cursor(b"abc")).unwrap();
        assert_eq!(byte, b'a');
        assert_eq!(cursor.value().unwrap(), b'b');
    }

    #[test]
    fn test_or_second_succeeds() {
        let parser = or(is_byte(b'a'), is_byte(b'b'));

        let (byte, cursor) = parser.parse(cursor(b"bcd")).unwrap();
        assert_eq!(byte, b'b');
        assert_eq!(cursor.value().unwrap(), b'c');
    }

    #[test]
    fn test_or_merges_expected_sets() {
        let parser = is_byte(b'a').or(is_byte(b'b')).or(is_byte(b'c'));

        let err = parser.parse(cursor(b"d")).unwrap_err();
        assert_eq!(
            err.expected(),
            &["a".to_string(), "b".to_string(), "c".to_string()]
        );
        assert_eq!((err.line(), err.column()), (1, 1));
        assert_eq!(err.unexpected(), Some(b'd'));
    }

    #[test]
    fn test_or_fail_identity() {
        let parser = or(fail("nothing").map(|_| 0u8), is_byte(b'a'));

        let (byte, _) = parser.parse(cursor(b"a")).unwrap();
        assert_eq!(byte, b'a');

        let err = parser.parse(cursor(b"z")).unwrap_err();
        assert_eq!(err.expected(), &["nothing".to_string(), "a".to_string()]);
    }

    #[test]
    fn test_or_committed_branch_is_not_retried() {
        // First branch consumes 'a' then fails; the alternation reports
        // that failure instead of trying the second branch.
        let parser = or(
            is_byte(b'a').and(is_byte(b'b')).map(|_| 1),
            is_byte(b'a').map(|_| 2),
        );

        let err = parser.parse(cursor(b"ax")).unwrap_err();
        assert_eq!(err.offset(), 1);
        assert_eq!(err.expected(), &["b".to_string()]);
    }

    #[test]
    fn test_or_rightmost_error_wins() {
        let parser = or(
            is_byte(b'a').map(|_| 0),
            is_byte(b'b').and(is_byte(b'c')).map(|_| 0),
        );

        // Second branch gets further before failing; but it committed, so
        // here both branches fail at offset 0 only for non-'b' input.
        let err = parser.parse(cursor(b"bx")).unwrap_err();
        assert_eq!(err.offset(), 1);
        assert_eq!(err.expected(), &["c".to_string()]);
    }

    #[test]
    fn test_choice_merges_all() {
        let parser = choice(vec![
            boxed(is_byte(b'a')),
            boxed(is_byte(b'b')),
            boxed(is_byte(b'c')),
        ]);

        let err = parser.parse(cursor(b"d")).unwrap_err();
        assert_eq!(
            err.expected(),
            &["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn test_choice_stops_at_committed_branch() {
        let parser = choice(vec![
            boxed(is_byte(b'a').and(is_byte(b'b')).map(|_| 0)),
            boxed(is_byte(b'a').map(|_| 1)),
        ]);

        let err = parser.parse(cursor(b"ax")).unwrap_err();
        assert_eq!(err.offset(), 1);
    }

    #[test]
    #[should_panic(expected = "choice of zero parsers")]
    fn test_choice_empty_panics() {
        let _ = choice::<u8>(vec![]);
    }
}
