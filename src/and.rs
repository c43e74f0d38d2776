use crate::cursor::ByteCursor;
use crate::error::ParseError;
use crate::map::MapExt;
use crate::parser::{BoxedParser, Parser};

/// Parser combinator that sequences two parsers and returns both results as
/// a tuple.
///
/// If the second parser fails, the first parser's value is dropped and the
/// sequence fails with the second parser's error, positioned after the
/// consumed prefix. That position is what commits an enclosing alternation
/// or repetition.
///
/// Note: chaining multiple `.and()` calls produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples. The destructuring pattern is
/// explicit about the parsing order; for same-typed runtime lists use
/// `sequence` instead.
pub struct And<O1, O2> {
    first: BoxedParser<O1>,
    second: BoxedParser<O2>,
}

impl<O1, O2> And<O1, O2> {
    pub fn new<P1, P2>(first: P1, second: P2) -> Self
    where
        P1: Parser<Output = O1> + 'static,
        P2: Parser<Output = O2> + 'static,
    {
        And {
            first: Box::new(first),
            second: Box::new(second),
        }
    }
}

impl<O1, O2> Parser for And<O1, O2> {
    type Output = (O1, O2);

    fn parse<'src>(
        &self,
        cursor: ByteCursor<'src>,
    ) -> Result<((O1, O2), ByteCursor<'src>), ParseError> {
        let (first, cursor) = self.first.parse(cursor)?;
        let (second, cursor) = self.second.parse(cursor)?;
        Ok(((first, second), cursor))
    }
}

/// Convenience function to create an And parser.
pub fn and<P1, P2>(first: P1, second: P2) -> And<P1::Output, P2::Output>
where
    P1: Parser + 'static,
    P2: Parser + 'static,
{
    And::new(first, second)
}

/// Extension trait to add .and() method support for parsers.
pub trait AndExt: Parser + Sized {
    fn and<P>(self, other: P) -> And<Self::Output, P::Output>
    where
        P: Parser + 'static,
        Self: 'static,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all parsers.
impl<P> AndExt for P where P: Parser {}

/// Sequence two parsers and keep only the first result.
pub fn left<P1, P2>(first: P1, second: P2) -> impl Parser<Output = P1::Output>
where
    P1: Parser + 'static,
    P2: Parser + 'static,
{
    And::new(first, second).map(|(a, _)| a)
}

/// Sequence two parsers and keep only the second result.
pub fn right<P1, P2>(first: P1, second: P2) -> impl Parser<Output = P2::Output>
where
    P1: Parser + 'static,
    P2: Parser + 'static,
{
    And::new(first, second).map(|(_, b)| b)
}
