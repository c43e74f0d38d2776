use crate::cursor::ByteCursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that makes a parser optional.
///
/// Succeeds with `Some(value)` if the inner parser succeeds and `None` if
/// it fails, never consuming input on the `None` path. This is the explicit
/// backtracking point of the library: a failure inside the inner parser is
/// absorbed here even when it happened after consuming input, so wrapping
/// an ambiguous prefix in `maybe` restores full backtracking where the
/// committed-choice rule of `or` would otherwise cut it off.
pub struct Maybe<P> {
    parser: P,
}

impl<P> Maybe<P> {
    pub fn new(parser: P) -> Self {
        Maybe { parser }
    }
}

impl<P> Parser for Maybe<P>
where
    P: Parser,
{
    type Output = Option<P::Output>;

    fn parse<'src>(
        &self,
        cursor: ByteCursor<'src>,
    ) -> Result<(Option<P::Output>, ByteCursor<'src>), ParseError> {
        match self.parser.parse(cursor) {
            Ok((value, cursor)) => Ok((Some(value), cursor)),
            Err(_) => Ok((None, cursor)),
        }
    }
}

/// Convenience function to create a Maybe parser.
pub fn maybe<P>(parser: P) -> Maybe<P>
where
    P: Parser,
{
    Maybe::new(parser)
}

/// Extension trait to add .maybe() method support for parsers.
pub trait MaybeExt: Parser + Sized {
    fn maybe(self) -> Maybe<Self> {
        Maybe::new(self)
    }
}

/// Implement MaybeExt for all parsers.
impl<P> MaybeExt for P where P: Parser {}
