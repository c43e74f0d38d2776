use crate::cursor::ByteCursor;
use crate::error::ParseError;
use crate::many::many;
use crate::map::MapExt;
use crate::parser::Parser;

/// Parser combinator that matches one or more occurrences of the given
/// parser.
///
/// The first attempt must succeed; afterwards the repetition behaves like
/// `many`, including failing outright when an attempt fails after
/// consuming input.
pub struct Some<P> {
    parser: P,
}

impl<P> Some<P> {
    pub fn new(parser: P) -> Self {
        Some { parser }
    }
}

impl<P> Parser for Some<P>
where
    P: Parser,
{
    type Output = Vec<P::Output>;

    fn parse<'src>(
        &self,
        cursor: ByteCursor<'src>,
    ) -> Result<(Vec<P::Output>, ByteCursor<'src>), ParseError> {
        let (first, cursor) = self.parser.parse(cursor)?;
        let (mut rest, cursor) = many(&self.parser).parse(cursor)?;
        rest.insert(0, first);
        Ok((rest, cursor))
    }
}

/// Convenience function to create a Some parser.
pub fn some<P>(parser: P) -> Some<P>
where
    P: Parser,
{
    Some::new(parser)
}

/// One-or-more repetition that discards the element values.
pub fn skip_some<P>(parser: P) -> impl Parser<Output = ()>
where
    P: Parser,
{
    some(parser).map(|_| ())
}
