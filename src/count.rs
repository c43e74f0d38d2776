use crate::cursor::ByteCursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that matches exactly n occurrences of the given
/// parser.
///
/// Any failure before the n-th success fails the whole repetition; the
/// partial results are dropped.
pub struct Count<P> {
    parser: P,
    n: usize,
}

impl<P> Count<P> {
    pub fn new(parser: P, n: usize) -> Self {
        Count { parser, n }
    }
}

impl<P> Parser for Count<P>
where
    P: Parser,
{
    type Output = Vec<P::Output>;

    fn parse<'src>(
        &self,
        mut cursor: ByteCursor<'src>,
    ) -> Result<(Vec<P::Output>, ByteCursor<'src>), ParseError> {
        let mut results = Vec::with_capacity(self.n);

        for _ in 0..self.n {
            let (value, next) = self.parser.parse(cursor)?;
            results.push(value);
            cursor = next;
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a Count parser.
pub fn count<P>(parser: P, n: usize) -> Count<P>
where
    P: Parser,
{
    Count::new(parser, n)
}
