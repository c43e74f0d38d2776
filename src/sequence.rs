use crate::cursor::ByteCursor;
use crate::error::ParseError;
use crate::parser::{BoxedParser, Parser};

/// Parser combinator that runs a runtime list of parsers in order and
/// collects every result.
///
/// This is the n-ary form of `and` for same-typed parsers; the grammar
/// compiler assembles its juxtaposition sequences with it. A failing
/// element fails the whole sequence, dropping the results gathered so far.
pub struct Sequence<O> {
    parsers: Vec<BoxedParser<O>>,
}

impl<O> Sequence<O> {
    pub fn new(parsers: Vec<BoxedParser<O>>) -> Self {
        Sequence { parsers }
    }
}

impl<O> Parser for Sequence<O> {
    type Output = Vec<O>;

    fn parse<'src>(
        &self,
        mut cursor: ByteCursor<'src>,
    ) -> Result<(Vec<O>, ByteCursor<'src>), ParseError> {
        let mut results = Vec::with_capacity(self.parsers.len());

        for parser in &self.parsers {
            let (value, next) = parser.parse(cursor)?;
            results.push(value);
            cursor = next;
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a Sequence parser.
pub fn sequence<O>(parsers: Vec<BoxedParser<O>>) -> Sequence<O> {
    Sequence::new(parsers)
}
