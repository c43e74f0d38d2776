use crate::cursor::ByteCursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that renames what a failing parser reports.
///
/// On failure the inner error keeps its position but its expected set is
/// replaced with the single given description. This is purely a message
/// improvement: "expected alpha" instead of the union of whatever byte
/// matchers the parser happens to be built from.
pub struct Expect<P> {
    parser: P,
    label: String,
}

impl<P> Expect<P> {
    pub fn new(parser: P, label: impl Into<String>) -> Self {
        Expect {
            parser,
            label: label.into(),
        }
    }
}

impl<P> Parser for Expect<P>
where
    P: Parser,
{
    type Output = P::Output;

    fn parse<'src>(
        &self,
        cursor: ByteCursor<'src>,
    ) -> Result<(P::Output, ByteCursor<'src>), ParseError> {
        self.parser
            .parse(cursor)
            .map_err(|e| e.with_expected(self.label.clone()))
    }
}

/// Convenience function to create an Expect parser.
pub fn expect<P>(parser: P, label: impl Into<String>) -> Expect<P>
where
    P: Parser,
{
    Expect::new(parser, label)
}

/// Extension trait to add .expect() method support for parsers.
pub trait ExpectExt: Parser + Sized {
    fn expect(self, label: impl Into<String>) -> Expect<Self> {
        Expect::new(self, label)
    }
}

/// Implement ExpectExt for all parsers.
impl<P> ExpectExt for P where P: Parser {}
