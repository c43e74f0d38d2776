use crate::cursor::ByteCursor;
use crate::error::ParseError;

/// Core parser trait for parser combinators.
///
/// A parser either succeeds, returning its output together with the cursor
/// advanced past the consumed input, or fails with a [`ParseError`]. The
/// caller's cursor copy is untouched on failure, so backtracking is simply
/// reusing it.
///
/// Outputs are owned values, which keeps a parser free of the input
/// lifetime: one parser tree, including trees built at runtime by the regex
/// and grammar front-ends, can be run over any number of inputs.
pub trait Parser {
    type Output;

    /// Attempt to parse from the given cursor position.
    fn parse<'src>(
        &self,
        cursor: ByteCursor<'src>,
    ) -> Result<(Self::Output, ByteCursor<'src>), ParseError>;
}

/// The dynamic form of a parser, used wherever trees are composed at
/// runtime: retained parser bodies, n-ary `choice`/`sequence`, and the
/// output of the regex and grammar compilers.
pub type BoxedParser<O> = Box<dyn Parser<Output = O>>;

impl<P: Parser + ?Sized> Parser for &P {
    type Output = P::Output;

    fn parse<'src>(
        &self,
        cursor: ByteCursor<'src>,
    ) -> Result<(Self::Output, ByteCursor<'src>), ParseError> {
        (**self).parse(cursor)
    }
}

impl<P: Parser + ?Sized> Parser for Box<P> {
    type Output = P::Output;

    fn parse<'src>(
        &self,
        cursor: ByteCursor<'src>,
    ) -> Result<(Self::Output, ByteCursor<'src>), ParseError> {
        (**self).parse(cursor)
    }
}

/// Convenience function to box a parser into its dynamic form.
pub fn boxed<P>(parser: P) -> BoxedParser<P::Output>
where
    P: Parser + 'static,
{
    Box::new(parser)
}
