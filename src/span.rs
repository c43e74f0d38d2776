use crate::cursor::ByteCursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// A byte range in the source covered by a successful parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start position (inclusive)
    pub start: usize,
    /// End position (exclusive)
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A parser combinator that pairs a successful result with the span of
/// input it consumed.
pub struct Spanned<P> {
    parser: P,
}

impl<P> Spanned<P> {
    pub fn new(parser: P) -> Self {
        Spanned { parser }
    }
}

impl<P> Parser for Spanned<P>
where
    P: Parser,
{
    type Output = (P::Output, Span);

    fn parse<'src>(
        &self,
        cursor: ByteCursor<'src>,
    ) -> Result<((P::Output, Span), ByteCursor<'src>), ParseError> {
        let start = cursor.position();
        let (output, next) = self.parser.parse(cursor)?;
        let span = Span::new(start, next.position());
        Ok(((output, span), next))
    }
}

/// A parser combinator that discards a parser's result and yields the
/// matched input text instead.
///
/// The text is materialized once from the span, so a recognizer built from
/// many small pieces yields its whole match in a single allocation. The
/// regex front-end wraps its compiled recognizers in this.
pub struct Captured<P> {
    parser: P,
}

impl<P> Captured<P> {
    pub fn new(parser: P) -> Self {
        Captured { parser }
    }
}

impl<P> Parser for Captured<P>
where
    P: Parser,
{
    type Output = String;

    fn parse<'src>(
        &self,
        cursor: ByteCursor<'src>,
    ) -> Result<(String, ByteCursor<'src>), ParseError> {
        let start = cursor.position();
        let (_, next) = self.parser.parse(cursor)?;
        let bytes = &cursor.source().bytes()[start..next.position()];
        Ok((String::from_utf8_lossy(bytes).into_owned(), next))
    }
}

/// Convenience function to create a Spanned parser.
pub fn spanned<P>(parser: P) -> Spanned<P>
where
    P: Parser,
{
    Spanned::new(parser)
}

/// Convenience function to create a Captured parser.
pub fn capture<P>(parser: P) -> Captured<P>
where
    P: Parser,
{
    Captured::new(parser)
}

/// Extension trait to add span tracking to any parser.
pub trait SpanExt: Parser + Sized {
    fn spanned(self) -> Spanned<Self> {
        Spanned::new(self)
    }

    fn captured(self) -> Captured<Self> {
        Captured::new(self)
    }
}

/// Implement SpanExt for all parsers.
impl<P> SpanExt for P where P: Parser {}
