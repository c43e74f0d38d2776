//! Token-level conveniences built from the core combinators: whitespace
//! handling, symbols, delimiters and whole-input anchoring.

use crate::and::{left, right};
use crate::ascii::char_class::spaces;
use crate::eoi::{eoi, soi};
use crate::parser::Parser;
use crate::string::is_string;

/// Run a parser with surrounding whitespace stripped on both sides.
pub fn strip<P>(parser: P) -> impl Parser<Output = P::Output>
where
    P: Parser + 'static,
{
    right(spaces(), left(parser, spaces()))
}

/// Run a parser and consume any whitespace after it.
pub fn tok<P>(parser: P) -> impl Parser<Output = P::Output>
where
    P: Parser + 'static,
{
    left(parser, spaces())
}

/// Match an exact string as a token, consuming trailing whitespace.
pub fn sym(s: impl Into<String>) -> impl Parser<Output = String> {
    tok(is_string(s))
}

/// Anchor a parser at the start of input.
pub fn start<P>(parser: P) -> impl Parser<Output = P::Output>
where
    P: Parser + 'static,
{
    right(soi(), parser)
}

/// Anchor a parser at the end of input.
pub fn end<P>(parser: P) -> impl Parser<Output = P::Output>
where
    P: Parser + 'static,
{
    left(parser, eoi())
}

/// Anchor a parser at both ends of the input.
pub fn enclose<P>(parser: P) -> impl Parser<Output = P::Output>
where
    P: Parser + 'static,
{
    start(end(parser))
}

/// Parse exactly the whole input, ignoring surrounding whitespace.
pub fn total<P>(parser: P) -> impl Parser<Output = P::Output>
where
    P: Parser + 'static,
{
    enclose(strip(parser))
}

/// Match content between two literal delimiters, returning the content.
pub fn between<P>(parser: P, open: &str, close: &str) -> impl Parser<Output = P::Output>
where
    P: Parser + 'static,
{
    right(is_string(open), left(parser, is_string(close)))
}

pub fn parens<P: Parser + 'static>(parser: P) -> impl Parser<Output = P::Output> {
    between(parser, "(", ")")
}

pub fn braces<P: Parser + 'static>(parser: P) -> impl Parser<Output = P::Output> {
    between(parser, "{", "}")
}

pub fn brackets<P: Parser + 'static>(parser: P) -> impl Parser<Output = P::Output> {
    between(parser, "<", ">")
}

pub fn squares<P: Parser + 'static>(parser: P) -> impl Parser<Output = P::Output> {
    between(parser, "[", "]")
}

/// Match content between two delimiter tokens, each consuming trailing
/// whitespace.
pub fn tok_between<P>(parser: P, open: &str, close: &str) -> impl Parser<Output = P::Output>
where
    P: Parser + 'static,
{
    right(sym(open.to_string()), left(parser, sym(close.to_string())))
}

pub fn tok_parens<P: Parser + 'static>(parser: P) -> impl Parser<Output = P::Output> {
    tok_between(parser, "(", ")")
}

pub fn tok_braces<P: Parser + 'static>(parser: P) -> impl Parser<Output = P::Output> {
    tok_between(parser, "{", "}")
}

pub fn tok_brackets<P: Parser + 'static>(parser: P) -> impl Parser<Output = P::Output> {
    tok_between(parser, "<", ">")
}

pub fn tok_squares<P: Parser + 'static>(parser: P) -> impl Parser<Output = P::Output> {
    tok_between(parser, "[", "]")
}
