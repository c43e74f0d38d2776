//! AST-producing wrappers over the core combinators.
//!
//! Everything here works on `Option<Ast>`, where `None` is a construct
//! that matched without producing a node, such as an empty repetition.
//! The folds are fixed, so grammars compose without any user callbacks;
//! the grammar front-end compiles into exactly these wrappers.

use crate::ast::Ast;
use crate::error::ParseError;
use crate::map::MapExt;
use crate::or::choice;
use crate::parser::{boxed, BoxedParser, Parser};
use crate::regex;
use crate::sequence::sequence;
use crate::token;

/// Fold repetition results: the first node becomes the accumulator and
/// every later node is added as its child.
fn fold_children(items: Vec<Option<Ast>>) -> Option<Ast> {
    let mut acc: Option<Ast> = None;
    for item in items.into_iter().flatten() {
        match acc.as_mut() {
            None => acc = Some(item),
            Some(a) => a.add_child(item),
        }
    }
    acc
}

/// Combine the results of a sequence: one child collapses to itself,
/// several become children of a fresh `>` node. Anonymous `>` results are
/// spliced into the parent rather than nested.
fn combine_seq(items: Vec<Option<Ast>>) -> Option<Ast> {
    let mut children: Vec<Ast> = Vec::new();
    for item in items.into_iter().flatten() {
        if item.tag() == ">" && item.contents().is_empty() {
            children.extend(item.children().iter().cloned());
        } else {
            children.push(item);
        }
    }
    match children.len() {
        0 => None,
        1 => children.pop(),
        _ => Some(Ast::node(">", children)),
    }
}

/// A literal string token, producing a leaf tagged `string`.
pub fn lit(s: impl Into<String>) -> impl Parser<Output = Option<Ast>> {
    token::sym(s).map(|text| Some(Ast::leaf("string", text)))
}

/// A literal character token, producing a leaf tagged `char`.
pub fn ch(c: impl Into<String>) -> impl Parser<Output = Option<Ast>> {
    token::tok(crate::string::is_string(c)).map(|text| Some(Ast::leaf("char", text)))
}

/// A regex token, producing a leaf tagged `regex` holding the matched
/// text. Fails at construction time if the pattern is malformed.
pub fn pattern(pattern: &str) -> Result<BoxedParser<Option<Ast>>, ParseError> {
    let matcher = regex::re(pattern)?;
    Ok(boxed(
        token::tok(matcher).map(|text| Some(Ast::leaf("regex", text))),
    ))
}

/// Prefix the tag of a parser's result, building hierarchical labels.
pub fn tag<P>(parser: P, name: impl Into<String>) -> impl Parser<Output = Option<Ast>>
where
    P: Parser<Output = Option<Ast>> + 'static,
{
    let name = name.into();
    parser.map(move |result| {
        result.map(|mut node| {
            node.retag_prefix(&name);
            node
        })
    })
}

/// N-ary alternation over AST parsers.
pub fn alt(parsers: Vec<BoxedParser<Option<Ast>>>) -> impl Parser<Output = Option<Ast>> {
    choice(parsers)
}

/// Juxtaposition sequence over AST parsers.
pub fn seq(parsers: Vec<BoxedParser<Option<Ast>>>) -> impl Parser<Output = Option<Ast>> {
    sequence(parsers).map(combine_seq)
}

/// Zero-or-more repetition with the AST fold.
pub fn many<P>(parser: P) -> impl Parser<Output = Option<Ast>>
where
    P: Parser<Output = Option<Ast>> + 'static,
{
    crate::many::many(parser).map(fold_children)
}

/// One-or-more repetition with the AST fold.
pub fn many1<P>(parser: P) -> impl Parser<Output = Option<Ast>>
where
    P: Parser<Output = Option<Ast>> + 'static,
{
    crate::some::some(parser).map(fold_children)
}

/// Exactly-n repetition with the AST fold.
pub fn count<P>(parser: P, n: usize) -> impl Parser<Output = Option<Ast>>
where
    P: Parser<Output = Option<Ast>> + 'static,
{
    crate::count::count(parser, n).map(fold_children)
}

/// Optional construct; absence produces no node.
pub fn maybe<P>(parser: P) -> impl Parser<Output = Option<Ast>>
where
    P: Parser<Output = Option<Ast>> + 'static,
{
    crate::maybe::maybe(parser).map(Option::flatten)
}

/// Negative lookahead; success produces no node.
pub fn not<P>(parser: P) -> impl Parser<Output = Option<Ast>>
where
    P: Parser<Output = Option<Ast>> + 'static,
{
    crate::not::not(parser).map(|_| None)
}

/// Parse the whole input, ignoring surrounding whitespace, and present the
/// result under a synthetic `>` root.
pub fn total<P>(parser: P) -> impl Parser<Output = Ast>
where
    P: Parser<Output = Option<Ast>> + 'static,
{
    token::total(parser).map(|result| match result {
        Some(node) => node.insert_root(),
        None => Ast::node(">", vec![]),
    })
}
