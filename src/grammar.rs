//! A BNF-like grammar front-end compiling a grammar string into a parser
//! that produces [`Ast`] values.
//!
//! The notation: `<name>` references a supplied retained parser by name,
//! `"…"` and `'…'` are literal tokens, `/…/` is a regex token,
//! juxtaposition sequences, `|` alternates, postfix `*` `+` `?` repeat,
//! `(…)` groups. Whitespace between grammar tokens is insignificant.
//!
//! `lang` is the rule-set form: `name : alternatives ;` definitions that
//! define the supplied retained parsers in place, tagging each rule's
//! result with the rule name so tags grow hierarchical labels like
//! `expr|value|regex`.
//!
//! The grammar string is parsed with the core combinators themselves, into
//! a small expression tree that a second pass compiles and resolves;
//! unknown `<name>` references and malformed regexes are reported as parse
//! errors positioned inside the grammar string.

use crate::and::{left, right, AndExt};
use crate::ascii::lexeme::{char_lit, ident, regex_lit, string_lit};
use crate::ast::{comb, Ast};
use crate::byte::{is_byte, one_of};
use crate::cursor::Source;
use crate::error::ParseError;
use crate::many::many;
use crate::map::MapExt;
use crate::or::choice;
use crate::parser::{boxed, BoxedParser};
use crate::regex;
use crate::retained::{retained, Retained};
use crate::some::some;
use crate::span::SpanExt;
use crate::token::{sym, tok, total};

/// Parsed form of one grammar construct, before resolution.
#[derive(Debug, Clone)]
enum GExpr {
    Ref { name: String, offset: usize },
    Lit(String),
    Ch(String),
    Pattern { pattern: String, offset: usize },
    Seq(Vec<GExpr>),
    Alt(Vec<GExpr>),
    Many(Box<GExpr>),
    Many1(Box<GExpr>),
    Maybe(Box<GExpr>),
}

fn gbase(galt: Retained<GExpr>) -> BoxedParser<GExpr> {
    let reference = tok(right(is_byte(b'<'), left(ident(), is_byte(b'>'))))
        .spanned()
        .map(|(name, span)| GExpr::Ref {
            name,
            offset: span.start,
        });
    let literal = tok(string_lit()).map(GExpr::Lit);
    let character = tok(char_lit()).map(GExpr::Ch);
    let pattern = tok(regex_lit()).spanned().map(|(pattern, span)| GExpr::Pattern {
        pattern,
        offset: span.start,
    });
    let group = right(sym("("), left(galt, sym(")")));

    boxed(choice(vec![
        boxed(reference),
        boxed(literal),
        boxed(character),
        boxed(pattern),
        boxed(group),
    ]))
}

fn gfactor(galt: Retained<GExpr>) -> BoxedParser<GExpr> {
    boxed(
        gbase(galt)
            .and(many(tok(one_of("*+?"))))
            .map(|(expr, quantifiers)| {
                quantifiers.into_iter().fold(expr, |e, q| match q {
                    b'*' => GExpr::Many(Box::new(e)),
                    b'+' => GExpr::Many1(Box::new(e)),
                    _ => GExpr::Maybe(Box::new(e)),
                })
            }),
    )
}

fn gseq(galt: Retained<GExpr>) -> BoxedParser<GExpr> {
    boxed(some(gfactor(galt)).map(|mut items| {
        if items.len() == 1 {
            items.remove(0)
        } else {
            GExpr::Seq(items)
        }
    }))
}

/// Build the retained grammar-expression rule. The caller undefines it
/// once parsing is done, releasing the cycle.
fn grammar_expression() -> Retained<GExpr> {
    let galt: Retained<GExpr> = retained("grammar-expression");
    galt.define(
        gseq(galt.clone())
            .and(many(right(sym("|"), gseq(galt.clone()))))
            .map(|(first, rest)| {
                if rest.is_empty() {
                    first
                } else {
                    let mut branches = vec![first];
                    branches.extend(rest);
                    GExpr::Alt(branches)
                }
            }),
    );
    galt
}

/// Compile a resolved grammar expression into an AST parser.
fn compile(
    expr: &GExpr,
    src: Source,
    refs: &[&Retained<Ast>],
) -> Result<BoxedParser<Option<Ast>>, ParseError> {
    match expr {
        GExpr::Ref { name, offset } => {
            let rule = refs.iter().find(|r| r.name() == *name).ok_or_else(|| {
                ParseError::at_offset(
                    src,
                    *offset,
                    vec![format!("reference to a supplied rule (<{}> is unknown)", name)],
                )
            })?;
            Ok(boxed((*rule).clone().map(Some)))
        }
        GExpr::Lit(text) => Ok(boxed(comb::lit(text.clone()))),
        GExpr::Ch(text) => Ok(boxed(comb::ch(text.clone()))),
        GExpr::Pattern { pattern, offset } => {
            // Reposition pattern errors into the grammar string, past the
            // opening slash.
            let matcher = regex::re(pattern).map_err(|e| {
                ParseError::at_offset(src, offset + 1 + e.offset(), e.expected().to_vec())
            })?;
            Ok(boxed(
                tok(matcher).map(|text| Some(Ast::leaf("regex", text))),
            ))
        }
        GExpr::Seq(items) => {
            let parsers = items
                .iter()
                .map(|item| compile(item, src, refs))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(boxed(comb::seq(parsers)))
        }
        GExpr::Alt(items) => {
            let parsers = items
                .iter()
                .map(|item| compile(item, src, refs))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(boxed(comb::alt(parsers)))
        }
        GExpr::Many(item) => Ok(boxed(comb::many(compile(item, src, refs)?))),
        GExpr::Many1(item) => Ok(boxed(comb::many1(compile(item, src, refs)?))),
        GExpr::Maybe(item) => Ok(boxed(comb::maybe(compile(item, src, refs)?))),
    }
}

/// Compile a grammar string into a parser producing AST nodes. `<name>`
/// references resolve against `refs` by retained-parser name.
pub fn grammar(text: &str, refs: &[&Retained<Ast>]) -> Result<BoxedParser<Ast>, ParseError> {
    let galt = grammar_expression();
    let parsed = crate::parse::parse("<grammar>", text.as_bytes(), &total(galt.clone()));
    galt.undefine();
    let expr = parsed?;

    let src = Source::new("<grammar>", text.as_bytes());
    let compiled = compile(&expr, src, refs)?;
    Ok(boxed(compiled.map(|result| {
        result.unwrap_or_else(|| Ast::node(">", vec![]))
    })))
}

/// Parse a rule set of the form `name : alternatives ;` and define each of
/// the supplied retained parsers from it.
///
/// Every rule in the text must name one of the supplied parsers; rules may
/// reference each other freely, including mutually recursive cycles. Each
/// rule's result is tagged with the rule name. The parsers stay subject to
/// the usual teardown contract: `cleanup` them when done.
pub fn lang(text: &str, rules: &[&Retained<Ast>]) -> Result<(), ParseError> {
    let galt = grammar_expression();
    let rule = tok(ident())
        .spanned()
        .and(right(sym(":"), left(galt.clone(), sym(";"))))
        .map(|((name, span), body)| (name, span.start, body));
    let parsed = crate::parse::parse("<grammar>", text.as_bytes(), &total(some(rule)));
    galt.undefine();
    let parsed = parsed?;

    let src = Source::new("<grammar>", text.as_bytes());
    for (name, offset, body) in &parsed {
        let target = rules.iter().find(|r| r.name() == *name).ok_or_else(|| {
            ParseError::at_offset(
                src,
                *offset,
                vec![format!("rule with a supplied parser ('{}' has none)", name)],
            )
        })?;
        let compiled = compile(body, src, rules)?;
        let rule_name = name.clone();
        target.define(compiled.map(move |result| match result {
            Some(mut node) => {
                node.retag_prefix(&rule_name);
                node
            }
            None => Ast::node(rule_name.as_str(), vec![]),
        }));
    }
    Ok(())
}
