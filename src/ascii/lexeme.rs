//! Lexeme parsers for identifier- and literal-shaped tokens.

use crate::and::AndExt;
use crate::ascii::char_class::{alpha, alphanum, underscore};
use crate::byte::{byte, is_byte, none_of};
use crate::many::{many, skip_many};
use crate::map::MapExt;
use crate::or::OrExt;
use crate::parser::Parser;
use crate::span::capture;

/// Parser that matches a backslash escape sequence and returns it verbatim.
pub fn escape() -> impl Parser<Output = String> {
    capture(is_byte(b'\\').and(byte()))
}

/// Parser that matches an identifier: a letter or underscore followed by
/// letters, digits and underscores.
pub fn ident() -> impl Parser<Output = String> {
    capture(
        alpha()
            .or(underscore())
            .and(skip_many(alphanum().or(underscore()))),
    )
}

/// Resolve the escape sequences of a quoted literal's raw contents.
pub(crate) fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

fn quoted(delimiter: u8, label: &'static str) -> impl Parser<Output = String> {
    use crate::and::{left, right};
    use crate::expect::ExpectExt;

    let content = many(
        escape().or(none_of([delimiter, b'\\']).map(|b| (b as char).to_string())),
    );
    right(
        is_byte(delimiter),
        left(content, is_byte(delimiter)),
    )
    .map(|pieces| unescape(&pieces.concat()))
    .expect(label)
}

/// Parser that matches a single-quoted character literal, returning its
/// unescaped contents.
pub fn char_lit() -> impl Parser<Output = String> {
    quoted(b'\'', "character literal")
}

/// Parser that matches a double-quoted string literal, returning its
/// unescaped contents.
pub fn string_lit() -> impl Parser<Output = String> {
    quoted(b'"', "string literal")
}

/// Parser that matches a slash-delimited regex literal, returning the raw
/// pattern text with `\/` reduced to `/`.
pub fn regex_lit() -> impl Parser<Output = String> {
    use crate::and::{left, right};
    use crate::expect::ExpectExt;

    let content = many(
        escape().or(none_of("/\\").map(|b| (b as char).to_string())),
    );
    right(is_byte(b'/'), left(content, is_byte(b'/')))
        .map(|pieces| {
            let raw = pieces.concat();
            // Only the delimiter escape belongs to the lexeme; the rest of
            // the escapes belong to the regex language.
            raw.replace("\\/", "/")
        })
        .expect("regex literal")
}

pub fn semi() -> impl Parser<Output = u8> {
    is_byte(b';')
}

pub fn comma() -> impl Parser<Output = u8> {
    is_byte(b',')
}

pub fn colon() -> impl Parser<Output = u8> {
    is_byte(b':')
}

pub fn dot() -> impl Parser<Output = u8> {
    is_byte(b'.')
}
