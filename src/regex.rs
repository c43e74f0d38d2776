//! A regular-expression front-end that compiles a pattern string into a
//! combinator tree, using the library itself to parse the pattern.
//!
//! Supported syntax: literal characters with `\` escaping, `.` for any
//! byte except newline, `[...]` classes with `^` negation and `a-z`
//! ranges, `^`/`$` anchors mapping to start/end of input, postfix
//! `*` `+` `?`, grouping with `(...)` and alternation with `|`.
//!
//! Two deliberate departures from common regex engines: `.` never matches
//! a newline, and `|` inherits the committed choice of `or`, so a branch
//! that consumed input before failing is not retried and alternatives with
//! a shared prefix are written factored, as in grammars. Capture groups
//! are not supported; the compiled parser yields the whole matched text.

use crate::and::{left, right, AndExt};
use crate::byte::{byte, byte_label, is_byte, none_of, one_of, range_label, satisfy};
use crate::eoi::{eoi, soi};
use crate::error::ParseError;
use crate::expect::expect;
use crate::many::{many, skip_many};
use crate::map::MapExt;
use crate::maybe::MaybeExt;
use crate::or::{choice, Or};
use crate::parser::{boxed, BoxedParser, Parser};
use crate::retained::{retained, Retained};
use crate::sequence::sequence;
use crate::some::{skip_some, some};
use crate::span::capture;
use crate::token::end;
use crate::value::pass;

/// A compiled pattern piece: recognizes input, produces nothing. The
/// matched text is recovered at the top with `capture`.
type Matcher = BoxedParser<()>;

#[derive(Clone, Copy)]
enum ClassItem {
    One(u8),
    Range(u8, u8),
}

impl ClassItem {
    fn contains(&self, b: u8) -> bool {
        match *self {
            ClassItem::One(c) => b == c,
            ClassItem::Range(s, e) => b >= s && b <= e,
        }
    }
}

fn class_label(items: &[ClassItem], negated: bool) -> String {
    if !negated && items.len() == 1 {
        if let ClassItem::Range(s, e) = items[0] {
            return range_label(s, e);
        }
    }
    let mut rendered = String::new();
    for item in items {
        match *item {
            ClassItem::One(b) => rendered.push_str(&byte_label(b)),
            ClassItem::Range(s, e) => {
                rendered.push_str(&format!("{}-{}", byte_label(s), byte_label(e)))
            }
        }
    }
    if negated {
        format!("character not in [{}]", rendered)
    } else {
        format!("character in [{}]", rendered)
    }
}

fn lit_matcher(b: u8) -> Matcher {
    boxed(is_byte(b).map(|_| ()))
}

fn class_matcher(items: Vec<ClassItem>, negated: bool) -> Matcher {
    let label = class_label(&items, negated);
    let matcher = satisfy(move |b| items.iter().any(|item| item.contains(b)) != negated);
    boxed(expect(matcher, label).map(|_| ()))
}

/// The byte value of a pattern escape sequence.
fn unescape_byte(b: u8) -> u8 {
    match b {
        b'n' => b'\n',
        b't' => b'\t',
        b'r' => b'\r',
        b'0' => b'\0',
        other => other,
    }
}

/// A character inside a class: an escape or anything but the closer.
fn class_byte() -> impl Parser<Output = u8> {
    use crate::or::OrExt;
    right(is_byte(b'\\'), byte()).map(unescape_byte).or(none_of("]"))
}

fn class() -> impl Parser<Output = Matcher> {
    let item = class_byte()
        .and(right(is_byte(b'-'), class_byte()).maybe())
        .map(|(lo, hi)| match hi {
            Some(hi) => ClassItem::Range(lo, hi),
            None => ClassItem::One(lo),
        });
    right(
        is_byte(b'['),
        left(is_byte(b'^').maybe().and(some(item)), is_byte(b']')),
    )
    .map(|(negation, items)| class_matcher(items, negation.is_some()))
}

fn base(alternation: Retained<Matcher>) -> BoxedParser<Matcher> {
    boxed(choice(vec![
        boxed(right(is_byte(b'('), left(alternation, is_byte(b')')))),
        boxed(class()),
        boxed(right(is_byte(b'\\'), byte()).map(|b| lit_matcher(unescape_byte(b)))),
        boxed(is_byte(b'^').map(|_| -> Matcher { boxed(soi()) })),
        boxed(is_byte(b'$').map(|_| -> Matcher { boxed(eoi()) })),
        boxed(is_byte(b'.').map(|_| -> Matcher {
            boxed(expect(none_of("\n"), "any character except newline").map(|_| ()))
        })),
        boxed(none_of("\\.^$*+?()[]|").map(lit_matcher)),
    ]))
}

fn factor(alternation: Retained<Matcher>) -> BoxedParser<Matcher> {
    boxed(
        base(alternation)
            .and(many(one_of("*+?")))
            .map(|(matcher, quantifiers)| {
                quantifiers.into_iter().fold(matcher, |m, q| match q {
                    b'*' => boxed(skip_many(m)),
                    b'+' => boxed(skip_some(m)),
                    _ => boxed(crate::maybe::maybe(m).map(|_| ())),
                })
            }),
    )
}

fn term(alternation: Retained<Matcher>) -> BoxedParser<Matcher> {
    boxed(many(factor(alternation)).map(|mut factors| -> Matcher {
        match factors.len() {
            0 => boxed(pass()),
            1 => factors.remove(0),
            _ => boxed(sequence(factors).map(|_| ())),
        }
    }))
}

/// Compile a pattern into a parser yielding the matched text.
///
/// A malformed pattern surfaces as an ordinary parse error positioned
/// inside the pattern string.
pub fn re(pattern: &str) -> Result<BoxedParser<String>, ParseError> {
    let alternation: Retained<Matcher> = retained("alternation");
    alternation.define(
        term(alternation.clone())
            .and(many(right(is_byte(b'|'), term(alternation.clone()))))
            .map(|(first, rest)| {
                rest.into_iter()
                    .fold(first, |acc, branch| -> Matcher { boxed(Or::new(acc, branch)) })
            }),
    );

    let compiled = crate::parse::parse("<regex>", pattern.as_bytes(), &end(alternation.clone()));
    alternation.undefine();
    Ok(boxed(capture(compiled?)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{ByteCursor, Source};
    use rstest::rstest;

    fn cursor(bytes: &[u8]) -> ByteCursor<'_> {
        ByteCursor::new(Source::new("test", bytes))
    }

    fn matches(pattern: &str, input: &str) -> Option<String> {
        let parser = re(pattern).unwrap();
        parser.parse(cursor(input.as_bytes())).ok().map(|(s, _)| s)
    }

    #[test]
    fn test_literal_sequence() {
        assert_eq!(matches("abc", "abcdef"), Some("abc".to_string()));
        assert_eq!(matches("abc", "abd"), None);
    }

    #[test]
    fn test_float_pattern() {
        let parser = re("[0-9]+\\.[0-9]+").unwrap();

        let (text, _) = parser.parse(cursor(b"3.14")).unwrap();
        assert_eq!(text, "3.14");

        let err = parser.parse(cursor(b"3.")).unwrap_err();
        assert_eq!((err.line(), err.column()), (1, 3));
        assert_eq!(err.expected(), &["digit".to_string()]);
    }

    #[test]
    fn test_dot_excludes_newline() {
        assert_eq!(matches("a.c", "abc"), Some("abc".to_string()));
        assert_eq!(matches("a.c", "a\nc"), None);
    }

    #[test]
    fn test_escapes() {
        assert_eq!(matches("a\\.b", "a.b"), Some("a.b".to_string()));
        assert_eq!(matches("a\\.b", "axb"), None);
        assert_eq!(matches("a\\nb", "a\nb"), Some("a\nb".to_string()));
        assert_eq!(matches("\\[\\]", "[]"), Some("[]".to_string()));
    }

    #[test]
    fn test_class_negation() {
        assert_eq!(matches("[^0-9]", "x"), Some("x".to_string()));
        assert_eq!(matches("[^0-9]", "5"), None);
    }

    #[test]
    fn test_class_mixed_items() {
        let parser = re("[a-z_0-9]+").unwrap();
        let (text, _) = parser.parse(cursor(b"foo_9!")).unwrap();
        assert_eq!(text, "foo_9");
    }

    #[test]
    fn test_anchors() {
        assert_eq!(matches("^ab$", "ab"), Some("ab".to_string()));
        assert_eq!(matches("^ab$", "abc"), None);
    }

    #[test]
    fn test_alternation() {
        assert_eq!(matches("cat|dog", "dog"), Some("dog".to_string()));
        assert_eq!(matches("cat|dog", "cow"), None);
    }

    #[test]
    fn test_group_with_quantifier() {
        assert_eq!(matches("(ab)+", "ababx"), Some("abab".to_string()));
        assert_eq!(matches("(ab)+", "x"), None);
    }

    #[test]
    fn test_maybe_quantifier() {
        assert_eq!(matches("ab?c", "abc"), Some("abc".to_string()));
        assert_eq!(matches("ab?c", "ac"), Some("ac".to_string()));
    }

    #[rstest]
    #[case("a*", "", "")]
    #[case("a*", "aaa", "aaa")]
    #[case("a+b", "aab", "aab")]
    #[case("[abc]+", "cabx", "cab")]
    #[case("x(y|z)*", "xyzzy", "xyzzy")]
    fn test_accepted(#[case] pattern: &str, #[case] input: &str, #[case] expected: &str) {
        assert_eq!(matches(pattern, input), Some(expected.to_string()));
    }

    #[rstest]
    #[case("a+", "")]
    #[case("a+b", "aac")]
    #[case("[^a]", "a")]
    fn test_rejected(#[case] pattern: &str, #[case] input: &str) {
        assert_eq!(matches(pattern, input), None);
    }

    #[test]
    fn test_bad_pattern_unclosed_class() {
        let err = re("[0-9").err().unwrap();
        assert_eq!(err.filename(), "<regex>");
        assert_eq!(err.offset(), 4);
    }

    #[test]
    fn test_bad_pattern_unclosed_group() {
        let err = re("(ab").err().unwrap();
        assert_eq!(err.offset(), 3);
        assert!(err.expected().contains(&")".to_string()));
    }

    #[test]
    fn test_equivalent_to_hand_written() {
        use crate::ascii::char_class::digit;

        let via_regex = re("[0-9]+").unwrap();
        let hand_written = capture(skip_some(digit()));

        for input in [b"123x".as_slice(), b"7", b"x1"] {
            let a = via_regex.parse(cursor(input)).ok().map(|(s, _)| s);
            let b = hand_written.parse(cursor(input)).ok().map(|(s, _)| s);
            assert_eq!(a, b);
        }
    }
}
