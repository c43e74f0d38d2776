use crate::cursor::ByteCursor;
use crate::error::ParseError;
use crate::parser::{BoxedParser, Parser};
use std::cell::RefCell;
use std::rc::Rc;

// # Retained Parsers - Recursion Through Late Definition
//
// A combinator tree is acyclic by construction: every combinator owns its
// children. Recursive grammars need a back-edge, and this is it. A
// `Retained` parser is a named handle with shared identity: it is created
// undefined, cloned freely into the trees that reference it, and given its
// body once the whole rule set exists. Mutually recursive grammars fall
// out of the same mechanism.
//
// ## Teardown
//
// Clones share one reference-counted cell, so a recursive grammar is a
// reference cycle and dropping the handles alone leaks it. `undefine`
// severs the body and breaks the cycle; `cleanup` undefines a whole rule
// set in one call. This is the one place the library asks the user to
// coordinate destruction.
//
// ## Left recursion
//
// A rule that re-enters itself without consuming input would recurse until
// the stack dies. Evaluation keeps the set of offsets a retained parser is
// currently being evaluated at; re-entry at an unchanged offset is
// definitionally left recursion and panics with the rule name and
// position. Such grammars are rewritten as repetition
// (`E = E '+' int | int` becomes `int ('+' int)*`).

struct RetainedInner<O> {
    name: String,
    body: RefCell<Option<BoxedParser<O>>>,
    active: RefCell<Vec<usize>>,
}

/// A named parser handle that can be defined after construction and
/// referenced cyclically, enabling recursive grammars.
pub struct Retained<O> {
    inner: Rc<RetainedInner<O>>,
}

impl<O> Clone for Retained<O> {
    fn clone(&self) -> Self {
        Retained {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<O> Retained<O> {
    pub fn new(name: impl Into<String>) -> Self {
        Retained {
            inner: Rc::new(RetainedInner {
                name: name.into(),
                body: RefCell::new(None),
                active: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn name(&self) -> String {
        self.inner.name.clone()
    }

    /// Give the parser its body. Defining twice is a programmer error.
    pub fn define(&self, body: impl Parser<Output = O> + 'static) {
        let mut slot = self.inner.body.borrow_mut();
        assert!(
            slot.is_none(),
            "parser '{}' defined twice",
            self.inner.name
        );
        *slot = Some(Box::new(body));
    }

    /// Remove the body, severing this parser's references to its children.
    ///
    /// Required before a recursive rule set can be dropped without leaking;
    /// see [`cleanup`].
    pub fn undefine(&self) {
        *self.inner.body.borrow_mut() = None;
    }

    pub fn is_defined(&self) -> bool {
        self.inner.body.borrow().is_some()
    }
}

impl<O> Parser for Retained<O> {
    type Output = O;

    fn parse<'src>(
        &self,
        cursor: ByteCursor<'src>,
    ) -> Result<(O, ByteCursor<'src>), ParseError> {
        let offset = cursor.position();
        if self.inner.active.borrow().contains(&offset) {
            panic!(
                "left recursion: parser '{}' re-entered at {}:{} without consuming input",
                self.inner.name,
                cursor.line(),
                cursor.column()
            );
        }

        let body = self.inner.body.borrow();
        let parser = body.as_ref().unwrap_or_else(|| {
            panic!("parser '{}' evaluated before define", self.inner.name)
        });

        self.inner.active.borrow_mut().push(offset);
        let result = parser.parse(cursor);
        self.inner.active.borrow_mut().pop();
        result
    }
}

/// Trait for erasing the output type of a retained parser so differently
/// typed rules can be torn down together.
pub trait Undefine {
    fn undefine(&self);
}

impl<O> Undefine for Retained<O> {
    fn undefine(&self) {
        Retained::undefine(self);
    }
}

/// Convenience function to create a Retained parser.
pub fn retained<O>(name: impl Into<String>) -> Retained<O> {
    Retained::new(name)
}

/// Undefine every listed parser, breaking the reference cycles of a
/// recursive rule set so dropping the handles releases it.
pub fn cleanup(parsers: &[&dyn Undefine]) {
    for parser in parsers {
        parser.undefine();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::{left, right};
    use crate::byte::{byte_range, is_byte};
    use crate::cursor::Source;
    use crate::map::MapExt;
    use crate::or::OrExt;

    fn cursor(bytes: &[u8]) -> ByteCursor<'_> {
        ByteCursor::new(Source::new("test", bytes))
    }

    #[test]
    fn test_retained_simple_definition() {
        let digit = retained::<u8>("digit");
        digit.define(byte_range(b'0', b'9'));

        let (b, _) = digit.parse(cursor(b"7")).unwrap();
        assert_eq!(b, b'7');

        digit.undefine();
        assert!(!digit.is_defined());
    }

    #[test]
    fn test_retained_recursive_grammar() {
        // expr = '(' expr ')' | digit
        let expr = retained::<u8>("expr");
        expr.define(
            right(is_byte(b'('), left(expr.clone(), is_byte(b')')))
                .or(byte_range(b'0', b'9')),
        );

        let (b, _) = expr.parse(cursor(b"(((5)))")).unwrap();
        assert_eq!(b, b'5');

        let err = expr.parse(cursor(b"((5")).unwrap_err();
        assert_eq!(err.offset(), 3);

        cleanup(&[&expr]);
    }

    #[test]
    fn test_retained_mutual_recursion() {
        use crate::and::AndExt;
        use crate::maybe::maybe;

        // a = 'x' b? ; b = ',' a. The tail is optional rather than an
        // alternative, so consuming 'x' never commits past the last item.
        let a = retained::<usize>("a");
        let b = retained::<usize>("b");
        a.define(
            is_byte(b'x')
                .and(maybe(b.clone()))
                .map(|(_, rest)| 1 + rest.unwrap_or(0)),
        );
        b.define(right(is_byte(b','), a.clone()));

        let (n, _) = a.parse(cursor(b"x,x,x")).unwrap();
        assert_eq!(n, 3);

        cleanup(&[&a, &b]);
    }

    #[test]
    #[should_panic(expected = "evaluated before define")]
    fn test_retained_undefined_panics() {
        let p = retained::<u8>("orphan");
        let _ = p.parse(cursor(b"x"));
    }

    #[test]
    #[should_panic(expected = "defined twice")]
    fn test_retained_double_define_panics() {
        let p = retained::<u8>("twice");
        p.define(is_byte(b'a'));
        p.define(is_byte(b'b'));
    }

    #[test]
    #[should_panic(expected = "left recursion")]
    fn test_left_recursion_detected() {
        // expr = expr '+' digit | digit, the classic mistake
        let expr = retained::<u8>("expr");
        expr.define(
            left(expr.clone(), right(is_byte(b'+'), byte_range(b'0', b'9')))
                .or(byte_range(b'0', b'9')),
        );

        let _ = expr.parse(cursor(b"1+2"));
    }

    #[test]
    fn test_maths_evaluation_left_to_right() {
        use crate::and::AndExt;
        use crate::ascii::number::int;
        use crate::byte::one_of;
        use crate::many::many;

        // A flat maths grammar: no precedence, operators fold as they
        // appear. value = int | '(' expr ')'
        let expr: Retained<i64> = retained("expr");
        let value = || {
            int().or(right(is_byte(b'('), left(expr.clone(), is_byte(b')'))))
        };
        expr.define(
            value()
                .and(many(one_of("+-*/").and(value())))
                .map(|(first, rest)| {
                    rest.into_iter().fold(first, |acc, (op, v)| match op {
                        b'+' => acc + v,
                        b'-' => acc - v,
                        b'*' => acc * v,
                        _ => acc / v,
                    })
                }),
        );

        let (v, _) = expr.parse(cursor(b"(4*2)+5")).unwrap();
        assert_eq!(v, 13);

        // 1+2*3 is (1+2)*3 here; the grammar shape decides, not the
        // operator.
        let (v, _) = expr.parse(cursor(b"1+2*3")).unwrap();
        assert_eq!(v, 9);

        cleanup(&[&expr]);
    }

    #[test]
    fn test_rewritten_left_recursion_parses() {
        use crate::and::AndExt;
        use crate::many::many;

        // E = E '+' int | int rewritten as int ('+' int)*
        let int = || byte_range(b'0', b'9').map(|b| (b - b'0') as i64);
        let expr = int()
            .and(many(right(is_byte(b'+'), int())))
            .map(|(first, rest)| rest.into_iter().fold(first, |a, b| a + b));

        let (sum, _) = expr.parse(cursor(b"1+2+3")).unwrap();
        assert_eq!(sum, 6);
    }
}
