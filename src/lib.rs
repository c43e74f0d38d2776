//! # Parsigram - Parser Combinator Library
//!
//! A parser combinator library for building parsers of textual languages
//! by composing small parsers into larger ones.
//!
//! - **Zero panics on bad input**: parse failures are ordinary `Result`
//!   values carrying position, the unexpected byte and the set of expected
//!   tokens, merged across alternatives so messages read
//!   "expected a, b or c at line:column"
//! - **Cheap backtracking**: the input cursor is a `Copy` value, so saving
//!   and restoring a position is free
//! - **Recursive grammars**: named retained parsers are defined late and
//!   referenced cyclically
//! - **Grammar front-ends**: `re` compiles a regex pattern and `grammar`/
//!   `lang` compile a BNF-like notation into parsers producing generic
//!   syntax trees, both expressed in the library's own combinators
//!
//! Parsers that fail leave the caller's cursor untouched, but alternation
//! is committed: a branch that consumed input before failing is not
//! retried. Left-factor shared prefixes or wrap them in `maybe`.

pub mod and;
pub mod ascii;
pub mod ast;
pub mod byte;
pub mod count;
pub mod cursor;
pub mod eoi;
pub mod error;
pub mod expect;
pub mod grammar;
pub mod many;
pub mod map;
pub mod maybe;
pub mod not;
pub mod or;
pub mod parse;
pub mod parser;
pub mod regex;
pub mod retained;
pub mod sequence;
pub mod some;
pub mod span;
pub mod string;
pub mod token;
pub mod value;

pub use and::{and, left, right, AndExt};
pub use ast::Ast;
pub use byte::{byte, byte_range, is_byte, none_of, one_of, satisfy};
pub use count::count;
pub use cursor::{ByteCursor, Source};
pub use eoi::{eoi, soi};
pub use error::ParseError;
pub use expect::{expect, ExpectExt};
pub use grammar::{grammar, lang};
pub use many::{many, skip_many};
pub use map::{map, MapExt};
pub use maybe::{maybe, MaybeExt};
pub use not::{not, NotExt};
pub use or::{choice, or, OrExt};
pub use parse::{parse, parse_file, Error};
pub use parser::{boxed, BoxedParser, Parser};
pub use regex::re;
pub use retained::{cleanup, retained, Retained, Undefine};
pub use sequence::sequence;
pub use some::{skip_some, some};
pub use span::{capture, spanned, Span, SpanExt};
pub use string::is_string;
pub use value::{fail, lift, lift_val, pass};
