//! Single-character ASCII class parsers with readable expected labels.

use crate::byte::{byte_range, is_byte, one_of};
use crate::expect::ExpectExt;
use crate::many::skip_many;
use crate::or::OrExt;
use crate::parser::Parser;

/// Parser that matches a single ASCII whitespace character.
pub fn space() -> impl Parser<Output = u8> {
    one_of(" \t\n\r\x0b\x0c").expect("space")
}

/// Parser that skips zero or more whitespace characters.
pub fn spaces() -> impl Parser<Output = ()> {
    skip_many(space())
}

pub fn newline() -> impl Parser<Output = u8> {
    is_byte(b'\n').expect("newline")
}

pub fn tab() -> impl Parser<Output = u8> {
    is_byte(b'\t').expect("tab")
}

pub fn digit() -> impl Parser<Output = u8> {
    byte_range(b'0', b'9')
}

pub fn hexdigit() -> impl Parser<Output = u8> {
    byte_range(b'0', b'9')
        .or(byte_range(b'a', b'f'))
        .or(byte_range(b'A', b'F'))
        .expect("hex digit")
}

pub fn octdigit() -> impl Parser<Output = u8> {
    byte_range(b'0', b'7').expect("octal digit")
}

pub fn lower() -> impl Parser<Output = u8> {
    byte_range(b'a', b'z')
}

pub fn upper() -> impl Parser<Output = u8> {
    byte_range(b'A', b'Z')
}

pub fn alpha() -> impl Parser<Output = u8> {
    lower().or(upper()).expect("alpha")
}

pub fn underscore() -> impl Parser<Output = u8> {
    is_byte(b'_').expect("underscore")
}

pub fn alphanum() -> impl Parser<Output = u8> {
    alpha().or(digit()).expect("alphanumeric")
}
