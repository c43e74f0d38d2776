//! ASCII number parsers.

use crate::and::{right, AndExt};
use crate::ascii::char_class::{digit, hexdigit, octdigit};
use crate::byte::one_of;
use crate::cursor::ByteCursor;
use crate::error::ParseError;
use crate::maybe::MaybeExt;
use crate::or::OrExt;
use crate::parser::Parser;
use crate::some::skip_some;
use crate::span::capture;
use crate::string::is_string;

/// Parser that matches one or more decimal digits and returns them as text.
pub fn digits() -> impl Parser<Output = String> {
    capture(skip_some(digit()))
}

/// Parser that matches ASCII integer numbers, positive or negative.
pub fn int() -> impl Parser<Output = i64> {
    IntParser
}

struct IntParser;

impl Parser for IntParser {
    type Output = i64;

    fn parse<'src>(
        &self,
        cursor: ByteCursor<'src>,
    ) -> Result<(i64, ByteCursor<'src>), ParseError> {
        let text = capture(one_of("+-").maybe().and(skip_some(digit())));
        let (text, next) = text.parse(cursor)?;

        match text.parse::<i64>() {
            Ok(value) => Ok((value, next)),
            // Only overflow is left once the shape matched.
            Err(_) => Err(ParseError::expecting(
                &cursor,
                vec!["64-bit integer".to_string()],
            )),
        }
    }
}

struct RadixParser {
    prefix: &'static str,
    radix: u32,
    label: &'static str,
}

impl Parser for RadixParser {
    type Output = i64;

    fn parse<'src>(
        &self,
        cursor: ByteCursor<'src>,
    ) -> Result<(i64, ByteCursor<'src>), ParseError> {
        let digits: Box<dyn Parser<Output = ()>> = match self.radix {
            16 => Box::new(skip_some(hexdigit())),
            8 => Box::new(skip_some(octdigit())),
            _ => unreachable!("unsupported radix"),
        };
        let (text, next) = right(is_string(self.prefix), capture(digits)).parse(cursor)?;

        match i64::from_str_radix(&text, self.radix) {
            Ok(value) => Ok((value, next)),
            Err(_) => Err(ParseError::expecting(
                &cursor,
                vec![self.label.to_string()],
            )),
        }
    }
}

/// Parser that matches a hexadecimal number with a `0x` prefix.
pub fn hex() -> impl Parser<Output = i64> {
    RadixParser {
        prefix: "0x",
        radix: 16,
        label: "64-bit hexadecimal integer",
    }
}

/// Parser that matches an octal number with a `0o` prefix.
pub fn oct() -> impl Parser<Output = i64> {
    RadixParser {
        prefix: "0o",
        radix: 8,
        label: "64-bit octal integer",
    }
}

/// Parser that matches an integer in any supported base.
///
/// The prefixed forms are tried first; a failing prefix does not consume,
/// so plain decimals fall through.
pub fn number() -> impl Parser<Output = i64> {
    hex().or(oct()).or(int())
}

/// Parser that matches the text of a decimal real number, with optional
/// sign and exponent.
pub fn real() -> impl Parser<Output = String> {
    let exponent = one_of("eE")
        .and(one_of("+-").maybe())
        .and(skip_some(digit()))
        .maybe();
    capture(
        one_of("+-")
            .maybe()
            .and(skip_some(digit()))
            .and(is_string("."))
            .and(skip_some(digit()))
            .and(exponent),
    )
}

/// Parser that matches a real number and converts it to f64.
pub fn float() -> impl Parser<Output = f64> {
    FloatParser
}

struct FloatParser;

impl Parser for FloatParser {
    type Output = f64;

    fn parse<'src>(
        &self,
        cursor: ByteCursor<'src>,
    ) -> Result<(f64, ByteCursor<'src>), ParseError> {
        let (text, next) = real().parse(cursor)?;
        match text.parse::<f64>() {
            Ok(value) => Ok((value, next)),
            Err(_) => Err(ParseError::expecting(&cursor, vec!["float".to_string()])),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Source;

    fn cursor(bytes: &[u8]) -> ByteCursor<'_> {
        ByteCursor::new(Source::new("test", bytes))
    }

    #[test]
    fn test_digits() {
        let (text, cursor) = digits().parse(cursor(b"0419x")).unwrap();
        assert_eq!(text, "0419");
        assert_eq!(cursor.value().unwrap(), b'x');
    }

    #[test]
    fn test_int_positive_negative() {
        let (v, _) = int().parse(cursor(b"123")).unwrap();
        assert_eq!(v, 123);

        let (v, _) = int().parse(cursor(b"-42x")).unwrap();
        assert_eq!(v, -42);

        let (v, _) = int().parse(cursor(b"+7")).unwrap();
        assert_eq!(v, 7);
    }

    #[test]
    fn test_int_requires_digits_after_sign() {
        let err = int().parse(cursor(b"-x")).unwrap_err();
        assert_eq!(err.offset(), 1);
    }

    #[test]
    fn test_int_overflow() {
        let err = int().parse(cursor(b"99999999999999999999")).unwrap_err();
        assert_eq!(err.expected(), &["64-bit integer".to_string()]);
    }

    #[test]
    fn test_hex_and_oct() {
        let (v, _) = hex().parse(cursor(b"0xff")).unwrap();
        assert_eq!(v, 255);

        let (v, _) = oct().parse(cursor(b"0o17")).unwrap();
        assert_eq!(v, 15);
    }

    #[test]
    fn test_number_bases() {
        let (v, _) = number().parse(cursor(b"0x10")).unwrap();
        assert_eq!(v, 16);

        let (v, _) = number().parse(cursor(b"0o10")).unwrap();
        assert_eq!(v, 8);

        let (v, _) = number().parse(cursor(b"10")).unwrap();
        assert_eq!(v, 10);

        // A bare zero is decimal, not a committed prefix.
        let (v, _) = number().parse(cursor(b"0")).unwrap();
        assert_eq!(v, 0);
    }

    #[test]
    fn test_real_text() {
        let (text, _) = real().parse(cursor(b"-3.14e+2x")).unwrap();
        assert_eq!(text, "-3.14e+2");
    }

    #[test]
    fn test_real_requires_fraction() {
        let err = real().parse(cursor(b"3x")).unwrap_err();
        assert_eq!(err.offset(), 1);
    }

    #[test]
    fn test_float_value() {
        let (v, _) = float().parse(cursor(b"3.14")).unwrap();
        assert!((v - 3.14).abs() < f64::EPSILON);

        let (v, _) = float().parse(cursor(b"2.5e2")).unwrap();
        assert!((v - 250.0).abs() < f64::EPSILON);
    }
}
