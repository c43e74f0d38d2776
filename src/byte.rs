use crate::cursor::ByteCursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser that consumes and returns a single byte.
pub struct ByteParser;

impl ByteParser {
    pub fn new() -> Self {
        ByteParser
    }
}

/// Convenience function to create a ByteParser.
pub fn byte() -> ByteParser {
    ByteParser::new()
}

impl Parser for ByteParser {
    type Output = u8;

    fn parse<'src>(
        &self,
        cursor: ByteCursor<'src>,
    ) -> Result<(u8, ByteCursor<'src>), ParseError> {
        let b = cursor.value()?;
        Ok((b, cursor.next()))
    }
}

/// Readable description of a single byte, used in expected sets.
pub(crate) fn byte_label(b: u8) -> String {
    match b {
        b'\n' => "\\n".to_string(),
        b'\t' => "\\t".to_string(),
        b'\r' => "\\r".to_string(),
        b' ' => "space".to_string(),
        b if (0x21..0x7f).contains(&b) => (b as char).to_string(),
        b => format!("\\x{:02x}", b),
    }
}

/// Readable description of an inclusive byte range, used in expected sets.
///
/// The common ASCII classes get their conventional names so messages read
/// "expected digit" rather than "expected character in range '0'-'9'".
pub(crate) fn range_label(start: u8, end: u8) -> String {
    match (start, end) {
        (b'0', b'9') => "digit".to_string(),
        (b'a', b'z') => "lowercase letter".to_string(),
        (b'A', b'Z') => "uppercase letter".to_string(),
        (s, e) => format!("character in range '{}'-'{}'", byte_label(s), byte_label(e)),
    }
}

/// Parser that matches a specific byte.
pub struct IsByteParser {
    expected: u8,
}

impl IsByteParser {
    pub fn new(expected: u8) -> Self {
        IsByteParser { expected }
    }
}

/// Convenience function to create an IsByteParser.
pub fn is_byte(expected: u8) -> IsByteParser {
    IsByteParser::new(expected)
}

impl Parser for IsByteParser {
    type Output = u8;

    fn parse<'src>(
        &self,
        cursor: ByteCursor<'src>,
    ) -> Result<(u8, ByteCursor<'src>), ParseError> {
        match cursor.value() {
            Ok(b) if b == self.expected => Ok((b, cursor.next())),
            _ => Err(ParseError::expecting(
                &cursor,
                vec![byte_label(self.expected)],
            )),
        }
    }
}

/// Parser that matches a byte within an inclusive range.
pub struct ByteRangeParser {
    start: u8,
    end: u8,
}

impl ByteRangeParser {
    pub fn new(start: u8, end: u8) -> Self {
        ByteRangeParser { start, end }
    }
}

/// Convenience function to create a ByteRangeParser.
pub fn byte_range(start: u8, end: u8) -> ByteRangeParser {
    ByteRangeParser::new(start, end)
}

impl Parser for ByteRangeParser {
    type Output = u8;

    fn parse<'src>(
        &self,
        cursor: ByteCursor<'src>,
    ) -> Result<(u8, ByteCursor<'src>), ParseError> {
        match cursor.value() {
            Ok(b) if b >= self.start && b <= self.end => Ok((b, cursor.next())),
            _ => Err(ParseError::expecting(
                &cursor,
                vec![range_label(self.start, self.end)],
            )),
        }
    }
}

/// Parser that matches any byte appearing in a set.
pub struct OneOfParser {
    set: Vec<u8>,
}

impl OneOfParser {
    pub fn new(set: impl AsRef<[u8]>) -> Self {
        OneOfParser {
            set: set.as_ref().to_vec(),
        }
    }
}

/// Convenience function to create a OneOfParser.
pub fn one_of(set: impl AsRef<[u8]>) -> OneOfParser {
    OneOfParser::new(set)
}

impl Parser for OneOfParser {
    type Output = u8;

    fn parse<'src>(
        &self,
        cursor: ByteCursor<'src>,
    ) -> Result<(u8, ByteCursor<'src>), ParseError> {
        match cursor.value() {
            Ok(b) if self.set.contains(&b) => Ok((b, cursor.next())),
            _ => Err(ParseError::expecting(
                &cursor,
                vec![format!(
                    "one of '{}'",
                    String::from_utf8_lossy(&self.set)
                )],
            )),
        }
    }
}

/// Parser that matches any byte not appearing in a set.
pub struct NoneOfParser {
    set: Vec<u8>,
}

impl NoneOfParser {
    pub fn new(set: impl AsRef<[u8]>) -> Self {
        NoneOfParser {
            set: set.as_ref().to_vec(),
        }
    }
}

/// Convenience function to create a NoneOfParser.
pub fn none_of(set: impl AsRef<[u8]>) -> NoneOfParser {
    NoneOfParser::new(set)
}

impl Parser for NoneOfParser {
    type Output = u8;

    fn parse<'src>(
        &self,
        cursor: ByteCursor<'src>,
    ) -> Result<(u8, ByteCursor<'src>), ParseError> {
        match cursor.value() {
            Ok(b) if !self.set.contains(&b) => Ok((b, cursor.next())),
            _ => Err(ParseError::expecting(
                &cursor,
                vec![format!(
                    "none of '{}'",
                    String::from_utf8_lossy(&self.set)
                )],
            )),
        }
    }
}

/// Parser that matches a byte satisfying a predicate.
pub struct SatisfyParser<F> {
    predicate: F,
}

impl<F> SatisfyParser<F> {
    pub fn new(predicate: F) -> Self {
        SatisfyParser { predicate }
    }
}

/// Convenience function to create a SatisfyParser.
///
/// The default expected description is generic; wrap the parser in
/// `expect` to name what the predicate accepts.
pub fn satisfy<F>(predicate: F) -> SatisfyParser<F>
where
    F: Fn(u8) -> bool,
{
    SatisfyParser::new(predicate)
}

impl<F> Parser for SatisfyParser<F>
where
    F: Fn(u8) -> bool,
{
    type Output = u8;

    fn parse<'src>(
        &self,
        cursor: ByteCursor<'src>,
    ) -> Result<(u8, ByteCursor<'src>), ParseError> {
        match cursor.value() {
            Ok(b) if (self.predicate)(b) => Ok((b, cursor.next())),
            _ => Err(ParseError::expecting(
                &cursor,
                vec!["character satisfying predicate".to_string()],
            )),
        }
    }
}
