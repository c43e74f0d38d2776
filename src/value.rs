use crate::cursor::ByteCursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser that always succeeds without consuming input, returning `()`.
pub struct PassParser;

/// Convenience function to create a PassParser.
pub fn pass() -> PassParser {
    PassParser
}

impl Parser for PassParser {
    type Output = ();

    fn parse<'src>(
        &self,
        cursor: ByteCursor<'src>,
    ) -> Result<((), ByteCursor<'src>), ParseError> {
        Ok(((), cursor))
    }
}

/// Parser that always fails with the given description as its expected set.
pub struct FailParser {
    message: String,
}

impl FailParser {
    pub fn new(message: impl Into<String>) -> Self {
        FailParser {
            message: message.into(),
        }
    }
}

/// Convenience function to create a FailParser.
pub fn fail(message: impl Into<String>) -> FailParser {
    FailParser::new(message)
}

impl Parser for FailParser {
    type Output = ();

    fn parse<'src>(
        &self,
        cursor: ByteCursor<'src>,
    ) -> Result<((), ByteCursor<'src>), ParseError> {
        Err(ParseError::expecting(&cursor, vec![self.message.clone()]))
    }
}

/// Parser that always succeeds without consuming input, returning the value
/// produced by a factory function.
pub struct LiftParser<F> {
    factory: F,
}

impl<F> LiftParser<F> {
    pub fn new(factory: F) -> Self {
        LiftParser { factory }
    }
}

/// Convenience function to create a LiftParser.
pub fn lift<F, T>(factory: F) -> LiftParser<F>
where
    F: Fn() -> T,
{
    LiftParser::new(factory)
}

impl<F, T> Parser for LiftParser<F>
where
    F: Fn() -> T,
{
    type Output = T;

    fn parse<'src>(
        &self,
        cursor: ByteCursor<'src>,
    ) -> Result<(T, ByteCursor<'src>), ParseError> {
        Ok(((self.factory)(), cursor))
    }
}

/// Parser that always succeeds without consuming input, returning a clone
/// of a fixed value.
pub struct LiftValParser<T> {
    value: T,
}

impl<T> LiftValParser<T> {
    pub fn new(value: T) -> Self {
        LiftValParser { value }
    }
}

/// Convenience function to create a LiftValParser.
pub fn lift_val<T: Clone>(value: T) -> LiftValParser<T> {
    LiftValParser::new(value)
}

impl<T: Clone> Parser for LiftValParser<T> {
    type Output = T;

    fn parse<'src>(
        &self,
        cursor: ByteCursor<'src>,
    ) -> Result<(T, ByteCursor<'src>), ParseError> {
        Ok((self.value.clone(), cursor))
    }
}
