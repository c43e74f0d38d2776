use crate::cursor::ByteCursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser that succeeds only at end of input, consuming nothing.
pub struct EoiParser;

/// Convenience function to create an EoiParser.
pub fn eoi() -> EoiParser {
    EoiParser
}

impl Parser for EoiParser {
    type Output = ();

    fn parse<'src>(
        &self,
        cursor: ByteCursor<'src>,
    ) -> Result<((), ByteCursor<'src>), ParseError> {
        if cursor.at_end() {
            Ok(((), cursor))
        } else {
            Err(ParseError::expecting(
                &cursor,
                vec!["end of input".to_string()],
            ))
        }
    }
}

/// Parser that succeeds only at the start of input, consuming nothing.
pub struct SoiParser;

/// Convenience function to create a SoiParser.
pub fn soi() -> SoiParser {
    SoiParser
}

impl Parser for SoiParser {
    type Output = ();

    fn parse<'src>(
        &self,
        cursor: ByteCursor<'src>,
    ) -> Result<((), ByteCursor<'src>), ParseError> {
        if cursor.position() == 0 {
            Ok(((), cursor))
        } else {
            Err(ParseError::expecting(
                &cursor,
                vec!["start of input".to_string()],
            ))
        }
    }
}
