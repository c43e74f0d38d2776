use crate::cursor::{ByteCursor, Source};
use crate::error::ParseError;
use crate::parser::Parser;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Run a parser against an in-memory input.
///
/// The filename label only serves error messages. The parser is not
/// required to consume the whole input; anchor it with `eoi` or wrap it in
/// `total` for that.
pub fn parse<P>(filename: &str, input: &[u8], parser: &P) -> Result<P::Output, ParseError>
where
    P: Parser + ?Sized,
{
    let cursor = ByteCursor::new(Source::new(filename, input));
    parser.parse(cursor).map(|(value, _)| value)
}

/// Error of the file entry point: either the file could not be read or its
/// contents did not parse.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Read a whole file into memory and parse it, labeling errors with the
/// path.
pub fn parse_file<P>(path: impl AsRef<Path>, parser: &P) -> Result<P::Output, Error>
where
    P: Parser + ?Sized,
{
    let bytes = fs::read(path.as_ref())?;
    let name = path.as_ref().display().to_string();
    Ok(parse(&name, &bytes, parser)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::number::int;
    use crate::token::total;

    #[test]
    fn test_parse_success() {
        let value = parse("input", b"42", &int()).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_parse_does_not_require_full_consumption() {
        let value = parse("input", b"42 and more", &int()).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_parse_failure_carries_filename() {
        let err = parse("numbers.txt", b"x", &int()).unwrap_err();
        assert_eq!(err.filename(), "numbers.txt");
        assert!(err.to_string().starts_with("numbers.txt:1:1: error:"));
    }

    #[test]
    fn test_parse_file() {
        let path = std::env::temp_dir().join("parsigram_parse_file_test.txt");
        fs::write(&path, b" 42 ").unwrap();

        let value = parse_file(&path, &total(int())).unwrap();
        assert_eq!(value, 42);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_parse_file_missing() {
        let path = std::env::temp_dir().join("parsigram_no_such_file.txt");
        let err = parse_file(&path, &int()).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
