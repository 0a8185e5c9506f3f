//! Reading the operand `x`.

use std::io::{self, BufRead, Write};

use tracing::debug;

/// Prompt shown before reading `x`.
pub const PROMPT: &str = "x = ";

/// Failure to obtain `x`.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Reading or writing the terminal failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input ended before a value was given.
    #[error("x has not been provided")]
    Missing,

    /// The first token is not a 32-bit integer.
    #[error("x must be an integer, got {0:?}")]
    Invalid(String),
}

/// Read the first whitespace-separated token of `input` as an `i32`.
///
/// Blank lines are skipped.
pub fn read_x<R: BufRead>(input: &mut R) -> Result<i32, InputError> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(InputError::Missing);
        }
        if let Some(token) = line.split_whitespace().next() {
            debug!(token, "read operand");
            return token
                .parse()
                .map_err(|_| InputError::Invalid(token.to_string()));
        }
    }
}

/// Write the prompt to `output`, then read `x` from `input`.
pub fn prompt_x<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<i32, InputError> {
    output.write_all(PROMPT.as_bytes())?;
    output.flush()?;
    read_x(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_plain_integer() {
        assert_eq!(read_x(&mut Cursor::new("3\n")).unwrap(), 3);
        assert_eq!(read_x(&mut Cursor::new("-12")).unwrap(), -12);
    }

    #[test]
    fn skips_blank_lines_and_extra_tokens() {
        assert_eq!(read_x(&mut Cursor::new("\n   \n 7 8\n")).unwrap(), 7);
    }

    #[test]
    fn empty_input_is_missing() {
        assert!(matches!(read_x(&mut Cursor::new("")), Err(InputError::Missing)));
        assert!(matches!(read_x(&mut Cursor::new("\n\n")), Err(InputError::Missing)));
    }

    #[test]
    fn non_integer_is_invalid() {
        match read_x(&mut Cursor::new("abc\n")) {
            Err(InputError::Invalid(token)) => assert_eq!(token, "abc"),
            other => panic!("unexpected: {other:?}"),
        }
        assert!(matches!(
            read_x(&mut Cursor::new("99999999999\n")),
            Err(InputError::Invalid(_))
        ));
    }

    #[test]
    fn prompt_is_written_first() {
        let mut out = Vec::new();
        let x = prompt_x(&mut Cursor::new("5\n"), &mut out).unwrap();
        assert_eq!(x, 5);
        assert_eq!(out, PROMPT.as_bytes());
    }

    #[test]
    fn error_display() {
        assert_eq!(InputError::Missing.to_string(), "x has not been provided");
        assert_eq!(
            InputError::Invalid("q".into()).to_string(),
            "x must be an integer, got \"q\""
        );
    }
}
