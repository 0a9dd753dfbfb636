//! Interactive user-id prompt.

use std::io::{BufRead, Write};
use std::num::ParseIntError;

use anyhow::{bail, Context, Result};

pub fn parse_user_id(raw: &str) -> Result<u64, ParseIntError> {
    raw.trim().parse()
}

/// Ask for a user id until one parses. EOF before a valid id is an error.
pub fn prompt_user_id<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<u64> {
    let mut line = String::new();
    loop {
        write!(output, "Enter user ID: ")?;
        output.flush()?;

        line.clear();
        let read = input.read_line(&mut line).context("Failed to read user ID")?;
        if read == 0 {
            bail!("no user ID entered");
        }

        match parse_user_id(&line) {
            Ok(id) => return Ok(id),
            Err(err) => {
                tracing::debug!("rejected user ID {:?}: {}", line.trim(), err);
                writeln!(output, "please enter a valid non-negative integer")?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(parse_user_id(" 42\n").unwrap(), 42);
    }

    #[test]
    fn parse_rejects_negative_and_text() {
        assert!(parse_user_id("-1").is_err());
        assert!(parse_user_id("one").is_err());
        assert!(parse_user_id("").is_err());
    }

    #[test]
    fn prompt_retries_until_valid() {
        let mut input = "abc\n-3\n\n5\n".as_bytes();
        let mut output = Vec::new();

        let id = prompt_user_id(&mut input, &mut output).unwrap();
        assert_eq!(id, 5);

        let shown = String::from_utf8(output).unwrap();
        assert_eq!(shown.matches("Enter user ID: ").count(), 4);
        assert_eq!(shown.matches("please enter a valid non-negative integer").count(), 3);
    }

    #[test]
    fn prompt_accepts_last_line_without_newline() {
        let mut input = "12".as_bytes();
        let mut output = Vec::new();
        assert_eq!(prompt_user_id(&mut input, &mut output).unwrap(), 12);
    }

    #[test]
    fn prompt_fails_on_eof() {
        let mut input = "nope\n".as_bytes();
        let mut output = Vec::new();
        let err = prompt_user_id(&mut input, &mut output).unwrap_err();
        assert!(err.to_string().contains("no user ID entered"));
    }
}
