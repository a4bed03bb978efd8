//! Interactive input collaborator
//!
//! Prompts on stdout and reads a single password line from an input stream.

use std::io::{BufRead, Write};

use secrecy::SecretString;
use thiserror::Error;

pub const BANNER: &str = "=== Password Complexity Checker ===";
pub const PROMPT: &str = "Enter a password to assess: ";

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read password: {0}")]
    Io(#[from] std::io::Error),
    #[error("No input available")]
    Eof,
}

/// Writes the prompt and reads one line as the password.
///
/// The trailing newline is stripped; the rest of the line is taken verbatim
/// (no masking, no charset validation).
///
/// # Errors
///
/// Returns `InputError::Eof` if the stream ends before a line is read, or
/// `InputError::Io` on a read/write failure.
pub fn read_password<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<SecretString, InputError> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(InputError::Eof);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(SecretString::new(line.into()))
}
