//! Interactive password complexity checker.
//!
//! One round of input, one round of output: prompt for a password, assess
//! it, print the report, exit.

use std::io::{self, Write};
use std::process::ExitCode;

use pwd_complexity::{assess, read_password, render, BANNER};

fn run() -> Result<(), pwd_complexity::InputError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    writeln!(output, "{}", BANNER)?;
    let password = read_password(&mut input, &mut output)?;

    let report = assess(&password);

    writeln!(output)?;
    for line in render(&report) {
        writeln!(output, "{}", line)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
