//! Interactive prompts for the rule number and step count.
//!
//! The engine itself never loops on user input; re-prompting on invalid input
//! is entirely a concern of this module.

use elementary_lib::{Config, Rule};
use std::{
    io::{self, BufRead, Write},
    str::FromStr,
};

/// Ask `question` until the reader supplies a line that parses and passes the
/// `accept` predicate.
///
/// Prompts and rejection notices are written to `writer`. Returns an error
/// only if reading or writing fails, or if the input ends before a valid
/// value is supplied.
fn ask<T, R, W>(
    reader: &mut R,
    writer: &mut W,
    question: &str,
    accept: impl Fn(&T) -> bool,
) -> io::Result<T>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    loop {
        write!(writer, "{question}")?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before a valid value was entered",
            ));
        }

        match line.trim().parse() {
            Ok(value) if accept(&value) => return Ok(value),
            _ => writeln!(writer, "Not a valid input.")?,
        }
    }
}

/// Read a full configuration interactively, re-prompting on invalid input.
pub fn read_config<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> io::Result<Config> {
    // Rule's FromStr already rejects numbers outside 0..=255.
    let rule: Rule = ask(reader, writer, "Enter a rule number from 0-255: ", |_| true)?;

    let steps = ask(
        reader,
        writer,
        "Enter the number of timesteps to be used: ",
        |&steps: &usize| steps >= 1,
    )?;

    Ok(Config::new(rule, steps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_config() {
        let mut input = Cursor::new("30\n5\n");
        let mut output = Vec::new();

        let config = read_config(&mut input, &mut output).unwrap();
        assert_eq!(config.rule.number(), 30);
        assert_eq!(config.steps, 5);

        let output = String::from_utf8(output).unwrap();
        assert_eq!(
            output,
            "Enter a rule number from 0-255: Enter the number of timesteps to be used: "
        );
    }

    #[test]
    fn test_reprompts_until_valid() {
        // An out-of-range rule, a non-number, then a valid rule; a zero step
        // count, then a valid one.
        let mut input = Cursor::new("300\nthirty\n30\n0\n5\n");
        let mut output = Vec::new();

        let config = read_config(&mut input, &mut output).unwrap();
        assert_eq!(config.rule.number(), 30);
        assert_eq!(config.steps, 5);

        let output = String::from_utf8(output).unwrap();
        assert_eq!(output.matches("Not a valid input.").count(), 3);
    }

    #[test]
    fn test_input_ends_early() {
        let mut input = Cursor::new("300\n");
        let mut output = Vec::new();

        let result = read_config(&mut input, &mut output);
        assert_eq!(
            result.unwrap_err().kind(),
            io::ErrorKind::UnexpectedEof
        );
    }
}
