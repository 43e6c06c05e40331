//! Console prompts for the values not supplied on the command line.
//!
//! Everything here is generic over `BufRead`/`Write` so the loops can be
//! driven by in-memory buffers in tests. Malformed count input is consumed
//! by the re-prompt loop and never reaches the pipeline.

pub mod parser;

pub use parser::parse_count;

use std::io::{self, BufRead, Write};

/// Prints `prompt` and reads one line, trimmed. A closed input stream is
/// an error rather than an answer.
pub fn prompt_line<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "console input ended",
        ));
    }
    Ok(line.trim().to_string())
}

/// Asks for the number of words to include until the answer parses as a
/// non-negative integer.
pub fn prompt_count<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<usize> {
    loop {
        let line = prompt_line(
            "Number of words to include in the tag cloud: ",
            input,
            output,
        )?;
        match parse_count(&line) {
            Some(count) => return Ok(count),
            None => writeln!(output, "Invalid input.")?,
        }
    }
}
