use std::io::{BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("input ended unexpectedly")]
    Eof,
}

/// Reads one line without its line terminator. Consuming whole lines
/// means numeric reads never leave a stray terminator behind for the
/// next text read.
pub fn read_line<R: BufRead>(input: &mut R) -> Result<String, InputError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(InputError::Eof);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String, InputError> {
    write!(output, "{prompt}")?;
    output.flush()?;
    read_line(input)
}

/// Prompts until the line parses as a `T`; malformed input is rejected
/// with a message instead of being accepted as garbage.
pub fn prompt_parsed<T, R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<T, InputError>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    loop {
        let line = prompt_line(input, output, prompt)?;
        match line.trim().parse() {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(output, "Valor inválido! Digite um número.")?,
        }
    }
}
