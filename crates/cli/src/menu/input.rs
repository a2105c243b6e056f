use std::io::BufRead;

use action_menu_core::error::{Error, Result};

/// Reads one line of input without its line ending.
///
/// Returns `None` once the input is exhausted.
pub fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(Error::Stdio)?;

    if read == 0 {
        return Ok(None);
    }

    let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}

/// Parses a menu option as a base-10 integer, ignoring surrounding whitespace.
#[must_use]
pub fn parse_option(line: &str) -> Option<i64> {
    line.trim().parse::<i64>().ok()
}
