//! Helpers shared by the puzzle input parsers

use std::fmt::Display;
use std::str::FromStr;

use crate::collections::Grid;
use crate::error::{ParseError, ParseErrorType};

/// Iterates over the non-blank lines of `s` with their zero-based line numbers.
/// Trailing whitespace is removed.
pub(crate) fn numbered_lines(s: &str) -> impl Iterator<Item = (usize, &str)> {
    s.lines()
        .map(str::trim_end)
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
}

/// Parses a number, reporting `token` and `line` on failure
pub(crate) fn parse_number<T: FromStr>(token: &str, line: usize) -> Result<T, ParseError> {
    token
        .trim()
        .parse()
        .map_err(|_| ParseError::new(ParseErrorType::InvalidNumber, token, line))
}

/// Splits `s` once around `separator`, or fails with `MissingSeparator`
pub(crate) fn split_once<'a>(
    s: &'a str,
    separator: &str,
    line: usize,
) -> Result<(&'a str, &'a str), ParseError> {
    s.split_once(separator)
        .ok_or_else(|| ParseError::new(ParseErrorType::MissingSeparator, s, line))
}

/// Parses a rectangular grid of characters. `cell` maps each character to a value or
/// rejects it.
pub(crate) fn parse_grid<T>(
    s: &str,
    cell: impl Fn(char) -> Option<T>,
) -> Result<Grid<T>, ParseError> {
    let mut rows = Vec::new();
    let mut line_numbers = Vec::new();
    for (line_no, line) in numbered_lines(s) {
        let row = line
            .chars()
            .map(|c| cell(c).ok_or_else(|| ParseError::new(ParseErrorType::InvalidCell, c, line_no)))
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
        line_numbers.push(line_no);
    }
    if rows.is_empty() {
        return Err(ParseError::from_type(ParseErrorType::EmptyInput));
    }
    Grid::from_rows(rows).map_err(|i| {
        let line_no = line_numbers[i];
        ParseError::new(ParseErrorType::RaggedRow, row_text(s, line_no), line_no)
    })
}

fn row_text(s: &str, line: usize) -> impl Display + '_ {
    s.lines().nth(line).unwrap_or_default().trim_end()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_lines_skips_blank() {
        let lines: Vec<_> = numbered_lines("a\n\n  \nb  \n").collect();
        assert_eq!(vec![(0, "a"), (3, "b")], lines);
    }

    #[test]
    fn parse_number_error() {
        let error = parse_number::<u32>("1x", 4).unwrap_err();
        assert_eq!(ParseError::new(ParseErrorType::InvalidNumber, "1x", 4), error);
    }

    #[test]
    fn split_once_missing() {
        assert_eq!(Ok(("a", "b")), split_once("a: b", ": ", 0));
        assert_eq!(
            ParseErrorType::MissingSeparator,
            split_once("ab", ": ", 0).unwrap_err().error_type()
        );
    }

    #[test]
    fn parse_grid_ragged() {
        let error = parse_grid("..\n.\n", |c| Some(c)).unwrap_err();
        assert_eq!(ParseError::new(ParseErrorType::RaggedRow, ".", 1), error);
    }

    #[test]
    fn parse_grid_invalid_cell() {
        let error = parse_grid(".x\n", |c| if c == '.' { Some(()) } else { None }).unwrap_err();
        assert_eq!(ParseError::new(ParseErrorType::InvalidCell, 'x', 0), error);
    }

    #[test]
    fn parse_grid_empty() {
        let error = parse_grid("\n", Some).unwrap_err();
        assert_eq!(ParseErrorType::EmptyInput, error.error_type());
    }
}
