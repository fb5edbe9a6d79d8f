//! Day 6: Trash Compactor

use std::ops::Range;

use itertools::Itertools;

use crate::collections::Grid;
use crate::day::{Answer, Solve};
use crate::error::{ParseError, ParseErrorType, SolveError};
use crate::parse::{numbered_lines, parse_number};

pub struct TrashCompactor;

impl Solve for TrashCompactor {
    fn number(&self) -> u8 {
        6
    }

    fn title(&self) -> &'static str {
        "Trash Compactor"
    }

    fn solve(&self, input: &str) -> Result<Answer, SolveError> {
        let worksheet = Worksheet::parse(input)?;
        let mut by_rows: u64 = 0;
        let mut by_columns: u64 = 0;
        for block in worksheet.blocks() {
            let operator = worksheet.operator(&block)?;
            let overflow = || worksheet.overflow(&block);
            by_rows = operator
                .apply(worksheet.row_numbers(&block)?)
                .and_then(|n| by_rows.checked_add(n))
                .ok_or_else(overflow)?;
            by_columns = worksheet
                .column_numbers(&block)
                .and_then(|numbers| operator.apply(numbers))
                .and_then(|n| by_columns.checked_add(n))
                .ok_or_else(overflow)?;
        }
        Ok(Answer::new(by_rows, by_columns))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Operator {
    Add,
    Multiply,
}

impl Operator {
    fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Operator::Add),
            "*" => Some(Operator::Multiply),
            _ => None,
        }
    }

    /// `None` on overflow
    fn apply(self, numbers: impl IntoIterator<Item = u64>) -> Option<u64> {
        let mut numbers = numbers.into_iter();
        match self {
            Operator::Add => numbers.try_fold(0u64, u64::checked_add),
            Operator::Multiply => numbers.try_fold(1u64, u64::checked_mul),
        }
    }
}

/// The problems laid out side by side, padded with spaces to a rectangle.
/// The last row holds the operators.
struct Worksheet {
    cells: Grid<u8>,
    line_numbers: Vec<usize>,
}

impl Worksheet {
    fn parse(input: &str) -> Result<Self, ParseError> {
        let (line_numbers, lines): (Vec<usize>, Vec<&str>) = numbered_lines(input).unzip();
        if lines.len() < 2 {
            return Err(ParseError::from_type(ParseErrorType::EmptyInput));
        }
        let width = lines.iter().map(|line| line.len()).max().unwrap_or(0);
        let rows = lines
            .iter()
            .map(|line| {
                let mut row = line.as_bytes().to_vec();
                row.resize(width, b' ');
                row
            })
            .collect();
        let cells = Grid::from_rows(rows)
            .map_err(|i| ParseError::new(ParseErrorType::RaggedRow, lines[i], line_numbers[i]))?;
        Ok(Self {
            cells,
            line_numbers,
        })
    }

    fn operator_row(&self) -> usize {
        self.cells.height() - 1
    }

    fn is_separator(&self, col: usize) -> bool {
        self.cells.col(col).all(|&c| c == b' ')
    }

    /// The column ranges of each problem
    fn blocks(&self) -> Vec<Range<usize>> {
        let separators = (0..self.cells.width()).map(|col| self.is_separator(col));
        let mut blocks = Vec::new();
        for (is_separator, cols) in &separators.enumerate().group_by(|&(_, s)| s) {
            if !is_separator {
                let cols = cols.map(|(col, _)| col).collect_vec();
                blocks.push(cols[0]..cols[cols.len() - 1] + 1);
            }
        }
        blocks
    }

    fn text(&self, row: usize, block: &Range<usize>) -> &str {
        // only ASCII bytes can make up a valid token; anything else fails later as a number
        std::str::from_utf8(&self.cells.row(row)[block.clone()]).unwrap_or("?")
    }

    fn operator(&self, block: &Range<usize>) -> Result<Operator, ParseError> {
        let row = self.operator_row();
        let line = self.line_numbers[row];
        let symbol = self.text(row, block).trim();
        if symbol.is_empty() {
            let token = self.text(0, block).trim().to_string();
            return Err(ParseError::new(ParseErrorType::MissingOperator, token, line));
        }
        Operator::from_symbol(symbol)
            .ok_or_else(|| ParseError::new(ParseErrorType::InvalidOperator, symbol, line))
    }

    fn overflow(&self, block: &Range<usize>) -> ParseError {
        let token = self.text(0, block).trim();
        ParseError::new(ParseErrorType::Overflow, token, self.line_numbers[0])
    }

    /// Each row of a problem holds one number
    fn row_numbers(&self, block: &Range<usize>) -> Result<Vec<u64>, ParseError> {
        (0..self.operator_row())
            .map(|row| (row, self.text(row, block).trim()))
            .filter(|(_, token)| !token.is_empty())
            .map(|(row, token)| parse_number(token, self.line_numbers[row]))
            .collect()
    }

    /// Each column of a problem holds one number, read right to left with the most
    /// significant digit at the top. `None` if a number doesn't fit in a `u64`.
    fn column_numbers(&self, block: &Range<usize>) -> Option<Vec<u64>> {
        let mut numbers = Vec::new();
        for col in block.clone().rev() {
            let mut digits = self
                .cells
                .col(col)
                .take(self.operator_row())
                .filter(|c| c.is_ascii_digit())
                .peekable();
            if digits.peek().is_none() {
                continue;
            }
            let number = digits.try_fold(0u64, |n, &c| {
                n.checked_mul(10)?.checked_add(u64::from(c - b'0'))
            })?;
            numbers.push(number);
        }
        Some(numbers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
123 328  51 64
 45 64  387 23
  6 98  215 314
*   +   *   +
";

    #[test]
    fn example() {
        assert_eq!(Answer::new(4277556, 3263827), TrashCompactor.solve(EXAMPLE).unwrap());
    }

    #[test]
    fn blocks_split_on_space_columns() {
        let worksheet = Worksheet::parse(EXAMPLE).unwrap();
        assert_eq!(vec![0..3, 4..7, 8..11, 12..15], worksheet.blocks());
    }

    #[test]
    fn column_numbers_right_to_left() {
        let worksheet = Worksheet::parse(EXAMPLE).unwrap();
        assert_eq!(Some(vec![4, 431, 623]), worksheet.column_numbers(&(12..15)));
        assert_eq!(Some(vec![356, 24, 1]), worksheet.column_numbers(&(0..3)));
    }

    #[test]
    fn trailing_spaces_trimmed() {
        // the operator row is shorter than the number rows
        let input = "1 23\n2  4\n+ * \n";
        assert_eq!(Answer::new(3 + 92, 12 + 68), TrashCompactor.solve(input).unwrap());
    }

    #[test]
    fn product_overflow() {
        let input = "4294967296\n4294967296\n*\n";
        match TrashCompactor.solve(input) {
            Err(SolveError::Parse(e)) => {
                assert_eq!(ParseError::new(ParseErrorType::Overflow, "4294967296", 0), e)
            }
            _ => panic!("expected parse error"),
        }
    }

    #[test]
    fn column_number_overflow() {
        // twenty digits stacked in one column
        let input = format!("{}+\n", "9\n".repeat(20));
        let worksheet = Worksheet::parse(&input).unwrap();
        assert_eq!(None, worksheet.column_numbers(&(0..1)));
        match TrashCompactor.solve(&input) {
            Err(SolveError::Parse(e)) => assert_eq!(ParseErrorType::Overflow, e.error_type()),
            _ => panic!("expected parse error"),
        }
    }

    #[test]
    fn invalid_operator() {
        match TrashCompactor.solve("12\n 3\n- \n") {
            Err(SolveError::Parse(e)) => assert_eq!(ParseErrorType::InvalidOperator, e.error_type()),
            _ => panic!("expected parse error"),
        }
    }

    #[test]
    fn missing_operator() {
        match TrashCompactor.solve("12 4\n 3 5\n+   \n") {
            Err(SolveError::Parse(e)) => assert_eq!(ParseErrorType::MissingOperator, e.error_type()),
            _ => panic!("expected parse error"),
        }
    }
}
