//! Day 5: Cafeteria

use crate::collections::IntervalSet;
use crate::day::{Answer, Solve};
use crate::error::{ParseError, ParseErrorType, SolveError};
use crate::parse::{parse_number, split_once};

pub struct Cafeteria;

impl Solve for Cafeteria {
    fn number(&self) -> u8 {
        5
    }

    fn title(&self) -> &'static str {
        "Cafeteria"
    }

    fn solve(&self, input: &str) -> Result<Answer, SolveError> {
        let database = Database::parse(input)?;
        let fresh = database
            .available
            .iter()
            .filter(|&&id| database.fresh.contains(id))
            .count();
        let fresh_ids = database
            .fresh
            .size()
            .ok_or_else(|| ParseError::from_type(ParseErrorType::Overflow))?;
        Ok(Answer::new(fresh as u64, fresh_ids))
    }
}

/// Fresh ingredient ID ranges and the available ingredient IDs
struct Database {
    fresh: IntervalSet,
    available: Vec<u64>,
}

impl Database {
    /// The ranges come first, then a blank line, then one ID per line
    fn parse(input: &str) -> Result<Self, SolveError> {
        let mut ranges = Vec::new();
        let mut available = Vec::new();
        let mut in_ranges = true;
        for (line_no, line) in input.lines().map(str::trim).enumerate() {
            if line.is_empty() {
                if !ranges.is_empty() {
                    in_ranges = false;
                }
                continue;
            }
            if in_ranges {
                let (start, end) = split_once(line, "-", line_no)?;
                let start: u64 = parse_number(start, line_no)?;
                let end: u64 = parse_number(end, line_no)?;
                ranges.push(start..=end);
            } else {
                available.push(parse_number(line, line_no)?);
            }
        }
        Ok(Self {
            fresh: ranges.into_iter().collect(),
            available,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
3-5
10-14
16-20
12-18

1
5
8
11
17
32
";

    #[test]
    fn example() {
        assert_eq!(Answer::new(3, 14), Cafeteria.solve(EXAMPLE).unwrap());
    }

    #[test]
    fn ranges_only() {
        assert_eq!(Answer::new(0, 6), Cafeteria.solve("1-3\n4-6\n").unwrap());
    }

    #[test]
    fn large_ids() {
        let input = "100000000000-100000000009\n\n100000000005\n";
        assert_eq!(Answer::new(1, 10), Cafeteria.solve(input).unwrap());
    }

    #[test]
    fn too_many_fresh_ids() {
        match Cafeteria.solve("0-9\n10-18446744073709551615\n") {
            Err(SolveError::Parse(e)) => assert_eq!(ParseErrorType::Overflow, e.error_type()),
            _ => panic!("expected parse error"),
        }
    }

    #[test]
    fn id_in_range_section_is_an_error() {
        assert!(Cafeteria.solve("3-5\n7\n").is_err());
    }
}
