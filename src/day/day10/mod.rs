//! Day 10: Factory

use crate::day::{Answer, Solve};
use crate::error::{ParseError, ParseErrorType, SolveError};
use crate::parse::{numbered_lines, parse_number};

mod joltage;
mod lights;

pub struct Factory;

impl Solve for Factory {
    fn number(&self) -> u8 {
        10
    }

    fn title(&self) -> &'static str {
        "Factory"
    }

    fn solve(&self, input: &str) -> Result<Answer, SolveError> {
        let machines = numbered_lines(input)
            .map(|(line_no, line)| Machine::parse(line, line_no))
            .collect::<Result<Vec<_>, _>>()?;
        let mut light_presses = 0;
        let mut joltage_presses = 0;
        for (i, machine) in machines.iter().enumerate() {
            match lights::fewest_presses(&machine.lights, &machine.buttons) {
                Some(presses) => light_presses += u64::from(presses),
                None => warn!("machine {} cannot match its indicator lights", i + 1),
            }
            if machine.joltage.is_empty() {
                continue;
            }
            match joltage::fewest_presses(&machine.joltage, &machine.buttons) {
                Some(presses) => joltage_presses += presses,
                None => warn!("machine {} cannot reach its joltage levels", i + 1),
            }
        }
        Ok(Answer::new(light_presses, joltage_presses))
    }
}

/// One line of the manual
#[derive(Debug, PartialEq)]
struct Machine {
    /// the target indicator light pattern
    lights: Vec<bool>,
    /// the lights (or counters) each button affects
    buttons: Vec<Vec<usize>>,
    /// the target counter values, one per light; empty when the manual omits them
    joltage: Vec<u64>,
}

impl Machine {
    /// Parses `[.##.] (3) (1,3) ... {3,5,4,7}`
    fn parse(line: &str, line_no: usize) -> Result<Self, ParseError> {
        let mut tokens = line.split_whitespace();
        let diagram = tokens
            .next()
            .and_then(|t| enclosed(t, '[', ']'))
            .ok_or_else(|| ParseError::new(ParseErrorType::InvalidToken, line, line_no))?;
        let lights = diagram
            .chars()
            .map(|c| match c {
                '#' => Ok(true),
                '.' => Ok(false),
                _ => Err(ParseError::new(ParseErrorType::InvalidCell, c, line_no)),
            })
            .collect::<Result<Vec<_>, _>>()?;
        let mut buttons = Vec::new();
        let mut joltage = Vec::new();
        for token in tokens {
            if let Some(wiring) = enclosed(token, '(', ')') {
                let button = parse_list::<usize>(wiring, line_no)?;
                if let Some(&i) = button.iter().find(|&&i| i >= lights.len()) {
                    return Err(ParseError::new(ParseErrorType::IndexOutOfRange, i, line_no));
                }
                buttons.push(button);
            } else if let Some(levels) = enclosed(token, '{', '}') {
                joltage = parse_list(levels, line_no)?;
                if joltage.len() != lights.len() {
                    return Err(ParseError::new(ParseErrorType::LengthMismatch, token, line_no));
                }
            } else {
                return Err(ParseError::new(ParseErrorType::UnexpectedToken, token, line_no));
            }
        }
        Ok(Self {
            lights,
            buttons,
            joltage,
        })
    }
}

fn enclosed(token: &str, open: char, close: char) -> Option<&str> {
    token.strip_prefix(open)?.strip_suffix(close)
}

fn parse_list<T: std::str::FromStr>(s: &str, line_no: usize) -> Result<Vec<T>, ParseError> {
    if s.is_empty() {
        return Ok(Vec::new());
    }
    s.split(',').map(|n| parse_number(n, line_no)).collect()
}
