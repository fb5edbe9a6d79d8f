//! The daily puzzles

use std::fmt;
use std::fmt::{Display, Formatter};

use enum_dispatch::enum_dispatch;

use crate::error::SolveError;

pub use self::day04::PrintingDepartment;
pub use self::day05::Cafeteria;
pub use self::day06::TrashCompactor;
pub use self::day09::MovieTheater;
pub use self::day10::Factory;
pub use self::day11::Reactor;
pub use self::day12::{ChristmasTreeFarm, SearchLimits};

mod day04;
mod day05;
mod day06;
mod day09;
mod day10;
mod day11;
mod day12;

/// The day numbers that have a solver
pub const DAYS: [u8; 7] = [4, 5, 6, 9, 10, 11, 12];

/// The answers to a puzzle. Some puzzles only have a first part.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Answer {
    pub part1: u64,
    pub part2: Option<u64>,
}

impl Answer {
    pub fn new(part1: u64, part2: u64) -> Self {
        Self {
            part1,
            part2: Some(part2),
        }
    }

    pub fn part1_only(part1: u64) -> Self {
        Self { part1, part2: None }
    }
}

impl Display for Answer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Part 1: {}", self.part1)?;
        if let Some(part2) = self.part2 {
            write!(f, "\nPart 2: {}", part2)?;
        }
        Ok(())
    }
}

#[enum_dispatch]
pub trait Solve {
    fn number(&self) -> u8;

    fn title(&self) -> &'static str;

    /// Parses the puzzle input and computes both answers
    fn solve(&self, input: &str) -> Result<Answer, SolveError>;
}

#[enum_dispatch(Solve)]
pub enum Day {
    PrintingDepartment(PrintingDepartment),
    Cafeteria(Cafeteria),
    TrashCompactor(TrashCompactor),
    MovieTheater(MovieTheater),
    Factory(Factory),
    Reactor(Reactor),
    ChristmasTreeFarm(ChristmasTreeFarm),
}

impl Day {
    /// Looks up the solver for a day. `limits` bounds the day 12 packing search.
    pub fn from_number(number: u8, limits: SearchLimits) -> Option<Self> {
        let day: Day = match number {
            4 => PrintingDepartment.into(),
            5 => Cafeteria.into(),
            6 => TrashCompactor.into(),
            9 => MovieTheater.into(),
            10 => Factory.into(),
            11 => Reactor.into(),
            12 => ChristmasTreeFarm::new(limits).into(),
            _ => return None,
        };
        Some(day)
    }
}
