//! Solvers for a collection of daily puzzles

#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

#[macro_use]
extern crate log;

use std::fs;
use std::path::Path;

pub use crate::day::{Answer, Day, SearchLimits, Solve, DAYS};
pub use crate::error::{InputFromFileError, ParseError, ParseErrorType, SolveError};

pub mod collections;
pub mod day;
pub mod error;
mod parse;

/// Reads a puzzle input file into memory
pub fn read_input(path: impl AsRef<Path>) -> Result<String, InputFromFileError> {
    let path = path.as_ref();
    debug!("reading input from \"{}\"", path.display());
    fs::read_to_string(path).map_err(|source| InputFromFileError::Io {
        path: path.to_path_buf(),
        source,
    })
}
