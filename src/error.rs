use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::{fmt, io};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputFromFileError {
    #[error("error reading input file \"{}\"", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum SolveError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("cycle detected through device \"{0}\"")]
    Cycle(String),
}

#[derive(Debug, Error)]
#[cfg_attr(test, derive(PartialEq))]
pub struct ParseError {
    error_type: ParseErrorType,
    token: Option<String>,
    line: Option<usize>,
}

impl ParseError {
    /// `line` is zero-based; it is displayed one-based
    pub(crate) fn new(error_type: ParseErrorType, token: impl Display, line: usize) -> Self {
        Self {
            error_type,
            token: Some(token.to_string()),
            line: Some(line),
        }
    }

    pub(crate) const fn from_type(error_type: ParseErrorType) -> Self {
        Self {
            error_type,
            token: None,
            line: None,
        }
    }

    pub fn error_type(&self) -> ParseErrorType {
        self.error_type
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParseErrorType {
    DiagonalEdge,
    EmptyInput,
    IndexOutOfRange,
    InvalidCell,
    InvalidNumber,
    InvalidOperator,
    InvalidToken,
    LengthMismatch,
    MissingOperator,
    MissingSeparator,
    Overflow,
    RaggedRow,
    UnexpectedToken,
    UnknownShape,
}

impl Display for ParseErrorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParseErrorType::DiagonalEdge => "Consecutive tiles share no row or column",
            ParseErrorType::EmptyInput => "Empty input",
            ParseErrorType::IndexOutOfRange => "Index out of range",
            ParseErrorType::InvalidCell => "Invalid cell",
            ParseErrorType::InvalidNumber => "Invalid number",
            ParseErrorType::InvalidOperator => "Invalid operator",
            ParseErrorType::InvalidToken => "Invalid token",
            ParseErrorType::LengthMismatch => "Length mismatch",
            ParseErrorType::MissingOperator => "Missing operator",
            ParseErrorType::MissingSeparator => "Missing separator",
            ParseErrorType::Overflow => "Number too large",
            ParseErrorType::RaggedRow => "Row width differs from first row",
            ParseErrorType::UnexpectedToken => "Unexpected token",
            ParseErrorType::UnknownShape => "Unknown shape",
        };
        write!(f, "{}", s)
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error_type)?;
        if let Some(token) = &self.token {
            write!(f, ": \"{}\"", token)?;
        }
        if let Some(line) = &self.line {
            write!(f, " at line {}", line + 1)?;
        }
        Ok(())
    }
}
