//! Day 12: Christmas Tree Farm

use std::time::Duration;

use crate::day::{Answer, Solve};
use crate::error::{ParseError, ParseErrorType, SolveError};
use crate::parse::{numbered_lines, parse_number, split_once};

use self::packer::PackOutcome;
use self::shape::Shape;

mod packer;
mod shape;

/// Regions between progress messages
const PROGRESS_INTERVAL: usize = 100;

/// Bounds the packing search for a single region. A region whose search runs out of
/// attempts or time is counted as not fitting.
#[derive(Clone, Copy, Debug)]
pub struct SearchLimits {
    pub max_attempts: u64,
    pub max_runtime: Duration,
}

impl SearchLimits {
    pub const DEFAULT_MAX_ATTEMPTS: u64 = 1_000_000;
    pub const DEFAULT_MAX_RUNTIME: Duration = Duration::from_secs(30);
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            max_runtime: Self::DEFAULT_MAX_RUNTIME,
        }
    }
}

pub struct ChristmasTreeFarm {
    limits: SearchLimits,
}

impl ChristmasTreeFarm {
    pub fn new(limits: SearchLimits) -> Self {
        Self { limits }
    }
}

impl Solve for ChristmasTreeFarm {
    fn number(&self) -> u8 {
        12
    }

    fn title(&self) -> &'static str {
        "Christmas Tree Farm"
    }

    fn solve(&self, input: &str) -> Result<Answer, SolveError> {
        let summary = Summary::parse(input)?;
        let orientations: Vec<Vec<Shape>> =
            summary.shapes.iter().map(Shape::orientations).collect();
        let mut fits = 0;
        for (i, region) in summary.regions.iter().enumerate() {
            if i > 0 && i % PROGRESS_INTERVAL == 0 {
                info!(
                    "checked {} of {} regions, {} fit",
                    i,
                    summary.regions.len(),
                    fits
                );
            }
            let outcome = packer::pack(
                region.width,
                region.height,
                &region.counts,
                &orientations,
                self.limits,
            );
            match outcome {
                PackOutcome::Fits => fits += 1,
                PackOutcome::DoesNotFit => {}
                PackOutcome::LimitExceeded => warn!(
                    "gave up on region {} ({}x{}), counting it as not fitting",
                    i + 1,
                    region.width,
                    region.height
                ),
            }
        }
        Ok(Answer::part1_only(fits))
    }
}

/// A region under a tree and the number of presents of each shape to fit in it
#[derive(Debug, PartialEq)]
struct Region {
    width: usize,
    height: usize,
    counts: Vec<usize>,
}

/// The present shapes followed by the regions
#[derive(Debug)]
struct Summary {
    shapes: Vec<Shape>,
    regions: Vec<Region>,
}

impl Summary {
    fn parse(input: &str) -> Result<Self, ParseError> {
        // each shape's header line and rows
        let mut shape_rows: Vec<(usize, Vec<Vec<bool>>)> = Vec::new();
        let mut regions = Vec::new();
        for (line_no, line) in numbered_lines(input) {
            let unexpected = || ParseError::new(ParseErrorType::UnexpectedToken, line, line_no);
            match line.strip_suffix(':') {
                Some(index) if !line.contains('x') => {
                    let index: usize = parse_number(index, line_no)?;
                    if !regions.is_empty() || index != shape_rows.len() {
                        return Err(unexpected());
                    }
                    shape_rows.push((line_no, Vec::new()));
                }
                _ if line.contains(':') => {
                    regions.push(parse_region(line, line_no, shape_rows.len())?);
                }
                _ => {
                    let rows = match shape_rows.last_mut() {
                        Some((_, rows)) if regions.is_empty() => rows,
                        _ => return Err(unexpected()),
                    };
                    let row = line
                        .chars()
                        .map(|c| match c {
                            '#' => Ok(true),
                            '.' => Ok(false),
                            _ => Err(ParseError::new(ParseErrorType::InvalidCell, c, line_no)),
                        })
                        .collect::<Result<Vec<_>, _>>()?;
                    rows.push(row);
                }
            }
        }
        let shapes = shape_rows
            .iter()
            .enumerate()
            .map(|(index, (line_no, rows))| {
                let shape = Shape::from_rows(rows);
                if shape.len() == 0 {
                    let header = format!("{}:", index);
                    return Err(ParseError::new(ParseErrorType::EmptyInput, header, *line_no));
                }
                Ok(shape)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { shapes, regions })
    }
}

/// Parses `12x5: 1 0 1 0 2 2`. Shapes without a count get zero presents.
fn parse_region(line: &str, line_no: usize, shape_count: usize) -> Result<Region, ParseError> {
    let (size, counts) = split_once(line, ":", line_no)?;
    let (width, height) = split_once(size, "x", line_no)?;
    let width: usize = parse_number(width, line_no)?;
    let height: usize = parse_number(height, line_no)?;
    if width.checked_mul(height).is_none() {
        return Err(ParseError::new(ParseErrorType::Overflow, size, line_no));
    }
    let mut counts = counts
        .split_whitespace()
        .map(|n| parse_number(n, line_no))
        .collect::<Result<Vec<usize>, _>>()?;
    if counts.len() > shape_count {
        return Err(ParseError::new(
            ParseErrorType::UnknownShape,
            shape_count,
            line_no,
        ));
    }
    counts.resize(shape_count, 0);
    Ok(Region {
        width,
        height,
        counts,
    })
}
