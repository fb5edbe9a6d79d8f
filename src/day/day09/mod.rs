//! Day 9: Movie Theater

use itertools::Itertools;

use crate::day::{Answer, Solve};
use crate::error::{ParseError, ParseErrorType, SolveError};
use crate::parse::{numbered_lines, parse_number, split_once};

use self::floor::Floor;

mod floor;

pub struct MovieTheater;

impl Solve for MovieTheater {
    fn number(&self) -> u8 {
        9
    }

    fn title(&self) -> &'static str {
        "Movie Theater"
    }

    fn solve(&self, input: &str) -> Result<Answer, SolveError> {
        let tiles = parse_red_tiles(input)?;
        let largest = largest_rectangle(&tiles);
        let largest_covered = largest_covered_rectangle(&tiles);
        Ok(Answer::new(largest, largest_covered))
    }
}

/// A red tile on the theater floor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Tile {
    pub x: i64,
    pub y: i64,
}

impl Tile {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// The number of tiles in the rectangle with `a` and `b` as opposite corners
fn area(a: Tile, b: Tile) -> u64 {
    let width = (a.x - b.x).unsigned_abs() + 1;
    let height = (a.y - b.y).unsigned_abs() + 1;
    width * height
}

/// Parses the red tiles. Each tile must share a row or column with the tile before it,
/// and the last with the first.
fn parse_red_tiles(input: &str) -> Result<Vec<Tile>, ParseError> {
    let mut tiles = Vec::new();
    let mut line_numbers = Vec::new();
    for (line_no, line) in numbered_lines(input) {
        let (x, y) = split_once(line, ",", line_no)?;
        tiles.push(Tile::new(parse_number(x, line_no)?, parse_number(y, line_no)?));
        line_numbers.push(line_no);
    }
    if tiles.is_empty() {
        return Err(ParseError::from_type(ParseErrorType::EmptyInput));
    }
    for i in 0..tiles.len() {
        let (a, b) = (tiles[i], tiles[(i + 1) % tiles.len()]);
        if a.x != b.x && a.y != b.y {
            let line_no = line_numbers[(i + 1) % tiles.len()];
            let token = format!("{},{}", b.x, b.y);
            return Err(ParseError::new(ParseErrorType::DiagonalEdge, token, line_no));
        }
    }
    Ok(tiles)
}

fn largest_rectangle(tiles: &[Tile]) -> u64 {
    tiles
        .iter()
        .tuple_combinations()
        .map(|(&a, &b)| area(a, b))
        .max()
        .unwrap_or_else(|| tiles.first().map_or(0, |&t| area(t, t)))
}

/// The largest rectangle with red corners containing only red or green tiles
fn largest_covered_rectangle(tiles: &[Tile]) -> u64 {
    let floor = Floor::new(tiles);
    let mut candidates = tiles
        .iter()
        .tuple_combinations()
        .map(|(&a, &b)| (area(a, b), a, b))
        .collect_vec();
    candidates.sort_unstable_by(|x, y| y.0.cmp(&x.0));
    debug!("checking {} candidate rectangles", candidates.len());
    candidates
        .into_iter()
        .find(|&(_, a, b)| floor.is_covered(a, b))
        .map_or_else(|| tiles.first().map_or(0, |&t| area(t, t)), |(area, _, _)| area)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
7,1
11,1
11,7
9,7
9,5
2,5
2,3
7,3
";

    #[test]
    fn example() {
        assert_eq!(Answer::new(50, 24), MovieTheater.solve(EXAMPLE).unwrap());
    }

    #[test]
    fn area_is_inclusive() {
        assert_eq!(6, area(Tile::new(7, 3), Tile::new(2, 3)));
        assert_eq!(35, area(Tile::new(7, 1), Tile::new(11, 7)));
    }

    #[test]
    fn square_loop() {
        let input = "0,0\n4,0\n4,4\n0,4\n";
        assert_eq!(Answer::new(25, 25), MovieTheater.solve(input).unwrap());
    }

    #[test]
    fn u_shape_excludes_notch() {
        // a U opening upward; the notch between the arms is not green
        let input = "0,0\n6,0\n6,6\n4,6\n4,2\n2,2\n2,6\n0,6\n";
        assert_eq!(Answer::new(49, 21), MovieTheater.solve(input).unwrap());
    }

    #[test]
    fn diagonal_edge() {
        let error = parse_red_tiles("0,0\n3,3\n").unwrap_err();
        assert_eq!(ParseError::new(ParseErrorType::DiagonalEdge, "3,3", 1), error);
    }

    #[test]
    fn missing_comma() {
        let error = parse_red_tiles("0 0\n").unwrap_err();
        assert_eq!(ParseErrorType::MissingSeparator, error.error_type());
    }
}
