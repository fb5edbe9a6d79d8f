//! Day 4: Printing Department

use crate::collections::grid::Coord;
use crate::collections::Grid;
use crate::day::{Answer, Solve};
use crate::error::SolveError;
use crate::parse::parse_grid;

/// A roll can be reached by a forklift when fewer than this many neighbors hold rolls
const CROWDED: usize = 4;

pub struct PrintingDepartment;

impl Solve for PrintingDepartment {
    fn number(&self) -> u8 {
        4
    }

    fn title(&self) -> &'static str {
        "Printing Department"
    }

    fn solve(&self, input: &str) -> Result<Answer, SolveError> {
        let rolls = parse_rolls(input)?;
        let accessible = accessible_rolls(&rolls).len();
        let removed = remove_all_accessible(rolls);
        Ok(Answer::new(accessible as u64, removed as u64))
    }
}

fn parse_rolls(input: &str) -> Result<Grid<bool>, SolveError> {
    let grid = parse_grid(input, |c| match c {
        '@' => Some(true),
        '.' => Some(false),
        _ => None,
    })?;
    Ok(grid)
}

fn adjacent_rolls(rolls: &Grid<bool>, coord: Coord) -> usize {
    rolls.neighbors(coord).filter(|&c| rolls[c]).count()
}

fn accessible_rolls(rolls: &Grid<bool>) -> Vec<Coord> {
    rolls
        .iter_coord()
        .filter(|&(coord, &roll)| roll && adjacent_rolls(rolls, coord) < CROWDED)
        .map(|(coord, _)| coord)
        .collect()
}

/// Removes every accessible roll in rounds until none are accessible. Returns the total removed.
fn remove_all_accessible(mut rolls: Grid<bool>) -> usize {
    let mut total = 0;
    loop {
        let accessible = accessible_rolls(&rolls);
        if accessible.is_empty() {
            break;
        }
        debug!("removing {} rolls", accessible.len());
        total += accessible.len();
        for coord in accessible {
            rolls[coord] = false;
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorType;

    const EXAMPLE: &str = "\
..@@.@@@@.
@@@.@.@.@@
@@@@@.@.@@
@.@@@@..@.
@@.@@@@.@@
.@@@@@@@.@
.@.@.@.@@@
@.@@@.@@@@
.@@@@@@@@.
@.@.@@@.@.
";

    #[test]
    fn example() {
        assert_eq!(Answer::new(13, 43), PrintingDepartment.solve(EXAMPLE).unwrap());
    }

    #[test]
    fn isolated_roll_is_accessible() {
        let rolls = parse_rolls("...\n.@.\n...\n").unwrap();
        assert_eq!(vec![Coord::new(1, 1)], accessible_rolls(&rolls));
    }

    #[test]
    fn full_block_removed_in_rounds() {
        // the center of a 3x3 block is crowded until the corners go
        let rolls = parse_rolls("@@@\n@@@\n@@@\n").unwrap();
        assert_eq!(4, accessible_rolls(&rolls).len());
        assert_eq!(9, remove_all_accessible(rolls));
    }

    #[test]
    fn invalid_cell() {
        match PrintingDepartment.solve("..x\n") {
            Err(SolveError::Parse(e)) => assert_eq!(ParseErrorType::InvalidCell, e.error_type()),
            _ => panic!("expected parse error"),
        }
    }
}
