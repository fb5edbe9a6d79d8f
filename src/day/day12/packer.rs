//! Fitting presents into a region

use std::time::Instant;

use crate::collections::grid::Coord;
use crate::collections::Grid;

use super::shape::Shape;
use super::SearchLimits;

/// Attempts between limit checks
const LIMIT_CHECK_INTERVAL: u64 = 100;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) enum PackOutcome {
    Fits,
    DoesNotFit,
    /// the search gave up before finding an answer
    LimitExceeded,
}

struct LimitExceeded;

/// Decides whether `counts[i]` presents of each shape `i` fit in a `width` by `height`
/// region. `orientations[i]` holds every orientation of shape `i`. The region's area
/// must fit in a `usize`.
pub(super) fn pack(
    width: usize,
    height: usize,
    counts: &[usize],
    orientations: &[Vec<Shape>],
    limits: SearchLimits,
) -> PackOutcome {
    let area = width * height;
    let needed = counts
        .iter()
        .zip(orientations)
        .try_fold(0usize, |needed, (&count, o)| {
            count.checked_mul(o[0].len())?.checked_add(needed)
        });
    // more cells than a usize can count never fit either
    let needed = match needed {
        Some(needed) if needed <= area => needed,
        _ => return PackOutcome::DoesNotFit,
    };
    let pieces: usize = counts.iter().sum();
    let extent = counts
        .iter()
        .zip(orientations)
        .filter(|&(&count, _)| count > 0)
        .map(|(_, o)| o[0].extent())
        .max()
        .unwrap_or(1);
    // each present gets its own square
    if (width / extent) * (height / extent) >= pieces {
        return PackOutcome::Fits;
    }
    debug!(
        "searching {}x{} region for {} presents, {} spare cells",
        width,
        height,
        pieces,
        area - needed
    );
    let mut packer = Packer {
        board: Grid::with_size_and_value(width, height, false),
        orientations,
        remaining: counts.to_vec(),
        slack: area - needed,
        limits,
        attempts: 0,
        started: Instant::now(),
    };
    let outcome = match packer.fill(0) {
        Ok(true) => PackOutcome::Fits,
        Ok(false) => PackOutcome::DoesNotFit,
        Err(LimitExceeded) => PackOutcome::LimitExceeded,
    };
    debug!(
        "{:?} after {} attempts in {:.2?}",
        outcome,
        packer.attempts,
        packer.started.elapsed()
    );
    outcome
}

/// Backtracking search that fills the region cell by cell in row-major order. The first
/// empty cell is either the first cell of some present or stays empty, using up one
/// spare cell.
struct Packer<'a> {
    board: Grid<bool>,
    orientations: &'a [Vec<Shape>],
    remaining: Vec<usize>,
    /// cells that may be left empty
    slack: usize,
    limits: SearchLimits,
    attempts: u64,
    started: Instant,
}

impl Packer<'_> {
    fn fill(&mut self, from: usize) -> Result<bool, LimitExceeded> {
        if self.remaining.iter().all(|&r| r == 0) {
            return Ok(true);
        }
        let index = match self.board.iter().skip(from).position(|&filled| !filled) {
            Some(i) => from + i,
            None => return Ok(false),
        };
        if self.dead_cells() > self.slack {
            return Ok(false);
        }
        let anchor = self.board.coord_at(index);
        let orientations = self.orientations;
        for (shape, shape_orientations) in orientations.iter().enumerate() {
            if self.remaining[shape] == 0 {
                continue;
            }
            for orientation in shape_orientations {
                let cells = match self.placement(orientation, anchor) {
                    Some(cells) => cells,
                    None => continue,
                };
                self.attempt()?;
                self.set(&cells, true);
                self.remaining[shape] -= 1;
                let fits = self.fill(index + 1);
                self.remaining[shape] += 1;
                self.set(&cells, false);
                if fits? {
                    return Ok(true);
                }
            }
        }
        if self.slack > 0 {
            self.slack -= 1;
            self.board[anchor] = true;
            let fits = self.fill(index + 1);
            self.board[anchor] = false;
            self.slack += 1;
            return fits;
        }
        Ok(false)
    }

    /// The board cells covered by `orientation` with its first cell on `anchor`, if they
    /// are all inside the region and empty
    fn placement(&self, orientation: &Shape, anchor: Coord) -> Option<Vec<Coord>> {
        let (first_row, first_col) = orientation.cells()[0];
        orientation
            .cells()
            .iter()
            .map(|&(r, c)| {
                let coord = anchor.offset(
                    c as isize - first_col as isize,
                    r as isize - first_row as isize,
                )?;
                match self.board.get(coord) {
                    Some(false) => Some(coord),
                    _ => None,
                }
            })
            .collect()
    }

    /// Counts the empty cells that no remaining present can cover in any position. Each of
    /// them has to be left empty.
    fn dead_cells(&self) -> usize {
        let (width, height) = (self.board.width(), self.board.height());
        let mut coverable = Grid::with_size_and_value(width, height, false);
        let remaining = self
            .orientations
            .iter()
            .zip(&self.remaining)
            .filter(|&(_, &count)| count > 0)
            .flat_map(|(orientations, _)| orientations);
        for orientation in remaining {
            for row in 0..height {
                for col in 0..width {
                    let covered = |&(r, c): &(usize, usize)| Coord::new(col + c, row + r);
                    let fits = orientation
                        .cells()
                        .iter()
                        .all(|cell| self.board.get(covered(cell)) == Some(&false));
                    if fits {
                        for cell in orientation.cells() {
                            coverable[covered(cell)] = true;
                        }
                    }
                }
            }
        }
        self.board
            .iter()
            .zip(coverable.iter())
            .filter(|&(&filled, &reachable)| !filled && !reachable)
            .count()
    }

    fn set(&mut self, cells: &[Coord], filled: bool) {
        for &coord in cells {
            self.board[coord] = filled;
        }
    }

    fn attempt(&mut self) -> Result<(), LimitExceeded> {
        self.attempts += 1;
        if self.attempts % LIMIT_CHECK_INTERVAL == 0
            && (self.attempts >= self.limits.max_attempts
                || self.started.elapsed() >= self.limits.max_runtime)
        {
            return Err(LimitExceeded);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn orientations(rows: &[&str]) -> Vec<Shape> {
        let rows: Vec<Vec<bool>> = rows
            .iter()
            .map(|row| row.chars().map(|c| c == '#').collect())
            .collect();
        Shape::from_rows(&rows).orientations()
    }

    fn c_shape() -> Vec<Vec<Shape>> {
        vec![orientations(&["###", "#..", "###"])]
    }

    #[test]
    fn two_c_shapes_interlock() {
        let outcome = pack(4, 4, &[2], &c_shape(), SearchLimits::default());
        assert_eq!(PackOutcome::Fits, outcome);
    }

    #[test]
    fn too_many_cells() {
        let outcome = pack(4, 4, &[3], &c_shape(), SearchLimits::default());
        assert_eq!(PackOutcome::DoesNotFit, outcome);
    }

    #[test]
    fn cell_count_beyond_usize() {
        let outcome = pack(4, 4, &[usize::MAX], &c_shape(), SearchLimits::default());
        assert_eq!(PackOutcome::DoesNotFit, outcome);
    }

    #[test]
    fn enough_room_without_search() {
        let limits = SearchLimits {
            max_attempts: 0,
            max_runtime: Duration::from_secs(0),
        };
        assert_eq!(PackOutcome::Fits, pack(6, 3, &[2], &c_shape(), limits));
    }

    #[test]
    fn cells_fit_but_shapes_do_not() {
        // a strip one cell tall has room for the cells but not the shapes
        let l = vec![orientations(&["#.", "##"])];
        assert_eq!(
            PackOutcome::DoesNotFit,
            pack(6, 1, &[2], &l, SearchLimits::default())
        );
        assert_eq!(PackOutcome::Fits, pack(3, 2, &[2], &l, SearchLimits::default()));
    }

    #[test]
    fn proves_crowded_region_does_not_fit() {
        let shapes = vec![
            orientations(&["###", "##.", "##."]),
            orientations(&["###", "##.", ".##"]),
            orientations(&[".##", "###", "##."]),
            orientations(&["##.", "###", "##."]),
            orientations(&["###", "#..", "###"]),
            orientations(&["###", ".#.", "###"]),
        ];
        let limits = SearchLimits {
            max_attempts: 200_000,
            max_runtime: Duration::from_secs(600),
        };
        assert_eq!(PackOutcome::Fits, pack(12, 5, &[1, 0, 1, 0, 2, 2], &shapes, limits));
        assert_eq!(
            PackOutcome::DoesNotFit,
            pack(12, 5, &[1, 0, 1, 0, 3, 2], &shapes, limits)
        );
    }

    #[test]
    fn dead_cells_around_blocked_center() {
        let squares = vec![orientations(&["##", "##"])];
        let mut packer = Packer {
            board: Grid::with_size_and_value(3, 3, false),
            orientations: &squares,
            remaining: vec![1],
            slack: 5,
            limits: SearchLimits::default(),
            attempts: 0,
            started: Instant::now(),
        };
        assert_eq!(0, packer.dead_cells());
        // every 2x2 window holds the center
        packer.board[Coord::new(1, 1)] = true;
        assert_eq!(8, packer.dead_cells());
        packer.remaining[0] = 0;
        assert_eq!(8, packer.dead_cells());
    }

    #[test]
    fn limit_exceeded() {
        let limits = SearchLimits {
            max_attempts: 100,
            max_runtime: Duration::from_secs(30),
        };
        // a T covers three cells of one checkerboard colour, so the region can never be
        // filled exactly, but proving that takes a long search
        let shapes = vec![orientations(&["###", ".#."]), orientations(&["##"])];
        let outcome = pack(6, 6, &[1, 16], &shapes, limits);
        assert_eq!(PackOutcome::LimitExceeded, outcome);
    }
}
