use std::fmt;
use std::fmt::{Debug, Formatter};

use ahash::AHashSet;

/// The filled cells of a present as `(row, col)` pairs, shifted so the smallest row and
/// column are zero and sorted in row-major order
#[derive(Clone, PartialEq, Eq, Hash)]
pub(super) struct Shape {
    cells: Vec<(usize, usize)>,
}

impl Shape {
    /// Builds a shape from rows of `#` (filled) and `.` cells
    pub fn from_rows(rows: &[Vec<bool>]) -> Self {
        let cells = rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .filter(|&(_, &filled)| filled)
                    .map(move |(c, _)| (r as isize, c as isize))
            })
            .collect();
        Self::normalized(cells)
    }

    fn normalized(cells: Vec<(isize, isize)>) -> Self {
        let min_row = cells.iter().map(|&(r, _)| r).min().unwrap_or(0);
        let min_col = cells.iter().map(|&(_, c)| c).min().unwrap_or(0);
        let mut cells: Vec<_> = cells
            .into_iter()
            .map(|(r, c)| ((r - min_row) as usize, (c - min_col) as usize))
            .collect();
        cells.sort_unstable();
        Self { cells }
    }

    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// The larger side of the bounding box
    pub fn extent(&self) -> usize {
        self.cells
            .iter()
            .map(|&(r, c)| r.max(c) + 1)
            .max()
            .unwrap_or(0)
    }

    /// Every distinct rotation and reflection of the shape
    pub fn orientations(&self) -> Vec<Shape> {
        let mut seen: AHashSet<Shape> = AHashSet::default();
        let mut orientations = Vec::new();
        let mut cells: Vec<(isize, isize)> = self
            .cells
            .iter()
            .map(|&(r, c)| (r as isize, c as isize))
            .collect();
        for _ in 0..4 {
            // quarter turn clockwise
            cells = cells.iter().map(|&(r, c)| (c, -r)).collect();
            let mirrored = cells.iter().map(|&(r, c)| (r, -c)).collect();
            for shape in vec![Self::normalized(cells.clone()), Self::normalized(mirrored)] {
                if seen.insert(shape.clone()) {
                    orientations.push(shape);
                }
            }
        }
        orientations
    }
}

impl Debug for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let extent = self.extent();
        for r in 0..extent {
            if r > 0 {
                writeln!(f)?;
            }
            for c in 0..extent {
                let cell = if self.cells.contains(&(r, c)) { '#' } else { '.' };
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}
