use std::fmt;
use std::fmt::Debug;

/// A `Coord` struct represents coordinates of an element in a `Grid`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord([usize; 2]);

impl Coord {
    pub fn new(col: usize, row: usize) -> Self {
        Self([col, row])
    }

    pub fn col(self) -> usize {
        self.0[0]
    }

    pub fn row(self) -> usize {
        self.0[1]
    }

    /// Moves the coordinate by a signed offset. Returns `None` if either axis would go below zero.
    pub fn offset(self, d_col: isize, d_row: isize) -> Option<Self> {
        let col = checked_add_signed(self.col(), d_col)?;
        let row = checked_add_signed(self.row(), d_row)?;
        Some(Self::new(col, row))
    }
}

fn checked_add_signed(n: usize, d: isize) -> Option<usize> {
    if d < 0 {
        n.checked_sub(d.unsigned_abs())
    } else {
        n.checked_add(d as usize)
    }
}

impl Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col(), self.row())
    }
}
