mod coord;

pub use self::coord::Coord;

use std::fmt;
use std::fmt::Display;
use std::ops::{Deref, Index, IndexMut};

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A container of elements represented in a rectangular grid, stored row by row
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    elements: Vec<T>,
}

impl<T> Grid<T> {
    /// Creates a new grid of the given size and fills it with the default value
    pub fn with_size(width: usize, height: usize) -> Self
    where
        T: Clone + Default,
    {
        Self::with_size_and_value(width, height, T::default())
    }

    /// Create a new `Grid` of the given size and fill with a specified value
    pub fn with_size_and_value(width: usize, height: usize, val: T) -> Self
    where
        T: Clone,
    {
        Self {
            width,
            height,
            elements: vec![val; width * height],
        }
    }

    /// Builds a grid from its rows. Returns the index of the first row whose length
    /// differs from the first row.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, usize> {
        let width = rows.first().map_or(0, Vec::len);
        let height = rows.len();
        let mut elements = Vec::with_capacity(width * height);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(i);
            }
            elements.extend(row);
        }
        Ok(Self {
            width,
            height,
            elements,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.col() < self.width && coord.row() < self.height
    }

    pub fn get(&self, coord: Coord) -> Option<&T> {
        if self.contains(coord) {
            Some(&self[coord])
        } else {
            None
        }
    }

    pub fn coord_at(&self, index: usize) -> Coord {
        assert!(index < self.elements.len());
        Coord::new(index % self.width, index / self.width)
    }

    pub fn index_of(&self, coord: Coord) -> usize {
        assert!(self.contains(coord), "{:?} is outside the grid", coord);
        coord.row() * self.width + coord.col()
    }

    /// Returns an iterator over the rows of the grid
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.elements.chunks(self.width.max(1))
    }

    pub fn row(&self, row: usize) -> &[T] {
        assert!(row < self.height);
        &self.elements[row * self.width..(row + 1) * self.width]
    }

    /// Returns an iterator over one column, top to bottom
    pub fn col(&self, col: usize) -> impl Iterator<Item = &T> + '_ {
        assert!(col < self.width);
        (0..self.height).map(move |row| &self[Coord::new(col, row)])
    }

    /// Returns an iterator over every element, paired with its `Coord`
    pub fn iter_coord(&self) -> impl Iterator<Item = (Coord, &T)> {
        let width = self.width;
        self.elements
            .iter()
            .enumerate()
            .map(move |(i, e)| (Coord::new(i % width, i / width), e))
    }

    /// The (up to 8) coordinates surrounding `coord` that lie inside the grid
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(move |&(d_col, d_row)| coord.offset(d_col, d_row))
            .filter(move |&c| self.contains(c))
    }
}

impl<T> Deref for Grid<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.elements
    }
}

impl<T> Index<Coord> for Grid<T> {
    type Output = T;

    fn index(&self, coord: Coord) -> &Self::Output {
        &self.elements[self.index_of(coord)]
    }
}

impl<T> IndexMut<Coord> for Grid<T> {
    fn index_mut(&mut self, coord: Coord) -> &mut Self::Output {
        let index = self.index_of(coord);
        &mut self.elements[index]
    }
}

impl<T: Display> Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for element in row {
                write!(f, "{}", element)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
