//! Red and green tile coverage on a coordinate-compressed floor

use ahash::AHashMap;
use itertools::Itertools;

use crate::collections::grid::Coord;
use crate::collections::Grid;

use super::Tile;

/// One axis of the compressed floor. Every red tile coordinate gets its own span and the
/// gaps between them are collapsed into a single span each, so all tiles in a span share
/// the same status.
struct Axis {
    spans: Vec<(i64, i64)>,
    index: AHashMap<i64, usize>,
}

impl Axis {
    fn new(values: impl Iterator<Item = i64>) -> Self {
        let values = values.sorted().dedup().collect_vec();
        let mut spans = Vec::with_capacity(values.len() * 2);
        let mut index = AHashMap::new();
        for (i, &value) in values.iter().enumerate() {
            index.insert(value, spans.len());
            spans.push((value, value));
            if let Some(&next) = values.get(i + 1) {
                if next > value + 1 {
                    spans.push((value + 1, next - 1));
                }
            }
        }
        Self { spans, index }
    }

    fn len(&self) -> usize {
        self.spans.len()
    }

    /// The span holding a red tile coordinate
    fn span_of(&self, value: i64) -> usize {
        self.index[&value]
    }

    /// A tile coordinate within the span
    fn representative(&self, span: usize) -> i64 {
        self.spans[span].0
    }
}

/// The floor as a grid of compressed cells, each marked as coverable (red or green) or not
pub(crate) struct Floor {
    cols: Axis,
    rows: Axis,
    /// number of uncovered cells in the rectangle from the origin to each corner (exclusive)
    uncovered_prefix: Grid<u32>,
}

impl Floor {
    /// `tiles` is the loop of red tiles in order
    pub fn new(tiles: &[Tile]) -> Self {
        let cols = Axis::new(tiles.iter().map(|t| t.x));
        let rows = Axis::new(tiles.iter().map(|t| t.y));
        let boundary = boundary(tiles, &cols, &rows);
        let mut uncovered = Grid::with_size_and_value(cols.len(), rows.len(), false);
        for row in 0..rows.len() {
            let y = rows.representative(row);
            let crossings = crossings(tiles, y);
            for col in 0..cols.len() {
                let coord = Coord::new(col, row);
                if boundary[coord] {
                    continue;
                }
                let x = cols.representative(col);
                // ray cast toward +x
                let to_right = crossings.len() - crossings.partition_point(|&c| c <= x);
                uncovered[coord] = to_right % 2 == 0;
            }
        }
        let uncovered_prefix = prefix_sums(&uncovered);
        Self {
            cols,
            rows,
            uncovered_prefix,
        }
    }

    /// Whether every tile in the rectangle with red corners `a` and `b` is red or green
    pub fn is_covered(&self, a: Tile, b: Tile) -> bool {
        let (c1, c2) = (self.cols.span_of(a.x), self.cols.span_of(b.x));
        let (r1, r2) = (self.rows.span_of(a.y), self.rows.span_of(b.y));
        let (c1, c2) = (c1.min(c2), c1.max(c2) + 1);
        let (r1, r2) = (r1.min(r2), r1.max(r2) + 1);
        let p = &self.uncovered_prefix;
        let count = p[Coord::new(c2, r2)] + p[Coord::new(c1, r1)]
            - p[Coord::new(c1, r2)]
            - p[Coord::new(c2, r1)];
        count == 0
    }
}

/// Marks the compressed cells crossed by the loop's edges
fn boundary(tiles: &[Tile], cols: &Axis, rows: &Axis) -> Grid<bool> {
    let mut boundary = Grid::with_size_and_value(cols.len(), rows.len(), false);
    for i in 0..tiles.len() {
        let (a, b) = (tiles[i], tiles[(i + 1) % tiles.len()]);
        let (c1, c2) = (cols.span_of(a.x), cols.span_of(b.x));
        let (r1, r2) = (rows.span_of(a.y), rows.span_of(b.y));
        for col in c1.min(c2)..=c1.max(c2) {
            for row in r1.min(r2)..=r1.max(r2) {
                boundary[Coord::new(col, row)] = true;
            }
        }
    }
    boundary
}

/// The sorted x positions where vertical edges cross the horizontal line at `y`,
/// counting an edge's lower endpoint but not its upper one
fn crossings(tiles: &[Tile], y: i64) -> Vec<i64> {
    let mut crossings = (0..tiles.len())
        .map(|i| (tiles[i], tiles[(i + 1) % tiles.len()]))
        .filter(|(a, b)| a.x == b.x && (a.y > y) != (b.y > y))
        .map(|(a, _)| a.x)
        .collect_vec();
    crossings.sort_unstable();
    crossings
}

/// Builds a grid one larger in each dimension where each element counts the `true` cells
/// above and to the left of it
fn prefix_sums(cells: &Grid<bool>) -> Grid<u32> {
    let mut sums = Grid::with_size(cells.width() + 1, cells.height() + 1);
    for row in 0..cells.height() {
        for col in 0..cells.width() {
            let cell = u32::from(cells[Coord::new(col, row)]);
            sums[Coord::new(col + 1, row + 1)] = cell
                + sums[Coord::new(col, row + 1)]
                + sums[Coord::new(col + 1, row)]
                - sums[Coord::new(col, row)];
        }
    }
    sums
}
