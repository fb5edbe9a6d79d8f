pub mod grid;
pub mod interval_set;

pub use self::grid::Grid;
pub use self::interval_set::IntervalSet;
