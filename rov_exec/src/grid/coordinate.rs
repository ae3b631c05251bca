//! Bounded coordinate on the grid

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use std::fmt;

use super::{CoordinateError, Grid};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A point on the grid.
///
/// A coordinate is checked against its grid when it is built. The setters do
/// not re-check it, use [`Coordinate::valid`] to find out if a coordinate is
/// still on the grid after being modified.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Coordinate {
    x: i64,
    y: i64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Coordinate {
    /// Create a new coordinate, failing if `(x, y)` is not on the grid.
    pub fn new(x: i64, y: i64, grid: &Grid) -> Result<Self, CoordinateError> {
        grid.check(x, y)?;

        Ok(Self { x, y })
    }

    pub fn x(&self) -> i64 {
        self.x
    }

    pub fn y(&self) -> i64 {
        self.y
    }

    pub fn set_x(&mut self, x: i64) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: i64) {
        self.y = y;
    }

    /// Check the coordinate against the grid, returning the first rule it
    /// breaks.
    pub fn validate(&self, grid: &Grid) -> Result<(), CoordinateError> {
        grid.check(self.x, self.y)
    }

    /// Returns `true` if the coordinate is currently on the grid.
    pub fn valid(&self, grid: &Grid) -> bool {
        self.validate(grid).is_ok()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::grid::Axis;

    #[test]
    fn test_new() -> Result<(), CoordinateError> {
        let grid = Grid::bounded(5, 5)?;

        let c = Coordinate::new(1, 1, &grid)?;
        assert_eq!((c.x(), c.y()), (1, 1));

        assert_eq!(Coordinate::default(), Coordinate::new(0, 0, &grid)?);

        Ok(())
    }

    #[test]
    fn test_negative_is_invalid() -> Result<(), CoordinateError> {
        let grids = [Grid::unbounded(), Grid::bounded(5, 5)?];

        for grid in grids.iter() {
            for v in [-1i64, -2, -100, i64::MIN].iter() {
                assert_eq!(
                    Coordinate::new(*v, 0, grid),
                    Err(CoordinateError::Negative { axis: Axis::X, value: *v })
                );
                assert_eq!(
                    Coordinate::new(0, *v, grid),
                    Err(CoordinateError::Negative { axis: Axis::Y, value: *v })
                );
            }
        }

        Ok(())
    }

    #[test]
    fn test_over_bound_is_invalid() -> Result<(), CoordinateError> {
        let grid = Grid::bounded(5, 5)?;

        assert_eq!(
            Coordinate::new(6, 0, &grid),
            Err(CoordinateError::OverBound { axis: Axis::X, value: 6, max: 5 })
        );
        assert_eq!(
            Coordinate::new(0, 6, &grid),
            Err(CoordinateError::OverBound { axis: Axis::Y, value: 6, max: 5 })
        );

        // The same point is fine without a bound
        assert!(Coordinate::new(6, 6, &Grid::unbounded()).is_ok());

        Ok(())
    }

    #[test]
    fn test_valid_tracks_mutation() -> Result<(), CoordinateError> {
        let grid = Grid::bounded(5, 5)?;
        let mut c = grid.coordinate(2, 4)?;

        // Repeated checks without mutation agree
        assert!(c.valid(&grid));
        assert!(c.valid(&grid));

        c.set_x(6);
        assert!(!c.valid(&grid));
        assert_eq!(
            c.validate(&grid),
            Err(CoordinateError::OverBound { axis: Axis::X, value: 6, max: 5 })
        );

        c.set_x(5);
        c.set_y(-1);
        assert!(!c.valid(&grid));

        c.set_y(0);
        assert!(c.valid(&grid));

        Ok(())
    }

    #[test]
    fn test_display() -> Result<(), CoordinateError> {
        let c = Grid::unbounded().coordinate(3, 12)?;
        assert_eq!(c.to_string(), "3 12");

        Ok(())
    }
}
