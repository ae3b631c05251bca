//! # Grid module
//!
//! The rectangular grid the rover drives over. The lower bound of the grid is
//! always `(0, 0)`. The upper bound is optional: until it is defined the grid
//! is unbounded above and only non-negativity is enforced.
//!
//! The bound is carried by the [`Grid`] value itself rather than held in a
//! global, so every [`Coordinate`] is validated against the grid it is given.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod coordinate;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::Deserialize;
use std::fmt;

// Internal
pub use coordinate::*;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Inclusive upper bound of the grid.
///
/// Can be read from parameter files as `{ max_x = 5, max_y = 5 }`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct GridBound {
    pub max_x: i64,
    pub max_y: i64,
}

/// A grid with an optional upper bound.
///
/// Once a bound is defined it cannot be changed, only replaced by defining a
/// new grid with [`Grid::define_bound`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    bound: Option<GridBound>,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// An axis of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Reasons a coordinate can be invalid.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CoordinateError {
    #[error("The {0} coordinate is missing")]
    Missing(Axis),

    #[error("The {axis} coordinate ({value:?}) is not an integer")]
    NotAnInteger { axis: Axis, value: String },

    #[error("The {axis} coordinate ({value}) is negative")]
    Negative { axis: Axis, value: i64 },

    #[error("The {axis} coordinate ({value}) exceeds the grid bound ({max})")]
    OverBound { axis: Axis, value: i64, max: i64 },
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl GridBound {
    /// The maximum value along the given axis.
    pub fn max(&self, axis: Axis) -> i64 {
        match axis {
            Axis::X => self.max_x,
            Axis::Y => self.max_y,
        }
    }
}

impl Grid {
    /// A grid with no upper bound.
    pub fn unbounded() -> Self {
        Self { bound: None }
    }

    /// A grid bounded by `(max_x, max_y)`, which must itself be non-negative.
    pub fn bounded(max_x: i64, max_y: i64) -> Result<Self, CoordinateError> {
        Self::unbounded().define_bound(max_x, max_y)
    }

    /// Define `(max_x, max_y)` as the bound of a new grid.
    ///
    /// The bound point is first validated against this grid, so on an
    /// already bounded grid the new bound must fit inside the old one.
    pub fn define_bound(&self, max_x: i64, max_y: i64) -> Result<Self, CoordinateError> {
        self.check(max_x, max_y)?;

        Ok(Self {
            bound: Some(GridBound { max_x, max_y }),
        })
    }

    /// The upper bound of the grid, or `None` if it is unbounded.
    pub fn bound(&self) -> Option<&GridBound> {
        self.bound.as_ref()
    }

    /// Build a coordinate on this grid.
    pub fn coordinate(&self, x: i64, y: i64) -> Result<Coordinate, CoordinateError> {
        Coordinate::new(x, y, self)
    }

    /// Check that the point `(x, y)` lies on the grid.
    ///
    /// The x axis is checked before the y axis.
    pub fn check(&self, x: i64, y: i64) -> Result<(), CoordinateError> {
        self.check_axis(Axis::X, x)?;
        self.check_axis(Axis::Y, y)
    }

    /// Check a single axis value against the grid.
    pub fn check_axis(&self, axis: Axis, value: i64) -> Result<(), CoordinateError> {
        if value < 0 {
            return Err(CoordinateError::Negative { axis, value });
        }

        if let Some(bound) = self.bound {
            let max = bound.max(axis);
            if value > max {
                return Err(CoordinateError::OverBound { axis, value, max });
            }
        }

        Ok(())
    }

    /// Returns `true` if `(x, y)` lies on the grid.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        self.check(x, y).is_ok()
    }

    /// One step in the positive direction along `axis`, held at the upper
    /// bound if there is one.
    pub fn step_up(&self, axis: Axis, value: i64) -> i64 {
        let stepped = value.saturating_add(1);

        match self.bound {
            Some(bound) => stepped.min(bound.max(axis)),
            None => stepped,
        }
    }

    /// One step in the negative direction, held at zero.
    pub fn step_down(&self, value: i64) -> i64 {
        value.saturating_sub(1).max(0)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bound {
            Some(b) => write!(f, "(0, 0) to ({}, {})", b.max_x, b.max_y),
            None => write!(f, "(0, 0) to unbounded"),
        }
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------
