//! Cardinal orientation of the rover

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use std::fmt;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// All orientations in clockwise order. Turning right moves one place along
/// this cycle, turning left moves one place back.
pub const ORIENTATIONS: [Orientation; 4] = [
    Orientation::North,
    Orientation::East,
    Orientation::South,
    Orientation::West,
];

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Orientation {
    /// Parse an orientation from its single letter code.
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "N" => Some(Orientation::North),
            "E" => Some(Orientation::East),
            "S" => Some(Orientation::South),
            "W" => Some(Orientation::West),
            _ => None,
        }
    }

    /// The single letter code of the orientation.
    pub fn symbol(&self) -> char {
        match self {
            Orientation::North => 'N',
            Orientation::East => 'E',
            Orientation::South => 'S',
            Orientation::West => 'W',
        }
    }

    /// Position of this orientation in [`ORIENTATIONS`].
    fn index(&self) -> usize {
        match self {
            Orientation::North => 0,
            Orientation::East => 1,
            Orientation::South => 2,
            Orientation::West => 3,
        }
    }

    /// The orientation reached after `steps` quarter turns, positive steps
    /// being clockwise.
    pub fn turned(&self, steps: i64) -> Self {
        let n = ORIENTATIONS.len() as i64;
        // Reduce the steps first so large turns cannot overflow
        let idx = (self.index() as i64 + steps.rem_euclid(n)).rem_euclid(n);

        ORIENTATIONS[idx as usize]
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------
