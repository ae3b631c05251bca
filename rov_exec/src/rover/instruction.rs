//! Instructions the rover can execute

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use std::fmt;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Turn a quarter turn anticlockwise (`L`)
    TurnLeft,
    /// Turn a quarter turn clockwise (`R`)
    TurnRight,
    /// Move forward one cell (`M`)
    Move,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Instruction {
    /// Parse an instruction from its single letter code.
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "L" => Some(Instruction::TurnLeft),
            "R" => Some(Instruction::TurnRight),
            "M" => Some(Instruction::Move),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Instruction::TurnLeft => 'L',
            Instruction::TurnRight => 'R',
            Instruction::Move => 'M',
        }
    }

    /// Number of clockwise quarter turns this instruction makes, or `None`
    /// if it is not a turn.
    pub fn turn_steps(&self) -> Option<i64> {
        match self {
            Instruction::TurnLeft => Some(-1),
            Instruction::TurnRight => Some(1),
            Instruction::Move => None,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_symbol() {
        assert_eq!(Instruction::from_symbol("L"), Some(Instruction::TurnLeft));
        assert_eq!(Instruction::from_symbol("R"), Some(Instruction::TurnRight));
        assert_eq!(Instruction::from_symbol("M"), Some(Instruction::Move));

        assert_eq!(Instruction::from_symbol("Z"), None);
        assert_eq!(Instruction::from_symbol("funkytime"), None);
        assert_eq!(Instruction::from_symbol("LM"), None);
    }

    #[test]
    fn test_turn_steps() {
        assert_eq!(Instruction::TurnLeft.turn_steps(), Some(-1));
        assert_eq!(Instruction::TurnRight.turn_steps(), Some(1));
        assert_eq!(Instruction::Move.turn_steps(), None);
    }
}
