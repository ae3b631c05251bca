//! Implementations for the Rover state structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{debug, trace};
use std::fmt;

// Internal
use super::{Instruction, Orientation, RoverError};
use crate::grid::{Axis, Coordinate, Grid};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A rover on the grid.
///
/// The rover keeps a copy of the grid it was built on, which is used both to
/// validate it and to clamp its moves at the edge of the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rover {
    grid: Grid,

    coordinate: Coordinate,

    orientation: Orientation,

    /// The program executed by [`Rover::run`]
    instructions: Vec<Instruction>,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Rover {
    /// Build a new rover from raw symbols.
    ///
    /// Each item of `instructions` is one instruction symbol (`L`, `R` or
    /// `M`). An empty program is valid.
    ///
    /// The coordinate is checked first, then the orientation, then the
    /// instructions in order, and the first failure is returned.
    pub fn new<I, S>(
        grid: &Grid,
        coordinates: (i64, i64),
        orientation: &str,
        instructions: I,
    ) -> Result<Self, RoverError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let coordinate = grid.coordinate(coordinates.0, coordinates.1)?;

        let orientation = Orientation::from_symbol(orientation)
            .ok_or_else(|| RoverError::InvalidOrientation(orientation.to_string()))?;

        let instructions = instructions
            .into_iter()
            .enumerate()
            .map(|(index, s)| {
                Instruction::from_symbol(s.as_ref()).ok_or_else(|| {
                    RoverError::InvalidInstruction {
                        index,
                        symbol: s.as_ref().to_string(),
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let rover = Self {
            grid: *grid,
            coordinate,
            orientation,
            instructions,
        };

        trace!(
            "Rover built at {} with {} instructions",
            rover,
            rover.instructions.len()
        );

        Ok(rover)
    }

    /// Build a new rover from a program string such as `"LMLMLMLMM"`, where
    /// every non-whitespace character is one instruction symbol.
    pub fn from_program(
        grid: &Grid,
        coordinates: (i64, i64),
        orientation: &str,
        program: &str,
    ) -> Result<Self, RoverError> {
        let symbols = program
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(String::from);

        Self::new(grid, coordinates, orientation, symbols)
    }

    /// A rover at `(0, 0)` facing north with no instructions.
    ///
    /// The origin is on every grid, so this cannot fail.
    pub fn at_origin(grid: &Grid) -> Self {
        Self {
            grid: *grid,
            coordinate: Coordinate::default(),
            orientation: Orientation::North,
            instructions: Vec::new(),
        }
    }

    /// Execute the whole program, in order.
    ///
    /// Moves which would leave the grid are held at the edge of the grid.
    /// Running a rover with no instructions does nothing.
    pub fn run(&mut self) {
        if self.instructions.is_empty() {
            trace!("Rover has no instructions, staying at {}", self);
            return;
        }

        // The program is fixed while running
        let instructions = std::mem::take(&mut self.instructions);

        for instruction in instructions.iter() {
            self.execute(*instruction);
            trace!("{} -> {}", instruction, self);
        }

        self.instructions = instructions;
    }

    /// Execute a single instruction without changing the program.
    pub fn execute(&mut self, instruction: Instruction) {
        match instruction.turn_steps() {
            Some(steps) => self.orientation = self.orientation.turned(steps),
            None => advance(&self.grid, &mut self.coordinate, self.orientation),
        }
    }

    /// Re-check the rover's current state against its grid.
    ///
    /// The orientation and instructions can only hold valid values, so only
    /// the coordinate can fail here.
    pub fn validate(&self) -> Result<(), RoverError> {
        self.coordinate.validate(&self.grid)?;

        Ok(())
    }

    /// Returns `true` if the rover's current state is valid.
    pub fn valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    /// Mutable access to the coordinate. Changes made here are not checked
    /// until [`Rover::valid`] is called.
    pub fn coordinate_mut(&mut self) -> &mut Coordinate {
        &mut self.coordinate
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn set_instructions(&mut self, instructions: Vec<Instruction>) {
        self.instructions = instructions;
    }

    /// Replace the program with the given raw symbols.
    ///
    /// Unlike [`Rover::new`] unrecognised symbols are not an error, they are
    /// skipped.
    pub fn set_instruction_symbols<I, S>(&mut self, symbols: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.instructions = symbols
            .into_iter()
            .filter_map(|s| {
                let instruction = Instruction::from_symbol(s.as_ref());
                if instruction.is_none() {
                    debug!("Ignoring unrecognised instruction {:?}", s.as_ref());
                }
                instruction
            })
            .collect();
    }
}

impl fmt::Display for Rover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.coordinate, self.orientation)
    }
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

/// Move the coordinate one cell in the direction of `orientation`.
fn advance(grid: &Grid, coordinate: &mut Coordinate, orientation: Orientation) {
    match orientation {
        Orientation::North => coordinate.set_y(grid.step_up(Axis::Y, coordinate.y())),
        Orientation::East => coordinate.set_x(grid.step_up(Axis::X, coordinate.x())),
        Orientation::South => coordinate.set_y(grid.step_down(coordinate.y())),
        Orientation::West => coordinate.set_x(grid.step_down(coordinate.x())),
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::grid::CoordinateError;
    use crate::rover::ORIENTATIONS;

    fn grid_5x5() -> Grid {
        Grid::bounded(5, 5).unwrap()
    }

    fn state(rover: &Rover) -> (i64, i64, Orientation) {
        (rover.coordinate().x(), rover.coordinate().y(), rover.orientation())
    }

    #[test]
    fn test_new() -> Result<(), RoverError> {
        let rover = Rover::new(&grid_5x5(), (1, 1), "S", &["L", "R", "M"])?;

        assert_eq!(state(&rover), (1, 1, Orientation::South));
        assert_eq!(
            rover.instructions(),
            &[Instruction::TurnLeft, Instruction::TurnRight, Instruction::Move]
        );
        assert!(rover.valid());

        Ok(())
    }

    #[test]
    fn test_at_origin() -> Result<(), RoverError> {
        for grid in [Grid::unbounded(), grid_5x5(), Grid::bounded(0, 0)?].iter() {
            let rover = Rover::at_origin(grid);

            assert_eq!(rover.to_string(), "0 0 N");
            assert!(rover.instructions().is_empty());
            assert!(rover.valid());
            assert_eq!(rover.grid(), grid);
        }

        // Same state as building it from symbols
        let empty: [&str; 0] = [];
        assert_eq!(
            Rover::at_origin(&grid_5x5()),
            Rover::new(&grid_5x5(), (0, 0), "N", empty)?
        );

        Ok(())
    }

    #[test]
    fn test_from_program_skips_whitespace() -> Result<(), RoverError> {
        let spaced = Rover::from_program(&grid_5x5(), (1, 2), "N", " LM\tLM \n")?;
        let packed = Rover::from_program(&grid_5x5(), (1, 2), "N", "LMLM")?;

        assert_eq!(spaced, packed);
        assert_eq!(spaced.instructions().len(), 4);

        Ok(())
    }

    #[test]
    fn test_invalid_coordinate() {
        assert_eq!(
            Rover::from_program(&grid_5x5(), (-1, 2), "N", "M"),
            Err(RoverError::InvalidCoordinate(CoordinateError::Negative {
                axis: Axis::X,
                value: -1
            }))
        );
        assert_eq!(
            Rover::from_program(&grid_5x5(), (2, 6), "N", "M"),
            Err(RoverError::InvalidCoordinate(CoordinateError::OverBound {
                axis: Axis::Y,
                value: 6,
                max: 5
            }))
        );
    }

    #[test]
    fn test_invalid_orientation() {
        assert_eq!(
            Rover::from_program(&grid_5x5(), (1, 2), "X", "M"),
            Err(RoverError::InvalidOrientation(String::from("X")))
        );
        assert_eq!(
            Rover::from_program(&grid_5x5(), (1, 2), "wrong", ""),
            Err(RoverError::InvalidOrientation(String::from("wrong")))
        );
    }

    #[test]
    fn test_invalid_instruction() {
        assert_eq!(
            Rover::new(&grid_5x5(), (0, 0), "N", &["Z"]),
            Err(RoverError::InvalidInstruction {
                index: 0,
                symbol: String::from("Z")
            })
        );
        assert_eq!(
            Rover::new(&grid_5x5(), (0, 0), "N", &["funkytime"]),
            Err(RoverError::InvalidInstruction {
                index: 0,
                symbol: String::from("funkytime")
            })
        );
        assert_eq!(
            Rover::from_program(&grid_5x5(), (0, 0), "N", "MMXM"),
            Err(RoverError::InvalidInstruction {
                index: 2,
                symbol: String::from("X")
            })
        );
    }

    #[test]
    fn test_first_failure_wins() {
        // Bad coordinate, orientation and instruction: the coordinate is
        // reported
        assert!(matches!(
            Rover::from_program(&grid_5x5(), (9, 9), "X", "Z"),
            Err(RoverError::InvalidCoordinate(_))
        ));
        assert!(matches!(
            Rover::from_program(&grid_5x5(), (1, 1), "X", "Z"),
            Err(RoverError::InvalidOrientation(_))
        ));
    }

    #[test]
    fn test_scenario_one() -> Result<(), RoverError> {
        let mut rover = Rover::from_program(&grid_5x5(), (1, 2), "N", "LMLMLMLMM")?;
        rover.run();

        assert_eq!(state(&rover), (1, 3, Orientation::North));
        assert_eq!(rover.to_string(), "1 3 N");

        Ok(())
    }

    #[test]
    fn test_scenario_two() -> Result<(), RoverError> {
        let mut rover = Rover::from_program(&grid_5x5(), (3, 3), "E", "MMRMMRMRRM")?;
        rover.run();

        assert_eq!(state(&rover), (5, 1, Orientation::East));
        assert_eq!(rover.to_string(), "5 1 E");

        Ok(())
    }

    #[test]
    fn test_unbounded_growth() -> Result<(), RoverError> {
        let mut rover = Rover::from_program(&Grid::unbounded(), (0, 0), "N", "MMM")?;
        rover.run();

        assert_eq!(state(&rover), (0, 3, Orientation::North));
        assert!(rover.valid());

        Ok(())
    }

    #[test]
    fn test_empty_program_is_noop() -> Result<(), RoverError> {
        for o in ORIENTATIONS.iter() {
            let mut rover = Rover::from_program(&grid_5x5(), (2, 3), &o.to_string(), "")?;
            let before = rover.clone();
            rover.run();

            assert_eq!(rover, before);
        }

        Ok(())
    }

    #[test]
    fn test_move_each_direction() -> Result<(), RoverError> {
        let grid = grid_5x5();
        let cases = [
            ("N", (2, 2), (2, 3)),
            ("E", (2, 2), (3, 2)),
            ("S", (2, 2), (2, 1)),
            ("W", (2, 2), (1, 2)),
        ];

        for (o, start, end) in cases.iter() {
            let mut rover = Rover::from_program(&grid, *start, o, "M")?;
            rover.run();
            assert_eq!(
                (rover.coordinate().x(), rover.coordinate().y()),
                *end,
                "moving {}",
                o
            );
        }

        Ok(())
    }

    #[test]
    fn test_move_clamped_at_edges() -> Result<(), RoverError> {
        let grid = grid_5x5();
        let cases = [
            ("N", (3, 5)),
            ("E", (5, 3)),
            ("S", (3, 0)),
            ("W", (0, 3)),
        ];

        for (o, start) in cases.iter() {
            let mut rover = Rover::from_program(&grid, *start, o, "MMM")?;
            rover.run();
            assert_eq!(
                (rover.coordinate().x(), rover.coordinate().y()),
                *start,
                "moving {} off the edge",
                o
            );
            assert!(rover.valid());
        }

        Ok(())
    }

    #[test]
    fn test_four_turns_is_identity() -> Result<(), RoverError> {
        for o in ORIENTATIONS.iter() {
            for program in ["LLLL", "RRRR", "LRLR"].iter() {
                let mut rover = Rover::from_program(&grid_5x5(), (1, 1), &o.to_string(), program)?;
                rover.run();
                assert_eq!(rover.orientation(), *o);
            }
        }

        Ok(())
    }

    #[test]
    fn test_turns() -> Result<(), RoverError> {
        let mut rover = Rover::from_program(&grid_5x5(), (0, 0), "N", "L")?;
        rover.run();
        assert_eq!(rover.orientation(), Orientation::West);

        let mut rover = Rover::from_program(&grid_5x5(), (0, 0), "N", "R")?;
        rover.run();
        assert_eq!(rover.orientation(), Orientation::East);

        Ok(())
    }

    #[test]
    fn test_execute_single() -> Result<(), RoverError> {
        let mut rover = Rover::from_program(&grid_5x5(), (0, 0), "N", "")?;

        rover.execute(Instruction::Move);
        rover.execute(Instruction::TurnRight);
        rover.execute(Instruction::Move);

        assert_eq!(rover.to_string(), "1 1 E");
        assert!(rover.instructions().is_empty());

        Ok(())
    }

    #[test]
    fn test_valid_reflects_mutation() -> Result<(), RoverError> {
        let mut rover = Rover::from_program(&grid_5x5(), (1, 1), "N", "M")?;
        assert!(rover.valid());
        assert!(rover.valid());

        rover.coordinate_mut().set_y(9);
        assert!(!rover.valid());
        assert_eq!(
            rover.validate(),
            Err(RoverError::InvalidCoordinate(CoordinateError::OverBound {
                axis: Axis::Y,
                value: 9,
                max: 5
            }))
        );

        // Moving north from outside the grid is pulled back to the edge
        rover.run();
        assert_eq!(rover.coordinate().y(), 5);
        assert!(rover.valid());

        rover.set_orientation(Orientation::South);
        rover.set_instructions(vec![Instruction::Move, Instruction::TurnLeft]);
        rover.run();
        assert_eq!(rover.to_string(), "1 4 E");

        Ok(())
    }

    #[test]
    fn test_unrecognised_symbols_after_build_are_skipped() -> Result<(), RoverError> {
        let mut rover = Rover::from_program(&grid_5x5(), (0, 0), "N", "")?;

        rover.set_instruction_symbols(&["M", "X", "R", "funkytime", "M"]);
        assert_eq!(
            rover.instructions(),
            &[Instruction::Move, Instruction::TurnRight, Instruction::Move]
        );
        assert!(rover.valid());

        rover.run();
        assert_eq!(rover.to_string(), "1 1 E");

        Ok(())
    }
}
