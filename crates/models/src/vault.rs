//! The vault-grid puzzle.
//!
//! An orb starts on the south-west cell of a 4×4 grid holding its number.
//! Each move enters a neighboring cell: an operator cell selects the next
//! operation, and a number cell applies that operation to the orb's value.
//! The vault door, on the north-east cell, opens when the orb arrives there
//! holding the target value.
//!
//! ```text
//! *   8   -   1    <- goal
//! 4   *   11  *
//! +   4   -   18
//! 22  -   9   *
//! ^ start
//! ```
//!
//! [`Vault`] is a [`TraversalProblem`]: the orb may not re-enter the start
//! cell, and arriving at the goal with the wrong value ends that path.

mod grid;

pub use grid::{Cell, Direction, Operator, Position};

use thiserror::Error;

use teleporter_core::TraversalProblem;

/// Side length of the grid.
pub const SIZE: usize = 4;

/// Longest path, in moves, whose last state is still expanded.
pub const MAX_MOVES: usize = 12;

/// Errors that can occur while walking the grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("position {0} lies off the grid")]
    OffGrid(Position),

    #[error("cell {0} must hold a number")]
    NotANumber(Position),

    #[error("number cell {0} entered without a pending operator")]
    MissingOperator(Position),

    #[error("orb value overflowed at {0}")]
    Overflow(Position),
}

/// The orb: where it is, what it holds, and the operator it will apply next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Orb {
    pub position: Position,
    pub value: i64,
    pub pending: Option<Operator>,
}

/// The vault grid and its rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vault {
    grid: [[Cell; SIZE]; SIZE],
    start: Position,
    start_value: i64,
    goal: Position,
    target: i64,
}

impl Default for Vault {
    fn default() -> Self {
        use Cell::{Num, Op};
        use Operator::{Add, Mul, Sub};

        Self {
            grid: [
                [Op(Mul), Num(8), Op(Sub), Num(1)],
                [Num(4), Op(Mul), Num(11), Op(Mul)],
                [Op(Add), Num(4), Op(Sub), Num(18)],
                [Num(22), Op(Sub), Num(9), Op(Mul)],
            ],
            start: Position::new(0, 3),
            start_value: 22,
            goal: Position::new(3, 0),
            target: 30,
        }
    }
}

impl Vault {
    /// Creates a vault from rows listed north to south.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OffGrid`] if `start` or `goal` lies outside the grid,
    /// and [`Error::NotANumber`] if the start cell is an operator.
    pub fn new(
        grid: [[Cell; SIZE]; SIZE],
        start: Position,
        goal: Position,
        target: i64,
    ) -> Result<Self, Error> {
        for position in [start, goal] {
            if !position.is_within(SIZE) {
                return Err(Error::OffGrid(position));
            }
        }
        let Cell::Num(start_value) = grid[start.y][start.x] else {
            return Err(Error::NotANumber(start));
        };
        Ok(Self {
            grid,
            start,
            start_value,
            goal,
            target,
        })
    }

    /// Returns the cell at `position`.
    #[must_use]
    pub fn cell(&self, position: Position) -> Cell {
        self.grid[position.y][position.x]
    }

    /// Returns the cells the orb passes over along `path`, starting cell first.
    ///
    /// Moves that would leave the grid are ignored.
    #[must_use]
    pub fn cells_along(&self, path: &[Direction]) -> Vec<Cell> {
        let mut position = self.start;
        let mut cells = Vec::with_capacity(path.len() + 1);
        cells.push(self.cell(position));
        for &direction in path {
            if let Some(next) = position.step(direction, SIZE) {
                position = next;
                cells.push(self.cell(position));
            }
        }
        cells
    }
}

impl TraversalProblem for Vault {
    type State = Orb;
    type Step = Direction;
    type Key = (Position, i64);
    type Error = Error;

    fn start(&self) -> Orb {
        Orb {
            position: self.start,
            value: self.start_value,
            pending: None,
        }
    }

    fn steps(&self) -> &[Direction] {
        &Direction::SEARCH_ORDER
    }

    fn advance(&self, orb: &Orb, direction: Direction) -> Result<Option<Orb>, Self::Error> {
        let Some(position) = orb.position.step(direction, SIZE) else {
            return Ok(None);
        };
        if position == self.start {
            return Ok(None);
        }

        let next = match self.cell(position) {
            Cell::Op(operator) => Orb {
                position,
                value: orb.value,
                pending: Some(operator),
            },
            Cell::Num(number) => {
                let operator = orb.pending.ok_or(Error::MissingOperator(position))?;
                let value = operator
                    .apply(orb.value, number)
                    .ok_or(Error::Overflow(position))?;
                Orb {
                    position,
                    value,
                    pending: None,
                }
            }
        };
        Ok(Some(next))
    }

    fn key(&self, orb: &Orb) -> (Position, i64) {
        (orb.position, orb.value)
    }

    fn is_goal(&self, orb: &Orb) -> bool {
        orb.position == self.goal && orb.value == self.target
    }

    fn is_dead_end(&self, orb: &Orb) -> bool {
        orb.position == self.goal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use teleporter_solvers::search::breadth_first::{self, Config, Status};

    use Direction::{East, North, South, West};

    fn walk(vault: &Vault, path: &[Direction]) -> Result<Option<Orb>, Error> {
        let mut orb = vault.start();
        for &direction in path {
            match vault.advance(&orb, direction)? {
                Some(next) => orb = next,
                None => return Ok(None),
            }
        }
        Ok(Some(orb))
    }

    #[test]
    fn operator_then_number_updates_value() {
        let vault = Vault::default();

        let orb = walk(&vault, &[North, North]).unwrap().unwrap();

        assert_eq!(orb.position, Position::new(0, 1));
        assert_eq!(orb.value, 26);
        assert_eq!(orb.pending, None);
    }

    #[test]
    fn operator_cell_sets_pending() {
        let vault = Vault::default();

        let orb = walk(&vault, &[East]).unwrap().unwrap();

        assert_eq!(orb.value, 22);
        assert_eq!(orb.pending, Some(Operator::Sub));
    }

    #[test]
    fn cannot_leave_grid_or_return_to_start() {
        let vault = Vault::default();
        let start = vault.start();

        assert_eq!(vault.advance(&start, West), Ok(None));
        assert_eq!(vault.advance(&start, South), Ok(None));
        assert_eq!(walk(&vault, &[East, West]), Ok(None));
    }

    #[test]
    fn goal_with_wrong_value_is_a_dead_end() {
        let vault = Vault::default();
        let orb = Orb {
            position: Position::new(3, 0),
            value: 29,
            pending: None,
        };

        assert!(!vault.is_goal(&orb));
        assert!(vault.is_dead_end(&orb));
    }

    #[test]
    fn start_must_be_a_number() {
        let grid = Vault::default().grid;

        let error = Vault::new(grid, Position::new(1, 3), Position::new(3, 0), 30)
            .expect_err("operator start");

        assert_eq!(error, Error::NotANumber(Position::new(1, 3)));
    }

    #[test]
    fn start_and_goal_must_be_on_the_grid() {
        let grid = Vault::default().grid;

        let start = Vault::new(grid, Position::new(7, 0), Position::new(3, 0), 30);
        let goal = Vault::new(grid, Position::new(0, 3), Position::new(3, 4), 30);

        assert_eq!(start, Err(Error::OffGrid(Position::new(7, 0))));
        assert_eq!(goal, Err(Error::OffGrid(Position::new(3, 4))));
    }

    #[test]
    fn number_after_number_needs_an_operator() {
        let mut grid = Vault::default().grid;
        grid[2][0] = Cell::Num(1);
        let vault = Vault::new(grid, Position::new(0, 3), Position::new(3, 0), 30).unwrap();

        let error = walk(&vault, &[North]).expect_err("no pending operator");

        assert_eq!(error, Error::MissingOperator(Position::new(0, 2)));
    }

    #[test]
    fn finds_the_shortest_walk() {
        let config = Config::new(MAX_MOVES, 1 << 20).unwrap();

        let solution =
            breadth_first::search_unobserved(&Vault::default(), &config).expect("should complete");

        assert_eq!(solution.status, Status::Found);
        let path = solution.path().expect("a path");
        assert_eq!(
            path,
            [
                North, East, East, North, West, South, East, East, West, North, North, East
            ]
        );

        let expression: Vec<String> = Vault::default()
            .cells_along(path)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            expression.join(" "),
            "22 + 4 - 11 * 4 - 18 - 11 - 1"
        );
    }
}
