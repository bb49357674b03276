use std::fmt;

/// A cell coordinate, `x` growing east and `y` growing south.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns `true` if the position lies on a `size`×`size` grid.
    #[must_use]
    pub const fn is_within(self, size: usize) -> bool {
        self.x < size && self.y < size
    }

    /// Returns the neighbor in `direction`, or `None` if it lies off a
    /// `size`×`size` grid.
    #[must_use]
    pub fn step(self, direction: Direction, size: usize) -> Option<Self> {
        let Self { x, y } = self;
        let (x, y) = match direction {
            Direction::North => (x, y.checked_sub(1)?),
            Direction::South => (x, y + 1),
            Direction::East => (x + 1, y),
            Direction::West => (x.checked_sub(1)?, y),
        };
        let next = Self { x, y };
        next.is_within(size).then_some(next)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A move between neighboring cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// The order in which moves are tried from each cell.
    pub const SEARCH_ORDER: [Direction; 4] = [
        Direction::West,
        Direction::East,
        Direction::North,
        Direction::South,
    ];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        })
    }
}

/// An operation an operator cell selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
}

impl Operator {
    /// Applies the operation, returning `None` on overflow.
    #[must_use]
    pub fn apply(self, lhs: i64, rhs: i64) -> Option<i64> {
        match self {
            Operator::Add => lhs.checked_add(rhs),
            Operator::Sub => lhs.checked_sub(rhs),
            Operator::Mul => lhs.checked_mul(rhs),
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
        }
    }
}

/// A grid cell: a number or an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Num(i64),
    Op(Operator),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Num(number) => write!(f, "{number}"),
            Cell::Op(operator) => write!(f, "{}", operator.symbol()),
        }
    }
}
