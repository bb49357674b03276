//! The coin-order puzzle.
//!
//! Five coins, each worth a small integer, must be placed into the slots of
//!
//! ```text
//! _ + _ * _^2 + _^3 - _ = 399
//! ```
//!
//! [`CoinEquation`] evaluates the left-hand side for an ordering, and
//! [`CoinOrder`] accepts the ordering that hits the target. [`orderings`]
//! enumerates every permutation, so a linear search finds the answer.

use std::fmt;

use itertools::Itertools;
use thiserror::Error;

use teleporter_core::{Model, SearchProblem};

/// Number of slots in the equation.
pub const SLOTS: usize = 5;

/// A coin and its face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coin {
    Red,
    Corroded,
    Shiny,
    Concave,
    Blue,
}

impl Coin {
    /// All coins, in increasing order of value.
    pub const ALL: [Coin; SLOTS] = [
        Coin::Red,
        Coin::Corroded,
        Coin::Shiny,
        Coin::Concave,
        Coin::Blue,
    ];

    /// Returns the value the coin stands for in the equation.
    #[must_use]
    pub const fn value(self) -> i64 {
        match self {
            Coin::Red => 2,
            Coin::Corroded => 3,
            Coin::Shiny => 5,
            Coin::Concave => 7,
            Coin::Blue => 9,
        }
    }

    /// Returns the coin's name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Coin::Red => "red",
            Coin::Corroded => "corroded",
            Coin::Shiny => "shiny",
            Coin::Concave => "concave",
            Coin::Blue => "blue",
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns every ordering of `coins`, in lexicographic order of positions.
pub fn orderings(coins: &[Coin]) -> impl Iterator<Item = Vec<Coin>> + '_ {
    coins.iter().copied().permutations(coins.len())
}

/// Errors that can occur while evaluating an ordering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("expected 5 coins, got {0}")]
    WrongCount(usize),

    #[error("equation overflowed")]
    Overflow,
}

/// Evaluates `a + b * c^2 + d^3 - e` for an ordering `[a, b, c, d, e]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoinEquation;

impl CoinEquation {
    fn eval(order: &[Coin; SLOTS]) -> Option<i64> {
        let [a, b, c, d, e] = order.map(Coin::value);
        let product = b.checked_mul(c.checked_pow(2)?)?;
        a.checked_add(product)?
            .checked_add(d.checked_pow(3)?)?
            .checked_sub(e)
    }
}

impl Model for CoinEquation {
    type Input = [Coin; SLOTS];
    type Output = i64;
    type Error = Error;

    fn call(&self, input: &[Coin; SLOTS]) -> Result<i64, Self::Error> {
        Self::eval(input).ok_or(Error::Overflow)
    }
}

/// Accepts the ordering whose equation equals `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinOrder {
    pub target: i64,
}

impl Default for CoinOrder {
    fn default() -> Self {
        Self { target: 399 }
    }
}

impl SearchProblem for CoinOrder {
    type Candidate = Vec<Coin>;
    type Input = [Coin; SLOTS];
    type Output = i64;
    type Error = Error;

    fn input(&self, candidate: &Vec<Coin>) -> Result<[Coin; SLOTS], Self::Error> {
        <[Coin; SLOTS]>::try_from(candidate.as_slice())
            .map_err(|_| Error::WrongCount(candidate.len()))
    }

    fn is_match(&self, _input: &[Coin; SLOTS], output: &i64) -> Result<bool, Self::Error> {
        Ok(*output == self.target)
    }
}
