//! The teleporter residue search.
//!
//! Candidate settings `v` are tried from 0 upward. Each one is evaluated as
//! `f(4, 1, v)` with the [`Ackermann`](crate::ackermann::Ackermann) model, and
//! the setting is accepted when the result leaves a remainder of 6 modulo
//! 32,768. The first accepted setting is the answer; when every setting has
//! been tried without success the answer is [`NOT_FOUND`].

use std::{convert::Infallible, num::NonZeroI32};

use teleporter_core::{SearchProblem, Word};

use crate::ackermann::Args;

/// Reported in place of a setting when no candidate matches.
pub const NOT_FOUND: i32 = -1;

/// Number of candidate settings: every non-negative word.
pub const BOUND: usize = 32_768;

const MODULUS: NonZeroI32 = NonZeroI32::new(32_768).unwrap();

/// The residue condition a teleporter setting must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Teleporter {
    /// First argument passed to the function.
    pub a: Word,

    /// Second argument passed to the function.
    pub b: Word,

    /// Modulus the output is reduced by.
    pub modulus: NonZeroI32,

    /// Remainder the reduced output must equal.
    pub target: i32,
}

impl Default for Teleporter {
    fn default() -> Self {
        Self {
            a: Word::new(4),
            b: Word::ONE,
            modulus: MODULUS,
            target: 6,
        }
    }
}

impl Teleporter {
    /// Returns every candidate setting in increasing order, `0 .. BOUND`.
    pub fn candidates() -> impl Iterator<Item = Word> {
        (0..=i16::MAX).map(Word::new)
    }

    /// Returns the number reported for a search outcome.
    #[must_use]
    pub fn report(found: Option<&Word>) -> i32 {
        found.map_or(NOT_FOUND, |&setting| i32::from(setting))
    }
}

impl SearchProblem for Teleporter {
    type Candidate = Word;
    type Input = Args;
    type Output = Word;
    type Error = Infallible;

    fn input(&self, candidate: &Word) -> Result<Args, Self::Error> {
        Ok(Args {
            a: self.a,
            b: self.b,
            v: *candidate,
        })
    }

    fn is_match(&self, _input: &Args, output: &Word) -> Result<bool, Self::Error> {
        Ok(output.residue(self.modulus) == self.target)
    }
}
