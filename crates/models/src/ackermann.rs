//! A three-argument Ackermann variant evaluated in 16-bit arithmetic.
//!
//! The function is defined by structural recursion on `a` and `b`, with `v`
//! carried through unchanged:
//!
//! ```text
//! f(0, b, v) = b + 1
//! f(1, b, v) = b + v + 1
//! f(2, b, v) = (b + 2) * v + (b + 1)
//! f(a, 0, v) = f(a - 1, v, v)              for a > 2
//! f(a, b, v) = f(a - 1, f(a, b - 1, v), v) for a > 2, b != 0
//! ```
//!
//! Every value is a [`Word`], so each addition, multiplication, and
//! intermediate result wraps to 16 bits. A negative `b` is non-zero: its
//! decrement wraps through `i16::MIN` back to `i16::MAX` and reaches zero
//! after `b mod 65536` steps.
//!
//! Evaluation runs on an explicit work list rather than the call stack. The
//! list holds two kinds of task: `Eval` needs the value of `f(a, b, v)`, and
//! `Apply` feeds the value just produced into `f(a, value, v)`.

mod config;
mod error;


pub use config::{Config, ConfigError};
pub use error::Error;

use teleporter_core::{Model, Word};

const TWO: Word = Word::new(2);

/// Arguments to the Ackermann variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Args {
    pub a: Word,
    pub b: Word,
    pub v: Word,
}

impl Args {
    /// Creates arguments from plain 16-bit values.
    #[must_use]
    pub const fn new(a: i16, b: i16, v: i16) -> Self {
        Self {
            a: Word::new(a),
            b: Word::new(b),
            v: Word::new(v),
        }
    }
}

/// Pending work on the evaluation list.
#[derive(Debug, Clone, Copy)]
enum Task {
    /// Compute `f(a, b, v)`.
    Eval { a: Word, b: Word },

    /// Compute `f(a, value, v)` once the value of the task above it is known.
    Apply { a: Word },
}

/// The Ackermann variant as a [`Model`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Ackermann {
    config: Config,
}

impl Ackermann {
    /// Creates a model with the given evaluation limits.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Evaluates `f(a, b, v)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeLevel`] if `a` is negative, and
    /// [`Error::WorkListExhausted`] if more than [`Config::max_pending`] tasks
    /// would be waiting at once.
    pub fn eval(&self, args: Args) -> Result<Word, Error> {
        let Args { a, b, v } = args;
        if a.is_negative() {
            return Err(Error::NegativeLevel(a));
        }

        let limit = self.config.max_pending();
        let mut tasks = vec![Task::Eval { a, b }];
        let mut value = Word::ZERO;

        while let Some(task) = tasks.pop() {
            match task {
                Task::Apply { a } => tasks.push(Task::Eval { a, b: value }),
                Task::Eval { a, b } => match a.get() {
                    0 => value = b + Word::ONE,
                    1 => value = b + v + Word::ONE,
                    2 => value = (b + TWO) * v + (b + Word::ONE),
                    _ if b.is_zero() => tasks.push(Task::Eval { a: a - Word::ONE, b: v }),
                    _ => {
                        tasks.push(Task::Apply { a: a - Word::ONE });
                        tasks.push(Task::Eval { a, b: b - Word::ONE });
                    }
                },
            }

            if tasks.len() > limit {
                return Err(Error::WorkListExhausted { limit });
            }
        }

        Ok(value)
    }
}

impl Model for Ackermann {
    type Input = Args;
    type Output = Word;
    type Error = Error;

    fn call(&self, input: &Args) -> Result<Word, Self::Error> {
        self.eval(*input)
    }
}
