use thiserror::Error;

use teleporter_core::Word;

/// Errors that can occur while evaluating the Ackermann variant.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The recursion never reaches a base case for a negative `a`.
    #[error("level `a` must be non-negative, got {0}")]
    NegativeLevel(Word),

    /// More tasks were pending at once than the configured limit allows.
    #[error("work list exceeded {limit} pending tasks")]
    WorkListExhausted { limit: usize },
}
