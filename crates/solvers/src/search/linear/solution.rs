use teleporter_core::Snapshot;

/// Indicates how the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A candidate satisfied the problem.
    Found,

    /// Every candidate was tried without a match.
    Exhausted,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The first candidate that satisfied the problem.
#[derive(Debug, Clone)]
pub struct Found<C, I, O> {
    /// Position of the candidate in the sequence.
    pub index: usize,

    /// The matching candidate.
    pub candidate: C,

    /// Snapshot of the model call for the matching candidate.
    pub snapshot: Snapshot<I, O>,
}

/// The result of a linear search.
#[derive(Debug, Clone)]
pub struct Solution<C, I, O> {
    /// Final solver status.
    pub status: Status,

    /// The match, present exactly when `status` is [`Status::Found`].
    pub found: Option<Found<C, I, O>>,

    /// Number of candidates the model was called for.
    pub evaluated: usize,
}

impl<C, I, O> Solution<C, I, O> {
    pub(super) fn found(found: Found<C, I, O>, evaluated: usize) -> Self {
        Self {
            status: Status::Found,
            found: Some(found),
            evaluated,
        }
    }

    pub(super) fn exhausted(evaluated: usize) -> Self {
        Self {
            status: Status::Exhausted,
            found: None,
            evaluated,
        }
    }

    pub(super) fn stopped(evaluated: usize) -> Self {
        Self {
            status: Status::StoppedByObserver,
            found: None,
            evaluated,
        }
    }

    /// Returns the matching candidate, if any.
    #[must_use]
    pub fn candidate(&self) -> Option<&C> {
        self.found.as_ref().map(|found| &found.candidate)
    }
}
