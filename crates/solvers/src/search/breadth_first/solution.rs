/// Indicates how the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A goal state was reached.
    Found,

    /// Every reachable state within the depth limit was explored.
    Exhausted,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// A goal state and a shortest path to it.
#[derive(Debug, Clone)]
pub struct Found<S, T> {
    pub state: S,
    pub path: Vec<T>,
}

/// The result of a breadth-first search.
#[derive(Debug, Clone)]
pub struct Solution<S, T> {
    /// Final solver status.
    pub status: Status,

    /// The goal, present exactly when `status` is [`Status::Found`].
    pub found: Option<Found<S, T>>,

    /// Number of states taken from the queue.
    pub visited: usize,
}

impl<S, T> Solution<S, T> {
    pub(super) fn found(found: Found<S, T>, visited: usize) -> Self {
        Self {
            status: Status::Found,
            found: Some(found),
            visited,
        }
    }

    pub(super) fn exhausted(visited: usize) -> Self {
        Self {
            status: Status::Exhausted,
            found: None,
            visited,
        }
    }

    pub(super) fn stopped(visited: usize) -> Self {
        Self {
            status: Status::StoppedByObserver,
            found: None,
            visited,
        }
    }

    /// Returns the steps of the path to the goal, if one was found.
    #[must_use]
    pub fn path(&self) -> Option<&[T]> {
        self.found.as_ref().map(|found| found.path.as_slice())
    }
}
