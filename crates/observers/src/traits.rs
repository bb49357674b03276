//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasCandidate`]: events that announce a candidate before it is tried
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//! - [`CanSkip`]: actions that can pass over the current candidate or state
//!
//! # Example
//!
//! ```rust
//! use teleporter_core::Observer;
//! use teleporter_observers::traits::{CanSkip, HasCandidate};
//!
//! /// Skips every odd-numbered candidate.
//! struct EveryOther {
//!     seen: usize,
//! }
//!
//! impl<E: HasCandidate, A: CanSkip> Observer<E, A> for EveryOther {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         event.checking()?;
//!         self.seen += 1;
//!         (self.seen % 2 == 0).then(A::skip)
//!     }
//! }
//! ```

use teleporter_core::{Model, SearchProblem};

use teleporter_solvers::search::{breadth_first, linear};

/// An event that can announce a candidate before it is evaluated.
pub trait HasCandidate {
    /// The candidate type.
    type Candidate;

    /// Returns the candidate about to be evaluated.
    ///
    /// Returns `None` for events that report on a candidate already tried.
    fn checking(&self) -> Option<&Self::Candidate>;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

/// An action type that can pass over the current candidate or state.
pub trait CanSkip {
    /// Returns the action that passes over the current candidate or state.
    fn skip() -> Self;
}

// --- HasCandidate for linear::Event ---

impl<M, P> HasCandidate for linear::Event<'_, M, P>
where
    M: Model,
    P: SearchProblem<Input = M::Input, Output = M::Output>,
{
    type Candidate = P::Candidate;

    fn checking(&self) -> Option<&P::Candidate> {
        match self {
            linear::Event::Checking { candidate, .. } => Some(*candidate),
            linear::Event::Evaluated { .. }
            | linear::Event::ModelFailed { .. }
            | linear::Event::ProblemFailed { .. } => None,
        }
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for linear::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for breadth_first::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

// --- CanSkip impls ---

impl CanSkip for linear::Action {
    fn skip() -> Self {
        Self::Skip
    }
}

impl CanSkip for breadth_first::Action {
    fn skip() -> Self {
        Self::Prune
    }
}
