use teleporter_core::{Model, Observer, SearchProblem};

use crate::search::EvalError;

use super::Action;

/// Events emitted by the linear search solver.
///
/// Every event carries the candidate and its zero-based position in the
/// candidate sequence, so observers can report progress without keeping
/// their own count.
pub enum Event<'a, M, P>
where
    M: Model,
    P: SearchProblem<Input = M::Input, Output = M::Output>,
{
    /// A candidate is about to be evaluated.
    Checking {
        /// Position of the candidate in the sequence.
        index: usize,

        /// The candidate.
        candidate: &'a P::Candidate,
    },

    /// Successful evaluation of a candidate.
    Evaluated {
        /// Position of the candidate in the sequence.
        index: usize,

        /// The candidate.
        candidate: &'a P::Candidate,

        /// The model input built from the candidate.
        input: &'a M::Input,

        /// The model output for that input.
        output: &'a M::Output,

        /// Whether the problem accepts this input/output pair.
        matched: bool,
    },

    /// Model evaluation failed.
    ModelFailed {
        /// Position of the candidate in the sequence.
        index: usize,

        /// The candidate.
        candidate: &'a P::Candidate,

        /// The model error.
        error: &'a M::Error,
    },

    /// Problem method failed (input construction or match check).
    ProblemFailed {
        /// Position of the candidate in the sequence.
        index: usize,

        /// The candidate.
        candidate: &'a P::Candidate,

        /// The problem error.
        error: &'a P::Error,
    },
}

impl<'a, M, P> Event<'a, M, P>
where
    M: Model,
    P: SearchProblem<Input = M::Input, Output = M::Output>,
{
    /// Returns the position of the candidate in the sequence.
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Self::Checking { index, .. }
            | Self::Evaluated { index, .. }
            | Self::ModelFailed { index, .. }
            | Self::ProblemFailed { index, .. } => *index,
        }
    }

    /// Returns the candidate this event is about.
    #[must_use]
    pub fn candidate(&self) -> &'a P::Candidate {
        match self {
            Self::Checking { candidate, .. }
            | Self::Evaluated { candidate, .. }
            | Self::ModelFailed { candidate, .. }
            | Self::ProblemFailed { candidate, .. } => *candidate,
        }
    }

    /// Returns `true` for a successful evaluation the problem accepted.
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Evaluated { matched: true, .. })
    }

    /// Emits a failure event and returns the observer's action.
    pub(super) fn emit_failure<Obs>(
        index: usize,
        candidate: &P::Candidate,
        error: &EvalError<M::Error, P::Error>,
        observer: &mut Obs,
    ) -> Option<Action>
    where
        Obs: for<'e> Observer<Event<'e, M, P>, Action>,
    {
        match error {
            EvalError::Model(e) => {
                let event = Event::ModelFailed {
                    index,
                    candidate,
                    error: e,
                };
                observer.observe(&event)
            }
            EvalError::Problem(e) => {
                let event = Event::ProblemFailed {
                    index,
                    candidate,
                    error: e,
                };
                observer.observe(&event)
            }
        }
    }
}
