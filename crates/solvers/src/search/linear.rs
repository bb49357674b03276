//! Linear search over an ordered sequence of candidates.
//!
//! # Algorithm
//!
//! Candidates are tried strictly in the order the caller supplies them. Each
//! one is mapped to a model input, the model is called, and the problem decides
//! whether the output is a match. The search stops at the first match, so the
//! reported candidate is always the earliest satisfying one in the sequence.
//! When the sequence runs out without a match the search is exhausted.
//!
//! # Observer Events
//!
//! The solver emits up to two [`Event`]s per candidate:
//!
//! - [`Event::Checking`]: before the candidate is evaluated
//! - [`Event::Evaluated`]: evaluation succeeded (match or not)
//! - [`Event::ModelFailed`]: model returned an error
//! - [`Event::ProblemFailed`]: problem returned an error (input or match check)
//!
//! Observers can return [`Action::StopEarly`] to halt immediately, or
//! [`Action::Skip`] to pass over the current candidate. Skipping on
//! `Checking` avoids evaluating the candidate at all; skipping on a failure
//! event recovers from the error; skipping on `Evaluated` discards a match.

mod action;
mod error;
mod event;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Found, Solution, Status};

use teleporter_core::{Model, Observer, SearchProblem};

use crate::search::evaluate::evaluate;

/// Finds the first candidate that satisfies the problem.
///
/// The observer receives [`Event::Checking`] before each candidate and one
/// outcome event after it. See the [module docs](self) for observer actions.
///
/// # Errors
///
/// Returns an error if the model or problem fails during evaluation
/// and the observer does not return [`Action::Skip`] to recover.
pub fn search<M, P, I, Obs>(
    model: &M,
    problem: &P,
    candidates: I,
    mut observer: Obs,
) -> Result<Solution<P::Candidate, M::Input, M::Output>, Error>
where
    M: Model,
    P: SearchProblem<Input = M::Input, Output = M::Output>,
    I: IntoIterator<Item = P::Candidate>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    let mut evaluated = 0;

    for (index, candidate) in candidates.into_iter().enumerate() {
        let checking = Event::Checking {
            index,
            candidate: &candidate,
        };
        match observer.observe(&checking) {
            Some(Action::StopEarly) => {
                log::debug!("linear search stopped by observer before candidate {index}");
                return Ok(Solution::stopped(evaluated));
            }
            Some(Action::Skip) => {
                log::trace!("candidate {index} skipped by observer");
                continue;
            }
            None => {}
        }

        evaluated += 1;

        match evaluate(model, problem, &candidate) {
            Ok(eval) => {
                let event = Event::Evaluated {
                    index,
                    candidate: &candidate,
                    input: &eval.snapshot.input,
                    output: &eval.snapshot.output,
                    matched: eval.matched,
                };
                match observer.observe(&event) {
                    Some(Action::StopEarly) => {
                        log::debug!("linear search stopped by observer after candidate {index}");
                        return Ok(Solution::stopped(evaluated));
                    }
                    Some(Action::Skip) => continue,
                    None => {}
                }

                if eval.matched {
                    log::debug!("candidate {index} matched after {evaluated} evaluations");
                    return Ok(Solution::found(
                        Found {
                            index,
                            candidate,
                            snapshot: eval.snapshot,
                        },
                        evaluated,
                    ));
                }
            }
            Err(error) => match Event::emit_failure(index, &candidate, &error, &mut observer) {
                Some(Action::StopEarly) => return Ok(Solution::stopped(evaluated)),
                Some(Action::Skip) => {
                    log::warn!("candidate {index} failed and was skipped: {error}");
                }
                None => return Err(error.into()),
            },
        }
    }

    log::debug!("linear search exhausted after {evaluated} evaluations");
    Ok(Solution::exhausted(evaluated))
}

/// Finds the first candidate that satisfies the problem without observer support.
///
/// This is a convenience wrapper around [`search`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the model or problem fails during evaluation.
pub fn search_unobserved<M, P, I>(
    model: &M,
    problem: &P,
    candidates: I,
) -> Result<Solution<P::Candidate, M::Input, M::Output>, Error>
where
    M: Model,
    P: SearchProblem<Input = M::Input, Output = M::Output>,
    I: IntoIterator<Item = P::Candidate>,
{
    search(model, problem, candidates, ())
}
