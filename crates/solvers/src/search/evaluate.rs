use thiserror::Error;

use teleporter_core::{Model, SearchProblem, Snapshot};

/// The result of evaluating a search problem at one candidate.
#[derive(Debug, Clone)]
pub struct Evaluation<I, O> {
    pub matched: bool,

    pub snapshot: Snapshot<I, O>,
}

/// Errors that can occur when evaluating a search problem.
#[derive(Debug, Error)]
pub enum EvalError<ME, PE> {
    /// The model call failed.
    #[error("model call failed")]
    Model(#[source] ME),

    /// Failed to construct the input or check the output.
    #[error("problem error")]
    Problem(#[source] PE),
}

/// Type alias for the result of [`evaluate`].
pub type EvaluateResult<M, P> = Result<
    Evaluation<<M as Model>::Input, <M as Model>::Output>,
    EvalError<<M as Model>::Error, <P as SearchProblem>::Error>,
>;

/// Evaluates the model in the context of a search problem.
///
/// This function maps the candidate to a model input, calls the model, then
/// checks the input and output against the problem.
///
/// # Errors
///
/// Returns an error if input mapping, model call, or the match check fails.
pub fn evaluate<M, P>(model: &M, problem: &P, candidate: &P::Candidate) -> EvaluateResult<M, P>
where
    M: Model,
    P: SearchProblem<Input = M::Input, Output = M::Output>,
{
    let input = problem.input(candidate).map_err(EvalError::Problem)?;
    let output = model.call(&input).map_err(EvalError::Model)?;
    let matched = problem
        .is_match(&input, &output)
        .map_err(EvalError::Problem)?;

    Ok(Evaluation {
        matched,
        snapshot: Snapshot::new(input, output),
    })
}
