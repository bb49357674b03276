/// Defines a search problem to be solved by trying candidates.
///
/// A search problem maps each candidate to a model input, then decides from
/// the model input and output whether the candidate is a solution. Solvers
/// try candidates in the order they are supplied and report the first match.
pub trait SearchProblem {
    type Candidate;
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Maps a candidate into a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from the candidate.
    fn input(&self, candidate: &Self::Candidate) -> Result<Self::Input, Self::Error>;

    /// Decides whether a model input/output pair satisfies the problem.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the output cannot be checked.
    fn is_match(&self, input: &Self::Input, output: &Self::Output) -> Result<bool, Self::Error>;
}
