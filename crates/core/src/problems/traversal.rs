use std::hash::Hash;

/// Defines a traversal problem over a graph of states.
///
/// A traversal problem names a start state, the steps that may be taken from
/// any state, and how a step transforms a state. Solvers explore states
/// reachable from the start and report the first one that is a goal.
pub trait TraversalProblem {
    type State;
    type Step: Copy;
    type Key: Eq + Hash;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the state the traversal starts from.
    fn start(&self) -> Self::State;

    /// Returns every step, in the order solvers should try them.
    fn steps(&self) -> &[Self::Step];

    /// Takes a step from `state`.
    ///
    /// Returns `Ok(None)` when the step is not allowed from `state`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the next state cannot be computed.
    fn advance(
        &self,
        state: &Self::State,
        step: Self::Step,
    ) -> Result<Option<Self::State>, Self::Error>;

    /// Returns the key used to recognize states that were already visited.
    fn key(&self, state: &Self::State) -> Self::Key;

    /// Returns `true` if `state` solves the problem.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Returns `true` if no step should be taken from `state`.
    ///
    /// Goal states are never expanded, whatever this returns.
    fn is_dead_end(&self, _state: &Self::State) -> bool {
        false
    }
}
