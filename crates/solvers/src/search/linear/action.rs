/// Actions an observer can take during linear search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver before trying any further candidate.
    ///
    /// The solution reports [`Status::StoppedByObserver`] and no match,
    /// even when the current candidate matched.
    ///
    /// [`Status::StoppedByObserver`]: super::Status::StoppedByObserver
    StopEarly,

    /// Pass over the current candidate and continue with the next one.
    ///
    /// Use this for:
    /// - Avoiding the evaluation of candidates known to be uninteresting.
    /// - Recovering from model or problem errors.
    /// - Rejecting a match the problem alone would accept.
    Skip,
}
