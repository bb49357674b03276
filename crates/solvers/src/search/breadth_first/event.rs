use teleporter_core::TraversalProblem;

/// Event emitted by the breadth-first solver for each dequeued state.
pub enum Event<'a, P>
where
    P: TraversalProblem,
{
    /// A state was taken from the queue.
    Visited {
        /// Number of steps from the start state.
        depth: usize,

        /// Number of states still waiting in the queue.
        queued: usize,

        /// The visited state.
        state: &'a P::State,

        /// The steps that reached it.
        path: &'a [P::Step],
    },
}

impl<'a, P> Event<'a, P>
where
    P: TraversalProblem,
{
    /// Returns the visited state.
    #[must_use]
    pub fn state(&self) -> &'a P::State {
        match self {
            Self::Visited { state, .. } => *state,
        }
    }

    /// Returns the number of steps from the start state.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Visited { depth, .. } => *depth,
        }
    }
}
