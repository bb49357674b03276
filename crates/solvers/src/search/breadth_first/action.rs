/// Control actions supported by the breadth-first solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early; the solution reports no goal.
    StopEarly,

    /// Drop the visited state without checking or expanding it.
    Prune,
}
